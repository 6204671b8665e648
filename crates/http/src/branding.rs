//! Optional logo shown in the page header.

use std::path::Path;

/// Logo bytes read once at startup. A missing file is not an error: the
/// page shows a warning instead.
#[derive(Debug, Clone, Default)]
pub struct Branding {
    logo: Option<Vec<u8>>,
    warning: Option<String>,
}

impl Branding {
    pub fn load(path: &Path) -> Self {
        match std::fs::read(path) {
            Ok(bytes) => {
                tracing::info!(path = %path.display(), bytes = bytes.len(), "loaded logo");
                Self { logo: Some(bytes), warning: None }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "logo not available");
                Self {
                    logo: None,
                    warning: Some(format!("Logo file '{}' was not found.", path.display())),
                }
            },
        }
    }

    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { logo: Some(bytes), warning: None }
    }

    #[must_use]
    pub fn logo(&self) -> Option<&[u8]> {
        self.logo.as_deref()
    }

    #[must_use]
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Content type guessed from the PNG/JPEG/SVG signature.
    #[must_use]
    pub fn content_type(&self) -> &'static str {
        match self.logo.as_deref() {
            Some([0x89, b'P', b'N', b'G', ..]) => "image/png",
            Some([0xFF, 0xD8, ..]) => "image/jpeg",
            Some(bytes) if bytes.starts_with(b"<svg") || bytes.starts_with(b"<?xml") => {
                "image/svg+xml"
            },
            _ => "application/octet-stream",
        }
    }
}
