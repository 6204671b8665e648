//! Typed error enum for the barcode crate.

use thiserror::Error;

/// Reasons a folio cannot be turned into a barcode.
#[derive(Debug, Error)]
pub enum BarcodeError {
    #[error("folio is empty")]
    Empty,
    #[error("EAN-13 needs digits only, got '{0}'")]
    NonNumeric(String),
    #[error("EAN-13 accepts at most {max} digits, got {len}")]
    TooLong { len: usize, max: usize },
    #[error("folio has {len} characters, at most {max} can be encoded")]
    FolioTooLong { len: usize, max: usize },
    #[error("Code 128 cannot encode {ch:?} at position {position}")]
    UnsupportedChar { ch: char, position: usize },
    #[error("unknown output format: {0} (expected png or svg)")]
    UnknownFormat(String),
    #[error("PNG encoding failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("bundled font could not be loaded: {0}")]
    Font(#[from] ab_glyph::InvalidFont),
}

impl BarcodeError {
    /// Whether the error comes from the folio value itself rather than the writer.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::Image(_) | Self::Font(_) | Self::UnknownFormat(_))
    }
}
