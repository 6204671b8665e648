//! Request/query types (Deserialize)

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub location: Option<String>,
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct BarcodeQuery {
    /// Empty when absent; rejected by the handler.
    #[serde(default)]
    pub folio: String,
    pub format: Option<String>,
    /// Overrides the configured symbology for this image only.
    pub symbology: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct InvalidateRequest {
    /// Location name; all locations when absent.
    pub location: Option<String>,
}
