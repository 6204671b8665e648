//! Response types (Serialize)

use folio_lookup_core::{Location, Symbology};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub locations: Vec<Location>,
    pub default: String,
    pub symbology: Symbology,
    pub cached: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct BrandingResponse {
    pub logo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct InvalidateResponse {
    pub removed: usize,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
