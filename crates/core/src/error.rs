use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised while building configuration for folio-lookup
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown symbology: {0} (expected ean13 or code128)")]
    UnknownSymbology(String),

    #[error("Invalid location entry '{0}' (expected Name=gid)")]
    InvalidLocation(String),

    #[error("Duplicate location name: {0}")]
    DuplicateLocation(String),

    #[error("No locations configured")]
    NoLocations,
}

pub type Result<T> = StdResult<T, ConfigError>;
