//! Typed error enum for the sheets crate.

use thiserror::Error;

/// Errors from fetching or parsing a sheet export.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP status {code} from {url}")]
    HttpStatus { code: u16, url: String },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("header row {row} not found (export has fewer rows)")]
    MissingHeader { row: usize },
    #[error("column '{0}' not found in header row")]
    MissingColumn(String),
}

impl SheetError {
    /// Whether this error is transient and a later retry may succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::HttpRequest(e) => e.is_timeout() || e.is_connect(),
            Self::HttpStatus { code, .. } => matches!(code, 429 | 500 | 502 | 503 | 504),
            _ => false,
        }
    }
}
