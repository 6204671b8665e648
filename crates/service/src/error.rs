//! Typed error enum for the service layer.
//!
//! Unifies sheet and barcode failures into a single error
//! type so callers can match on the failure mode.

use folio_lookup_barcode::BarcodeError;
use folio_lookup_sheets::SheetError;
use thiserror::Error;

/// Service-layer error unifying sheet loading and barcode failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Sheet fetch or parse failed.
    #[error("sheet: {0}")]
    Sheet(#[from] SheetError),

    /// Barcode could not be generated for the given folio.
    #[error("barcode: {0}")]
    Barcode(#[from] BarcodeError),

    /// The location name is not configured.
    #[error("unknown location: {0}")]
    UnknownLocation(String),
}

impl ServiceError {
    /// Whether the caller's input (location, folio) caused the error.
    pub fn is_invalid_input(&self) -> bool {
        match self {
            Self::Barcode(e) => e.is_invalid_input(),
            Self::UnknownLocation(_) => true,
            _ => false,
        }
    }
}
