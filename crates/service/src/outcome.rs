//! Result shapes handed to the HTTP layer and the CLI.

use std::sync::Arc;

use folio_lookup_core::Row;
use folio_lookup_sheets::Table;
use serde::Serialize;

pub const MSG_AWAITING_INPUT: &str = "Waiting for a query to show results.";
pub const MSG_NO_RESULTS: &str = "No results found for your search.";
pub const MSG_BARCODE_FAILED: &str = "Could not generate the barcode.";

/// Result of loading a location's table. Failures carry a user-facing
/// message instead of an error.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Ready(Arc<Table>),
    Failed { message: String },
}

impl LoadOutcome {
    /// Rows of the table, empty on failure.
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        match self {
            Self::Ready(table) => &table.rows,
            Self::Failed { .. } => &[],
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Ready(_) => None,
            Self::Failed { message } => Some(message),
        }
    }
}

/// Label/value pair in display order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DisplayField {
    pub label: &'static str,
    pub value: String,
}

/// One matching row ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedRow {
    /// `Folio: <folio>` plus the plant column when present.
    pub heading: String,
    pub folio: String,
    pub fields: Vec<DisplayField>,
    pub caption: String,
    /// Inline SVG; absent when the folio cannot be encoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode_svg: Option<String>,
    /// Per-row warning shown instead of the barcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode_warning: Option<String>,
}

impl RenderedRow {
    #[must_use]
    pub const fn has_barcode(&self) -> bool {
        self.barcode_svg.is_some()
    }
}

/// State of the lookup page after one request.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The requested location is not configured.
    UnknownLocation { name: String },
    /// Data could not be loaded, or the sheet has no rows.
    Unavailable { location: String, message: String },
    /// Empty query: nothing is filtered or listed.
    AwaitingInput { location: String, rows_loaded: usize, message: &'static str },
    /// Filter ran; `rows` may be empty.
    Matches {
        location: String,
        query: String,
        total: usize,
        rows: Vec<RenderedRow>,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<&'static str>,
    },
}

impl SearchOutcome {
    #[must_use]
    pub fn rows(&self) -> &[RenderedRow] {
        match self {
            Self::Matches { rows, .. } => rows,
            _ => &[],
        }
    }

    #[must_use]
    pub const fn state(&self) -> &'static str {
        match self {
            Self::UnknownLocation { .. } => "unknown_location",
            Self::Unavailable { .. } => "unavailable",
            Self::AwaitingInput { .. } => "awaiting_input",
            Self::Matches { .. } => "matches",
        }
    }
}
