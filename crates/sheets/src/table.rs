use chrono::{DateTime, Utc};
use folio_lookup_core::Row;
use serde::Serialize;

/// Parsed rows of one sub-sheet.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    pub gid: String,
    pub rows: Vec<Row>,
    pub fetched_at: DateTime<Utc>,
}

impl Table {
    #[must_use]
    pub fn new(gid: impl Into<String>, rows: Vec<Row>) -> Self {
        Self { gid: gid.into(), rows, fetched_at: Utc::now() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
