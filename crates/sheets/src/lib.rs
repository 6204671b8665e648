//! Spreadsheet export loading for folio-lookup
//!
//! Fetches the CSV export of one sub-sheet, parses it into [`Row`]s and
//! keeps parsed tables in a per-location cache.
//!
//! [`Row`]: folio_lookup_core::Row

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod cache;
mod client;
pub mod error;
mod parse;
mod table;


pub use cache::TableCache;
pub use client::{SheetClient, TableSource};
pub use error::SheetError;
pub use parse::parse_rows;
pub use table::Table;
