//! Service layer for folio-lookup
//!
//! Centralizes the lookup flow between the HTTP/CLI front ends and the
//! sheet loader and barcode renderer.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod error;
mod lookup_service;
mod outcome;


pub use error::ServiceError;
pub use lookup_service::LookupService;
pub use outcome::{
    DisplayField, LoadOutcome, MSG_AWAITING_INPUT, MSG_BARCODE_FAILED, MSG_NO_RESULTS,
    RenderedRow, SearchOutcome,
};
