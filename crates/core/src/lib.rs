//! Core types for folio-lookup
//!
//! Domain types, configuration and the keyword filter shared across all
//! other crates.

mod config;
mod constants;
mod env_config;
mod error;
mod location;
mod query;
mod row;
mod symbology;

pub use config::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use location::*;
pub use query::*;
pub use row::*;
pub use symbology::*;
