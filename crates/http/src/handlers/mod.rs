#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod barcode;
pub mod cache;
pub mod locations;
pub mod search;
