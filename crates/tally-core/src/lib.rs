//! Core types and trait definitions for the tally ledger.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing heavier than
//! `chrono` and `serde`.

pub mod credit;
pub mod error;
pub mod report;
pub mod store;

pub use error::{Error, Result};
