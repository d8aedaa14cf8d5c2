//! Domain types, validation, and error taxonomy for the portfolio
//! catalog. Pure logic only -- no I/O lives in this crate.

pub mod catalog;
pub mod error;
pub mod types;
