//! Tapbuy Adyen origin override gateway — library crate for integration testing.
//!
//! Re-exports modules needed by integration tests in `tests/`.

pub mod builder;
pub mod config;
pub mod detector;
pub mod errors;
pub mod origin;
