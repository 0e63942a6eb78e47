//! Integration tests for the datacheck-snowflake crate.
//!
//! These exercise the full descriptor surface — config parsing, accessor
//! dispatch, and engine construction — without a real database driver.

mod datasource;
mod engine;
