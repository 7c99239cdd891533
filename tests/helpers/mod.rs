//! Test helpers module
//!
//! This module provides utilities and helpers for testing the PharmaLingo
//! i18n subsystem: test environment setup, storage doubles and catalogs.

pub mod simple_test;
pub mod test_data;
pub mod test_storage;

pub use simple_test::*;
pub use test_data::*;
pub use test_storage::*;
