//! Export core shared by the CLI writer and tests.

#[cfg(feature = "excel")]
pub mod excel_core;
