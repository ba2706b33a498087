//! Shared utilities for census table crates.
//!
//! This crate provides Polars DataFrame helpers used across the workspace:
//! numeric column discovery, lossless widening to `f64`, and the rounding
//! rules applied to percentages and imputed means.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use polars::{
    column_to_f64, format_numeric, is_integer_dtype, is_numeric_dtype, numeric_column_names,
    percentage, round_to,
};
