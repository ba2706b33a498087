//! Polars column utility functions.
//!
//! This module provides helper functions for working with numeric Polars
//! columns, including dtype classification and widening to `f64`.

use polars::prelude::*;

/// Returns true for the primitive numeric dtypes (signed, unsigned, float).
///
/// Booleans, strings, temporal and nested types are not numeric.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    is_integer_dtype(dtype) || matches!(dtype, DataType::Float32 | DataType::Float64)
}

/// Returns true for signed and unsigned integer dtypes.
pub fn is_integer_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
    )
}

/// Names of the numeric columns of `df`, in column order.
///
/// Computed from the frame's current schema on every call.
///
/// # Examples
///
/// ```
/// use polars::prelude::*;
/// use censo_common::numeric_column_names;
///
/// let df = df! {
///     "entidad" => &["01", "02"],
///     "pobtot" => &[10i64, 20],
///     "prom_ocup" => &[3.5f64, 4.1],
/// }
/// .unwrap();
/// assert_eq!(numeric_column_names(&df), vec!["pobtot", "prom_ocup"]);
/// ```
pub fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| is_numeric_dtype(col.dtype()))
        .map(|col| col.name().to_string())
        .collect()
}

/// Widens a numeric column to `f64` values, preserving nulls.
pub fn column_to_f64(col: &Column) -> PolarsResult<Vec<Option<f64>>> {
    let widened = col.cast(&DataType::Float64)?;
    let values = widened.f64()?;
    Ok(values.into_iter().collect())
}

/// Rounds `value` to `decimals` decimal places, ties to even.
///
/// Scales, rounds half to even, then scales back, the same way numpy and
/// pandas `round` do.
///
/// # Examples
///
/// ```
/// use censo_common::round_to;
///
/// assert_eq!(round_to(33.333, 1), 33.3);
/// assert_eq!(round_to(7.25, 1), 7.2);
/// assert_eq!(round_to(2.0, 1), 2.0);
/// ```
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

/// Percentage of `count` over `total`, rounded to one decimal.
///
/// A zero `total` yields `0.0` instead of dividing by zero.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(count as f64 / total as f64 * 100.0, 1)
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use censo_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(-6.0), "-6");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
