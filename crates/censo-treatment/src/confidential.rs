//! Imputation of confidential cells.
//!
//! Each [`ImputationMethod`] trades bias for completeness differently:
//!
//! - **Missing** (default) leaves the decision to downstream analysis.
//! - **Zero** is a conservative lower bound and underestimates totals.
//! - **LowValue** centers on the known disclosure ceiling (default 3, since
//!   suppressed counts are at most 5).
//! - **Mean** / **Median** preserve aggregate statistics but fabricate values
//!   correlated with the rest of the column.

use censo_common::round_to;
use polars::prelude::*;

use crate::columns::{replace_cells, resolve_columns, scan_columns};
use crate::error::Result;
use crate::options::{ConfidentialOptions, ImputationMethod};
use crate::report::{TreatmentEvent, TreatmentSink};
use crate::sentinel::SentinelCode;

/// Treat every confidential cell according to `options.method`.
///
/// Only columns in the effective set that hold at least one confidential
/// cell are rebuilt; every other column is returned as-is.
///
/// # Errors
///
/// Returns [`crate::TreatmentError::ColumnNotFound`] if the selection names
/// a column missing from `df`.
pub fn treat_confidential(
    df: &DataFrame,
    options: &ConfidentialOptions,
    sink: &mut dyn TreatmentSink,
) -> Result<DataFrame> {
    let names = resolve_columns(df, options.columns.as_deref())?;
    let scanned = scan_columns(df, &names)?;

    let mut result = df.clone();
    let mut touched = Vec::new();
    let mut cells = 0usize;

    for column in scanned
        .iter()
        .filter(|column| column.contains(SentinelCode::Confidential))
    {
        let fill = imputation_value(options.method, options.low_value, &column.values);
        let treated = SentinelCode::Confidential.count(&column.values);
        result.with_column(replace_cells(column, SentinelCode::Confidential, fill)?)?;
        tracing::debug!(
            column = %column.name(),
            cells = treated,
            method = %options.method,
            fill = ?fill,
            "Treated confidential cells"
        );
        touched.push(column.name().to_string());
        cells += treated;
    }

    sink.record(&TreatmentEvent::ConfidentialTreated {
        columns: touched,
        cells,
        method: options.method,
    });
    Ok(result)
}

/// Value written in place of each confidential cell of a column.
///
/// `None` is the missing-value marker.
fn imputation_value(method: ImputationMethod, low_value: f64, values: &[Option<f64>]) -> Option<f64> {
    match method {
        ImputationMethod::Missing => None,
        ImputationMethod::Zero => Some(0.0),
        ImputationMethod::Median => Some(median(&eligible_values(values)).unwrap_or(0.0)),
        ImputationMethod::Mean => Some(
            mean(&eligible_values(values))
                .map(|m| round_to(m, 1))
                .unwrap_or(0.0),
        ),
        ImputationMethod::LowValue => Some(low_value),
    }
}

/// Values usable for statistics: non-null and non-negative.
///
/// Both sentinels are negative, so they are excluded along with any other
/// negative value and NaN.
fn eligible_values(values: &[Option<f64>]) -> Vec<f64> {
    values
        .iter()
        .flatten()
        .copied()
        .filter(|v| *v >= 0.0)
        .collect()
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
