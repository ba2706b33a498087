//! Replacement of not-applicable cells.

use polars::prelude::*;

use crate::columns::{replace_cells, resolve_columns, scan_columns};
use crate::error::Result;
use crate::options::NotApplicableOptions;
use crate::report::{TreatmentEvent, TreatmentSink};
use crate::sentinel::SentinelCode;

/// Replace every not-applicable cell with `options.replacement`.
///
/// Only columns in the effective set that hold at least one not-applicable
/// cell are rebuilt; every other column is returned as-is. Other values in
/// a rebuilt column, including confidential cells, are kept.
///
/// Any replacement is accepted, even one that equals a sentinel code.
///
/// # Errors
///
/// Returns [`crate::TreatmentError::ColumnNotFound`] if the selection names
/// a column missing from `df`.
pub fn treat_not_applicable(
    df: &DataFrame,
    options: &NotApplicableOptions,
    sink: &mut dyn TreatmentSink,
) -> Result<DataFrame> {
    let names = resolve_columns(df, options.columns.as_deref())?;
    let scanned = scan_columns(df, &names)?;

    let mut result = df.clone();
    let mut touched = Vec::new();
    let mut cells = 0usize;

    for column in scanned
        .iter()
        .filter(|column| column.contains(SentinelCode::NotApplicable))
    {
        let replaced = SentinelCode::NotApplicable.count(&column.values);
        result.with_column(replace_cells(
            column,
            SentinelCode::NotApplicable,
            Some(options.replacement),
        )?)?;
        tracing::debug!(column = %column.name(), cells = replaced, "Replaced not-applicable cells");
        touched.push(column.name().to_string());
        cells += replaced;
    }

    sink.record(&TreatmentEvent::NotApplicableReplaced {
        columns: touched,
        cells,
        replacement: options.replacement,
    });
    Ok(result)
}
