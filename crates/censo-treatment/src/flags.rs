//! Boolean indicator columns marking where sentinels were.
//!
//! Run this before any resolver to keep a record of the untreated state.

use std::collections::HashSet;

use polars::prelude::*;

use crate::columns::{resolve_columns, scan_columns};
use crate::error::{Result, TreatmentError};
use crate::options::FlagOptions;
use crate::report::{TreatmentEvent, TreatmentSink};
use crate::sentinel::SentinelCode;

/// Append a flag column per (source column, sentinel) pair present in `df`.
///
/// Flags are appended after all original columns, in scan order, with the
/// not-applicable flag before the confidential flag of the same source.
/// Columns without a sentinel get no flag.
///
/// # Errors
///
/// - [`TreatmentError::InvalidConfig`] if both suffixes are equal.
/// - [`TreatmentError::FlagColumnExists`] if a derived name is already a
///   column of `df` or is derived twice. Nothing is appended in that case.
/// - [`TreatmentError::ColumnNotFound`] for unknown selected columns.
pub fn mark_censored(
    df: &DataFrame,
    options: &FlagOptions,
    sink: &mut dyn TreatmentSink,
) -> Result<DataFrame> {
    if options.not_applicable_suffix == options.confidential_suffix {
        return Err(TreatmentError::InvalidConfig(format!(
            "flag suffixes must differ (both are '{}')",
            options.not_applicable_suffix
        )));
    }

    let names = resolve_columns(df, options.columns.as_deref())?;
    let scanned = scan_columns(df, &names)?;

    let mut planned: Vec<Series> = Vec::new();
    for column in &scanned {
        for code in SentinelCode::ALL {
            if column.contains(code) {
                let flag_name = options.flag_name(column.name(), code);
                planned.push(Series::new(flag_name.into(), code.mask(&column.values)));
            }
        }
    }

    let mut taken: HashSet<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    for flag in &planned {
        if !taken.insert(flag.name().to_string()) {
            return Err(TreatmentError::FlagColumnExists {
                column: flag.name().to_string(),
            });
        }
    }

    let mut result = df.clone();
    let mut flags = Vec::with_capacity(planned.len());
    for flag in planned {
        tracing::debug!(flag = %flag.name(), "Adding flag column");
        flags.push(flag.name().to_string());
        result.with_column(flag)?;
    }

    sink.record(&TreatmentEvent::FlagsAdded { flags });
    Ok(result)
}
