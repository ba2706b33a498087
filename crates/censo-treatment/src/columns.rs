//! Column selection and cell replacement shared by the resolvers.

use censo_common::{column_to_f64, is_integer_dtype, is_numeric_dtype, numeric_column_names};
use polars::prelude::*;

use crate::error::{Result, TreatmentError};
use crate::sentinel::SentinelCode;

/// A numeric column widened to `f64` for scanning.
pub(crate) struct NumericColumn<'a> {
    pub column: &'a Column,
    pub values: Vec<Option<f64>>,
}

impl NumericColumn<'_> {
    pub fn name(&self) -> &str {
        self.column.name().as_str()
    }

    pub fn contains(&self, code: SentinelCode) -> bool {
        code.is_present(&self.values)
    }
}

/// Resolve the effective column set for one call.
///
/// Without a selection this is every numeric column of `df` as it is now.
/// An explicit selection is checked against the table and deduplicated,
/// keeping first occurrences.
pub(crate) fn resolve_columns(df: &DataFrame, selection: Option<&[String]>) -> Result<Vec<String>> {
    let Some(names) = selection else {
        return Ok(numeric_column_names(df));
    };

    let mut resolved: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if df.column(name).is_err() {
            return Err(TreatmentError::ColumnNotFound(name.clone()));
        }
        if !resolved.contains(name) {
            resolved.push(name.clone());
        }
    }
    Ok(resolved)
}

/// Scan the effective columns, skipping non-numeric ones.
///
/// Non-numeric columns cannot hold a sentinel, so they are never touched.
pub(crate) fn scan_columns<'a>(df: &'a DataFrame, names: &[String]) -> Result<Vec<NumericColumn<'a>>> {
    let mut scanned = Vec::with_capacity(names.len());
    for name in names {
        let column = df
            .column(name)
            .map_err(|_| TreatmentError::ColumnNotFound(name.clone()))?;
        if !is_numeric_dtype(column.dtype()) {
            tracing::debug!(column = %name, dtype = %column.dtype(), "Skipping non-numeric column");
            continue;
        }
        let values = column_to_f64(column)?;
        scanned.push(NumericColumn { column, values });
    }
    Ok(scanned)
}

/// Replace the cells of `column` holding `code` with `fill`.
///
/// The replacement happens on the column's own dtype, so every other cell
/// keeps its exact value. `None` writes a null. Float columns keep their
/// dtype. Integer columns keep theirs when `fill` is null, or integral and
/// representable; otherwise the column is widened to `Float64`.
pub(crate) fn replace_cells(
    column: &NumericColumn<'_>,
    code: SentinelCode,
    fill: Option<f64>,
) -> Result<Column> {
    let name = column.column.name().clone();
    let dtype = column.column.dtype().clone();
    let source = column.column.as_materialized_series();

    let mask = BooleanChunked::from_slice(name.clone(), &code.mask(&column.values));
    let fills = Series::new(name, vec![fill; source.len()]);

    let native_fill = if is_integer_dtype(&dtype) && !fill.is_none_or(|v| v.fract() == 0.0) {
        None
    } else {
        fills.strict_cast(&dtype).ok()
    };

    let replaced = match native_fill {
        Some(native) => native.zip_with(&mask, source)?,
        None => {
            tracing::debug!(
                column = %column.name(),
                dtype = %dtype,
                fill = ?fill,
                "Fill value does not fit the source dtype, widening to Float64"
            );
            fills.zip_with(&mask, &source.cast(&DataType::Float64)?)?
        }
    };
    Ok(replaced.into_column())
}
