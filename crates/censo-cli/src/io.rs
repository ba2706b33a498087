//! CSV loading and saving through Polars.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

/// Rows sampled for dtype inference. Census tables mix `-6`/`-8` with large
/// counts, so sample generously to keep count columns numeric.
const INFER_SCHEMA_ROWS: usize = 10_000;

/// Read a census table from CSV.
pub fn read_table(path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("failed to open CSV file: {}", path.display()))?
        .finish()
        .with_context(|| format!("failed to parse CSV file: {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Loaded table"
    );
    Ok(df)
}

/// Write a table to CSV, replacing any existing file.
pub fn write_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path)
        .with_context(|| format!("failed to create output file: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("failed to write CSV file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = df.height(), "Wrote table");
    Ok(())
}
