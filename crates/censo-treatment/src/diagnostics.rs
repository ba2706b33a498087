//! Diagnostic summary of sentinel codes per numeric column.

use censo_common::{column_to_f64, is_numeric_dtype, percentage};
use polars::prelude::*;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::Result;
use crate::sentinel::SentinelCode;

/// Sentinel counts for one column.
///
/// Percentages are over the table's row count, rounded to one decimal.
/// The combined percentage is computed from the combined count, not by
/// adding the two rounded percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnCensorship {
    #[serde(skip_serializing)]
    pub column: String,
    #[serde(rename = "n_menos_6")]
    pub not_applicable: usize,
    #[serde(rename = "pct_menos_6")]
    pub not_applicable_pct: f64,
    #[serde(rename = "n_menos_8")]
    pub confidential: usize,
    #[serde(rename = "pct_menos_8")]
    pub confidential_pct: f64,
    #[serde(rename = "n_especiales")]
    pub special: usize,
    #[serde(rename = "pct_especiales")]
    pub special_pct: f64,
}

impl ColumnCensorship {
    fn from_counts(column: &str, not_applicable: usize, confidential: usize, rows: usize) -> Self {
        let special = not_applicable + confidential;
        Self {
            column: column.to_string(),
            not_applicable,
            not_applicable_pct: percentage(not_applicable, rows),
            confidential,
            confidential_pct: percentage(confidential, rows),
            special,
            special_pct: percentage(special, rows),
        }
    }
}

/// Per-column sentinel report, in table column order.
///
/// Only columns with at least one sentinel are listed. Serializes as a map
/// keyed by column name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CensorshipSummary {
    rows: usize,
    columns: Vec<ColumnCensorship>,
}

impl CensorshipSummary {
    /// Row count of the diagnosed table.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> &[ColumnCensorship] {
        &self.columns
    }

    /// Entry for `column`, if it holds any sentinel.
    pub fn get(&self, column: &str) -> Option<&ColumnCensorship> {
        self.columns.iter().find(|entry| entry.column == column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnCensorship> {
        self.columns.iter()
    }

    /// Total sentinel cells across all reported columns.
    pub fn total_special(&self) -> usize {
        self.columns.iter().map(|entry| entry.special).sum()
    }

    /// Render the report as a table with a leading `column` column.
    pub fn to_dataframe(&self) -> Result<DataFrame> {
        let count = |f: fn(&ColumnCensorship) -> usize| -> Vec<u64> {
            self.columns.iter().map(|entry| f(entry) as u64).collect()
        };
        let pct = |f: fn(&ColumnCensorship) -> f64| -> Vec<f64> {
            self.columns.iter().map(f).collect()
        };
        let names: Vec<&str> = self.columns.iter().map(|entry| entry.column.as_str()).collect();

        let df = DataFrame::new(vec![
            Column::new("column".into(), names),
            Column::new("n_menos_6".into(), count(|e| e.not_applicable)),
            Column::new("pct_menos_6".into(), pct(|e| e.not_applicable_pct)),
            Column::new("n_menos_8".into(), count(|e| e.confidential)),
            Column::new("pct_menos_8".into(), pct(|e| e.confidential_pct)),
            Column::new("n_especiales".into(), count(|e| e.special)),
            Column::new("pct_especiales".into(), pct(|e| e.special_pct)),
        ])?;
        Ok(df)
    }
}

impl Serialize for CensorshipSummary {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for entry in &self.columns {
            map.serialize_entry(&entry.column, entry)?;
        }
        map.end()
    }
}

/// Count sentinel codes in every numeric column of `df`.
///
/// Works on zero-row tables, which yield an empty report.
pub fn diagnose(df: &DataFrame) -> Result<CensorshipSummary> {
    let rows = df.height();
    let mut columns = Vec::new();

    for column in df.get_columns() {
        if !is_numeric_dtype(column.dtype()) {
            continue;
        }
        let values = column_to_f64(column)?;
        let not_applicable = SentinelCode::NotApplicable.count(&values);
        let confidential = SentinelCode::Confidential.count(&values);
        if not_applicable + confidential == 0 {
            continue;
        }
        columns.push(ColumnCensorship::from_counts(
            column.name().as_str(),
            not_applicable,
            confidential,
            rows,
        ));
    }

    tracing::debug!(rows, censored_columns = columns.len(), "Diagnosed sentinel codes");
    Ok(CensorshipSummary { rows, columns })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnose_scenario() {
        let df = df! {
            "pop" => &[-6i64, -8, 10, -6, 5],
        }
        .unwrap();

        let summary = diagnose(&df).unwrap();
        let pop = summary.get("pop").unwrap();
        assert_eq!(pop.not_applicable, 2);
        assert_eq!(pop.not_applicable_pct, 40.0);
        assert_eq!(pop.confidential, 1);
        assert_eq!(pop.confidential_pct, 20.0);
        assert_eq!(pop.special, 3);
        assert_eq!(pop.special_pct, 60.0);
    }

    #[test]
    fn test_diagnose_omits_clean_and_text_columns() {
        let df = df! {
            "nom_mun" => &["-6", "-8", "Calvillo"],
            "clean" => &[1.0f64, 2.0, -7.0],
            "vivtot" => &[-8i32, 4, 4],
        }
        .unwrap();

        let summary = diagnose(&df).unwrap();
        assert_eq!(summary.len(), 1);
        assert!(summary.get("clean").is_none());
        assert!(summary.get("nom_mun").is_none());
        assert_eq!(summary.get("vivtot").unwrap().confidential_pct, 33.3);
    }

    #[test]
    fn test_diagnose_empty_table() {
        let df = DataFrame::new(vec![Column::new("pop".into(), Vec::<i64>::new())]).unwrap();
        let summary = diagnose(&df).unwrap();
        assert!(summary.is_empty());
        assert_eq!(summary.rows(), 0);
    }

    #[test]
    fn test_zero_rows_percentage_is_zero() {
        let entry = ColumnCensorship::from_counts("pop", 0, 0, 0);
        assert_eq!(entry.not_applicable_pct, 0.0);
        assert_eq!(entry.special_pct, 0.0);
    }

    #[test]
    fn test_combined_percentage_uses_combined_count() {
        // 1/3 and 1/3 round to 33.3 each, but 2/3 rounds to 66.7.
        let entry = ColumnCensorship::from_counts("pop", 1, 1, 3);
        assert_eq!(entry.not_applicable_pct, 33.3);
        assert_eq!(entry.confidential_pct, 33.3);
        assert_eq!(entry.special_pct, 66.7);
    }

    #[test]
    fn test_percentage_ties_round_to_even() {
        let mut pop = vec![10i64; 16];
        pop[0] = -6;
        pop[1] = -8;
        pop[2] = -8;
        pop[3] = -8;
        let df = DataFrame::new(vec![Column::new("pop".into(), pop)]).unwrap();

        let summary = diagnose(&df).unwrap();
        let entry = summary.get("pop").unwrap();
        // 1/16 = 6.25%, 3/16 = 18.75%, 4/16 = 25%.
        assert_eq!(entry.not_applicable_pct, 6.2);
        assert_eq!(entry.confidential_pct, 18.8);
        assert_eq!(entry.special_pct, 25.0);
    }

    #[test]
    fn test_to_dataframe() {
        let df = df! {
            "pobtot" => &[-6i64, 3],
            "pobfem" => &[-8i64, -8],
        }
        .unwrap();

        let report = diagnose(&df).unwrap().to_dataframe().unwrap();
        assert_eq!(report.height(), 2);
        assert_eq!(report.width(), 7);
        let names = report.column("column").unwrap().str().unwrap();
        assert_eq!(names.get(0), Some("pobtot"));
        assert_eq!(names.get(1), Some("pobfem"));
        let special = report.column("pct_especiales").unwrap().f64().unwrap();
        assert_eq!(special.get(1), Some(100.0));
    }

    #[test]
    fn test_summary_serializes_keyed_by_column() {
        let df = df! {
            "pop" => &[-6i64, -8, 10, -6, 5],
        }
        .unwrap();

        let summary = diagnose(&df).unwrap();
        insta::assert_json_snapshot!(summary, @r#"
        {
          "pop": {
            "n_menos_6": 2,
            "pct_menos_6": 40.0,
            "n_menos_8": 1,
            "pct_menos_8": 20.0,
            "n_especiales": 3,
            "pct_especiales": 60.0
          }
        }
        "#);
    }
}
