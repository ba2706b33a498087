//! Table-wide invariants checked over generated census columns.

use censo_treatment::{
    CollectingSink, ConfidentialOptions, FlagOptions, ImputationMethod, NotApplicableOptions,
    TreatmentOptions, diagnose, mark_censored, treat_censored, treat_confidential,
    treat_not_applicable,
};
use polars::prelude::*;
use proptest::collection::vec;
use proptest::prelude::*;

/// A count cell: mostly ordinary values, with sentinels and stray negatives mixed in.
fn cell() -> impl Strategy<Value = i64> {
    prop_oneof![
        3 => 0i64..500,
        1 => Just(-6i64),
        1 => Just(-8i64),
        1 => -5i64..0,
    ]
}

fn method() -> impl Strategy<Value = ImputationMethod> {
    proptest::sample::select(ImputationMethod::ALL.to_vec())
}

/// Frame with a text key, a censored count column and a clean count column.
fn frame() -> impl Strategy<Value = DataFrame> {
    (0usize..40).prop_flat_map(|rows| {
        (vec(cell(), rows), vec(0i64..1000, rows)).prop_map(move |(censored, clean)| {
            let keys: Vec<String> = (0..rows).map(|i| format!("{:05}", i + 1)).collect();
            df! {
                "cvegeo" => keys,
                "pobtot" => censored,
                "vivtot" => clean,
            }
            .unwrap()
        })
    })
}

fn same_column(a: &DataFrame, b: &DataFrame, name: &str) -> bool {
    a.column(name)
        .unwrap()
        .as_materialized_series()
        .equals_missing(b.column(name).unwrap().as_materialized_series())
}

proptest! {
    #[test]
    fn resolvers_preserve_shape_and_text_columns(df in frame(), method in method()) {
        let mut sink = CollectingSink::new();
        let options = TreatmentOptions::new().with_method(method);
        let results = [
            treat_not_applicable(&df, &NotApplicableOptions::default(), &mut sink).unwrap(),
            treat_confidential(&df, &ConfidentialOptions::new().with_method(method), &mut sink).unwrap(),
            treat_censored(&df, &options, &mut sink).unwrap(),
        ];

        for result in &results {
            prop_assert_eq!(result.height(), df.height());
            prop_assert_eq!(result.get_column_names(), df.get_column_names());
            prop_assert!(same_column(result, &df, "cvegeo"));
        }
    }

    #[test]
    fn not_applicable_is_idempotent(df in frame(), replacement in 0i64..10) {
        let options = NotApplicableOptions::new().with_replacement(replacement as f64);
        let once = treat_not_applicable(&df, &options, &mut CollectingSink::new()).unwrap();
        let twice = treat_not_applicable(&once, &options, &mut CollectingSink::new()).unwrap();

        prop_assert!(once.equals_missing(&twice));
        prop_assert!(diagnose(&once).unwrap().get("pobtot").is_none_or(|entry| entry.not_applicable == 0));
    }

    #[test]
    fn clean_columns_are_never_touched(df in frame(), method in method()) {
        let options = TreatmentOptions::new().with_method(method);
        let treated = treat_censored(&df, &options, &mut CollectingSink::new()).unwrap();
        let flagged = mark_censored(&df, &FlagOptions::default(), &mut CollectingSink::new()).unwrap();

        prop_assert!(same_column(&treated, &df, "vivtot"));
        prop_assert_eq!(treated.column("vivtot").unwrap().dtype(), &DataType::Int64);
        prop_assert!(flagged.column("vivtot_flag_na").is_err());
        prop_assert!(flagged.column("vivtot_flag_conf").is_err());
    }

    #[test]
    fn summary_combined_count_is_sum(df in frame()) {
        let summary = diagnose(&df).unwrap();
        for entry in summary.iter() {
            prop_assert_eq!(entry.special, entry.not_applicable + entry.confidential);
            prop_assert!(entry.special > 0);
        }
        prop_assert!(summary.get("vivtot").is_none());

        let pobtot = df.column("pobtot").unwrap().i64().unwrap();
        let censored = pobtot.into_iter().flatten().filter(|v| *v == -6 || *v == -8).count();
        prop_assert_eq!(summary.total_special(), censored);
    }

    #[test]
    fn flags_match_sentinel_positions(df in frame()) {
        let flagged = mark_censored(&df, &FlagOptions::default(), &mut CollectingSink::new()).unwrap();
        let pobtot: Vec<Option<i64>> = df.column("pobtot").unwrap().i64().unwrap().into_iter().collect();

        for (suffix, code) in [("_flag_na", -6i64), ("_flag_conf", -8i64)] {
            let name = format!("pobtot{suffix}");
            let present = pobtot.contains(&Some(code));
            match flagged.column(&name) {
                Ok(flag) => {
                    prop_assert!(present);
                    let expected: Vec<Option<bool>> = pobtot.iter().map(|v| Some(*v == Some(code))).collect();
                    let actual: Vec<Option<bool>> = flag.bool().unwrap().into_iter().collect();
                    prop_assert_eq!(actual, expected);
                }
                Err(_) => prop_assert!(!present),
            }
        }
    }
}
