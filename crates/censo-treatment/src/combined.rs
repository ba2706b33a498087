//! Combined treatment of both sentinel codes.

use polars::prelude::*;

use crate::confidential::treat_confidential;
use crate::error::Result;
use crate::not_applicable::treat_not_applicable;
use crate::options::TreatmentOptions;
use crate::report::{TreatmentEvent, TreatmentSink};

/// Replace not-applicable cells, then treat confidential cells of the result.
///
/// The column selection applies identically to both passes.
pub fn treat_censored(
    df: &DataFrame,
    options: &TreatmentOptions,
    sink: &mut dyn TreatmentSink,
) -> Result<DataFrame> {
    sink.record(&TreatmentEvent::TreatmentStarted);
    let result = treat_not_applicable(df, &options.not_applicable(), sink)?;
    let result = treat_confidential(&result, &options.confidential(), sink)?;
    sink.record(&TreatmentEvent::TreatmentFinished);
    Ok(result)
}
