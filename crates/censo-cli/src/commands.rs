use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use censo_treatment::{
    CensorshipSummary, FlagOptions, TracingSink, TreatmentEvent, TreatmentOptions, TreatmentSink,
    diagnose, mark_censored, treat_censored,
};

use crate::cli::{DiagnoseArgs, FlagArgs, TreatArgs};
use crate::io::{read_table, write_table};

/// Result of a command that writes a table.
#[derive(Debug)]
pub struct CommandOutcome {
    pub output: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub events: Vec<TreatmentEvent>,
}

/// Logs every event and keeps a copy for the final summary.
#[derive(Default)]
struct RecordingSink {
    events: Vec<TreatmentEvent>,
}

impl TreatmentSink for RecordingSink {
    fn record(&mut self, event: &TreatmentEvent) {
        TracingSink.record(event);
        self.events.push(event.clone());
    }
}

pub fn run_diagnose(args: &DiagnoseArgs) -> Result<CensorshipSummary> {
    let df = read_table(&args.input)?;
    let summary = diagnose(&df).context("diagnosis failed")?;
    Ok(summary)
}

pub fn run_flag(args: &FlagArgs) -> Result<CommandOutcome> {
    let df = read_table(&args.input)?;
    let mut options = FlagOptions::new().with_suffixes(&args.na_suffix, &args.conf_suffix);
    options.columns = args.columns.clone();

    let mut sink = RecordingSink::default();
    let mut flagged = mark_censored(&df, &options, &mut sink).context("flagging failed")?;
    write_table(&mut flagged, &args.output)?;

    Ok(CommandOutcome {
        output: args.output.clone(),
        rows: flagged.height(),
        columns: flagged.width(),
        events: sink.events,
    })
}

pub fn run_treat(args: &TreatArgs) -> Result<CommandOutcome> {
    // Resolve options first so a bad config never reads or writes a table.
    let options = treatment_options(args)?;
    let df = read_table(&args.input)?;

    let mut sink = RecordingSink::default();
    let source = if args.flag {
        let flag_options = FlagOptions {
            columns: options.columns.clone(),
            ..FlagOptions::default()
        };
        mark_censored(&df, &flag_options, &mut sink).context("flagging failed")?
    } else {
        df
    };
    let mut treated = treat_censored(&source, &options, &mut sink).context("treatment failed")?;
    write_table(&mut treated, &args.output)?;

    Ok(CommandOutcome {
        output: args.output.clone(),
        rows: treated.height(),
        columns: treated.width(),
        events: sink.events,
    })
}

/// Options from `--config`, overridden by explicit flags.
pub fn treatment_options(args: &TreatArgs) -> Result<TreatmentOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            serde_json::from_str::<TreatmentOptions>(&raw)
                .with_context(|| format!("invalid config file: {}", path.display()))?
        }
        None => TreatmentOptions::default(),
    };

    if let Some(columns) = &args.columns {
        options.columns = Some(columns.clone());
    }
    if let Some(method) = args.method {
        options.method = method;
    }
    if let Some(low_value) = args.low_value {
        options.low_value = low_value;
    }
    if let Some(replacement) = args.replacement {
        options.replacement = replacement;
    }
    Ok(options)
}
