//! CLI argument definitions for the census treatment tool.

use std::path::PathBuf;

use censo_treatment::{
    DEFAULT_CONFIDENTIAL_SUFFIX, DEFAULT_NOT_APPLICABLE_SUFFIX, ImputationMethod,
};
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "censo",
    version,
    about = "Treat not-applicable (-6) and confidential (-8) codes in census tables",
    long_about = "Diagnose, flag and treat the sentinel codes published in census tables.\n\n\
                  -6 marks a category that does not exist for the geographic unit.\n\
                  -8 marks a count suppressed for statistical confidentiality."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with timestamps (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Report sentinel counts and percentages per numeric column.
    Diagnose(DiagnoseArgs),

    /// Append boolean flag columns marking sentinel cells.
    Flag(FlagArgs),

    /// Replace -6 with a fill value and -8 with an imputed value.
    Treat(TreatArgs),
}

#[derive(Parser)]
pub struct DiagnoseArgs {
    /// Census table in CSV format.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ReportFormatArg,
}

#[derive(Parser)]
pub struct FlagArgs {
    /// Census table in CSV format.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Output CSV path.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Comma-separated columns to inspect (default: all numeric columns).
    #[arg(long = "columns", value_delimiter = ',')]
    pub columns: Option<Vec<String>>,

    /// Suffix for not-applicable flag columns.
    #[arg(long = "na-suffix", default_value = DEFAULT_NOT_APPLICABLE_SUFFIX)]
    pub na_suffix: String,

    /// Suffix for confidential flag columns.
    #[arg(long = "conf-suffix", default_value = DEFAULT_CONFIDENTIAL_SUFFIX)]
    pub conf_suffix: String,
}

#[derive(Parser)]
pub struct TreatArgs {
    /// Census table in CSV format.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Output CSV path.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// JSON file with treatment options. Command-line flags take precedence.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Comma-separated columns to treat (default: all numeric columns).
    #[arg(long = "columns", value_delimiter = ',')]
    pub columns: Option<Vec<String>>,

    /// Imputation method for -8: nan, cero, mediana, media, valor_bajo.
    #[arg(long = "method", value_name = "METHOD")]
    pub method: Option<ImputationMethod>,

    /// Value used by the valor_bajo method (default 3).
    #[arg(long = "low-value", value_name = "VALUE", allow_hyphen_values = true)]
    pub low_value: Option<f64>,

    /// Fill value for -6 (default 0).
    #[arg(long = "replacement", value_name = "VALUE", allow_hyphen_values = true)]
    pub replacement: Option<f64>,

    /// Append flag columns before treating.
    #[arg(long = "flag")]
    pub flag: bool,
}

/// Diagnostic report formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
