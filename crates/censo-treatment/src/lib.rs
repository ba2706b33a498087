//! Censored-value treatment for census tables.
//!
//! Census enumeration tables publish two sentinel codes in numeric columns:
//! `-6` ("not applicable", the category does not exist for the geographic
//! unit) and `-8` ("confidential", the count was suppressed because it fell
//! at or below the disclosure threshold). This crate detects and replaces
//! them.
//!
//! # Overview
//!
//! - [`diagnose`]: per-column counts and percentages of each sentinel
//! - [`mark_censored`]: boolean flag columns recording where sentinels were
//! - [`treat_not_applicable`]: replace `-6` with a fill value (default 0)
//! - [`treat_confidential`]: replace `-8` with one of five [`ImputationMethod`]s
//! - [`treat_censored`]: both resolvers in sequence
//!
//! # Example
//!
//! ```
//! use polars::prelude::*;
//! use censo_treatment::{
//!     mark_censored, treat_censored, FlagOptions, ImputationMethod, TracingSink,
//!     TreatmentOptions,
//! };
//!
//! let df = df! {
//!     "cvegeo" => &["01001", "01002", "01003"],
//!     "pobtot" => &[-6i64, -8, 12],
//! }
//! .unwrap();
//!
//! let mut sink = TracingSink;
//! let flagged = mark_censored(&df, &FlagOptions::default(), &mut sink).unwrap();
//! let options = TreatmentOptions::new().with_method(ImputationMethod::Zero);
//! let treated = treat_censored(&flagged, &options, &mut sink).unwrap();
//!
//! assert_eq!(treated.width(), 4);
//! assert_eq!(treated.column("pobtot").unwrap().i64().unwrap().get(1), Some(0));
//! ```
//!
//! # Design Principles
//!
//! - **Copy-on-call**: inputs are never mutated; every operation returns a new frame
//! - **Touch only what holds a sentinel**: other columns are returned unchanged
//! - **Fresh column discovery**: the numeric column set is recomputed on every call
//! - **Injected reporting**: progress goes to a [`TreatmentSink`], never to stdout

mod columns;
mod combined;
mod confidential;
mod diagnostics;
mod error;
mod flags;
mod not_applicable;
mod options;
mod report;
pub mod sentinel;

// Error type
pub use error::{Result, TreatmentError};

// Configuration
pub use options::{
    ConfidentialOptions, DEFAULT_CONFIDENTIAL_SUFFIX, DEFAULT_LOW_VALUE,
    DEFAULT_NOT_APPLICABLE_SUFFIX, DEFAULT_REPLACEMENT, FlagOptions, ImputationMethod,
    NotApplicableOptions, TreatmentOptions,
};

// Reporting
pub use report::{CollectingSink, TracingSink, TreatmentEvent, TreatmentSink};

// Operations
pub use combined::treat_censored;
pub use confidential::treat_confidential;
pub use diagnostics::{CensorshipSummary, ColumnCensorship, diagnose};
pub use flags::mark_censored;
pub use not_applicable::treat_not_applicable;
pub use sentinel::{CONFIDENTIAL, NOT_APPLICABLE, SentinelCode};
