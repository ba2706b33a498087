//! Error types for censored-value treatment.

use thiserror::Error;

/// Errors that can occur while treating censored values.
///
/// Every variant except [`TreatmentError::PolarsError`] is raised before any
/// column is rebuilt, so a failed call never yields a partially treated table.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TreatmentError {
    /// Unrecognized imputation method token.
    #[error("invalid imputation method '{given}'; expected one of: {expected}")]
    InvalidMethod {
        /// Token supplied by the caller.
        given: String,
        /// Comma-separated list of accepted tokens.
        expected: String,
    },

    /// Inconsistent treatment configuration.
    #[error("invalid treatment configuration: {0}")]
    InvalidConfig(String),

    /// Selected column not found in the table.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// Derived flag column name already taken.
    #[error("flag column '{column}' already exists")]
    FlagColumnExists {
        /// The conflicting derived name.
        column: String,
    },

    /// Polars DataFrame operation error.
    #[error("DataFrame error: {0}")]
    PolarsError(#[from] polars::error::PolarsError),
}

/// Result type for treatment operations.
pub type Result<T> = std::result::Result<T, TreatmentError>;
