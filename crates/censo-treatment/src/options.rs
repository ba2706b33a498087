//! Treatment options.
//!
//! Every operation is configured through a plain options struct with a
//! `Default` matching the documented defaults and `with_*` builders. All
//! options serialize with serde so they can be stored in a config file.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TreatmentError;
use crate::sentinel::SentinelCode;

/// Default fill value for not-applicable cells.
pub const DEFAULT_REPLACEMENT: f64 = 0.0;

/// Default value for [`ImputationMethod::LowValue`]. Suppressed counts are
/// at most 5, so 3 sits in the middle of the hidden range.
pub const DEFAULT_LOW_VALUE: f64 = 3.0;

/// Default suffix for not-applicable flag columns.
pub const DEFAULT_NOT_APPLICABLE_SUFFIX: &str = "_flag_na";

/// Default suffix for confidential flag columns.
pub const DEFAULT_CONFIDENTIAL_SUFFIX: &str = "_flag_conf";

/// Strategy for replacing confidential cells.
///
/// Serializes as its canonical token. Deserialization goes through
/// [`FromStr`], so config files accept the same spellings as the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ImputationMethod {
    /// Replace with an explicit missing value (null).
    #[default]
    #[serde(rename = "nan")]
    Missing,
    /// Replace with zero, a conservative lower bound.
    #[serde(rename = "cero")]
    Zero,
    /// Replace with the median of the column's eligible values.
    #[serde(rename = "mediana")]
    Median,
    /// Replace with the mean of the column's eligible values, rounded to one decimal.
    #[serde(rename = "media")]
    Mean,
    /// Replace with a fixed low value.
    #[serde(rename = "valor_bajo")]
    LowValue,
}

impl ImputationMethod {
    /// All methods, in documentation order.
    pub const ALL: [ImputationMethod; 5] = [
        ImputationMethod::Missing,
        ImputationMethod::Zero,
        ImputationMethod::Median,
        ImputationMethod::Mean,
        ImputationMethod::LowValue,
    ];

    /// Canonical token used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            ImputationMethod::Missing => "nan",
            ImputationMethod::Zero => "cero",
            ImputationMethod::Median => "mediana",
            ImputationMethod::Mean => "media",
            ImputationMethod::LowValue => "valor_bajo",
        }
    }

    fn alias(self) -> &'static str {
        match self {
            ImputationMethod::Missing => "missing",
            ImputationMethod::Zero => "zero",
            ImputationMethod::Median => "median",
            ImputationMethod::Mean => "mean",
            ImputationMethod::LowValue => "low",
        }
    }

    /// Comma-separated list of the canonical tokens.
    pub fn expected_tokens() -> String {
        Self::ALL
            .iter()
            .map(|method| method.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ImputationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImputationMethod {
    type Err = TreatmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|method| {
                token.eq_ignore_ascii_case(method.as_str()) || token.eq_ignore_ascii_case(method.alias())
            })
            .ok_or_else(|| TreatmentError::InvalidMethod {
                given: s.to_string(),
                expected: Self::expected_tokens(),
            })
    }
}

impl TryFrom<String> for ImputationMethod {
    type Error = TreatmentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Options for the not-applicable resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotApplicableOptions {
    /// Columns to process. `None` processes every numeric column.
    pub columns: Option<Vec<String>>,
    /// Value written in place of each not-applicable cell.
    pub replacement: f64,
}

impl Default for NotApplicableOptions {
    fn default() -> Self {
        Self {
            columns: None,
            replacement: DEFAULT_REPLACEMENT,
        }
    }
}

impl NotApplicableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_replacement(mut self, replacement: f64) -> Self {
        self.replacement = replacement;
        self
    }
}

/// Options for the confidential resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidentialOptions {
    /// Columns to process. `None` processes every numeric column.
    pub columns: Option<Vec<String>>,
    /// Imputation strategy.
    pub method: ImputationMethod,
    /// Value used by [`ImputationMethod::LowValue`]; ignored otherwise.
    pub low_value: f64,
}

impl Default for ConfidentialOptions {
    fn default() -> Self {
        Self {
            columns: None,
            method: ImputationMethod::default(),
            low_value: DEFAULT_LOW_VALUE,
        }
    }
}

impl ConfidentialOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: ImputationMethod) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn with_low_value(mut self, low_value: f64) -> Self {
        self.low_value = low_value;
        self
    }
}

/// Options for the combined treatment of both sentinels.
///
/// The column selection applies to both passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreatmentOptions {
    /// Columns to process. `None` processes every numeric column.
    pub columns: Option<Vec<String>>,
    /// Fill value for not-applicable cells.
    pub replacement: f64,
    /// Imputation strategy for confidential cells.
    pub method: ImputationMethod,
    /// Value used by [`ImputationMethod::LowValue`].
    pub low_value: f64,
}

impl Default for TreatmentOptions {
    fn default() -> Self {
        Self {
            columns: None,
            replacement: DEFAULT_REPLACEMENT,
            method: ImputationMethod::default(),
            low_value: DEFAULT_LOW_VALUE,
        }
    }
}

impl TreatmentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_replacement(mut self, replacement: f64) -> Self {
        self.replacement = replacement;
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: ImputationMethod) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn with_low_value(mut self, low_value: f64) -> Self {
        self.low_value = low_value;
        self
    }

    /// Options for the first pass.
    pub fn not_applicable(&self) -> NotApplicableOptions {
        NotApplicableOptions {
            columns: self.columns.clone(),
            replacement: self.replacement,
        }
    }

    /// Options for the second pass.
    pub fn confidential(&self) -> ConfidentialOptions {
        ConfidentialOptions {
            columns: self.columns.clone(),
            method: self.method,
            low_value: self.low_value,
        }
    }
}

/// Options for the censorship flag marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagOptions {
    /// Columns to inspect. `None` inspects every numeric column.
    pub columns: Option<Vec<String>>,
    /// Suffix appended to the source name for not-applicable flags.
    pub not_applicable_suffix: String,
    /// Suffix appended to the source name for confidential flags.
    pub confidential_suffix: String,
}

impl Default for FlagOptions {
    fn default() -> Self {
        Self {
            columns: None,
            not_applicable_suffix: DEFAULT_NOT_APPLICABLE_SUFFIX.to_string(),
            confidential_suffix: DEFAULT_CONFIDENTIAL_SUFFIX.to_string(),
        }
    }
}

impl FlagOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_suffixes(
        mut self,
        not_applicable: impl Into<String>,
        confidential: impl Into<String>,
    ) -> Self {
        self.not_applicable_suffix = not_applicable.into();
        self.confidential_suffix = confidential.into();
        self
    }

    /// Suffix used for flags of `code`.
    pub fn suffix(&self, code: SentinelCode) -> &str {
        match code {
            SentinelCode::NotApplicable => &self.not_applicable_suffix,
            SentinelCode::Confidential => &self.confidential_suffix,
        }
    }

    /// Derived flag column name for `column` and `code`.
    pub fn flag_name(&self, column: &str, code: SentinelCode) -> String {
        format!("{column}{}", self.suffix(code))
    }
}
