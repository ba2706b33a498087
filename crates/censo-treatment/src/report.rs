//! Progress reporting for treatment operations.
//!
//! Resolvers never print. They hand a [`TreatmentEvent`] to a caller-supplied
//! [`TreatmentSink`], which may log it, collect it, or ignore it.

use std::fmt;

use censo_common::format_numeric;
use serde::Serialize;

use crate::options::ImputationMethod;
use crate::sentinel::SentinelCode;

/// A progress or summary event emitted by a treatment operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TreatmentEvent {
    /// A combined treatment is starting.
    TreatmentStarted,
    /// Not-applicable cells were replaced.
    NotApplicableReplaced {
        /// Columns that held at least one not-applicable cell.
        columns: Vec<String>,
        /// Number of cells replaced.
        cells: usize,
        /// Fill value written.
        replacement: f64,
    },
    /// Confidential cells were treated.
    ConfidentialTreated {
        /// Columns that held at least one confidential cell.
        columns: Vec<String>,
        /// Number of cells treated.
        cells: usize,
        /// Strategy applied.
        method: ImputationMethod,
    },
    /// Flag columns were appended.
    FlagsAdded {
        /// Names of the appended flag columns.
        flags: Vec<String>,
    },
    /// A combined treatment finished.
    TreatmentFinished,
}

impl TreatmentEvent {
    /// Short machine-readable name of the event.
    pub fn kind(&self) -> &'static str {
        match self {
            TreatmentEvent::TreatmentStarted => "treatment_started",
            TreatmentEvent::NotApplicableReplaced { .. } => "not_applicable_replaced",
            TreatmentEvent::ConfidentialTreated { .. } => "confidential_treated",
            TreatmentEvent::FlagsAdded { .. } => "flags_added",
            TreatmentEvent::TreatmentFinished => "treatment_finished",
        }
    }
}

impl fmt::Display for TreatmentEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreatmentEvent::TreatmentStarted => f.write_str("censored value treatment started"),
            TreatmentEvent::NotApplicableReplaced {
                columns,
                cells,
                replacement,
            } => write!(
                f,
                "not applicable: {} columns affected | {} cells replaced ({} -> {})",
                columns.len(),
                cells,
                SentinelCode::NotApplicable,
                format_numeric(*replacement)
            ),
            TreatmentEvent::ConfidentialTreated {
                columns,
                cells,
                method,
            } => write!(
                f,
                "confidential: {} columns affected | {} cells treated (method '{}')",
                columns.len(),
                cells,
                method
            ),
            TreatmentEvent::FlagsAdded { flags } => {
                write!(f, "flags: {} flag columns added", flags.len())
            }
            TreatmentEvent::TreatmentFinished => f.write_str("censored value treatment finished"),
        }
    }
}

/// Receiver for treatment events.
pub trait TreatmentSink {
    /// Record one event.
    fn record(&mut self, event: &TreatmentEvent);
}

impl<F> TreatmentSink for F
where
    F: FnMut(&TreatmentEvent),
{
    fn record(&mut self, event: &TreatmentEvent) {
        self(event);
    }
}

/// Sink that forwards every event to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TreatmentSink for TracingSink {
    fn record(&mut self, event: &TreatmentEvent) {
        match event {
            TreatmentEvent::NotApplicableReplaced {
                columns,
                cells,
                replacement,
            } => tracing::info!(
                event = event.kind(),
                columns = columns.len(),
                cells = *cells,
                replacement = *replacement,
                "{event}"
            ),
            TreatmentEvent::ConfidentialTreated {
                columns,
                cells,
                method,
            } => tracing::info!(
                event = event.kind(),
                columns = columns.len(),
                cells = *cells,
                method = %method,
                "{event}"
            ),
            TreatmentEvent::FlagsAdded { flags } => {
                tracing::info!(event = event.kind(), flags = flags.len(), "{event}");
            }
            TreatmentEvent::TreatmentStarted | TreatmentEvent::TreatmentFinished => {
                tracing::info!(event = event.kind(), "{event}");
            }
        }
    }
}

/// Sink that keeps every event in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    events: Vec<TreatmentEvent>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, in order.
    pub fn events(&self) -> &[TreatmentEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TreatmentEvent> {
        self.events
    }
}

impl TreatmentSink for CollectingSink {
    fn record(&mut self, event: &TreatmentEvent) {
        self.events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let na = TreatmentEvent::NotApplicableReplaced {
            columns: vec!["pobtot".into(), "pobfem".into()],
            cells: 3,
            replacement: 0.0,
        };
        assert_eq!(
            na.to_string(),
            "not applicable: 2 columns affected | 3 cells replaced (-6 -> 0)"
        );

        let conf = TreatmentEvent::ConfidentialTreated {
            columns: vec!["pobtot".into()],
            cells: 1,
            method: ImputationMethod::Median,
        };
        assert_eq!(
            conf.to_string(),
            "confidential: 1 columns affected | 1 cells treated (method 'mediana')"
        );

        let flags = TreatmentEvent::FlagsAdded {
            flags: vec!["pobtot_flag_na".into()],
        };
        assert_eq!(flags.to_string(), "flags: 1 flag columns added");
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |event: &TreatmentEvent| seen.push(event.kind());
            sink.record(&TreatmentEvent::TreatmentStarted);
            sink.record(&TreatmentEvent::TreatmentFinished);
        }
        assert_eq!(seen, vec!["treatment_started", "treatment_finished"]);
    }

    #[test]
    fn test_collecting_sink_preserves_order() {
        let mut sink = CollectingSink::new();
        sink.record(&TreatmentEvent::TreatmentStarted);
        sink.record(&TreatmentEvent::FlagsAdded { flags: vec![] });
        assert_eq!(sink.events().len(), 2);
        assert_eq!(sink.into_events()[1].kind(), "flags_added");
    }

    #[test]
    fn test_event_serializes_with_tag() {
        let event = TreatmentEvent::ConfidentialTreated {
            columns: vec!["vivtot".into()],
            cells: 4,
            method: ImputationMethod::Zero,
        };
        insta::assert_json_snapshot!(event, @r#"
        {
          "event": "confidential_treated",
          "columns": [
            "vivtot"
          ],
          "cells": 4,
          "method": "cero"
        }
        "#);
    }
}
