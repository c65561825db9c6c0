use serde::Serialize;

use crate::model::key::NeuronKey;

/// One structured diagnostic event emitted while computing errors or
/// applying a correction. Events carry copies of the numbers involved, so a
/// sink can never influence the computation it observes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    OutputErrorComputed {
        key: NeuronKey,
        weighted_sum: f64,
        actual: f64,
        target: f64,
        derivative: f64,
        gamma: f64,
    },
    HiddenErrorComputed {
        key: NeuronKey,
        weighted_sum: f64,
        downstream_weight: f64,
        effective_gamma: f64,
        derivative: f64,
        gamma: f64,
    },
    WeightCorrected {
        key: NeuronKey,
        synapse: usize,
        old: f64,
        new: f64,
    },
    BiasCorrected {
        key: NeuronKey,
        old: f64,
        new: f64,
    },
}

/// Receives diagnostic events: the audit channel of the engines.
///
/// Implemented for any `FnMut(TraceEvent)`, so a test can pass a closure
/// that pushes into a `Vec` and an interactive caller can stream events to
/// its own log widget.
pub trait TraceSink {
    fn record(&mut self, event: TraceEvent);
}

/// Discards every event; the default when no auditing is wanted.
pub struct NullTrace;

impl TraceSink for NullTrace {
    fn record(&mut self, _event: TraceEvent) {}
}

impl<F: FnMut(TraceEvent)> TraceSink for F {
    fn record(&mut self, event: TraceEvent) {
        self(event)
    }
}
