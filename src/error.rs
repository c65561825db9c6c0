use thiserror::Error;

use crate::model::key::NeuronKey;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the parser and the numeric engines.
///
/// All of these are fatal to the calling operation: there is no meaningful
/// partial result for a missing structural anchor or a garbled number.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// A required section or header marker is absent from the log text.
    #[error("marker {marker:?} not found in log text")]
    MissingMarker { marker: &'static str },

    /// A matched token failed numeric conversion after the comma→dot
    /// normalization. Carries the raw token and the marker it followed.
    #[error("token {token:?} after marker {context:?} is not a number")]
    NumericFormat {
        token: String,
        context: &'static str,
    },

    /// A parsed weight vector violates the fixed topology (strict mode only).
    #[error("neuron {key} carries {actual} synapse weights, topology mandates {expected}")]
    Shape {
        key: NeuronKey,
        expected: usize,
        actual: usize,
    },

    /// A neuron is absent from a table the computation needs (strict mode only).
    #[error("neuron {key} is missing from the {table} table")]
    MissingEntry {
        key: NeuronKey,
        table: &'static str,
    },
}
