use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::key::NeuronKey;
use crate::model::HIDDEN_NEURONS;

/// Synapse weights per neuron, in declaration order, bias weight excluded.
pub type WeightTable = BTreeMap<NeuronKey, Vec<f64>>;

/// Pre-activation weighted sum S per neuron.
pub type WeightedSumTable = BTreeMap<NeuronKey, f64>;

/// Bias (threshold) weight per neuron.
pub type BiasTable = BTreeMap<NeuronKey, f64>;

/// Input-signal vector per neuron, paired element-wise with its weights
/// during a correction pass.
pub type SignalTable = BTreeMap<NeuronKey, Vec<f64>>;

/// Error record per neuron.
pub type ErrorTable = BTreeMap<NeuronKey, ErrorRecord>;

/// The triple computed for each neuron by the error engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Pre-activation weighted sum S.
    pub weighted_sum: f64,
    /// F'(S) of the bipolar sigmoid.
    pub derivative: f64,
    /// Backpropagated error term γ.
    pub gamma: f64,
}

/// Every topology key mapped to the trainer's default threshold weight 1.0.
pub fn default_biases() -> BiasTable {
    let mut biases = BiasTable::new();
    for index in 1..=HIDDEN_NEURONS as u8 {
        biases.insert(NeuronKey::hidden(index), 1.0);
    }
    biases.insert(NeuronKey::OUTPUT, 1.0);
    biases
}
