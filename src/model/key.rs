use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::{HIDDEN_NEURONS, NETWORK_INPUTS};

/// Identifies one neuron of the fixed topology: layer 1 holds the hidden
/// neurons (indices 1..=10), layer 2 the single output neuron (index 1).
///
/// Ordering is layer first, then index, so tables keyed by `NeuronKey`
/// iterate the hidden layer before the output neuron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NeuronKey {
    pub layer: u8,
    pub index: u8,
}

impl NeuronKey {
    /// The single output neuron.
    pub const OUTPUT: NeuronKey = NeuronKey { layer: 2, index: 1 };

    pub fn new(layer: u8, index: u8) -> NeuronKey {
        NeuronKey { layer, index }
    }

    /// Hidden-layer neuron, 1-based index.
    pub fn hidden(index: u8) -> NeuronKey {
        NeuronKey { layer: 1, index }
    }

    /// Number of inbound synapses the topology mandates for this neuron:
    /// 3 for a hidden neuron, 10 for the output neuron.
    pub fn fan_in(&self) -> usize {
        if self.layer == 1 {
            NETWORK_INPUTS
        } else {
            HIDDEN_NEURONS
        }
    }
}

impl fmt::Display for NeuronKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}]", self.layer, self.index)
    }
}

// Serialized as the string "layer.index" so that tables keyed by `NeuronKey`
// stay valid JSON maps.
impl Serialize for NeuronKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{}.{}", self.layer, self.index))
    }
}

impl<'de> Deserialize<'de> for NeuronKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let (layer, index) = raw
            .split_once('.')
            .ok_or_else(|| D::Error::custom(format!("malformed neuron key {raw:?}")))?;
        Ok(NeuronKey {
            layer: layer.parse().map_err(D::Error::custom)?,
            index: index.parse().map_err(D::Error::custom)?,
        })
    }
}
