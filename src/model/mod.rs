pub mod fill;
pub mod key;
pub mod tables;

/// Input signals feeding every hidden neuron (the network input dimension).
pub const NETWORK_INPUTS: usize = 3;
/// Hidden neurons, each feeding the single output neuron.
pub const HIDDEN_NEURONS: usize = 10;

pub use fill::FillPolicy;
pub use key::NeuronKey;
pub use tables::{
    default_biases, BiasTable, ErrorRecord, ErrorTable, SignalTable, WeightTable,
    WeightedSumTable,
};
