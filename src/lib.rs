pub mod backprop;
pub mod error;
pub mod model;
pub mod parse;
pub mod pipeline;
pub mod trace;

// Convenience re-exports
pub use backprop::activation::{activation, derivative};
pub use backprop::correction::{new_bias, new_weight, update_all};
pub use backprop::errors::{compute_errors, hidden_error, output_error};
pub use error::{Error, Result};
pub use model::fill::FillPolicy;
pub use model::key::NeuronKey;
pub use model::tables::{
    default_biases, BiasTable, ErrorRecord, ErrorTable, SignalTable, WeightTable,
    WeightedSumTable,
};
pub use parse::{parse_input_signals, parse_weighted_sums, parse_weights};
pub use pipeline::{per_neuron_signals, run, RunArtifacts, RunConfig};
pub use trace::{NullTrace, TraceEvent, TraceSink};
