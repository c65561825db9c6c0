use serde::{Deserialize, Serialize};

use crate::backprop::activation::activation;
use crate::backprop::correction::update_all;
use crate::backprop::errors::compute_errors;
use crate::error::Result;
use crate::model::fill::FillPolicy;
use crate::model::key::NeuronKey;
use crate::model::tables::{
    default_biases, BiasTable, ErrorTable, SignalTable, WeightTable, WeightedSumTable,
};
use crate::model::HIDDEN_NEURONS;
use crate::parse::{parse_input_signals, parse_weighted_sums, parse_weights};
use crate::trace::TraceSink;

/// Parameters of one pipeline run.
///
/// The two targets are deliberately separate: the upstream tool fed one
/// operator-entered target to the error table and a different, hard-coded
/// one to the correction pass. That divergence is kept visible here;
/// callers must choose both explicitly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RunConfig {
    /// Steepness coefficient α of the bipolar sigmoid.
    pub alpha: f64,
    /// Learning rate η of the correction step.
    pub learning_rate: f64,
    /// Target output used when building the error table.
    pub target_for_errors_table: f64,
    /// Target output behind the errors that drive the weight correction.
    pub target_for_correction_table: f64,
    /// Lookup behavior for neurons missing from parsed tables.
    pub fill: FillPolicy,
}

/// Everything one run produces. The parsed tables ride along with the
/// corrected ones so the downstream report generator can diff old against
/// new; nothing is overwritten in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunArtifacts {
    pub training_cycles: Option<u32>,
    pub weights: WeightTable,
    pub weighted_sums: WeightedSumTable,
    pub input_signals: Vec<f64>,
    pub biases: BiasTable,
    pub errors: ErrorTable,
    pub new_weights: WeightTable,
    pub new_biases: BiasTable,
}

/// Runs the full flow over decoded log text: parse the three tables, build
/// the error table, then apply one correction pass driven by its own error
/// computation (see [`RunConfig`] for why there are two targets).
pub fn run(text: &str, config: &RunConfig, sink: &mut dyn TraceSink) -> Result<RunArtifacts> {
    let (training_cycles, weights) = parse_weights(text)?;
    let weighted_sums = parse_weighted_sums(text)?;
    let input_signals = parse_input_signals(text)?;

    let biases = default_biases();

    let errors = compute_errors(
        &weighted_sums,
        &weights,
        config.alpha,
        config.target_for_errors_table,
        config.fill,
        sink,
    )?;
    let correction_errors = compute_errors(
        &weighted_sums,
        &weights,
        config.alpha,
        config.target_for_correction_table,
        config.fill,
        sink,
    )?;

    let signals = per_neuron_signals(&input_signals, &weighted_sums, config.alpha);
    let (new_weights, new_biases) = update_all(
        &weights,
        &biases,
        &correction_errors,
        &signals,
        config.learning_rate,
        config.fill,
        sink,
    )?;

    Ok(RunArtifacts {
        training_cycles,
        weights,
        weighted_sums,
        input_signals,
        biases,
        errors,
        new_weights,
        new_biases,
    })
}

/// Input-signal vector of every neuron for a correction pass: hidden
/// neurons share the network inputs, while the output neuron sees the
/// hidden activations derived from the weighted-sum table.
pub fn per_neuron_signals(
    network_inputs: &[f64],
    sums: &WeightedSumTable,
    alpha: f64,
) -> SignalTable {
    let mut signals = SignalTable::new();
    for index in 1..=HIDDEN_NEURONS as u8 {
        signals.insert(NeuronKey::hidden(index), network_inputs.to_vec());
    }
    let hidden_outputs = (1..=HIDDEN_NEURONS as u8)
        .map(|index| {
            let s = sums.get(&NeuronKey::hidden(index)).copied().unwrap_or(0.0);
            activation(s, alpha)
        })
        .collect();
    signals.insert(NeuronKey::OUTPUT, hidden_outputs);
    signals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_table_covers_the_topology() {
        let mut sums = WeightedSumTable::new();
        sums.insert(NeuronKey::hidden(1), 0.5);
        let signals = per_neuron_signals(&[0.1, 0.2, 0.3], &sums, 1.0);

        assert_eq!(signals.len(), 11);
        assert_eq!(signals[&NeuronKey::hidden(4)], vec![0.1, 0.2, 0.3]);

        let output = &signals[&NeuronKey::OUTPUT];
        assert_eq!(output.len(), 10);
        assert!((output[0] - activation(0.5, 1.0)).abs() < 1e-12);
        // Neurons absent from the sum table contribute activation(0) = 0.
        assert_eq!(output[1], 0.0);
    }
}
