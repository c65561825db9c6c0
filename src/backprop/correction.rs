use crate::error::Result;
use crate::model::fill::FillPolicy;
use crate::model::tables::{BiasTable, ErrorTable, SignalTable, WeightTable};
use crate::trace::{TraceEvent, TraceSink};

/// One delta-rule step for a synapse: `ω(t+1) = ω(t) - η·γ·y`.
pub fn new_weight(old: f64, learning_rate: f64, error: f64, input_signal: f64) -> f64 {
    old - learning_rate * error * input_signal
}

/// One delta-rule step for a threshold weight: `T(t+1) = T(t) - η·γ`.
pub fn new_bias(old: f64, learning_rate: f64, error: f64) -> f64 {
    old - learning_rate * error
}

/// Applies one gradient-descent correction to every neuron present in
/// `errors`, producing fresh tables; the inputs are left untouched so the
/// caller can diff old against new. A neuron with no error record is not
/// corrected and does not appear in the output.
///
/// Each neuron's weights pair element-wise with its own input signals. When
/// the two vectors differ in length the pairing stops at the shorter one
/// and the extra weights drop out of the corrected vector; that truncation
/// is part of the contract with the log producer and is never an error,
/// under either fill policy.
pub fn update_all(
    weights: &WeightTable,
    biases: &BiasTable,
    errors: &ErrorTable,
    signals: &SignalTable,
    learning_rate: f64,
    policy: FillPolicy,
    sink: &mut dyn TraceSink,
) -> Result<(WeightTable, BiasTable)> {
    let mut new_weights = WeightTable::new();
    let mut new_biases = BiasTable::new();

    for (&key, record) in errors {
        let current = policy.weight_vector(weights, key)?;
        let neuron_signals = signals.get(&key).map_or(&[] as &[f64], Vec::as_slice);

        let mut corrected = Vec::with_capacity(current.len().min(neuron_signals.len()));
        for (synapse, (&old, &signal)) in current.iter().zip(neuron_signals).enumerate() {
            let updated = new_weight(old, learning_rate, record.gamma, signal);
            sink.record(TraceEvent::WeightCorrected {
                key,
                synapse,
                old,
                new: updated,
            });
            corrected.push(updated);
        }
        new_weights.insert(key, corrected);

        let old_bias = policy.bias(biases, key)?;
        let updated_bias = new_bias(old_bias, learning_rate, record.gamma);
        sink.record(TraceEvent::BiasCorrected {
            key,
            old: old_bias,
            new: updated_bias,
        });
        new_biases.insert(key, updated_bias);
    }

    Ok((new_weights, new_biases))
}
