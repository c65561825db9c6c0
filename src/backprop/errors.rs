use crate::backprop::activation::{activation, derivative};
use crate::error::Result;
use crate::model::fill::FillPolicy;
use crate::model::key::NeuronKey;
use crate::model::tables::{ErrorRecord, ErrorTable, WeightTable, WeightedSumTable};
use crate::model::HIDDEN_NEURONS;
use crate::trace::{TraceEvent, TraceSink};

/// Error term of the output neuron: `γ = 2·(y - t)·F'(S)`.
pub fn output_error(actual: f64, target: f64, derivative: f64) -> f64 {
    2.0 * (actual - target) * derivative
}

/// Error term of a hidden neuron: `γᵢ = γ_eff·F'(Sᵢ)`, where `γ_eff` is the
/// weighted contribution of the downstream error.
pub fn hidden_error(effective_gamma: f64, derivative: f64) -> f64 {
    effective_gamma * derivative
}

/// Computes the error record of every neuron.
///
/// The output neuron goes first: every hidden neuron consumes the output
/// error together with its own synapse weight into the output neuron, so
/// this ordering is a correctness contract, not a traversal detail. Hidden
/// neurons follow in index order 1..=10. With a single output neuron the
/// downstream sum `Σ γ_k·w_ik` collapses to `γ_out·w_i`, with `w_i = 0`
/// when the output weight vector is shorter than the hidden index.
pub fn compute_errors(
    sums: &WeightedSumTable,
    weights: &WeightTable,
    alpha: f64,
    target: f64,
    policy: FillPolicy,
    sink: &mut dyn TraceSink,
) -> Result<ErrorTable> {
    let mut errors = ErrorTable::new();

    let output_s = policy.weighted_sum(sums, NeuronKey::OUTPUT)?;
    let output_derivative = derivative(output_s, alpha);
    let actual = activation(output_s, alpha);
    let output_gamma = output_error(actual, target, output_derivative);
    sink.record(TraceEvent::OutputErrorComputed {
        key: NeuronKey::OUTPUT,
        weighted_sum: output_s,
        actual,
        target,
        derivative: output_derivative,
        gamma: output_gamma,
    });
    errors.insert(
        NeuronKey::OUTPUT,
        ErrorRecord {
            weighted_sum: output_s,
            derivative: output_derivative,
            gamma: output_gamma,
        },
    );

    let output_weights = policy.weight_vector(weights, NeuronKey::OUTPUT)?;
    for index in 1..=HIDDEN_NEURONS as u8 {
        let key = NeuronKey::hidden(index);
        let s = policy.weighted_sum(sums, key)?;
        let d = derivative(s, alpha);
        let downstream_weight = output_weights
            .get(index as usize - 1)
            .copied()
            .unwrap_or(0.0);
        let effective_gamma = output_gamma * downstream_weight;
        let gamma = hidden_error(effective_gamma, d);
        sink.record(TraceEvent::HiddenErrorComputed {
            key,
            weighted_sum: s,
            downstream_weight,
            effective_gamma,
            derivative: d,
            gamma,
        });
        errors.insert(
            key,
            ErrorRecord {
                weighted_sum: s,
                derivative: d,
                gamma,
            },
        );
    }

    Ok(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::trace::NullTrace;

    fn full_tables() -> (WeightedSumTable, WeightTable) {
        let mut sums = WeightedSumTable::new();
        let mut weights = WeightTable::new();
        for index in 1..=HIDDEN_NEURONS as u8 {
            sums.insert(NeuronKey::hidden(index), 0.05 * index as f64);
            weights.insert(
                NeuronKey::hidden(index),
                vec![0.1, -0.2, 0.3 * index as f64],
            );
        }
        sums.insert(NeuronKey::OUTPUT, 0.5);
        weights.insert(
            NeuronKey::OUTPUT,
            (1..=HIDDEN_NEURONS).map(|i| 0.1 * i as f64).collect(),
        );
        (sums, weights)
    }

    #[test]
    fn output_neuron_matches_the_worked_example() {
        let mut sums = WeightedSumTable::new();
        sums.insert(NeuronKey::OUTPUT, 0.5);
        let weights = WeightTable::new();

        let errors =
            compute_errors(&sums, &weights, 1.0, 0.0, FillPolicy::Lenient, &mut NullTrace)
                .unwrap();
        let output = errors[&NeuronKey::OUTPUT];
        assert_eq!(output.weighted_sum, 0.5);
        assert!((output.derivative - 0.2350).abs() < 5e-4);
        assert!((output.gamma - 0.1151).abs() < 5e-4);
        // Lenient fill still yields a complete table; with no output weights
        // every hidden error collapses to zero.
        assert_eq!(errors.len(), 11);
        assert!(errors
            .iter()
            .filter(|(key, _)| key.layer == 1)
            .all(|(_, record)| record.gamma == 0.0));
    }

    #[test]
    fn hidden_error_matches_the_worked_example() {
        // Hidden neuron with S = 0 at α = 2, downstream weight 0.5, output
        // error carried over from the α = 1 scenario.
        let d = derivative(0.0, 2.0);
        assert_eq!(d, 0.5);
        let effective_gamma: f64 = 0.1151 * 0.5;
        assert!((effective_gamma - 0.05755).abs() < 1e-12);
        assert!((hidden_error(effective_gamma, d) - 0.02878).abs() < 5e-5);
    }

    #[test]
    fn changing_one_output_weight_moves_only_that_hidden_error() {
        let (sums, weights) = full_tables();
        let base =
            compute_errors(&sums, &weights, 1.0, 0.2, FillPolicy::Strict, &mut NullTrace).unwrap();

        let mut nudged = weights.clone();
        nudged.get_mut(&NeuronKey::OUTPUT).unwrap()[3] += 0.5;
        let moved =
            compute_errors(&sums, &nudged, 1.0, 0.2, FillPolicy::Strict, &mut NullTrace).unwrap();

        for index in 1..=HIDDEN_NEURONS as u8 {
            let key = NeuronKey::hidden(index);
            if index == 4 {
                assert_ne!(base[&key].gamma, moved[&key].gamma);
                // Its own S and derivative stay put.
                assert_eq!(base[&key].weighted_sum, moved[&key].weighted_sum);
                assert_eq!(base[&key].derivative, moved[&key].derivative);
            } else {
                assert_eq!(base[&key], moved[&key]);
            }
        }
        assert_eq!(base[&NeuronKey::OUTPUT], moved[&NeuronKey::OUTPUT]);
    }

    #[test]
    fn changing_the_target_moves_every_hidden_error() {
        let (sums, weights) = full_tables();
        let base =
            compute_errors(&sums, &weights, 1.0, 0.0, FillPolicy::Strict, &mut NullTrace).unwrap();
        let moved =
            compute_errors(&sums, &weights, 1.0, 0.4, FillPolicy::Strict, &mut NullTrace).unwrap();

        for (key, record) in &base {
            assert_ne!(record.gamma, moved[key].gamma);
            assert_eq!(record.weighted_sum, moved[key].weighted_sum);
        }
    }

    #[test]
    fn strict_policy_demands_a_complete_sum_table() {
        let (mut sums, weights) = full_tables();
        sums.remove(&NeuronKey::hidden(7));
        let err = compute_errors(&sums, &weights, 1.0, 0.0, FillPolicy::Strict, &mut NullTrace)
            .unwrap_err();
        assert_eq!(
            err,
            Error::MissingEntry {
                key: NeuronKey::hidden(7),
                table: "weighted sum"
            }
        );
        // Lenient substitutes S = 0.0 for the same gap.
        let lenient =
            compute_errors(&sums, &weights, 1.0, 0.0, FillPolicy::Lenient, &mut NullTrace)
                .unwrap();
        assert_eq!(lenient[&NeuronKey::hidden(7)].weighted_sum, 0.0);
    }
}
