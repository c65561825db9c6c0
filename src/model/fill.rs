use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::key::NeuronKey;
use crate::model::tables::{BiasTable, WeightTable, WeightedSumTable};

/// How table lookups treat a neuron that is missing from parsed data.
///
/// `Lenient` reproduces the log producer's forgiving conventions: a
/// partially-populated log still yields a complete (if degenerate) result.
/// `Strict` turns every silent substitution into an error, which is how
/// tests prove that a fixture is actually complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillPolicy {
    Lenient,
    Strict,
}

impl Default for FillPolicy {
    fn default() -> Self {
        FillPolicy::Lenient
    }
}

impl FillPolicy {
    /// Weighted sum for `key`; `Lenient` substitutes 0.0.
    pub fn weighted_sum(&self, sums: &WeightedSumTable, key: NeuronKey) -> Result<f64> {
        match sums.get(&key) {
            Some(&s) => Ok(s),
            None => match self {
                FillPolicy::Lenient => Ok(0.0),
                FillPolicy::Strict => Err(Error::MissingEntry {
                    key,
                    table: "weighted sum",
                }),
            },
        }
    }

    /// Weight vector for `key`; `Lenient` substitutes a zero-filled vector
    /// of the topology-mandated length. `Strict` additionally rejects a
    /// present vector whose length violates the topology.
    pub fn weight_vector(&self, weights: &WeightTable, key: NeuronKey) -> Result<Vec<f64>> {
        match weights.get(&key) {
            Some(w) => {
                if *self == FillPolicy::Strict && w.len() != key.fan_in() {
                    return Err(Error::Shape {
                        key,
                        expected: key.fan_in(),
                        actual: w.len(),
                    });
                }
                Ok(w.clone())
            }
            None => match self {
                FillPolicy::Lenient => Ok(vec![0.0; key.fan_in()]),
                FillPolicy::Strict => Err(Error::MissingEntry {
                    key,
                    table: "weight",
                }),
            },
        }
    }

    /// Bias for `key`; `Lenient` substitutes the default threshold weight 1.0.
    pub fn bias(&self, biases: &BiasTable, key: NeuronKey) -> Result<f64> {
        match biases.get(&key) {
            Some(&b) => Ok(b),
            None => match self {
                FillPolicy::Lenient => Ok(1.0),
                FillPolicy::Strict => Err(Error::MissingEntry { key, table: "bias" }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_substitutes_defaults_silently() {
        let sums = WeightedSumTable::new();
        let weights = WeightTable::new();
        let biases = BiasTable::new();
        let key = NeuronKey::hidden(4);

        assert_eq!(FillPolicy::Lenient.weighted_sum(&sums, key).unwrap(), 0.0);
        assert_eq!(
            FillPolicy::Lenient.weight_vector(&weights, key).unwrap(),
            vec![0.0; 3]
        );
        assert_eq!(
            FillPolicy::Lenient
                .weight_vector(&weights, NeuronKey::OUTPUT)
                .unwrap()
                .len(),
            10
        );
        assert_eq!(FillPolicy::Lenient.bias(&biases, key).unwrap(), 1.0);
    }

    #[test]
    fn strict_raises_on_missing_entries() {
        let sums = WeightedSumTable::new();
        let key = NeuronKey::OUTPUT;
        let err = FillPolicy::Strict.weighted_sum(&sums, key).unwrap_err();
        assert_eq!(
            err,
            Error::MissingEntry {
                key,
                table: "weighted sum"
            }
        );
    }

    #[test]
    fn strict_rejects_wrong_length_vectors() {
        let mut weights = WeightTable::new();
        weights.insert(NeuronKey::hidden(1), vec![0.1, 0.2]);
        let err = FillPolicy::Strict
            .weight_vector(&weights, NeuronKey::hidden(1))
            .unwrap_err();
        assert_eq!(
            err,
            Error::Shape {
                key: NeuronKey::hidden(1),
                expected: 3,
                actual: 2
            }
        );
        // Lenient keeps the short vector as parsed.
        let kept = FillPolicy::Lenient
            .weight_vector(&weights, NeuronKey::hidden(1))
            .unwrap();
        assert_eq!(kept, vec![0.1, 0.2]);
    }
}
