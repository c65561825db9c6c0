use std::mem;

use crate::error::Result;
use crate::model::key::NeuronKey;
use crate::model::tables::WeightedSumTable;
use crate::parse::{header, markers, numeric};

/// Scanner state for [`parse_weighted_sums`].
enum ScanState {
    /// No neuron block open; sum lines are ignored.
    Scanning,
    /// Inside the block of `key`; `last` holds the most recent sum seen.
    Accumulating { key: NeuronKey, last: Option<f64> },
}

/// Extracts the pre-activation weighted sum of every neuron.
///
/// Line scanner with two states. A `Нейрон[L][N]` header line commits the
/// previous block and opens a new one; every `Взвешенная сумма` line inside
/// a block overwrites the running value, so the last sum before the next
/// header (or end of input) wins. A line that carries the header marker but
/// no well-formed key still closes the current block.
pub fn parse_weighted_sums(text: &str) -> Result<WeightedSumTable> {
    let mut sums = WeightedSumTable::new();
    let mut state = ScanState::Scanning;

    for line in text.lines() {
        if line.contains(markers::NEURON_HEADER) {
            let next = match header::key_in_line(line) {
                Some(key) => ScanState::Accumulating { key, last: None },
                None => ScanState::Scanning,
            };
            commit(&mut sums, mem::replace(&mut state, next));
            continue;
        }
        if let ScanState::Accumulating { ref mut last, .. } = state {
            if let Some(at) = line.find(markers::WEIGHTED_SUM) {
                let rest = line[at + markers::WEIGHTED_SUM.len()..].trim_start();
                let token = numeric::numeric_token(rest);
                if !token.is_empty() {
                    *last = Some(numeric::parse_decimal(token, markers::WEIGHTED_SUM)?);
                }
            }
        }
    }
    commit(&mut sums, state);

    Ok(sums)
}

/// Transition action: a finished block contributes its last seen sum, if any.
fn commit(sums: &mut WeightedSumTable, state: ScanState) {
    if let ScanState::Accumulating {
        key,
        last: Some(value),
    } = state
    {
        sums.insert(key, value);
    }
}
