use crate::error::Result;
use crate::model::NETWORK_INPUTS;
use crate::parse::{markers, numeric};

/// Collects the network input signals in order of appearance.
///
/// Every `Аксон =` line is converted (a garbled value is an error even past
/// the third match); the collected list is then truncated to the 3 inputs
/// the topology carries. Fewer than 3 matches is not an error here — the
/// engines fail later if they index past the end.
pub fn parse_input_signals(text: &str) -> Result<Vec<f64>> {
    let mut signals = Vec::new();
    for line in text.lines() {
        if let Some(at) = line.find(markers::INPUT_SIGNAL) {
            let rest = &line[at + markers::INPUT_SIGNAL.len()..];
            signals.push(numeric::parse_decimal(rest, markers::INPUT_SIGNAL)?);
        }
    }
    signals.truncate(NETWORK_INPUTS);
    Ok(signals)
}
