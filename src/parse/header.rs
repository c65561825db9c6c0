use crate::model::key::NeuronKey;
use crate::parse::markers;

/// Parses a `Нейрон[layer][index]` header at the start of `fragment`.
/// Returns the key and the byte length of the header on success; `None`
/// when the bracketed digits are malformed.
pub(crate) fn key_at(fragment: &str) -> Option<(NeuronKey, usize)> {
    let rest = fragment.strip_prefix(markers::NEURON_HEADER)?;
    let close = rest.find(']')?;
    let layer: u8 = rest[..close].parse().ok()?;
    let rest = rest[close + 1..].strip_prefix('[')?;
    let close_index = rest.find(']')?;
    let index: u8 = rest[..close_index].parse().ok()?;
    let consumed = markers::NEURON_HEADER.len() + close + close_index + 3;
    Some((NeuronKey::new(layer, index), consumed))
}

/// First well-formed neuron header anywhere in `line`.
pub(crate) fn key_in_line(line: &str) -> Option<NeuronKey> {
    let at = line.find(markers::NEURON_HEADER)?;
    key_at(&line[at..]).map(|(key, _)| key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_layer_and_index() {
        let (key, consumed) = key_at("Нейрон[1][10] прочее").unwrap();
        assert_eq!(key, NeuronKey::hidden(10));
        assert_eq!(&"Нейрон[1][10] прочее"[consumed..], " прочее");
    }

    #[test]
    fn rejects_malformed_brackets() {
        assert!(key_at("Нейрон[x][1]").is_none());
        assert!(key_at("Нейрон[1]").is_none());
        assert!(key_in_line("лог без заголовка").is_none());
    }

    #[test]
    fn finds_a_header_mid_line() {
        assert_eq!(
            key_in_line("=== Нейрон[2][1] ==="),
            Some(NeuronKey::OUTPUT)
        );
    }
}
