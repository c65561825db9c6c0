use crate::error::{Error, Result};
use crate::model::tables::WeightTable;
use crate::parse::{header, markers, numeric};

/// Parses the training-cycle count and the initial synapse weights.
///
/// The weights live in the initialization section, which runs from
/// [`markers::INIT_SECTION_START`] up to (excluding)
/// [`markers::INIT_SECTION_END`]; both anchors are required. Each neuron
/// block starts at a `Нейрон[L][N]` header and runs until the next header
/// or the section end. The trailing assignment of every block is the bias
/// weight and is dropped; the remaining values keep declaration order.
pub fn parse_weights(text: &str) -> Result<(Option<u32>, WeightTable)> {
    let cycles = training_cycles(text);
    let section = init_section(text)?;

    let mut headers = Vec::new();
    let mut search = 0;
    while let Some(found) = section[search..].find(markers::NEURON_HEADER) {
        let at = search + found;
        match header::key_at(&section[at..]) {
            Some((key, consumed)) => {
                headers.push((at, key, at + consumed));
                search = at + consumed;
            }
            None => search = at + markers::NEURON_HEADER.len(),
        }
    }

    let mut weights = WeightTable::new();
    for (i, &(_, key, content_start)) in headers.iter().enumerate() {
        let content_end = headers.get(i + 1).map_or(section.len(), |h| h.0);
        let mut values = block_weights(&section[content_start..content_end])?;
        // The trailing assignment of a block is the bias weight.
        values.pop();
        weights.insert(key, values);
    }

    Ok((cycles, weights))
}

/// Training-cycle count, if the marker is present and followed by digits.
fn training_cycles(text: &str) -> Option<u32> {
    let at = text.find(markers::TRAINING_CYCLES)?;
    let rest = &text[at + markers::TRAINING_CYCLES.len()..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    rest[..end].parse().ok()
}

fn init_section(text: &str) -> Result<&str> {
    let start = text
        .find(markers::INIT_SECTION_START)
        .ok_or(Error::MissingMarker {
            marker: markers::INIT_SECTION_START,
        })?;
    let rest = &text[start..];
    let end = rest
        .find(markers::INIT_SECTION_END)
        .ok_or(Error::MissingMarker {
            marker: markers::INIT_SECTION_END,
        })?;
    Ok(&rest[..end])
}

/// Every `w[...] = value` assignment inside one neuron block, in order.
fn block_weights(block: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    let mut search = 0;
    while let Some(found) = block[search..].find(markers::WEIGHT_ASSIGN) {
        let at = search + found;
        let rest = &block[at + markers::WEIGHT_ASSIGN.len()..];
        if let Some(value) = assignment_value(rest)? {
            values.push(value);
        }
        search = at + markers::WEIGHT_ASSIGN.len();
    }
    Ok(values)
}

/// Value of one assignment, given the text just past its `w[` opener.
/// `None` when the text does not complete the `w[...] = value` shape.
fn assignment_value(rest: &str) -> Result<Option<f64>> {
    let close = match rest.find(']') {
        Some(close) => close,
        None => return Ok(None),
    };
    let subscript = &rest[..close];
    if subscript.is_empty()
        || !subscript
            .chars()
            .all(|c| c.is_ascii_digit() || c == ',' || c.is_whitespace())
    {
        return Ok(None);
    }
    let after_eq = match rest[close + 1..].trim_start().strip_prefix('=') {
        Some(after_eq) => after_eq.trim_start(),
        None => return Ok(None),
    };
    let token = numeric::numeric_token(after_eq);
    if token.is_empty() {
        return Ok(None);
    }
    numeric::parse_decimal(token, markers::WEIGHT_ASSIGN).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::key::NeuronKey;

    const LOG: &str = "Протокол обучения\n\
        Циклов обучения: 250\n\
        Инициализация весов синапсов\n\
        Нейрон[1][1]\n\
        w[1,1] = 0,11\n\
        w[1,2] = -0,25\n\
        w[1,3] = 0,42\n\
        w[1,4] = 0,05\n\
        Нейрон[1][2]\n\
        w[2,1] = 1,0\n\
        w[2,2] = 2,0\n\
        w[2,3] = 3,0\n\
        w[2,4] = 4,0\n\
        Выбираем допустимый образ\n\
        Нейрон[1][3]\n\
        w[3,1] = 9,9\n";

    #[test]
    fn extracts_weights_and_strips_the_trailing_bias() {
        let (cycles, weights) = parse_weights(LOG).unwrap();
        assert_eq!(cycles, Some(250));
        assert_eq!(weights.len(), 2);
        assert_eq!(weights[&NeuronKey::hidden(1)], vec![0.11, -0.25, 0.42]);
        assert_eq!(weights[&NeuronKey::hidden(2)], vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn text_past_the_section_end_is_excluded() {
        let (_, weights) = parse_weights(LOG).unwrap();
        assert!(!weights.contains_key(&NeuronKey::hidden(3)));
    }

    #[test]
    fn missing_cycle_marker_is_not_an_error() {
        let log = "Инициализация весов синапсов\nВыбираем допустимый образ\n";
        let (cycles, weights) = parse_weights(log).unwrap();
        assert_eq!(cycles, None);
        assert!(weights.is_empty());
    }

    #[test]
    fn missing_section_start_is_fatal() {
        let err = parse_weights("Циклов обучения: 5\n").unwrap_err();
        assert_eq!(
            err,
            Error::MissingMarker {
                marker: markers::INIT_SECTION_START
            }
        );
    }

    #[test]
    fn missing_section_end_is_fatal() {
        let err = parse_weights("Инициализация весов синапсов\nНейрон[1][1]\n").unwrap_err();
        assert_eq!(
            err,
            Error::MissingMarker {
                marker: markers::INIT_SECTION_END
            }
        );
    }

    #[test]
    fn garbled_weight_value_is_a_numeric_error() {
        let log = "Инициализация весов синапсов\n\
            Нейрон[1][1]\n\
            w[1,1] = 0,1,2\n\
            Выбираем допустимый образ\n";
        let err = parse_weights(log).unwrap_err();
        assert_eq!(
            err,
            Error::NumericFormat {
                token: "0,1,2".to_string(),
                context: markers::WEIGHT_ASSIGN,
            }
        );
    }

    #[test]
    fn non_assignment_brackets_are_skipped() {
        let log = "Инициализация весов синапсов\n\
            Нейрон[1][1]\n\
            w[шум] = 1,0\n\
            w[1,1] = 0,5\n\
            w[1,2] = 0,6\n\
            Выбираем допустимый образ\n";
        let (_, weights) = parse_weights(log).unwrap();
        // Only the two well-formed assignments match; the last one is the bias.
        assert_eq!(weights[&NeuronKey::hidden(1)], vec![0.5]);
    }
}
