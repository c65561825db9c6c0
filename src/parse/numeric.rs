use crate::error::{Error, Result};

/// Converts one extracted token to `f64`, normalizing the log's comma
/// decimal separator to a dot first. `context` names the marker the token
/// followed and ends up in the error on failure.
pub fn parse_decimal(raw: &str, context: &'static str) -> Result<f64> {
    let normalized = raw.trim().replace(',', ".");
    normalized.parse::<f64>().map_err(|_| Error::NumericFormat {
        token: raw.trim().to_string(),
        context,
    })
}

/// Longest prefix of `text` made of characters that can appear in a numeric
/// token (sign, digits, dot, comma decimal separator).
pub fn numeric_token(text: &str) -> &str {
    let end = text
        .find(|c: char| !(c.is_ascii_digit() || c == '-' || c == '.' || c == ','))
        .unwrap_or(text.len());
    &text[..end]
}
