//! Raw-text coercion
//!
//! Variables are bound as raw text. Before a comparison the text is coerced
//! into a [`Value`]: a number when it is a plain numeric literal, otherwise
//! the text itself. Coercion is a pure function of the text and the mode.

use crate::types::Value;
use serde::{Deserialize, Serialize};

/// Rule set used to turn raw variable text into a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoercionMode {
    /// Optionally signed integer or decimal literals become numbers:
    /// `42`, `-5`, `+7`, `3.14`, `.5`, `5.`
    #[default]
    Standard,

    /// Text containing a `.` is parsed as a float, else text made only of
    /// ASCII digits is a number, else it stays text. Nothing is trimmed, so
    /// padded text like `" 42 "` stays text, and so do signed integers such
    /// as `-5`.
    Legacy,
}

impl CoercionMode {
    /// Coerce raw text into a value
    pub fn coerce(self, raw: &str) -> Value {
        let coerced = match self {
            CoercionMode::Standard => coerce_standard(raw),
            CoercionMode::Legacy => coerce_legacy(raw),
        };
        coerced.unwrap_or_else(|| Value::String(raw.to_string()))
    }
}

fn coerce_standard(raw: &str) -> Option<Value> {
    if !is_decimal_literal(raw) {
        return None;
    }
    raw.parse::<f64>().ok().map(Value::Number)
}

fn coerce_legacy(raw: &str) -> Option<Value> {
    if raw.contains('.') {
        return raw.parse::<f64>().ok().map(Value::Number);
    }
    if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse::<f64>().ok().map(Value::Number);
    }
    None
}

/// Optional sign, then ASCII digits with at most one decimal point and at
/// least one digit.
fn is_decimal_literal(raw: &str) -> bool {
    let unsigned = raw
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(raw);

    let mut seen_digit = false;
    let mut seen_point = false;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}
