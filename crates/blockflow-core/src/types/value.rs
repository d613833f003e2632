//! Runtime value types for Blockflow policies
//!
//! A `Value` is what a bound variable or a conditional threshold turns into
//! once it is ready to be compared: either a number or a piece of text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime value type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Number value (f64 for simplicity, handles both int and float)
    Number(f64),
    /// String value
    String(String),
}

impl Value {
    /// Returns the numeric magnitude, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::String(_) => None,
        }
    }

    /// Returns the text, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::String(s) => Some(s),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Name of the value's type, as used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
