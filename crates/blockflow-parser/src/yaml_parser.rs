//! YAML Parser
//!
//! Field accessors over `serde_yaml::Value` shared by the document parsers.
//! JSON input is read into the same value type so both formats go through
//! one code path.

use crate::error::{ParseError, Result};
use serde_yaml::Value as YamlValue;

/// YAML parser utilities
pub struct YamlParser;

impl YamlParser {
    /// Parse YAML string into a YAML value
    pub fn parse(yaml_str: &str) -> Result<YamlValue> {
        Ok(serde_yaml::from_str(yaml_str)?)
    }

    /// Parse JSON string into a YAML value
    pub fn parse_json(json_str: &str) -> Result<YamlValue> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Get a required string field
    pub fn get_string(obj: &YamlValue, field: &str) -> Result<String> {
        let value = Self::get_required(obj, field)?;
        value
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| Self::type_mismatch(field, "string", value))
    }

    /// Get an optional string field
    pub fn get_optional_string(obj: &YamlValue, field: &str) -> Result<Option<String>> {
        match obj.get(field) {
            None | Some(YamlValue::Null) => Ok(None),
            Some(value) => value
                .as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| Self::type_mismatch(field, "string", value)),
        }
    }

    /// Get a required numeric field; integers are widened to f64
    pub fn get_f64(obj: &YamlValue, field: &str) -> Result<f64> {
        let value = Self::get_required(obj, field)?;
        value
            .as_f64()
            .ok_or_else(|| Self::type_mismatch(field, "number", value))
    }

    /// Get a required sequence field
    pub fn get_array<'a>(obj: &'a YamlValue, field: &str) -> Result<&'a Vec<YamlValue>> {
        let value = Self::get_required(obj, field)?;
        value
            .as_sequence()
            .ok_or_else(|| Self::type_mismatch(field, "list", value))
    }

    /// Get an optional mapping field
    pub fn get_optional_object<'a>(
        obj: &'a YamlValue,
        field: &str,
    ) -> Result<Option<&'a serde_yaml::Mapping>> {
        match obj.get(field) {
            None | Some(YamlValue::Null) => Ok(None),
            Some(value) => value
                .as_mapping()
                .map(Some)
                .ok_or_else(|| Self::type_mismatch(field, "mapping", value)),
        }
    }

    /// Render a scalar as raw text. Strings pass through unchanged; numbers
    /// and booleans use their YAML spelling. Null and collections have no
    /// text form.
    pub fn scalar_to_string(value: &YamlValue) -> Option<String> {
        match value {
            YamlValue::String(s) => Some(s.clone()),
            YamlValue::Number(n) => Some(n.to_string()),
            YamlValue::Bool(b) => Some(b.to_string()),
            YamlValue::Tagged(tagged) => Self::scalar_to_string(&tagged.value),
            _ => None,
        }
    }

    /// Human-readable name of a YAML node's type
    pub fn type_name(value: &YamlValue) -> &'static str {
        match value {
            YamlValue::Null => "null",
            YamlValue::Bool(_) => "boolean",
            YamlValue::Number(_) => "number",
            YamlValue::String(_) => "string",
            YamlValue::Sequence(_) => "list",
            YamlValue::Mapping(_) => "mapping",
            YamlValue::Tagged(_) => "tagged value",
        }
    }

    fn get_required<'a>(obj: &'a YamlValue, field: &str) -> Result<&'a YamlValue> {
        match obj.get(field) {
            None | Some(YamlValue::Null) => Err(ParseError::MissingField {
                field: field.to_string(),
            }),
            Some(value) => Ok(value),
        }
    }

    pub(crate) fn type_mismatch(field: &str, expected: &str, actual: &YamlValue) -> ParseError {
        ParseError::TypeMismatch {
            field: field.to_string(),
            expected: expected.to_string(),
            actual: Self::type_name(actual).to_string(),
        }
    }
}
