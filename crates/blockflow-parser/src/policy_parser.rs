//! Policy parser
//!
//! Parses policy documents into `Policy` values and writes them back out.
//!
//! ```yaml
//! name: age_gate
//! blocks:
//!   - type: start
//!     id: start
//!     next_block: c1
//!   - type: conditional
//!     id: c1
//!     label: Adult?
//!     variable: age
//!     operator: ">="
//!     value: 18
//!     true_branch: approve
//!     false_branch: decline
//!   - type: end
//!     id: approve
//!     decision_value: 1
//!   - type: end
//!     id: decline
//!     decision_value: 0
//! variables:
//!   age: 21
//! ```

use crate::error::{ParseError, Result};
use crate::yaml_parser::YamlParser;
use blockflow_core::{DecisionBlock, Operator, Policy, PolicyId, Value, Variables};
use serde_yaml::Value as YamlValue;

/// Policy document parser
pub struct PolicyParser;

impl PolicyParser {
    /// Parse a policy from a YAML document
    pub fn parse_yaml(yaml_str: &str) -> Result<Policy> {
        let yaml = YamlParser::parse(yaml_str)?;
        Self::parse_from_value(&yaml)
    }

    /// Parse a policy from a JSON document
    pub fn parse_json(json_str: &str) -> Result<Policy> {
        let value = YamlParser::parse_json(json_str)?;
        Self::parse_from_value(&value)
    }

    /// Serialize a policy as a YAML document
    pub fn to_yaml(policy: &Policy) -> Result<String> {
        Ok(serde_yaml::to_string(policy)?)
    }

    /// Serialize a policy as a pretty-printed JSON document
    ///
    /// JSON has no spelling for infinities or NaN, so a policy holding one
    /// is rejected rather than written as `null`. YAML output keeps them.
    pub fn to_json(policy: &Policy) -> Result<String> {
        Self::check_finite(policy)?;
        Ok(serde_json::to_string_pretty(policy)?)
    }

    /// Parse a policy from an already-loaded document tree
    pub fn parse_from_value(doc: &YamlValue) -> Result<Policy> {
        if !doc.is_mapping() {
            return Err(YamlParser::type_mismatch("policy", "mapping", doc));
        }

        let name = YamlParser::get_string(doc, "name")?;

        let blocks = YamlParser::get_array(doc, "blocks")?
            .iter()
            .enumerate()
            .map(|(index, block)| {
                let path = format!("blocks[{}]", index);
                Self::parse_block(block).map_err(|e| scoped(&path, e))
            })
            .collect::<Result<Vec<_>>>()?;

        let variables = Self::parse_variables(doc)?;

        log::debug!(
            "Parsed policy '{}' with {} blocks and {} variables",
            name,
            blocks.len(),
            variables.len()
        );

        match YamlParser::get_optional_string(doc, "id")? {
            Some(raw) => {
                let id: PolicyId = raw.parse().map_err(|e| ParseError::InvalidValue {
                    field: "id".to_string(),
                    message: format!("{}", e),
                })?;
                Ok(Policy::with_id(id, name, blocks, variables))
            }
            None => Ok(Policy::new(name, blocks, variables)),
        }
    }

    /// Parse a single block, dispatching on its `type` tag
    fn parse_block(yaml: &YamlValue) -> Result<DecisionBlock> {
        if !yaml.is_mapping() {
            return Err(YamlParser::type_mismatch("block", "mapping", yaml));
        }

        let kind = YamlParser::get_string(yaml, "type")?;
        let id = YamlParser::get_string(yaml, "id")?;

        let block = match kind.as_str() {
            "start" => DecisionBlock::start(id, YamlParser::get_string(yaml, "next_block")?),
            "conditional" => DecisionBlock::conditional(
                id,
                YamlParser::get_string(yaml, "variable")?,
                Self::parse_operator(yaml)?,
                Self::parse_threshold(yaml)?,
                YamlParser::get_string(yaml, "true_branch")?,
                YamlParser::get_string(yaml, "false_branch")?,
            ),
            "end" => DecisionBlock::end(id, YamlParser::get_f64(yaml, "decision_value")?),
            other => {
                return Err(ParseError::UnknownBlockType {
                    field: "type".to_string(),
                    kind: other.to_string(),
                })
            }
        };

        Ok(match YamlParser::get_optional_string(yaml, "label")? {
            Some(label) => block.with_label(label),
            None => block,
        })
    }

    /// Operators are written either as symbols or as names
    fn parse_operator(yaml: &YamlValue) -> Result<Operator> {
        let raw = YamlParser::get_string(yaml, "operator")?;
        raw.parse()
            .map_err(|_| ParseError::InvalidOperator(raw.clone()))
    }

    /// A threshold is a number or, for text equality, a string
    fn parse_threshold(yaml: &YamlValue) -> Result<Value> {
        let value = yaml.get("value").ok_or_else(|| ParseError::MissingField {
            field: "value".to_string(),
        })?;

        match value {
            YamlValue::Number(n) => n
                .as_f64()
                .map(Value::Number)
                .ok_or_else(|| ParseError::InvalidValue {
                    field: "value".to_string(),
                    message: format!("{} is not representable as a number", n),
                }),
            YamlValue::String(s) => Ok(Value::String(s.clone())),
            YamlValue::Null => Err(ParseError::MissingField {
                field: "value".to_string(),
            }),
            other => Err(YamlParser::type_mismatch("value", "number or string", other)),
        }
    }

    /// Variables are raw text; scalar YAML values are stringified
    fn parse_variables(doc: &YamlValue) -> Result<Variables> {
        let mut variables = Variables::new();
        let Some(mapping) = YamlParser::get_optional_object(doc, "variables")? else {
            return Ok(variables);
        };

        for (key, value) in mapping {
            let name = YamlParser::scalar_to_string(key).ok_or_else(|| ParseError::InvalidValue {
                field: "variables".to_string(),
                message: format!("variable names must be scalars, got {}", YamlParser::type_name(key)),
            })?;
            let raw = YamlParser::scalar_to_string(value).ok_or_else(|| {
                YamlParser::type_mismatch(&format!("variables.{}", name), "scalar", value)
            })?;
            variables.insert(name, raw);
        }

        Ok(variables)
    }

    fn check_finite(policy: &Policy) -> Result<()> {
        for (index, block) in policy.blocks().iter().enumerate() {
            let (field, number) = match block {
                DecisionBlock::Conditional(cond) => match cond.value {
                    Value::Number(n) => ("value", n),
                    Value::String(_) => continue,
                },
                DecisionBlock::End(end) => ("decision_value", end.decision_value),
                DecisionBlock::Start(_) => continue,
            };
            if !number.is_finite() {
                return Err(ParseError::InvalidValue {
                    field: format!("blocks[{}].{}", index, field),
                    message: format!("{} has no JSON representation", number),
                });
            }
        }
        Ok(())
    }
}

/// Prefix the field named in an error with the location it was found at
fn scoped(path: &str, err: ParseError) -> ParseError {
    let qualify = |field: String| format!("{}.{}", path, field);
    match err {
        ParseError::MissingField { field } => ParseError::MissingField {
            field: qualify(field),
        },
        ParseError::InvalidValue { field, message } => ParseError::InvalidValue {
            field: qualify(field),
            message,
        },
        ParseError::UnknownBlockType { field, kind } => ParseError::UnknownBlockType {
            field: qualify(field),
            kind,
        },
        ParseError::TypeMismatch {
            field,
            expected,
            actual,
        } => ParseError::TypeMismatch {
            field: qualify(field),
            expected,
            actual,
        },
        other => other,
    }
}
