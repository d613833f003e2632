//! Comparison operators for conditional blocks

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operator applied by a conditional block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Equal (==)
    #[serde(rename = "==", alias = "eq", alias = "equal")]
    Eq,
    /// Not equal (!=)
    #[serde(rename = "!=", alias = "ne", alias = "not_equal")]
    Ne,
    /// Less than (<)
    #[serde(rename = "<", alias = "lt", alias = "less_than")]
    Lt,
    /// Less than or equal (<=)
    #[serde(rename = "<=", alias = "le", alias = "less_or_equal")]
    Le,
    /// Greater than (>)
    #[serde(rename = ">", alias = "gt", alias = "greater_than")]
    Gt,
    /// Greater than or equal (>=)
    #[serde(rename = ">=", alias = "ge", alias = "greater_or_equal")]
    Ge,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
    ];

    /// Returns the operator's symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
        }
    }

    /// Returns true for ordering operators, which only accept numbers
    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            Operator::Lt | Operator::Le | Operator::Gt | Operator::Ge
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "==" | "eq" | "equal" => Ok(Operator::Eq),
            "!=" | "ne" | "not_equal" => Ok(Operator::Ne),
            "<" | "lt" | "less_than" => Ok(Operator::Lt),
            "<=" | "le" | "less_or_equal" => Ok(Operator::Le),
            ">" | "gt" | "greater_than" => Ok(Operator::Gt),
            ">=" | "ge" | "greater_or_equal" => Ok(Operator::Ge),
            other => Err(CoreError::InvalidOperator(other.to_string())),
        }
    }
}
