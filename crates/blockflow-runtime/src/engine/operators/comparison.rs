//! Comparison operator execution

use crate::error::{EvaluationError, Result};
use blockflow_core::{Operator, Value};

/// Apply `op` to two coerced values
///
/// Numbers compare with plain IEEE-754 ordering. Text only supports equal /
/// not-equal. Equality across types is always false and never fails; an
/// ordering operator with a text operand is a type mismatch.
pub(crate) fn execute_compare(
    block_id: &str,
    left: &Value,
    op: Operator,
    right: &Value,
) -> Result<bool> {
    match (left, op, right) {
        (Value::Number(l), Operator::Eq, Value::Number(r)) => Ok(l == r),
        (Value::Number(l), Operator::Ne, Value::Number(r)) => Ok(l != r),
        (Value::Number(l), Operator::Gt, Value::Number(r)) => Ok(l > r),
        (Value::Number(l), Operator::Ge, Value::Number(r)) => Ok(l >= r),
        (Value::Number(l), Operator::Lt, Value::Number(r)) => Ok(l < r),
        (Value::Number(l), Operator::Le, Value::Number(r)) => Ok(l <= r),

        (Value::String(l), Operator::Eq, Value::String(r)) => Ok(l == r),
        (Value::String(l), Operator::Ne, Value::String(r)) => Ok(l != r),

        // number vs. text
        (_, Operator::Eq, _) => Ok(false),
        (_, Operator::Ne, _) => Ok(true),

        _ => {
            tracing::debug!(
                "Type mismatch at {}: {:?} {} {:?}",
                block_id,
                left,
                op,
                right
            );
            Err(EvaluationError::TypeMismatch {
                block_id: block_id.to_string(),
                operator: op,
                left: left.clone(),
                right: right.clone(),
            })
        }
    }
}
