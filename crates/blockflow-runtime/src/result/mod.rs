//! Evaluation result and trace types

mod evaluation;
pub mod trace;

pub use evaluation::Evaluation;
pub use trace::{BlockTrace, ConditionTrace, EvaluationTrace};
