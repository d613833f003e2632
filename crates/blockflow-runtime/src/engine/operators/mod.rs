//! Operator execution modules
//!
//! This module contains the implementation of operator evaluation for the policy evaluator.

mod comparison;

pub(crate) use comparison::execute_compare;
