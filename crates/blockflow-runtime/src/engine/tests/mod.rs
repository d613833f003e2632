//! Test modules for the policy evaluator


#[cfg(test)]
mod comparison_test;
