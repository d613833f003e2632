//! Type system for Blockflow
//!
//! This module contains the runtime value type and the rules that turn
//! raw variable text into values.

pub mod coercion;
pub mod value;

pub use coercion::CoercionMode;
pub use value::Value;
