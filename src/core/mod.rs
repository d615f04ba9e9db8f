//! Core foundation: math primitives and value types.

pub mod math;
pub mod types;
