// ============================================================================
// Numeric Module
// Exact fractions over i64 with overflow-checked arithmetic
// ============================================================================
//
// This module provides:
// - Fraction: immutable rational value with W / N/D / W_N/D literals
// - FractionError / OperationError: error types for parsing and arithmetic
// - checked helpers: overflow-reporting add/sub/mul, gcd and lcm
//
// Design principles:
// - No floating-point operations
// - All arithmetic returns Result (no wrapping, no panics)
// - Values are Copy and never mutated

pub mod checked;
mod errors;
mod fraction;

pub use errors::{
    FractionError, FractionResult, NumericComponent, OperationError, OperationResult,
};
pub use fraction::Fraction;
