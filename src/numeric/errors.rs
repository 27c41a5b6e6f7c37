// ============================================================================
// Numeric Errors
// Error types for fraction parsing and checked arithmetic
// ============================================================================

use std::fmt;

/// Lexical slot of a fraction literal (`W_N/D`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericComponent {
    /// The `W` in `W` or `W_N/D`
    Whole,
    /// The `N` in `N/D` or `W_N/D`
    Numerator,
    /// The `D` in `N/D` or `W_N/D`
    Denominator,
}

impl fmt::Display for NumericComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericComponent::Whole => write!(f, "whole number"),
            NumericComponent::Numerator => write!(f, "numerator"),
            NumericComponent::Denominator => write!(f, "denominator"),
        }
    }
}

/// Errors that can occur while parsing a fraction literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FractionError {
    /// Input string was empty
    EmptyString,
    /// Component is not of the form `-?\d+`
    Invalid(NumericComponent),
    /// Component is numeric but does not fit in an i64
    OutOfBounds(NumericComponent),
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractionError::EmptyString => write!(f, "empty operand: expected a number"),
            FractionError::Invalid(component) => write!(f, "invalid {}", component),
            FractionError::OutOfBounds(component) => {
                write!(f, "{} is out of bounds", component)
            },
        }
    }
}

impl std::error::Error for FractionError {}

/// Errors that can occur while selecting or evaluating an operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OperationError {
    /// Operator token was empty
    EmptyString,
    /// Operator token is not one of `+ - * /`
    InvalidOperator(String),
    /// An intermediate or final value left the i64 range
    OperationOverflowed,
    /// Divisor has a zero numerator
    DivisionByZero,
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationError::EmptyString => write!(f, "empty operator: expected one of + - * /"),
            OperationError::InvalidOperator(token) => {
                write!(f, "invalid operator {:?}: expected one of + - * /", token)
            },
            OperationError::OperationOverflowed => {
                write!(f, "arithmetic overflow: result exceeded representable range")
            },
            OperationError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for OperationError {}

/// Result type alias for fraction parsing
pub type FractionResult<T> = Result<T, FractionError>;

/// Result type alias for operations
pub type OperationResult<T> = Result<T, OperationError>;
