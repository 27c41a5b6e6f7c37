// ============================================================================
// Fraction Calculator Library
// Exact mixed-number arithmetic with overflow-checked i64 fractions
// ============================================================================

//! # Fraction Calculator
//!
//! Evaluates single-operator lines such as `1_2/3 * -3/4` exactly.
//!
//! ## Features
//!
//! - **Exact rationals** over `i64`, no floating point
//! - **Mixed-number literals**: `3`, `1/2`, `-1_2/3`
//! - **Overflow detection** on every intermediate operation
//! - **Typed errors** that keep the failing component or operator
//!
//! ## Example
//!
//! ```rust
//! use fraction_calculator::prelude::*;
//!
//! let operation = LineParser::new().parse("1/2 + 1/3").unwrap();
//! let result = operation.evaluate().unwrap().simplify();
//! assert_eq!(result, Fraction::new(5, 6));
//! assert_eq!(result.to_string(), "5/6");
//!
//! let err = LineParser::new().parse("1/1 / 0/1").unwrap().evaluate();
//! assert_eq!(err, Err(OperationError::DivisionByZero));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod operation;
pub mod parser;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::CalculatorConfig;
    pub use crate::engine::{Calculator, CalculatorBuilder, CalculatorError};
    pub use crate::interfaces::{
        CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{Fraction, FractionError, NumericComponent, OperationError};
    pub use crate::operation::{InfixOperation, Operator};
    pub use crate::parser::{LineError, LineParser, ParseError};
}
