// ============================================================================
// Engine Module
// Contains the calculator pipeline and its construction
// ============================================================================

mod calculator;

pub mod factory;

pub use calculator::{Calculator, CalculatorError};
pub use factory::CalculatorBuilder;
