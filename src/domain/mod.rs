// ============================================================================
// Domain Models Module
// Contains calculator configuration
// ============================================================================

pub mod config;

pub use config::CalculatorConfig;
