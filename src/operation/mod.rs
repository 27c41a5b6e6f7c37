// ============================================================================
// Operation Module
// Binary operators over fractions and their overflow-checked evaluation
// ============================================================================

mod infix;

pub use infix::{InfixOperation, Operator};
