// ============================================================================
// Line Parser
// Turns "operand operator operand" into an InfixOperation
// ============================================================================

use super::errors::{LineError, ParseResult};
use crate::numeric::Fraction;
use crate::operation::InfixOperation;

/// Parses a single line expression.
///
/// # Example
/// ```
/// use fraction_calculator::parser::LineParser;
///
/// let op = LineParser::new().parse("1/2 + 1/3").unwrap();
/// assert_eq!(op.evaluate().unwrap().simplify().to_string(), "5/6");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LineParser;

impl LineParser {
    pub const fn new() -> Self {
        Self
    }

    /// Parse input in the form `operand operator operand`.
    ///
    /// Tokens are separated by one or more whitespace characters. Operands
    /// are parsed left to right before the operator, and the first error is
    /// returned with its original kind.
    ///
    /// # Errors
    /// - `Line(EmptyLine)` if the line is empty or only whitespace
    /// - `Line(InvalidInput)` if there are not exactly three tokens
    /// - `Fraction(..)` for a malformed operand
    /// - `Operation(..)` for an unknown operator
    pub fn parse(&self, input: &str) -> ParseResult<InfixOperation> {
        if input.trim().is_empty() {
            return Err(LineError::EmptyLine.into());
        }

        let [left, op, right] = split_tokens(input)?;

        let left: Fraction = left.parse()?;
        let right: Fraction = right.parse()?;

        Ok(InfixOperation::operation_for(op, left, right)?)
    }
}

fn split_tokens(input: &str) -> Result<[&str; 3], LineError> {
    let mut tokens = input.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some(left), Some(op), Some(right), None) => Ok([left, op, right]),
        _ => Err(LineError::InvalidInput),
    }
}
