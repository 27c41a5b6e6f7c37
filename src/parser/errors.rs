// ============================================================================
// Parser Errors
// Line-structure errors and the combined error returned by LineParser
// ============================================================================

use crate::numeric::{FractionError, OperationError};
use std::fmt;

/// Errors in the overall shape of an input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineError {
    /// Nothing but whitespace was entered
    EmptyLine,
    /// The line is not exactly `operand operator operand`
    InvalidInput,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::EmptyLine => write!(f, "please enter an expression"),
            LineError::InvalidInput => write!(
                f,
                "valid expressions are in the form \"operand operator operand\""
            ),
        }
    }
}

impl std::error::Error for LineError {}

/// Any error from [`LineParser::parse`](super::LineParser::parse).
///
/// Operand and operator errors are carried unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    Line(LineError),
    Fraction(FractionError),
    Operation(OperationError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Line(e) => e.fmt(f),
            ParseError::Fraction(e) => e.fmt(f),
            ParseError::Operation(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Line(e) => Some(e),
            ParseError::Fraction(e) => Some(e),
            ParseError::Operation(e) => Some(e),
        }
    }
}

impl From<LineError> for ParseError {
    fn from(e: LineError) -> Self {
        ParseError::Line(e)
    }
}

impl From<FractionError> for ParseError {
    fn from(e: FractionError) -> Self {
        ParseError::Fraction(e)
    }
}

impl From<OperationError> for ParseError {
    fn from(e: OperationError) -> Self {
        ParseError::Operation(e)
    }
}

/// Result type alias for line parsing
pub type ParseResult<T> = Result<T, ParseError>;
