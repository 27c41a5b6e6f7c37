// ============================================================================
// Parser Module
// Line-level tokenizer feeding fractions and operators
// ============================================================================

mod errors;
mod line_parser;

pub use errors::{LineError, ParseError, ParseResult};
pub use line_parser::LineParser;
