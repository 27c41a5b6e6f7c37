// ============================================================================
// Calculator
// Parse, evaluate, normalize and render one input line
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::interfaces::{CalculationEvent, EventHandler};
use crate::numeric::{Fraction, OperationError};
use crate::parser::{LineParser, ParseError};
use std::fmt;
use std::sync::Arc;

/// Any error from a full calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The line could not be parsed
    Parse(ParseError),
    /// The operation could not be evaluated
    Operation(OperationError),
}

impl fmt::Display for CalculatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalculatorError::Parse(e) => e.fmt(f),
            CalculatorError::Operation(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for CalculatorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalculatorError::Parse(e) => Some(e),
            CalculatorError::Operation(e) => Some(e),
        }
    }
}

impl From<ParseError> for CalculatorError {
    fn from(e: ParseError) -> Self {
        CalculatorError::Parse(e)
    }
}

impl From<OperationError> for CalculatorError {
    fn from(e: OperationError) -> Self {
        CalculatorError::Operation(e)
    }
}

/// Line calculator: `LineParser` -> `InfixOperation::evaluate` -> normalize.
pub struct Calculator {
    /// Normalization and rendering settings
    config: CalculatorConfig,

    /// Tokenizer for input lines
    parser: LineParser,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a new calculator
    pub fn new(config: CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            parser: LineParser::new(),
            event_handler,
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Evaluate a line and return the normalized result
    pub fn evaluate_line(&self, line: &str) -> Result<Fraction, CalculatorError> {
        let result = self.calculate(line);

        if let Err(e) = &result {
            tracing::trace!(line, error = %e, "line rejected");
            self.event_handler.on_event(CalculationEvent::Rejected {
                line: line.to_string(),
                reason: e.to_string(),
            });
        }

        result
    }

    /// Evaluate a line and render the result per configuration
    pub fn render_line(&self, line: &str) -> Result<String, CalculatorError> {
        self.evaluate_line(line)
            .map(|result| self.config.render(result))
    }

    fn calculate(&self, line: &str) -> Result<Fraction, CalculatorError> {
        let operation = self.parser.parse(line)?;
        self.event_handler
            .on_event(CalculationEvent::LineParsed { operation });

        let result = self.config.normalize(operation.evaluate()?);
        tracing::trace!(%operation, %result, "line evaluated");
        self.event_handler
            .on_event(CalculationEvent::Evaluated { operation, result });

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NoOpEventHandler;
    use crate::operation::InfixOperation;
    use crate::parser::LineError;
    use std::sync::Mutex;

    struct RecordingHandler(Mutex<Vec<CalculationEvent>>);

    impl EventHandler for RecordingHandler {
        fn on_event(&self, event: CalculationEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    fn calculator() -> Calculator {
        Calculator::new(CalculatorConfig::default(), Arc::new(NoOpEventHandler))
    }

    #[test]
    fn test_render_line() {
        let calc = calculator();
        assert_eq!(calc.render_line("1 + 1"), Ok("2".to_string()));
        assert_eq!(calc.render_line("1/2 + 1/3"), Ok("5/6".to_string()));
        assert_eq!(calc.render_line("1_2/3 - 2_1/2"), Ok("-5/6".to_string()));
        assert_eq!(calc.render_line("3/4 * 2"), Ok("1_1/2".to_string()));
        assert_eq!(calc.render_line("1/2 / -1/4"), Ok("-2".to_string()));
        assert_eq!(calc.render_line("1/2 - 1/2"), Ok("0".to_string()));
    }

    #[test]
    fn test_render_line_with_config() {
        let improper = Calculator::new(CalculatorConfig::improper(), Arc::new(NoOpEventHandler));
        assert_eq!(improper.render_line("3/4 * 2"), Ok("3/2".to_string()));

        let raw = Calculator::new(CalculatorConfig::raw(), Arc::new(NoOpEventHandler));
        assert_eq!(raw.render_line("3/4 * 2"), Ok("6/4".to_string()));
        assert_eq!(raw.evaluate_line("3/4 * 2"), Ok(Fraction::new(6, 4)));
    }

    #[test]
    fn test_errors() {
        let calc = calculator();
        assert_eq!(
            calc.evaluate_line(""),
            Err(CalculatorError::Parse(ParseError::Line(LineError::EmptyLine)))
        );
        assert_eq!(
            calc.evaluate_line("1/1 / 0/1"),
            Err(CalculatorError::Operation(OperationError::DivisionByZero))
        );
        assert_eq!(
            calc.evaluate_line("9223372036854775807/1 + 1/1"),
            Err(CalculatorError::Operation(OperationError::OperationOverflowed))
        );
        assert_eq!(
            calc.render_line("1 ? 1").unwrap_err().to_string(),
            "invalid operator \"?\": expected one of + - * /"
        );
    }

    #[test]
    fn test_events() {
        let handler = Arc::new(RecordingHandler(Mutex::new(Vec::new())));
        let calc = Calculator::new(CalculatorConfig::default(), handler.clone());

        calc.evaluate_line("2/4 + 0").unwrap();
        calc.evaluate_line("1 / 0").unwrap_err();
        calc.evaluate_line("x").unwrap_err();

        let op = InfixOperation::Addition(Fraction::new(2, 4), Fraction::new(0, 1));
        let zero_div = InfixOperation::Division(Fraction::ONE, Fraction::new(0, 1));
        let events = handler.0.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                CalculationEvent::LineParsed { operation: op },
                CalculationEvent::Evaluated {
                    operation: op,
                    result: Fraction::new(1, 2),
                },
                CalculationEvent::LineParsed {
                    operation: zero_div
                },
                CalculationEvent::Rejected {
                    line: "1 / 0".to_string(),
                    reason: "division by zero".to_string(),
                },
                CalculationEvent::Rejected {
                    line: "x".to_string(),
                    reason: LineError::InvalidInput.to_string(),
                },
            ]
        );
    }
}
