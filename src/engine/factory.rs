// ============================================================================
// Calculator Factory
// Creates calculators with proper configuration
// ============================================================================

use crate::domain::CalculatorConfig;
use crate::engine::Calculator;
use crate::interfaces::{EventHandler, NoOpEventHandler};
use std::sync::Arc;

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use fraction_calculator::prelude::*;
/// use std::sync::Arc;
///
/// let calc = CalculatorBuilder::new()
///     .improper_fractions()
///     .event_handler(Arc::new(LoggingEventHandler))
///     .build();
///
/// assert_eq!(calc.render_line("1 + 1/2").unwrap(), "3/2");
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
}

impl CalculatorBuilder {
    /// Create a new builder with default configuration and no-op events
    pub fn new() -> Self {
        Self {
            config: CalculatorConfig::default(),
            event_handler: Arc::new(NoOpEventHandler),
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Render results as mixed numbers (default)
    pub fn mixed_numbers(mut self) -> Self {
        self.config.mixed_numbers = true;
        self
    }

    /// Render results as improper fractions
    pub fn improper_fractions(mut self) -> Self {
        self.config.mixed_numbers = false;
        self
    }

    /// Toggle reduction to lowest terms
    pub fn simplify_result(mut self, simplify: bool) -> Self {
        self.config.simplify_result = simplify;
        self
    }

    /// Set the event handler
    pub fn event_handler(mut self, event_handler: Arc<dyn EventHandler>) -> Self {
        self.event_handler = event_handler;
        self
    }

    /// Build the calculator
    pub fn build(self) -> Calculator {
        Calculator::new(self.config, self.event_handler)
    }
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let calc = CalculatorBuilder::new().build();
        assert_eq!(*calc.config(), CalculatorConfig::default());
        assert_eq!(calc.render_line("5/3 + 0").unwrap(), "1_2/3");
    }

    #[test]
    fn test_builder_overrides() {
        let calc = CalculatorBuilder::new()
            .improper_fractions()
            .simplify_result(false)
            .build();
        assert_eq!(*calc.config(), CalculatorConfig::raw());
        assert_eq!(calc.render_line("1/2 * 2/3").unwrap(), "2/6");

        let calc = CalculatorBuilder::default()
            .config(CalculatorConfig::raw())
            .mixed_numbers()
            .build();
        assert_eq!(calc.render_line("3/2 * 2/2").unwrap(), "1_2/4");
    }
}
