// ============================================================================
// Calculator Configuration
// How results are normalized and rendered
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::numeric::Fraction;

/// Configuration for a [`Calculator`](crate::engine::Calculator)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalculatorConfig {
    /// Reduce results to lowest terms before rendering
    pub simplify_result: bool,

    /// Render as mixed numbers (`1_2/3`) rather than improper fractions (`5/3`)
    pub mixed_numbers: bool,
}

impl CalculatorConfig {
    /// Create a new configuration
    pub const fn new(simplify_result: bool, mixed_numbers: bool) -> Self {
        Self {
            simplify_result,
            mixed_numbers,
        }
    }

    /// Builder method: Set result simplification
    pub fn with_simplify_result(mut self, simplify: bool) -> Self {
        self.simplify_result = simplify;
        self
    }

    /// Builder method: Set mixed-number rendering
    pub fn with_mixed_numbers(mut self, mixed: bool) -> Self {
        self.mixed_numbers = mixed;
        self
    }

    /// Apply normalization to an evaluated result
    pub fn normalize(&self, result: Fraction) -> Fraction {
        if self.simplify_result {
            result.simplify()
        } else {
            result
        }
    }

    /// Render a normalized result
    pub fn render(&self, result: Fraction) -> String {
        if self.mixed_numbers {
            result.to_string()
        } else {
            result.to_improper_string()
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new(true, true)
    }
}

#[cfg(feature = "serde")]
impl CalculatorConfig {
    /// Load configuration from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl CalculatorConfig {
    /// Mixed numbers in lowest terms (`1_1/2`)
    pub fn mixed() -> Self {
        Self::default()
    }

    /// Improper fractions in lowest terms (`3/2`)
    pub fn improper() -> Self {
        Self::default().with_mixed_numbers(false)
    }

    /// Raw evaluator output, no reduction (`6/4`)
    pub fn raw() -> Self {
        Self::new(false, false)
    }
}
