// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculations
// ============================================================================

use crate::numeric::Fraction;
use crate::operation::InfixOperation;

/// Events emitted by the calculator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalculationEvent {
    /// Line tokenized into an operation
    LineParsed { operation: InfixOperation },

    /// Operation evaluated; `result` is normalized
    Evaluated {
        operation: InfixOperation,
        result: Fraction,
    },

    /// Line rejected with reason
    Rejected { line: String, reason: String },
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, auditing, history, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculation event
    fn on_event(&self, event: CalculationEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CalculationEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        match &event {
            CalculationEvent::Rejected { line, reason } => {
                tracing::debug!(line = %line, reason = %reason, "calculation rejected");
            },
            _ => tracing::debug!("calculator event: {:?}", event),
        }
    }
}
