//! Signal dispatcher.
//!
//! Fans one consent decision out to every registered sink. Sinks are
//! registered declaratively by the wiring layer before the controller
//! is constructed; adding a consumer means registering a sink, not
//! editing this loop.

use consentr_domain::ConsentDecision;

use crate::ports::outbound::ConsentSink;

/// Ordered fan-out of consent decisions to registered sinks.
///
/// Dispatch is synchronous and order-preserving but fault-tolerant: an
/// individual sink failure is logged and skipped so one broken sink
/// cannot block the rest. Calling dispatch twice with the same decision
/// signals twice; sinks expect re-assertion and nothing is deduplicated.
pub struct SignalDispatcher {
    sinks: Vec<Box<dyn ConsentSink>>,
}

impl SignalDispatcher {
    /// Create a dispatcher with no sinks.
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Register a sink. Dispatch order is registration order.
    pub fn register(&mut self, sink: impl ConsentSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Invoke every sink with the same decision, in registration order.
    pub fn dispatch(&self, decision: &ConsentDecision) {
        for sink in &self.sinks {
            match sink.apply(decision) {
                Ok(()) => {
                    tracing::debug!(sink = sink.name(), "consent signal delivered");
                }
                Err(e) => {
                    tracing::warn!(sink = sink.name(), "consent signal skipped: {e}");
                }
            }
        }
    }

    /// Get the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for SignalDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
