//! Signal sink ports.
//!
//! A sink is an external consumer of consent decisions (tag manager,
//! analytics SDK). New consumers are added by registering another sink
//! with the dispatcher, never by editing dispatch logic.

use consentr_domain::{ConsentDecision, ConsentError};

/// One external consent-signal consumer.
///
/// Sinks are invoked synchronously, in registration order, all with the
/// same decision value, and must be order-independent in observable
/// effect. Each sink owns its own "is the target API available" check:
/// if the API is missing it returns `SinkUnavailable` (which the
/// dispatcher logs and skips) rather than panicking.
#[cfg_attr(test, mockall::automock)]
pub trait ConsentSink: Send + Sync {
    /// Stable sink name used in diagnostics.
    fn name(&self) -> &'static str;

    /// Translate the decision into the sink's external API call.
    fn apply(&self, decision: &ConsentDecision) -> Result<(), ConsentError>;
}

/// Delivery seam between a sink adapter and its external API.
///
/// Sink adapters build JSON events; the paired transport delivers them
/// (pushing onto `window.dataLayer`, calling `clarity(...)`, or just
/// logging on platforms without the API). The event shape is
/// sink-specific: an array value models a call-arguments push, an
/// object value models a plain event push.
#[cfg_attr(test, mockall::automock)]
pub trait SignalTransport: Send + Sync {
    fn push(&self, event: serde_json::Value) -> Result<(), ConsentError>;
}
