//! Sink adapters for the supported external consent APIs.
//!
//! Each adapter is a pure translation from a `ConsentDecision` to the
//! JSON events its external API expects; delivery goes through a
//! `SignalTransport` so the same adapter works in the browser, on
//! desktop builds, and in tests.

pub mod clarity;
pub mod google;

pub use clarity::ClaritySink;
pub use google::GoogleConsentModeSink;

/// The signal vocabulary shared by both consent APIs.
pub(crate) fn signal(granted: bool) -> &'static str {
    if granted {
        "granted"
    } else {
        "denied"
    }
}
