//! Page-side consent client.
//!
//! Hexagonal layout:
//! - `ports::outbound` - trait definitions the page wiring implements
//!   (storage, view commands, signal transports) plus the persisted key
//!   contract.
//! - `application` - the consent store service and the controller that
//!   runs each user action as one synchronous transaction.
//! - `infrastructure` - the signal dispatcher, the Google Consent Mode
//!   and Clarity sink adapters, and platform storage adapters with a
//!   wasm/desktop split.
//!
//! Everything is single-threaded and synchronous: each operation is a
//! handler for one discrete UI event and runs to completion before the
//! next can start, so the state machine needs no locking.

pub mod application;
pub mod infrastructure;
pub mod ports;

pub use application::{ConsentController, ConsentStore, ViewEvent};
pub use infrastructure::SignalDispatcher;

// Re-export domain types so wiring layers need only this crate.
pub use consentr_domain::{ConsentCategory, ConsentDecision, ConsentError, ConsentState};
