//! Core domain types for the consent manager.
//!
//! This crate is pure: no I/O, no platform code. It defines the three
//! consent categories, the decision value object, the per-page-load
//! consent state machine, and the unified error type. Storage, signal
//! dispatch, and view wiring live in `consentr-client`.

pub mod category;
pub mod decision;
pub mod error;
pub mod state;

pub use category::ConsentCategory;
pub use decision::ConsentDecision;
pub use error::ConsentError;
pub use state::ConsentState;
