//! Infrastructure: signal dispatch, sink adapters, platform adapters.

pub mod dispatch;
pub mod platform;
pub mod sinks;

pub use dispatch::SignalDispatcher;
