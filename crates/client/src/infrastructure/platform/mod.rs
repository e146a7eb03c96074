//! Platform-specific implementations
//!
//! This module provides platform-specific implementations of the port
//! traits defined in `ports/outbound`. The correct platform is selected
//! at compile time based on the target architecture: in the browser the
//! storage adapter wraps localStorage and the transports talk to the
//! real signal APIs; on desktop builds storage is a JSON file and the
//! transport just records a diagnostic.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

pub mod mock;

// Re-export the platform-specific types explicitly
#[cfg(target_arch = "wasm32")]
pub use wasm::{init_tracing, ClarityTransport, DataLayerTransport, LocalStorageProvider};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{init_tracing, FileStorageProvider, LogTransport};
