pub mod platform;
pub mod sink;
pub mod view;

pub use platform::{storage_keys, StorageProvider};
pub use sink::{ConsentSink, SignalTransport};
pub use view::ViewPort;

#[cfg(test)]
pub use sink::MockSignalTransport;
#[cfg(test)]
pub use view::MockViewPort;
