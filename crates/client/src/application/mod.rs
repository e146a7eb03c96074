//! Application services: the store service and the consent controller.

pub mod controller;
pub mod events;
pub mod store;

pub use controller::ConsentController;
pub use events::ViewEvent;
pub use store::ConsentStore;
