//! Platform abstraction ports.
//!
//! These traits abstract the page environment so that:
//! 1. Application code remains platform-agnostic
//! 2. Platform-specific code is isolated in infrastructure
//! 3. Code becomes easily testable with mock implementations

/// Persistent, page-scoped key/value storage (localStorage/file-based).
///
/// Reads and writes are synchronous. Signatures are infallible on
/// purpose: when the underlying store is unavailable (disabled storage,
/// quota exceeded), adapters log the failure and degrade - a failed
/// `save` is silently unsuccessful and a failed `load` reads as absent.
/// Nothing here may panic or propagate; the worst outcome is that the
/// user's choice does not survive a reload.
pub trait StorageProvider: Clone + 'static {
    /// Save a string value with the given key
    fn save(&self, key: &str, value: &str);

    /// Load a string value by key, returns None if not found
    fn load(&self, key: &str) -> Option<String>;

    /// Remove a value by key
    fn remove(&self, key: &str);
}

/// Storage key constants
///
/// These are kept in the ports layer as they define the persisted
/// contract: external consumers read these exact keys with the literal
/// values `"true"`/`"false"`. They are derived from the category enum so
/// the two can never drift apart.
pub mod storage_keys {
    use consentr_domain::ConsentCategory;

    pub const FUNCTIONAL_CONSENT: &str = ConsentCategory::Functional.storage_key();
    pub const MARKETING_CONSENT: &str = ConsentCategory::Marketing.storage_key();
    pub const ANALYTICS_CONSENT: &str = ConsentCategory::Analytics.storage_key();
}
