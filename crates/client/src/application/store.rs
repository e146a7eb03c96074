//! Consent store service.
//!
//! Wraps a `StorageProvider` with the consent-specific key/value
//! contract: one key per category, values serialized as the literal
//! strings `"true"`/`"false"`.

use consentr_domain::{ConsentCategory, ConsentState};

use crate::ports::outbound::StorageProvider;

/// Typed access to the three persisted consent flags.
pub struct ConsentStore<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> ConsentStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read one category.
    ///
    /// `None` means the key is absent - the user never decided this
    /// category. A present `"false"` is an explicit denial and is still
    /// decided; any present value other than `"true"` reads as denied.
    pub fn get(&self, category: ConsentCategory) -> Option<bool> {
        self.storage
            .load(category.storage_key())
            .map(|value| value == "true")
    }

    /// Persist one category as `"true"`/`"false"`.
    ///
    /// A failing write is absorbed by the storage adapter; the caller's
    /// transaction continues on its in-memory decision either way.
    pub fn set(&self, category: ConsentCategory, granted: bool) {
        let value = if granted { "true" } else { "false" };
        self.storage.save(category.storage_key(), value);
        tracing::debug!(key = category.storage_key(), value, "consent value persisted");
    }

    /// Remove one category (external reset path; the controller itself
    /// never deletes consent records).
    pub fn clear(&self, category: ConsentCategory) {
        self.storage.remove(category.storage_key());
    }

    /// Read all three categories once and build the in-memory state.
    pub fn hydrate_state(&self) -> ConsentState {
        ConsentState::hydrate(
            self.get(ConsentCategory::Functional),
            self.get(ConsentCategory::Marketing),
            self.get(ConsentCategory::Analytics),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::platform::mock::MemoryStorage;
    use crate::ports::outbound::storage_keys;

    #[test]
    fn test_persisted_format_is_bit_exact() {
        let storage = MemoryStorage::default();
        let store = ConsentStore::new(storage.clone());

        store.set(ConsentCategory::Functional, true);
        store.set(ConsentCategory::Marketing, false);
        store.set(ConsentCategory::Analytics, true);

        assert_eq!(
            storage.load("functional_consent"),
            Some("true".to_string())
        );
        assert_eq!(
            storage.load("marketing_consent"),
            Some("false".to_string())
        );
        assert_eq!(
            storage.load("analytics_consent"),
            Some("true".to_string())
        );
    }

    #[test]
    fn test_storage_keys_match_category_keys() {
        assert_eq!(storage_keys::FUNCTIONAL_CONSENT, "functional_consent");
        assert_eq!(storage_keys::MARKETING_CONSENT, "marketing_consent");
        assert_eq!(storage_keys::ANALYTICS_CONSENT, "analytics_consent");
    }

    #[test]
    fn test_absent_key_reads_as_none_not_false() {
        let store = ConsentStore::new(MemoryStorage::default());
        assert_eq!(store.get(ConsentCategory::Marketing), None);
    }

    #[test]
    fn test_explicit_false_is_still_decided() {
        let store = ConsentStore::new(MemoryStorage::default());
        store.set(ConsentCategory::Marketing, false);
        assert_eq!(store.get(ConsentCategory::Marketing), Some(false));
    }

    #[test]
    fn test_hydrate_state_reflects_partial_store() {
        let store = ConsentStore::new(MemoryStorage::default());
        store.set(ConsentCategory::Functional, true);

        let state = store.hydrate_state();
        assert!(!state.is_complete());
        assert_eq!(state.get(ConsentCategory::Functional), Some(true));
        assert_eq!(state.get(ConsentCategory::Marketing), None);
    }

    #[test]
    fn test_clear_returns_category_to_undecided() {
        let store = ConsentStore::new(MemoryStorage::default());
        store.set(ConsentCategory::Analytics, true);
        store.clear(ConsentCategory::Analytics);
        assert_eq!(store.get(ConsentCategory::Analytics), None);
    }
}
