//! In-memory test doubles for the platform ports.
//!
//! Available outside `cfg(test)` so wiring layers and downstream crates
//! can use them in their own tests and headless builds.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use consentr_domain::{ConsentDecision, ConsentError};

use crate::ports::outbound::{ConsentSink, SignalTransport, StorageProvider};

/// In-memory storage with the same observable behavior as localStorage.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    data: Arc<Mutex<HashMap<String, String>>>,
}

impl StorageProvider for MemoryStorage {
    fn save(&self, key: &str, value: &str) {
        self.data
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
    }

    fn load(&self, key: &str) -> Option<String> {
        self.data
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn remove(&self, key: &str) {
        self.data
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
    }
}

/// Storage that is permanently unavailable: writes vanish, reads are
/// always absent. Models disabled or quota-exceeded localStorage for
/// exercising the degraded-store policy.
#[derive(Clone, Default)]
pub struct FailingStorage;

impl StorageProvider for FailingStorage {
    fn save(&self, key: &str, _value: &str) {
        tracing::warn!(key, "storage unavailable, consent write dropped");
    }

    fn load(&self, _key: &str) -> Option<String> {
        None
    }

    fn remove(&self, _key: &str) {}
}

/// Transport that records every pushed event for assertions.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    events: Arc<Mutex<Vec<serde_json::Value>>>,
}

impl RecordingTransport {
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl SignalTransport for RecordingTransport {
    fn push(&self, event: serde_json::Value) -> Result<(), ConsentError> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
        Ok(())
    }
}

/// Sink that records every decision it receives.
#[derive(Clone, Default)]
pub struct RecordingSink {
    decisions: Arc<Mutex<Vec<ConsentDecision>>>,
}

impl RecordingSink {
    pub fn decisions(&self) -> Vec<ConsentDecision> {
        self.decisions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl ConsentSink for RecordingSink {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn apply(&self, decision: &ConsentDecision) -> Result<(), ConsentError> {
        self.decisions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(*decision);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::default();
        storage.save("functional_consent", "true");

        assert_eq!(
            storage.load("functional_consent"),
            Some("true".to_string())
        );

        storage.remove("functional_consent");
        assert_eq!(storage.load("functional_consent"), None);
    }

    #[test]
    fn test_failing_storage_drops_writes() {
        let storage = FailingStorage;
        storage.save("marketing_consent", "true");
        assert_eq!(storage.load("marketing_consent"), None);
    }
}
