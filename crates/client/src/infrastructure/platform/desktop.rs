//! Desktop platform implementations
//!
//! Native builds have no localStorage and no tag manager. The consent
//! record lives in a small JSON file under the platform config
//! directory; the signal transport records a diagnostic instead of
//! calling an external API. This keeps headless tools and integration
//! tests on the same code path as the browser build.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use consentr_domain::{ConsentCategory, ConsentError};
use directories::ProjectDirs;

use crate::ports::outbound::{SignalTransport, StorageProvider};

/// File-backed consent record.
///
/// Holds exactly the three consent keys; a write under any other key is
/// dropped with a warning, so the file never grows beyond the consent
/// contract. Every accepted write goes straight through to disk, which
/// means a second provider opened at the same path sees the decision -
/// the native equivalent of a returning visitor.
///
/// The record lives under the platform config location (on Linux,
/// `~/.config/consentr/client/consent.json`) unless a path is given
/// explicitly.
#[derive(Clone)]
pub struct FileStorageProvider {
    path: PathBuf,
    record: Arc<Mutex<HashMap<String, String>>>,
}

impl Default for FileStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStorageProvider {
    /// Open the consent record at the platform config location.
    pub fn new() -> Self {
        let path = ProjectDirs::from("io", "consentr", "client")
            .map(|dirs| dirs.config_dir().join("consent.json"))
            // No home directory: fall back to the working directory.
            .unwrap_or_else(|| PathBuf::from("consent.json"));
        Self::with_path(path)
    }

    /// Open the consent record at an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        let record = match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "consent record unreadable, treating visitor as undecided: {e}");
                HashMap::new()
            }),
            // No file yet: first visit.
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            record: Arc::new(Mutex::new(record)),
        }
    }

    fn is_consent_key(key: &str) -> bool {
        ConsentCategory::ALL
            .iter()
            .any(|category| category.storage_key() == key)
    }

    fn write_through(&self) -> Result<(), ConsentError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConsentError::store_unavailable("save", e.to_string()))?;
        }
        let snapshot = self
            .record
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        let data = serde_json::to_string(&snapshot)
            .map_err(|e| ConsentError::store_unavailable("save", e.to_string()))?;
        fs::write(&self.path, data)
            .map_err(|e| ConsentError::store_unavailable("save", e.to_string()))
    }
}

impl StorageProvider for FileStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if !Self::is_consent_key(key) {
            tracing::warn!(key, "not a consent key, write dropped");
            return;
        }
        self.record
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(key.to_string(), value.to_string());
        if let Err(e) = self.write_through() {
            // The in-memory record stays authoritative for this
            // session; only durability across restarts is lost.
            tracing::warn!("consent record not persisted: {e}");
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        self.record
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(key)
            .cloned()
    }

    fn remove(&self, key: &str) {
        let removed = self
            .record
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(key);
        if removed.is_some() {
            if let Err(e) = self.write_through() {
                tracing::warn!("consent record not persisted: {e}");
            }
        }
    }
}

/// Transport for platforms without an external signal API: logs the
/// event and reports success so sink payload mapping stays observable
/// in native runs.
#[derive(Clone, Default)]
pub struct LogTransport;

impl SignalTransport for LogTransport {
    fn push(&self, event: serde_json::Value) -> Result<(), ConsentError> {
        tracing::info!(%event, "consent signal (no external API on this platform)");
        Ok(())
    }
}

/// Initialize tracing for native builds. Filter via `RUST_LOG`.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ConsentStore;

    #[test]
    fn test_consent_record_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("consent.json");

        let store = ConsentStore::new(FileStorageProvider::with_path(path.clone()));
        store.set(ConsentCategory::Functional, true);
        store.set(ConsentCategory::Marketing, false);
        store.set(ConsentCategory::Analytics, true);

        let reopened = ConsentStore::new(FileStorageProvider::with_path(path));
        let state = reopened.hydrate_state();
        assert!(state.is_complete());
        assert_eq!(state.get(ConsentCategory::Functional), Some(true));
        assert_eq!(state.get(ConsentCategory::Marketing), Some(false));
        assert_eq!(state.get(ConsentCategory::Analytics), Some(true));
    }

    #[test]
    fn test_removed_key_stays_absent_after_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("consent.json");

        let storage = FileStorageProvider::with_path(path.clone());
        storage.save(ConsentCategory::Marketing.storage_key(), "true");
        storage.remove(ConsentCategory::Marketing.storage_key());

        let reopened = FileStorageProvider::with_path(path);
        assert_eq!(reopened.load(ConsentCategory::Marketing.storage_key()), None);
    }

    #[test]
    fn test_non_consent_keys_are_dropped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorageProvider::with_path(dir.path().join("consent.json"));

        storage.save("session_token", "abc123");

        assert_eq!(storage.load("session_token"), None);
    }

    #[test]
    fn test_corrupt_record_reads_as_undecided() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("consent.json");
        fs::write(&path, "not json").expect("seed file");

        let store = ConsentStore::new(FileStorageProvider::with_path(path));
        assert!(!store.hydrate_state().is_complete());
    }

    #[test]
    fn test_log_transport_accepts_any_event() {
        let transport = LogTransport;
        assert!(transport
            .push(serde_json::json!({"event": "update_consent_status_v2"}))
            .is_ok());
    }
}
