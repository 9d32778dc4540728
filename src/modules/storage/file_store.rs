use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde_json::Value;

use crate::core::error::{AppError, Result};
use crate::modules::storage::KvStore;

/// File-backed key-value store, the server-side stand-in for browser
/// local storage.
///
/// The whole store is one JSON object on disk. A mutex serializes the
/// read-then-write pair a resolution pass performs, so a snapshot is
/// never half-written.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    fn read_entries(&self) -> BTreeMap<String, Value> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return BTreeMap::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                // A corrupt store file reads as empty; it gets overwritten
                // by the next write.
                tracing::debug!(
                    "Ignoring unparseable store file {}: {}",
                    self.path.display(),
                    e
                );
                BTreeMap::new()
            }
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::Storage(format!(
                        "Failed to create store directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw).map_err(|e| {
            AppError::Storage(format!(
                "Failed to write store file {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<Value> {
        let _guard = self.lock.lock().unwrap();
        self.read_entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let _guard = self.lock.lock().unwrap();
        let mut entries = self.read_entries();
        entries.insert(key.to_string(), value);
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let _guard = self.lock.lock().unwrap();
        let mut entries = self.read_entries();
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_store() -> FileStore {
        let path = std::env::temp_dir().join(format!("filter-store-{}.json", uuid::Uuid::new_v4()));
        FileStore::new(path)
    }

    #[test]
    fn test_file_store_roundtrip() {
        let store = temp_store();
        assert!(store.get("region_filters").is_none());

        store
            .set("region_filters", json!({"provinceId": "11"}))
            .unwrap();
        assert_eq!(
            store.get("region_filters"),
            Some(json!({"provinceId": "11"}))
        );

        store.remove("region_filters").unwrap();
        assert!(store.get("region_filters").is_none());

        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn test_corrupt_store_file_reads_as_empty() {
        let store = temp_store();
        fs::write(&store.path, "not json at all {{{").unwrap();

        assert!(store.get("region_filters").is_none());

        // The next write replaces the corrupt file wholesale.
        store.set("region_filters", json!({"x": 1})).unwrap();
        assert_eq!(store.get("region_filters"), Some(json!({"x": 1})));

        let _ = fs::remove_file(&store.path);
    }

    #[test]
    fn test_remove_missing_key_is_a_noop() {
        let store = temp_store();
        store.remove("never-written").unwrap();
        assert!(!store.path.exists());
    }
}
