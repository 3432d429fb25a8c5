//! Local key/value storage kept as JSON in the app data directory
//!
//! Mirrors the browser `localStorage` contract: string keys, string values,
//! every write goes straight to disk.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Stored entries. Values that are not JSON strings are dropped on load so
/// one foreign entry does not discard the rest of the file.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Value>")]
struct Items(BTreeMap<String, String>);

impl From<BTreeMap<String, Value>> for Items {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let items = raw
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                other => {
                    debug!(key = %key, value = %other, "Skipping non-string storage entry");
                    None
                }
            })
            .collect();
        Self(items)
    }
}

pub struct LocalStorage {
    path: PathBuf,
    items: Items,
}

impl LocalStorage {
    /// Open the store at `path`. Missing or unreadable files start empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(items) => {
                    debug!(path = %path.display(), "Local storage loaded");
                    items
                }
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "Failed to parse local storage, starting empty");
                    Items::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No local storage file found, starting empty");
                Items::default()
            }
            Err(e) => {
                warn!(error = %e, path = %path.display(), "Failed to read local storage, starting empty");
                Items::default()
            }
        };
        Self { path, items }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.0.get(key).map(String::as_str)
    }

    pub fn set_item(&mut self, key: &str, value: impl Into<String>) {
        self.items.0.insert(key.to_owned(), value.into());
        self.save();
    }

    fn save(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(error = %e, dir = %parent.display(), "Failed to create storage directory");
                return;
            }
        }
        match serde_json::to_string_pretty(&self.items) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    warn!(error = %e, path = %self.path.display(), "Failed to save local storage");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize local storage"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("store.json"));
        assert_eq!(storage.get_item("anything"), None);
    }

    #[test]
    fn test_set_item_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut storage = LocalStorage::open(&path);
        storage.set_item("greeting", "hello");
        assert_eq!(storage.get_item("greeting"), Some("hello"));

        let reopened = LocalStorage::open(&path);
        assert_eq!(reopened.get_item("greeting"), Some("hello"));
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut storage = LocalStorage::open(&path);
        assert_eq!(storage.get_item("isDarkMode"), None);

        // A later write replaces the corrupt file
        storage.set_item("isDarkMode", "true");
        assert_eq!(LocalStorage::open(&path).get_item("isDarkMode"), Some("true"));
    }

    #[test]
    fn test_non_string_entries_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, r#"{"isDarkMode":"true","count":1,"nested":{"a":"b"}}"#).unwrap();

        let mut storage = LocalStorage::open(&path);
        assert_eq!(storage.get_item("isDarkMode"), Some("true"));
        assert_eq!(storage.get_item("count"), None);

        storage.set_item("greeting", "hello");
        let reopened = LocalStorage::open(&path);
        assert_eq!(reopened.get_item("isDarkMode"), Some("true"));
        assert_eq!(reopened.get_item("greeting"), Some("hello"));
    }

    #[test]
    fn test_saved_file_is_flat_string_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let mut storage = LocalStorage::open(&path);
        storage.set_item("isDarkMode", "false");

        let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({ "isDarkMode": "false" }));
    }
}
