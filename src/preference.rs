//! Persisted light/dark theme preference

use crate::constants::DARK_MODE_KEY;
use crate::storage::LocalStorage;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DarkModePreference {
    enabled: bool,
}

impl DarkModePreference {
    /// Read the stored flag. Anything but a JSON boolean means light mode.
    pub fn load(storage: &LocalStorage) -> Self {
        let enabled = match storage.get_item(DARK_MODE_KEY) {
            None => false,
            Some(raw) => match serde_json::from_str::<serde_json::Value>(raw) {
                Ok(serde_json::Value::Bool(b)) => b,
                Ok(other) => {
                    debug!(value = %other, "Stored dark mode flag is not a boolean, using light mode");
                    false
                }
                Err(e) => {
                    debug!(error = %e, "Stored dark mode flag is malformed, using light mode");
                    false
                }
            },
        };
        Self { enabled }
    }

    pub fn is_dark(&self) -> bool {
        self.enabled
    }

    pub fn theme(&self) -> egui::Theme {
        if self.enabled {
            egui::Theme::Dark
        } else {
            egui::Theme::Light
        }
    }

    /// Flip the flag and write it back. Returns the new value.
    pub fn toggle(&mut self, storage: &mut LocalStorage) -> bool {
        self.enabled = !self.enabled;
        self.persist(storage);
        self.enabled
    }

    pub fn persist(&self, storage: &mut LocalStorage) {
        // serde_json renders a bool as the bare literal
        storage.set_item(DARK_MODE_KEY, serde_json::Value::Bool(self.enabled).to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> (tempfile::TempDir, LocalStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("store.json"));
        (dir, storage)
    }

    #[test]
    fn test_absent_flag_is_light() {
        let (_dir, storage) = storage();
        let pref = DarkModePreference::load(&storage);
        assert!(!pref.is_dark());
        assert_eq!(pref.theme(), egui::Theme::Light);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let (_dir, mut storage) = storage();
        let mut pref = DarkModePreference::load(&storage);
        let original = pref.is_dark();

        assert!(pref.toggle(&mut storage));
        assert_eq!(pref.theme(), egui::Theme::Dark);
        assert!(!pref.toggle(&mut storage));
        assert_eq!(pref.is_dark(), original);
    }

    #[test]
    fn test_toggle_writes_json_boolean() {
        let (_dir, mut storage) = storage();
        let mut pref = DarkModePreference::default();

        pref.toggle(&mut storage);
        assert_eq!(storage.get_item(DARK_MODE_KEY), Some("true"));
        pref.toggle(&mut storage);
        assert_eq!(storage.get_item(DARK_MODE_KEY), Some("false"));
    }

    #[test]
    fn test_flag_survives_reload() {
        let (dir, mut storage) = storage();
        let mut pref = DarkModePreference::load(&storage);
        pref.toggle(&mut storage);

        let reopened = LocalStorage::open(dir.path().join("store.json"));
        assert!(DarkModePreference::load(&reopened).is_dark());
    }

    #[test]
    fn test_malformed_values_are_light() {
        let (_dir, mut storage) = storage();
        for raw in ["not json", "null", "1", "\"true\"", "{}", ""] {
            storage.set_item(DARK_MODE_KEY, raw);
            assert!(!DarkModePreference::load(&storage).is_dark(), "{raw:?}");
        }
    }
}
