use anyhow::{Context, Result};
use log::warn;
use std::{fs, path::PathBuf, sync::RwLock};

use crate::models::Settings;
use crate::services::SettingsSource;

/// JSON-file-backed settings store.
///
/// `None` means no settings have ever been saved; consumers fall back to
/// the default rating scale in that case.
pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<Option<Settings>>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            match serde_json::from_str(&contents) {
                Ok(settings) => Some(settings),
                Err(err) => {
                    warn!("Discarding unreadable settings file: {err}");
                    None
                }
            }
        } else {
            None
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn get(&self) -> Option<Settings> {
        self.data.read().unwrap().clone()
    }

    pub fn update(&self, settings: Settings) -> Result<()> {
        let mut guard = self.data.write().unwrap();
        self.persist(&settings)?;
        *guard = Some(settings);
        Ok(())
    }

    pub fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)?;
        let data: Settings = serde_json::from_str(&contents)?;
        let mut guard = self.data.write().unwrap();
        *guard = Some(data);
        Ok(())
    }

    fn persist(&self, data: &Settings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

impl SettingsSource for SettingsStore {
    fn get_settings(&self) -> Option<Settings> {
        self.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_means_no_settings() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json")).unwrap();
        assert!(store.get().is_none());
    }

    #[test]
    fn update_persists_and_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let store = SettingsStore::new(path.clone()).unwrap();
        let settings = Settings {
            brew_rating: 10,
            track_caffeine_consumption: true,
            ..Settings::default()
        };
        store.update(settings.clone()).unwrap();

        let reopened = SettingsStore::new(path).unwrap();
        assert_eq!(reopened.get(), Some(settings));
    }

    #[test]
    fn unreadable_file_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();

        let store = SettingsStore::new(path).unwrap();
        assert!(store.get().is_none());
    }
}
