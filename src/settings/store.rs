//! Settings persistence over a key-value store

use super::Settings;
use crate::error::SettingsError;
use crate::storage::KeyValueStore;

/// Slot name holding the serialized settings
pub const SETTINGS_KEY: &str = "dashwatch-settings";

/// Loads and saves [`Settings`] wholesale.
///
/// The store keeps the last loaded or saved value so consumers can read it
/// without touching storage again. There is no partial update: callers clone
/// [`SettingsStore::current`], edit the copy and pass it to
/// [`SettingsStore::save`].
pub struct SettingsStore<S: KeyValueStore> {
    storage: S,
    current: Settings,
}

impl<S: KeyValueStore> SettingsStore<S> {
    /// Open the store and load whatever is persisted (or defaults).
    pub fn open(storage: S) -> Self {
        let mut store = Self {
            storage,
            current: Settings::default(),
        };
        store.current = store.load();
        store
    }

    /// Load persisted settings, failing with the reason they could not be used.
    pub fn try_load(&self) -> Result<Settings, SettingsError> {
        let blob = self
            .storage
            .get(SETTINGS_KEY)?
            .ok_or(SettingsError::NotFound)?;

        serde_json::from_str(&blob).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Load persisted settings, substituting defaults on any failure.
    pub fn load(&self) -> Settings {
        match self.try_load() {
            Ok(settings) => settings,
            Err(SettingsError::NotFound) => {
                log::debug!("No saved settings, using defaults");
                Settings::default()
            }
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Settings::default()
            }
        }
    }

    /// Persist `settings`, replacing whatever was stored before.
    pub fn save(&mut self, settings: &Settings) -> Result<(), SettingsError> {
        let blob = serde_json::to_string(settings)
            .map_err(|e| SettingsError::Serialize(e.to_string()))?;
        self.storage.set(SETTINGS_KEY, &blob)?;
        self.current = settings.clone();
        Ok(())
    }

    /// Re-read storage and replace the current value
    pub fn refresh(&mut self) -> &Settings {
        self.current = self.load();
        &self.current
    }

    /// Remove persisted settings and fall back to defaults
    pub fn reset(&mut self) -> Result<Settings, SettingsError> {
        self.storage.remove(SETTINGS_KEY)?;
        self.current = Settings::default();
        Ok(self.current.clone())
    }

    /// The last loaded or saved settings
    pub fn current(&self) -> &Settings {
        &self.current
    }

    /// Underlying storage handle
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[cfg(test)]
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}
