//! Configuration management for DashWatch
//!
//! This is the CLI's own configuration (where data lives, output defaults).
//! Monitoring targets are stored separately as [`crate::settings::Settings`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};
use crate::storage::DEFAULT_QUOTA_BYTES;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the key-value store
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Override for every dashboard section's cache TTL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_ttl_secs: Option<u64>,

    /// Largest settings blob the store will accept
    #[serde(default = "default_storage_quota")]
    pub storage_quota_bytes: usize,
}

fn default_storage_quota() -> usize {
    DEFAULT_QUOTA_BYTES
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            cache_ttl_secs: None,
            storage_quota_bytes: default_storage_quota(),
        }
    }
}

impl Config {
    /// Base directory, `~/.dashwatch`
    pub fn home_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".dashwatch"))
    }

    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join("config.yaml"))
    }

    /// Resolve an optional override to a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Data directory, honoring an explicit override first
    pub fn resolve_data_dir(&self, override_dir: Option<&str>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(PathBuf::from(dir));
        }
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::home_dir()?.join("data")),
        }
    }

    /// Cache TTL override from preferences
    pub fn cache_ttl(&self) -> Option<Duration> {
        self.preferences.cache_ttl_secs.map(Duration::from_secs)
    }
}
