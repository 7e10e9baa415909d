//! Error types for DashWatch

use thiserror::Error;

/// Result type alias for DashWatch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Errors raised by the persistent key-value substrate
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage is unavailable: {0}")]
    Unavailable(String),

    #[error("Storage quota exceeded: {size} bytes requested, limit is {limit} bytes")]
    QuotaExceeded { size: usize, limit: usize },

    #[error("Storage I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

/// Settings persistence and validation errors
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("No saved settings found")]
    NotFound,

    #[error("Saved settings are malformed: {0}")]
    Parse(String),

    #[error("Failed to serialize settings: {0}")]
    Serialize(String),

    #[error("Invalid settings: {0}")]
    Invalid(String),

    #[error("Failed to persist settings: {0}")]
    Storage(#[from] StorageError),
}

/// Export path errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Unknown data type '{0}'. Expected one of: {1}")]
    UnknownDataType(String, String),

    #[error("Unknown export format '{0}'. Expected one of: json, csv, xlsx")]
    UnknownFormat(String),

    #[error("{0}")]
    Unsupported(String),

    #[error("Failed to write export: {0}")]
    Io(String),

    #[error("Failed to serialize export data: {0}")]
    Serialize(String),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialize(err.to_string())
    }
}

/// Application configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
