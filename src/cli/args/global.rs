//! Global CLI options shared across all commands
//!
//! Handlers take a single `GlobalOptions` instead of threading each global
//! flag through separately.

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file defaults are resolved later in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format, if given on the command line or environment
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.dashwatch/config.yaml)
    pub config: Option<String>,

    /// Custom data directory for the settings store
    pub data_dir: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            data_dir: cli.data_dir.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get data dir override as `Option<&str>`.
    pub fn data_dir_ref(&self) -> Option<&str> {
        self.data_dir.as_deref()
    }
}
