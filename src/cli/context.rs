//! Command execution context
//!
//! Built once in `main` and passed to handlers, so config loading, settings
//! storage and the dashboard cache are wired up in one place.

use std::path::PathBuf;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::monitor::DashboardService;
use crate::settings::SettingsStore;
use crate::storage::FileStore;

/// Context for command execution: config, settings store, dashboard
/// service and the resolved output format.
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists)
    pub config: Config,
    /// Resolved config file location
    pub config_path: PathBuf,
    /// Settings persisted under the data directory
    pub store: SettingsStore<FileStore>,
    /// Section data with per-run memoization
    pub dashboard: DashboardService,
    /// Output format after applying flag > env > config > default
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config file exists but cannot be parsed, or the
    /// home directory cannot be determined.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config_path = Config::resolve_path(opts.config_ref())?;
        let config = Config::load_from(&config_path)?;

        let format = opts
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_config)
            })
            .unwrap_or_default();

        let data_dir = config.resolve_data_dir(opts.data_dir_ref())?;
        let storage = FileStore::new(data_dir).with_quota(config.preferences.storage_quota_bytes);
        let store = SettingsStore::open(storage);

        let dashboard = DashboardService::new(config.cache_ttl());

        Ok(Self {
            config,
            config_path,
            store,
            dashboard,
            format,
        })
    }
}
