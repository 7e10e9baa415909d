//! CLI command definitions and handlers

use clap::{Parser, Subcommand, ValueEnum};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod export;
pub mod settings;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// DashWatch - terminal dashboard for GitLab, uptime, DNS and server targets
#[derive(Parser, Debug)]
#[command(name = "dashwatch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "DASHWATCH_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "DASHWATCH_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the directory holding saved settings
    #[arg(long, global = true, env = "DASHWATCH_DATA_DIR", hide_env = true)]
    pub data_dir: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "DASHWATCH_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show monitoring cards for the configured targets
    Dashboard {
        /// Limit output to one section
        #[arg(long, short = 's', value_enum, default_value = "all")]
        section: Section,
    },

    /// View and edit monitoring targets
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Export dashboard data to a file
    #[command(after_help = "EXAMPLES:\n  \
        dashwatch export uptime-stats                    # JSON in the current directory\n  \
        dashwatch export dns-records --as csv            # CSV\n  \
        dashwatch export audit-logs -o reports/          # into a directory")]
    Export {
        /// Data set: monitoring-data, uptime-stats, dns-records, server-metrics, gitlab-projects, audit-logs
        data_type: String,

        /// File format: json, csv, xlsx
        #[arg(long = "as", short = 'f', default_value = "json")]
        file_format: String,

        /// Output file or directory
        #[arg(long, short = 'o')]
        output: Option<String>,
    },

    /// Manage the DashWatch config file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show configuration and storage status
    Status,

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
  bash:   dashwatch completion bash > /etc/bash_completion.d/dashwatch
  zsh:    dashwatch completion zsh > \"${fpath[1]}/_dashwatch\"
  fish:   dashwatch completion fish > ~/.config/fish/completions/dashwatch.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Dashboard sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    All,
    Gitlab,
    Uptime,
    Dns,
    Servers,
}

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show all configured targets
    Show {
        /// Print GitLab tokens instead of masking them
        #[arg(long)]
        show_tokens: bool,
    },

    /// Print the settings storage location
    Path,

    /// Reset settings to the built-in defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Manage GitLab instances
    #[command(subcommand)]
    Gitlab(GitlabCommands),

    /// Manage websites checked for uptime
    #[command(subcommand)]
    Website(WebsiteCommands),

    /// Manage watched DNS domains
    #[command(subcommand)]
    Domain(DomainCommands),

    /// Manage monitored servers
    #[command(subcommand)]
    Server(ServerCommands),
}

#[derive(Subcommand, Debug)]
pub enum GitlabCommands {
    /// Add a GitLab instance
    Add {
        #[arg(long)]
        url: String,

        #[arg(long)]
        name: String,

        /// Personal access token
        #[arg(long, env = "DASHWATCH_GITLAB_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Remove a GitLab instance by name
    Remove { name: String },
}

#[derive(Subcommand, Debug)]
pub enum WebsiteCommands {
    /// Add a website
    Add {
        #[arg(long)]
        url: String,

        #[arg(long)]
        name: String,
    },

    /// Remove a website by name
    Remove { name: String },
}

#[derive(Subcommand, Debug)]
pub enum DomainCommands {
    /// Watch a domain
    Add {
        domain: String,

        /// Record type to watch (repeatable, defaults to A)
        #[arg(long = "record-type", short = 't')]
        record_types: Vec<String>,
    },

    /// Stop watching a domain
    Remove { domain: String },
}

#[derive(Subcommand, Debug)]
pub enum ServerCommands {
    /// Add a server
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        ip: String,

        /// Netdata dashboard URL (defaults to http://<ip>:19999)
        #[arg(long)]
        netdata_url: Option<String>,
    },

    /// Remove a server by name
    Remove { name: String },
}

/// Config file subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the config file location
    Path,
}
