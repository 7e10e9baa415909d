//! DashWatch CLI - terminal dashboard for GitLab, uptime, DNS and server targets

use clap::Parser;

mod cache;
mod cli;
mod config;
mod error;
mod export;
mod models;
mod monitor;
mod output;
mod settings;
mod storage;

use cli::{Cli, CommandContext, Commands, GlobalOptions};
use error::Result;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    // Commands that never touch config or storage
    match &cli.command {
        Commands::Version => {
            println!("dashwatch version {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Commands::Completion { shell } => {
            cli::completions::run(*shell);
            return Ok(());
        }
        _ => {}
    }

    let opts = GlobalOptions::from_cli(&cli);
    let mut ctx = CommandContext::new(&opts)?;

    match cli.command {
        Commands::Dashboard { section } => cli::dashboard::run(&mut ctx, section),
        Commands::Settings(cmd) => cli::settings::run(&mut ctx, cmd),
        Commands::Export {
            data_type,
            file_format,
            output,
        } => cli::export::run(&mut ctx, &data_type, &file_format, output.as_deref()),
        Commands::Config(cmd) => cli::config::run(&ctx, cmd),
        Commands::Status => cli::status::run(&ctx),
        Commands::Version | Commands::Completion { .. } => Ok(()),
    }
}

/// Warnings by default, everything at debug with `--debug`; `RUST_LOG` wins.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
