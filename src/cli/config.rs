//! Config file commands

use colored::Colorize;

use crate::cli::{CommandContext, ConfigCommands};
use crate::config::Config;
use crate::error::{ConfigError, Result};

pub fn run(ctx: &CommandContext, cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Init { force } => init(ctx, force),
        ConfigCommands::Path => {
            println!("{}", ctx.config_path.display());
            Ok(())
        }
    }
}

/// Write the default config, refusing to clobber an existing file
fn init(ctx: &CommandContext, force: bool) -> Result<()> {
    let path = &ctx.config_path;
    if path.exists() && !force {
        return Err(ConfigError::Invalid(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ))
        .into());
    }

    Config::default().save_to(path)?;
    println!("{} Wrote config to {}", "✓".green(), path.display().to_string().cyan());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::GlobalOptions;
    use tempfile::TempDir;

    fn context(dir: &TempDir) -> CommandContext {
        CommandContext::new(&GlobalOptions {
            format: None,
            config: Some(dir.path().join("config.yaml").display().to_string()),
            data_dir: Some(dir.path().join("data").display().to_string()),
        })
        .unwrap()
    }

    #[test]
    fn test_init_writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);

        init(&ctx, false).unwrap();
        assert_eq!(Config::load_from(&ctx.config_path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_existing_without_force() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        std::fs::write(&ctx.config_path, "preferences:\n  format: json\n").unwrap();

        assert!(init(&ctx, false).is_err());
        init(&ctx, true).unwrap();
        assert!(Config::load_from(&ctx.config_path).unwrap().preferences.format.is_none());
    }
}
