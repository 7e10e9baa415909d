//! Status command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::output::{formatters::format_size, json::format_json};
use crate::settings::SETTINGS_KEY;
use crate::storage::KeyValueStore;

/// Machine-readable status report
#[derive(Debug, Serialize)]
struct StatusReport {
    config_file: String,
    config_exists: bool,
    data_dir: String,
    settings_saved: bool,
    settings_bytes: usize,
    storage_quota_bytes: usize,
    gitlab_instances: usize,
    websites: usize,
    dns_domains: usize,
    servers: usize,
    total_targets: usize,
    problems: Vec<String>,
}

/// Run the status command to display configuration and storage status
pub fn run(ctx: &CommandContext) -> Result<()> {
    let report = build_report(ctx)?;

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&report)?);
        return Ok(());
    }

    println!("{}\n", "DashWatch Status".bold());

    if report.config_exists {
        println!("Config file: {}", report.config_file.cyan());
    } else {
        println!(
            "Config file: {} {}",
            report.config_file.cyan(),
            "(not created, using defaults)".dimmed()
        );
    }
    println!("Data directory: {}", report.data_dir.cyan());
    println!();

    if report.settings_saved {
        println!(
            "{} Settings saved ({} of {} quota)",
            "✓".green(),
            format_size(report.settings_bytes),
            format_size(report.storage_quota_bytes)
        );
    } else {
        println!("{} No saved settings, using defaults", "○".dimmed());
        println!("  → Run 'dashwatch settings' to add targets");
    }

    if report.problems.is_empty() {
        println!("{} All targets valid", "✓".green());
    } else {
        for problem in &report.problems {
            println!("{} {}", "✗".red(), problem);
        }
    }

    println!();
    println!("GitLab instances: {}", report.gitlab_instances);
    println!("Websites:         {}", report.websites);
    println!("DNS domains:      {}", report.dns_domains);
    println!("Servers:          {}", report.servers);
    println!("Total targets:    {}", report.total_targets.to_string().bold());
    println!();

    Ok(())
}

fn build_report(ctx: &CommandContext) -> Result<StatusReport> {
    let storage = ctx.store.storage();
    let blob = storage.get(SETTINGS_KEY)?;
    let settings = ctx.store.current();

    // A saved blob that failed to parse shows up as a problem
    let mut problems: Vec<String> = Vec::new();
    if blob.is_some() {
        if let Err(e) = ctx.store.try_load() {
            problems.push(format!("Saved settings unreadable, defaults in use: {}", e));
        }
    }
    problems.extend(settings.validate().iter().map(ToString::to_string));

    Ok(StatusReport {
        config_file: ctx.config_path.display().to_string(),
        config_exists: ctx.config_path.exists(),
        data_dir: storage.dir().display().to_string(),
        settings_saved: blob.is_some(),
        settings_bytes: blob.as_ref().map(String::len).unwrap_or(0),
        storage_quota_bytes: ctx.config.preferences.storage_quota_bytes,
        gitlab_instances: settings.gitlab.instances.len(),
        websites: settings.uptime.websites.len(),
        dns_domains: settings.dns.domains.len(),
        servers: settings.servers.instances.len(),
        total_targets: settings.target_count(),
        problems,
    })
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
    fn test_report_for_fresh_install() {
        let dir = TempDir::new().unwrap();
        let report = build_report(&context(&dir)).unwrap();

        assert!(!report.config_exists);
        assert!(!report.settings_saved);
        assert_eq!(report.settings_bytes, 0);
        assert_eq!(report.websites, 1);
        assert_eq!(report.total_targets, 4);
        assert!(report.problems.is_empty());
    }

    #[test]
    fn test_report_flags_unreadable_blob() {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("data");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(data.join("dashwatch-settings.json"), "not json").unwrap();

        let report = build_report(&context(&dir)).unwrap();

        assert!(report.settings_saved);
        assert_eq!(report.settings_bytes, 8);
        assert_eq!(report.problems.len(), 1);
        assert!(report.problems[0].contains("unreadable"));
    }
}
