use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::{TempDir, tempdir};

/// Isolated config file and data directory for one test
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempdir().expect("failed to create temp dir"),
        }
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.yaml")
    }

    fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    fn settings_file(&self) -> PathBuf {
        self.data_dir().join("dashwatch-settings.json")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dashwatch"));
        cmd.arg("--config")
            .arg(self.config_path())
            .arg("--data-dir")
            .arg(self.data_dir())
            .env_remove("DASHWATCH_FORMAT")
            .env_remove("DASHWATCH_CONFIG")
            .env_remove("DASHWATCH_DATA_DIR")
            .env_remove("DASHWATCH_GITLAB_TOKEN")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");
        cmd
    }
}

#[test]
fn version_prints_package_version() {
    Sandbox::new()
        .cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "dashwatch version {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn settings_show_defaults_without_saved_settings() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["--format", "json", "settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://gitlab.com"))
        .stdout(predicate::str::contains("Example Website"))
        .stdout(predicate::str::contains("\"recordTypes\""))
        .stdout(predicate::str::contains("http://192.168.1.100:19999"));

    assert!(!sandbox.settings_file().exists());
}

#[test]
fn website_add_persists_and_shows() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args([
            "settings",
            "website",
            "add",
            "--url",
            "https://status.example.org",
            "--name",
            "Status Page",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added website"));

    let saved = fs::read_to_string(sandbox.settings_file()).unwrap();
    assert!(saved.contains("https://status.example.org"));

    sandbox
        .cmd()
        .args(["--format", "json", "settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status Page"))
        .stdout(predicate::str::contains("Example Website"));
}

#[test]
fn duplicate_website_is_rejected() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args([
            "settings",
            "website",
            "add",
            "--url",
            "https://example.net",
            "--name",
            "Example Website",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert!(!sandbox.settings_file().exists());
}

#[test]
fn invalid_website_url_is_rejected() {
    Sandbox::new()
        .cmd()
        .args(["settings", "website", "add", "--url", "example.net", "--name", "Bare"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("http://"));
}

#[test]
fn save_over_quota_reports_error_and_keeps_defaults() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.config_path(), "preferences:\n  storage_quota_bytes: 10\n").unwrap();

    sandbox
        .cmd()
        .args(["settings", "website", "add", "--url", "https://a.io", "--name", "A"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"))
        .stderr(predicate::str::contains("quota"));

    assert!(!sandbox.settings_file().exists());
    sandbox
        .cmd()
        .args(["--format", "json", "settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Example Website"))
        .stdout(predicate::str::contains("https://a.io").not());
}

#[test]
fn removing_unknown_server_fails() {
    Sandbox::new()
        .cmd()
        .args(["settings", "server", "remove", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'ghost' is not configured"));
}

#[test]
fn domain_add_normalizes_record_types() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["settings", "domain", "add", "Example.ORG", "-t", "mx", "-t", "txt"])
        .assert()
        .success();

    let saved = fs::read_to_string(sandbox.settings_file()).unwrap();
    assert!(saved.contains("\"example.org\""));
    assert!(saved.contains("\"MX\""));
    assert!(saved.contains("\"TXT\""));

    sandbox
        .cmd()
        .args(["settings", "domain", "remove", "example.org"])
        .assert()
        .success();

    let saved = fs::read_to_string(sandbox.settings_file()).unwrap();
    assert!(!saved.contains("example.org"));
}

#[test]
fn unsupported_record_type_is_rejected() {
    Sandbox::new()
        .cmd()
        .args(["settings", "domain", "add", "example.org", "-t", "SPF"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported DNS record type"));
}

#[test]
fn malformed_saved_settings_fall_back_to_defaults() {
    let sandbox = Sandbox::new();
    fs::create_dir_all(sandbox.data_dir()).unwrap();
    fs::write(sandbox.settings_file(), "not json").unwrap();

    sandbox
        .cmd()
        .args(["--format", "json", "settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Example Website"));

    sandbox
        .cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("unreadable"));
}

#[test]
fn reset_restores_defaults() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args(["settings", "website", "remove", "Example Website"])
        .assert()
        .success();

    sandbox
        .cmd()
        .args(["settings", "reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reset to defaults"));

    assert!(!sandbox.settings_file().exists());
    sandbox
        .cmd()
        .args(["--format", "json", "settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Example Website"));
}

#[test]
fn gitlab_token_is_masked_unless_requested() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .args([
            "settings",
            "gitlab",
            "add",
            "--url",
            "https://gitlab.example.org",
            "--name",
            "Internal",
            "--token",
            "glpat-secret1234",
        ])
        .assert()
        .success();

    sandbox
        .cmd()
        .args(["--format", "json", "settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("****1234"))
        .stdout(predicate::str::contains("glpat-secret1234").not());

    sandbox
        .cmd()
        .args(["--format", "json", "settings", "show", "--show-tokens"])
        .assert()
        .success()
        .stdout(predicate::str::contains("glpat-secret1234"));
}

#[test]
fn dashboard_json_includes_every_section() {
    Sandbox::new()
        .cmd()
        .args(["--format", "json", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"summary\""))
        .stdout(predicate::str::contains("\"gitlab\""))
        .stdout(predicate::str::contains("\"uptime\""))
        .stdout(predicate::str::contains("\"dns\""))
        .stdout(predicate::str::contains("\"servers\""));
}

#[test]
fn dashboard_single_section() {
    Sandbox::new()
        .cmd()
        .args(["--format", "json", "dashboard", "--section", "dns"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"dns\""))
        .stdout(predicate::str::contains("\"summary\"").not());
}

#[test]
fn dashboard_table_renders_rows() {
    Sandbox::new()
        .cmd()
        .args(["--format", "table", "dashboard", "--section", "uptime"])
        .assert()
        .success()
        .stdout(predicate::str::contains("STATUS"))
        .stdout(predicate::str::contains("https://example.com"));
}

#[test]
fn dashboard_pretty_renders_cards() {
    Sandbox::new()
        .cmd()
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Servers"))
        .stdout(predicate::str::contains("Example Website"));
}

#[test]
fn export_csv_to_file() {
    let sandbox = Sandbox::new();
    let out = sandbox.dir.path().join("records.csv");

    sandbox
        .cmd()
        .args(["export", "dns-records", "--as", "csv", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 4"));

    let csv = fs::read_to_string(out).unwrap();
    assert_eq!(csv.lines().next(), Some("domain,record_type,value,ttl"));
}

#[test]
fn export_json_into_directory() {
    let sandbox = Sandbox::new();
    let out_dir = sandbox.dir.path().join("reports");
    fs::create_dir_all(&out_dir).unwrap();

    sandbox
        .cmd()
        .args(["export", "uptime-stats", "-o"])
        .arg(&out_dir)
        .assert()
        .success();

    let files: Vec<_> = fs::read_dir(&out_dir).unwrap().collect();
    assert_eq!(files.len(), 1);
    let name = files[0].as_ref().unwrap().file_name();
    let name = name.to_string_lossy();
    assert!(name.starts_with("dashwatch-uptime-stats-"));
    assert!(name.ends_with(".json"));
}

#[test]
fn export_unknown_data_type_fails() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .current_dir(sandbox.dir.path())
        .args(["export", "everything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("everything"));
}

#[test]
fn export_xlsx_is_not_supported() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .current_dir(sandbox.dir.path())
        .args(["--format", "json", "export", "audit-logs", "--as", "xlsx"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"success\": false"))
        .stderr(predicate::str::contains("XLSX"));
}

#[test]
fn status_reports_fresh_install() {
    Sandbox::new()
        .cmd()
        .args(["--format", "json", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"settings_saved\": false"))
        .stdout(predicate::str::contains("\"total_targets\": 4"));
}

#[test]
fn config_init_then_format_preference_applies() {
    let sandbox = Sandbox::new();

    sandbox.cmd().args(["config", "init"]).assert().success();
    assert!(sandbox.config_path().exists());

    sandbox
        .cmd()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    fs::write(sandbox.config_path(), "preferences:\n  format: json\n").unwrap();
    sandbox
        .cmd()
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"meta\""));
}

#[test]
fn completion_script_names_binary() {
    Sandbox::new()
        .cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dashwatch"));
}
