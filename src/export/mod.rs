//! Data export to downloadable files
//!
//! Exports never fail loudly: every problem, from an unknown data type to a
//! write error, comes back as an [`ExportResult`] with `success: false`.

pub mod csv;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::cache::Clock;
use crate::error::ExportError;
use crate::monitor::DashboardService;
use crate::settings::Settings;

/// Exportable data sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    MonitoringData,
    UptimeStats,
    DnsRecords,
    ServerMetrics,
    GitlabProjects,
    AuditLogs,
}

impl DataType {
    pub const ALL: [DataType; 6] = [
        DataType::MonitoringData,
        DataType::UptimeStats,
        DataType::DnsRecords,
        DataType::ServerMetrics,
        DataType::GitlabProjects,
        DataType::AuditLogs,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            DataType::MonitoringData => "monitoring-data",
            DataType::UptimeStats => "uptime-stats",
            DataType::DnsRecords => "dns-records",
            DataType::ServerMetrics => "server-metrics",
            DataType::GitlabProjects => "gitlab-projects",
            DataType::AuditLogs => "audit-logs",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DataType {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::ALL
            .into_iter()
            .find(|t| t.tag() == s)
            .ok_or_else(|| {
                let expected: Vec<&str> = DataType::ALL.iter().map(|t| t.tag()).collect();
                ExportError::UnknownDataType(s.to_string(), expected.join(", "))
            })
    }
}

/// Export file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Xlsx,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "xlsx" => Ok(ExportFormat::Xlsx),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Outcome of an export request
#[derive(Debug, Clone, Serialize)]
pub struct ExportResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub records: usize,
    pub message: String,
}

impl ExportResult {
    fn failed(err: ExportError) -> Self {
        Self {
            success: false,
            filename: None,
            path: None,
            records: 0,
            message: err.to_string(),
        }
    }
}

/// Default export filename, e.g. `dashwatch-dns-records-20250115-143000.csv`
pub fn default_filename(data_type: DataType, format: ExportFormat) -> String {
    format!(
        "dashwatch-{}-{}.{}",
        data_type.tag(),
        Utc::now().format("%Y%m%d-%H%M%S"),
        format.extension()
    )
}

/// Export `data_type` in `format`.
///
/// `output` may name a file, an existing directory, or a directory to create
/// when it ends with a path separator; without it the file lands in the
/// current directory under [`default_filename`].
pub fn export_data<C: Clock + Clone>(
    service: &mut DashboardService<C>,
    settings: &Settings,
    data_type: &str,
    format: &str,
    output: Option<&Path>,
) -> ExportResult {
    match try_export(service, settings, data_type, format, output) {
        Ok(result) => result,
        Err(e) => {
            log::warn!("Export failed: {}", e);
            ExportResult::failed(e)
        }
    }
}

fn try_export<C: Clock + Clone>(
    service: &mut DashboardService<C>,
    settings: &Settings,
    data_type: &str,
    format: &str,
    output: Option<&Path>,
) -> Result<ExportResult, ExportError> {
    let data_type: DataType = data_type.parse()?;
    let format: ExportFormat = format.parse()?;

    let records = collect(service, settings, data_type)?;
    let contents = match format {
        ExportFormat::Json => serde_json::to_string_pretty(&records)?,
        ExportFormat::Csv => csv::to_csv(&records),
        ExportFormat::Xlsx => {
            return Err(ExportError::Unsupported(
                "XLSX export is not supported yet; use json or csv".to_string(),
            ));
        }
    };

    let path = resolve_output(output, data_type, format);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, contents)?;

    let filename = path
        .file_name()
        .map(|f| f.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(ExportResult {
        success: true,
        message: format!(
            "Exported {} {} record(s) to {}",
            records.len(),
            data_type,
            path.display()
        ),
        filename: Some(filename),
        path: Some(path),
        records: records.len(),
    })
}

fn resolve_output(output: Option<&Path>, data_type: DataType, format: ExportFormat) -> PathBuf {
    let filename = default_filename(data_type, format);
    match output {
        Some(p) if p.is_dir() || names_directory(p) => p.join(filename),
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(filename),
    }
}

/// A trailing separator (`out/`) asks for a directory even before it exists
fn names_directory(path: &Path) -> bool {
    path.to_string_lossy()
        .chars()
        .last()
        .is_some_and(std::path::is_separator)
}

/// Gather the records for a data type as JSON objects
pub fn collect<C: Clock + Clone>(
    service: &mut DashboardService<C>,
    settings: &Settings,
    data_type: DataType,
) -> Result<Vec<Value>, ExportError> {
    fn to_values<T: Serialize>(items: Vec<T>) -> Result<Vec<Value>, ExportError> {
        items
            .into_iter()
            .map(|item| serde_json::to_value(item).map_err(ExportError::from))
            .collect()
    }

    let source = |e: crate::error::Error| ExportError::Serialize(e.to_string());

    match data_type {
        DataType::MonitoringData => to_values(vec![service.summary(settings).map_err(source)?]),
        DataType::UptimeStats => to_values(service.uptime_stats(settings).map_err(source)?),
        DataType::DnsRecords => to_values(service.dns_records(settings).map_err(source)?),
        DataType::ServerMetrics => to_values(service.server_metrics(settings).map_err(source)?),
        DataType::GitlabProjects => to_values(service.gitlab_projects(settings).map_err(source)?),
        DataType::AuditLogs => to_values(service.audit_logs(settings).map_err(source)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service() -> DashboardService {
        DashboardService::new(None)
    }

    #[test]
    fn test_data_type_tags_round_trip() {
        for t in DataType::ALL {
            assert_eq!(t.tag().parse::<DataType>().unwrap(), t);
        }
    }

    #[test]
    fn test_unknown_data_type_lists_expected() {
        let err = "metrics".parse::<DataType>().unwrap_err();
        assert!(err.to_string().contains("audit-logs"));
    }

    #[test]
    fn test_format_parse_is_case_insensitive() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("pdf".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_default_filename() {
        let name = default_filename(DataType::DnsRecords, ExportFormat::Csv);
        assert!(name.starts_with("dashwatch-dns-records-"));
        assert!(name.ends_with(".csv"));
    }

    #[test]
    fn test_export_json_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("uptime.json");
        let settings = Settings::default();

        let result = export_data(&mut service(), &settings, "uptime-stats", "json", Some(&path));

        assert!(result.success, "{}", result.message);
        assert_eq!(result.records, 1);
        assert_eq!(result.filename.as_deref(), Some("uptime.json"));

        let written: Vec<Value> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written[0]["url"], "https://example.com");
    }

    #[test]
    fn test_export_csv_into_directory() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::default();

        let result = export_data(&mut service(), &settings, "dns-records", "csv", Some(dir.path()));

        assert!(result.success, "{}", result.message);
        assert_eq!(result.records, 4);
        let path = result.path.unwrap();
        assert!(path.starts_with(dir.path()));

        let csv = fs::read_to_string(path).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("domain,record_type,value,ttl"));
        assert_eq!(lines.count(), 4);
    }

    #[test]
    fn test_export_monitoring_data_single_record() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("summary.csv");
        let result = export_data(
            &mut service(),
            &Settings::default(),
            "monitoring-data",
            "csv",
            Some(&path),
        );

        assert!(result.success);
        assert_eq!(result.records, 1);
        let csv = fs::read_to_string(path).unwrap();
        assert!(csv.starts_with("generated_at,gitlab_instances,"));
    }

    #[test]
    fn test_export_unknown_data_type_fails_softly() {
        let dir = TempDir::new().unwrap();
        let result = export_data(
            &mut service(),
            &Settings::default(),
            "everything",
            "json",
            Some(dir.path()),
        );

        assert!(!result.success);
        assert!(result.message.contains("everything"));
        assert!(result.path.is_none());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_unknown_format_fails_softly() {
        let result = export_data(&mut service(), &Settings::default(), "audit-logs", "pdf", None);
        assert!(!result.success);
        assert!(result.message.contains("pdf"));
    }

    #[test]
    fn test_export_xlsx_unsupported() {
        let dir = TempDir::new().unwrap();
        let result = export_data(
            &mut service(),
            &Settings::default(),
            "server-metrics",
            "xlsx",
            Some(dir.path()),
        );

        assert!(!result.success);
        assert!(result.message.contains("XLSX"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_export_empty_section_writes_empty_csv() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("servers.csv");
        let mut settings = Settings::default();
        settings.servers.instances.clear();

        let result = export_data(&mut service(), &settings, "server-metrics", "csv", Some(&path));

        assert!(result.success);
        assert_eq!(result.records, 0);
        assert_eq!(fs::read_to_string(path).unwrap(), "");
    }

    #[test]
    fn test_export_write_error_fails_softly() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        let path = blocker.join("nested.json");

        let result = export_data(
            &mut service(),
            &Settings::default(),
            "gitlab-projects",
            "json",
            Some(&path),
        );

        assert!(!result.success);
        assert!(result.message.contains("Failed to write export"));
    }

    #[test]
    fn test_export_creates_directory_with_trailing_separator() {
        let dir = TempDir::new().unwrap();
        let out = format!("{}{}", dir.path().join("reports").display(), std::path::MAIN_SEPARATOR);

        let result = export_data(
            &mut service(),
            &Settings::default(),
            "uptime-stats",
            "csv",
            Some(Path::new(&out)),
        );

        assert!(result.success, "{}", result.message);
        let path = result.path.unwrap();
        assert_eq!(path.parent().unwrap(), dir.path().join("reports"));
        assert!(result.filename.unwrap().starts_with("dashwatch-uptime-stats-"));
        assert!(path.is_file());
    }
}
