//! Dashboard card display models

use chrono::{DateTime, Utc};
use serde::Serialize;
use tabled::Tabled;

use super::common::truncate_string;
use crate::monitor::{
    AuditLogEntry, DnsRecord, GitlabProject, ServerMetrics, UptimeStats, UptimeStatus,
};
use crate::output::formatters::format_relative;

/// Maximum DNS value width in tables
const VALUE_WIDTH: usize = 48;

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProjectDisplay {
    #[tabled(rename = "INSTANCE")]
    pub instance: String,

    #[tabled(rename = "PROJECT")]
    pub name: String,

    #[tabled(rename = "PIPELINE")]
    pub pipeline: String,

    #[tabled(rename = "MRS")]
    pub open_merge_requests: u32,

    #[tabled(rename = "ISSUES")]
    pub open_issues: u32,

    #[tabled(rename = "LAST ACTIVITY")]
    pub last_activity: String,
}

impl ProjectDisplay {
    pub fn new(project: &GitlabProject, now: DateTime<Utc>) -> Self {
        Self {
            instance: project.instance.clone(),
            name: project.name.clone(),
            pipeline: project.pipeline_status.to_string(),
            open_merge_requests: project.open_merge_requests,
            open_issues: project.open_issues,
            last_activity: format_relative(project.last_activity, now),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct UptimeDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "URL")]
    pub url: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "UPTIME")]
    pub uptime: String,

    #[tabled(rename = "RESPONSE")]
    pub response: String,
}

impl From<&UptimeStats> for UptimeDisplay {
    fn from(stats: &UptimeStats) -> Self {
        let response = match stats.status {
            UptimeStatus::Up => format!("{} ms", stats.response_time_ms),
            UptimeStatus::Down => "--".to_string(),
        };

        Self {
            name: stats.name.clone(),
            url: stats.url.clone(),
            status: stats.status.to_string(),
            uptime: format!("{:.1}%", stats.uptime_percent),
            response,
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DnsRecordDisplay {
    #[tabled(rename = "DOMAIN")]
    pub domain: String,

    #[tabled(rename = "TYPE")]
    pub record_type: String,

    #[tabled(rename = "VALUE")]
    pub value: String,

    #[tabled(rename = "TTL")]
    pub ttl: u32,
}

impl From<&DnsRecord> for DnsRecordDisplay {
    fn from(record: &DnsRecord) -> Self {
        Self {
            domain: record.domain.clone(),
            record_type: record.record_type.clone(),
            value: truncate_string(&record.value, VALUE_WIDTH),
            ttl: record.ttl,
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ServerMetricsDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "IP")]
    pub ip: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "CPU")]
    pub cpu: String,

    #[tabled(rename = "MEM")]
    pub memory: String,

    #[tabled(rename = "DISK")]
    pub disk: String,

    #[tabled(rename = "LOAD")]
    pub load: String,
}

impl From<&ServerMetrics> for ServerMetricsDisplay {
    fn from(m: &ServerMetrics) -> Self {
        Self {
            name: m.name.clone(),
            ip: m.ip.clone(),
            status: m.status.to_string(),
            cpu: format!("{:.1}%", m.cpu_percent),
            memory: format!("{:.1}%", m.memory_percent),
            disk: format!("{:.1}%", m.disk_percent),
            load: format!("{:.2}", m.load_average),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AuditDisplay {
    #[tabled(rename = "TIME")]
    pub timestamp: String,

    #[tabled(rename = "USER")]
    pub user: String,

    #[tabled(rename = "ACTION")]
    pub action: String,

    #[tabled(rename = "RESOURCE")]
    pub resource: String,
}

impl From<&AuditLogEntry> for AuditDisplay {
    fn from(entry: &AuditLogEntry) -> Self {
        Self {
            timestamp: entry.timestamp.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            user: entry.user.clone(),
            action: entry.action.clone(),
            resource: entry.resource.clone(),
        }
    }
}
