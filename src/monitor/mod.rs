//! Synthetic monitoring data
//!
//! There are no real GitLab, uptime, DNS or Netdata backends behind
//! DashWatch yet. Each section generates plausible placeholder data from the
//! configured targets. Generators are seeded from the target identity, so
//! the same target always produces the same figures.

pub mod audit;
pub mod dashboard;
pub mod dns;
pub mod gitlab;
pub mod servers;
pub mod uptime;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::settings::Settings;

pub use audit::AuditLogEntry;
pub use dashboard::DashboardService;
pub use dns::DnsRecord;
pub use gitlab::{GitlabProject, PipelineStatus};
pub use servers::{ServerMetrics, ServerStatus};
pub use uptime::{UptimeStats, UptimeStatus};

/// Build a deterministic RNG for a target.
pub(crate) fn seeded_rng(parts: &[&str]) -> fastrand::Rng {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
        hasher.update(b"\0");
    }
    let digest = hasher.finalize();
    let mut seed = [0u8; 8];
    seed.copy_from_slice(&digest[..8]);
    fastrand::Rng::with_seed(u64::from_le_bytes(seed))
}

/// Round to one decimal place for display
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Aggregate across every section ("monitoring data")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitoringSummary {
    pub generated_at: DateTime<Utc>,
    pub gitlab_instances: usize,
    pub gitlab_projects: usize,
    pub failing_pipelines: usize,
    pub websites_up: usize,
    pub websites_down: usize,
    pub average_uptime_percent: f64,
    pub dns_domains: usize,
    pub dns_records: usize,
    pub servers_online: usize,
    pub servers_offline: usize,
}

impl MonitoringSummary {
    pub fn build(
        settings: &Settings,
        projects: &[GitlabProject],
        uptime: &[UptimeStats],
        records: &[DnsRecord],
        servers: &[ServerMetrics],
        now: DateTime<Utc>,
    ) -> Self {
        let websites_up = uptime
            .iter()
            .filter(|u| u.status == UptimeStatus::Up)
            .count();
        let average_uptime_percent = if uptime.is_empty() {
            0.0
        } else {
            round1(uptime.iter().map(|u| u.uptime_percent).sum::<f64>() / uptime.len() as f64)
        };
        let servers_online = servers
            .iter()
            .filter(|s| s.status != ServerStatus::Offline)
            .count();

        Self {
            generated_at: now,
            gitlab_instances: settings.gitlab.instances.len(),
            gitlab_projects: projects.len(),
            failing_pipelines: projects
                .iter()
                .filter(|p| p.pipeline_status == PipelineStatus::Failed)
                .count(),
            websites_up,
            websites_down: uptime.len() - websites_up,
            average_uptime_percent,
            dns_domains: settings.dns.domains.len(),
            dns_records: records.len(),
            servers_online,
            servers_offline: servers.len() - servers_online,
        }
    }
}
