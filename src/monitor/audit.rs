//! Audit log entries

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::seeded_rng;
use crate::settings::Settings;

const USERS: &[&str] = &["admin", "ops", "oncall", "deploy-bot"];
const ACTIONS: &[&str] = &[
    "settings.updated",
    "target.added",
    "target.removed",
    "export.created",
    "dashboard.viewed",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub timestamp: DateTime<Utc>,
    pub user: String,
    pub action: String,
    pub resource: String,
}

/// Placeholder audit trail over the configured targets, newest first
pub fn logs(settings: &Settings, now: DateTime<Utc>, limit: usize) -> Vec<AuditLogEntry> {
    let resources: Vec<String> = settings
        .gitlab
        .instances
        .iter()
        .map(|i| format!("gitlab:{}", i.name))
        .chain(settings.uptime.websites.iter().map(|w| format!("uptime:{}", w.name)))
        .chain(settings.dns.domains.iter().map(|d| format!("dns:{}", d.domain)))
        .chain(settings.servers.instances.iter().map(|s| format!("server:{}", s.name)))
        .collect();

    if resources.is_empty() {
        return Vec::new();
    }

    let mut rng = seeded_rng(&["audit", &resources.join(",")]);
    let mut timestamp = now;

    (0..limit)
        .map(|_| {
            timestamp -= Duration::minutes(rng.i64(1..180));
            AuditLogEntry {
                timestamp,
                user: USERS[rng.usize(..USERS.len())].to_string(),
                action: ACTIONS[rng.usize(..ACTIONS.len())].to_string(),
                resource: resources[rng.usize(..resources.len())].clone(),
            }
        })
        .collect()
}
