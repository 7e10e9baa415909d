//! Website uptime cards

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{round1, seeded_rng};
use crate::settings::Website;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UptimeStatus {
    Up,
    Down,
}

impl std::fmt::Display for UptimeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UptimeStatus::Up => write!(f, "up"),
            UptimeStatus::Down => write!(f, "down"),
        }
    }
}

/// Uptime figures for a single website
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UptimeStats {
    pub name: String,
    pub url: String,
    pub status: UptimeStatus,
    /// Rolling 30-day uptime, 95.0 to 100.0
    pub uptime_percent: f64,
    /// Response time of the last check; zero while down
    pub response_time_ms: u32,
    pub last_checked: DateTime<Utc>,
}

pub fn stats(website: &Website, now: DateTime<Utc>) -> UptimeStats {
    let mut rng = seeded_rng(&["uptime", &website.url]);

    let status = if rng.u32(0..100) < 92 {
        UptimeStatus::Up
    } else {
        UptimeStatus::Down
    };
    let uptime_percent = round1(95.0 + rng.f64() * 5.0);
    let response_time_ms = match status {
        UptimeStatus::Up => rng.u32(80..1200),
        UptimeStatus::Down => 0,
    };

    UptimeStats {
        name: website.name.clone(),
        url: website.url.clone(),
        status,
        uptime_percent,
        response_time_ms,
        last_checked: now - Duration::seconds(rng.i64(0..60)),
    }
}
