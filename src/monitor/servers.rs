//! Server metric cards (Netdata-style)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{round1, seeded_rng};
use crate::settings::Server;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Online,
    Warning,
    Offline,
}

impl std::fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ServerStatus::Online => "online",
            ServerStatus::Warning => "warning",
            ServerStatus::Offline => "offline",
        };
        write!(f, "{}", s)
    }
}

/// Resource usage snapshot for one server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerMetrics {
    pub name: String,
    pub ip: String,
    pub netdata_url: String,
    pub status: ServerStatus,
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub disk_percent: f64,
    pub load_average: f64,
    pub uptime_hours: u32,
    pub sampled_at: DateTime<Utc>,
}

/// Usage above this on any resource marks the server as `Warning`
const WARNING_THRESHOLD: f64 = 85.0;

pub fn metrics(server: &Server, now: DateTime<Utc>) -> ServerMetrics {
    let mut rng = seeded_rng(&["servers", &server.name, &server.ip]);

    let offline = rng.u32(0..100) < 5;
    if offline {
        return ServerMetrics {
            name: server.name.clone(),
            ip: server.ip.clone(),
            netdata_url: server.netdata_url.clone(),
            status: ServerStatus::Offline,
            cpu_percent: 0.0,
            memory_percent: 0.0,
            disk_percent: 0.0,
            load_average: 0.0,
            uptime_hours: 0,
            sampled_at: now,
        };
    }

    let cpu_percent = round1(5.0 + rng.f64() * 90.0);
    let memory_percent = round1(20.0 + rng.f64() * 75.0);
    let disk_percent = round1(10.0 + rng.f64() * 85.0);
    let load_average = (rng.f64() * 400.0).round() / 100.0;

    let status = if [cpu_percent, memory_percent, disk_percent]
        .iter()
        .any(|v| *v > WARNING_THRESHOLD)
    {
        ServerStatus::Warning
    } else {
        ServerStatus::Online
    };

    ServerMetrics {
        name: server.name.clone(),
        ip: server.ip.clone(),
        netdata_url: server.netdata_url.clone(),
        status,
        cpu_percent,
        memory_percent,
        disk_percent,
        load_average,
        uptime_hours: rng.u32(1..24 * 90),
        sampled_at: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_ranges_and_status() {
        let now = Utc::now();
        for i in 0..100 {
            let server = Server::new(format!("node-{}", i), format!("10.0.0.{}", i), None);
            let m = metrics(&server, now);

            assert!((0.0..=100.0).contains(&m.cpu_percent));
            assert!((0.0..=100.0).contains(&m.memory_percent));
            assert!((0.0..=100.0).contains(&m.disk_percent));

            let hot = [m.cpu_percent, m.memory_percent, m.disk_percent]
                .iter()
                .any(|v| *v > WARNING_THRESHOLD);
            match m.status {
                ServerStatus::Offline => assert_eq!(m.uptime_hours, 0),
                ServerStatus::Warning => assert!(hot),
                ServerStatus::Online => assert!(!hot),
            }
        }
    }

    #[test]
    fn test_metrics_carry_server_identity() {
        let server = Server::new("db", "10.9.8.7", None);
        let m = metrics(&server, Utc::now());
        assert_eq!(m.name, "db");
        assert_eq!(m.ip, "10.9.8.7");
        assert_eq!(m.netdata_url, "http://10.9.8.7:19999");
    }
}
