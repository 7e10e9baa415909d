//! Dashboard data service with per-target memoization

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{
    AuditLogEntry, DnsRecord, GitlabProject, MonitoringSummary, ServerMetrics, UptimeStats, audit,
    dns, gitlab, servers, uptime,
};
use crate::cache::{Cache, CacheStats, CacheTtl, Clock, SystemClock, cache_key};
use crate::error::Result;
use crate::settings::Settings;

/// Number of audit entries produced per request
pub const AUDIT_LOG_LIMIT: usize = 25;

/// Produces section data for the current settings, memoizing each target's
/// result in a TTL cache.
pub struct DashboardService<C: Clock + Clone = SystemClock> {
    cache: Cache<serde_json::Value, C>,
    clock: C,
    ttl_override: Option<Duration>,
}

impl DashboardService<SystemClock> {
    pub fn new(ttl_override: Option<Duration>) -> Self {
        Self::with_clock(SystemClock, ttl_override)
    }
}

impl<C: Clock + Clone> DashboardService<C> {
    pub fn with_clock(clock: C, ttl_override: Option<Duration>) -> Self {
        Self {
            cache: Cache::with_clock(clock.clone()),
            clock,
            ttl_override,
        }
    }

    pub fn gitlab_projects(&mut self, settings: &Settings) -> Result<Vec<GitlabProject>> {
        let now = self.clock.now();
        let mut all = Vec::new();
        for instance in &settings.gitlab.instances {
            let key = cache_key("gitlab", &[("url", &instance.url), ("name", &instance.name)]);
            let projects: Vec<GitlabProject> = self.memoized(key, CacheTtl::GITLAB, || {
                gitlab::projects(instance, now)
            })?;
            all.extend(projects);
        }
        Ok(all)
    }

    pub fn uptime_stats(&mut self, settings: &Settings) -> Result<Vec<UptimeStats>> {
        let now = self.clock.now();
        settings
            .uptime
            .websites
            .iter()
            .map(|website| {
                let key = cache_key("uptime", &[("url", &website.url), ("name", &website.name)]);
                self.memoized(key, CacheTtl::UPTIME, || uptime::stats(website, now))
            })
            .collect()
    }

    pub fn dns_records(&mut self, settings: &Settings) -> Result<Vec<DnsRecord>> {
        let mut all = Vec::new();
        for domain in &settings.dns.domains {
            let types: Vec<&str> = domain.record_types.iter().map(String::as_str).collect();
            let types = types.join(",");
            let key = cache_key("dns", &[("domain", &domain.domain), ("types", &types)]);
            let records: Vec<DnsRecord> =
                self.memoized(key, CacheTtl::DNS, || dns::records(domain))?;
            all.extend(records);
        }
        Ok(all)
    }

    pub fn server_metrics(&mut self, settings: &Settings) -> Result<Vec<ServerMetrics>> {
        let now = self.clock.now();
        settings
            .servers
            .instances
            .iter()
            .map(|server| {
                let key = cache_key("servers", &[("name", &server.name), ("ip", &server.ip)]);
                self.memoized(key, CacheTtl::SERVERS, || servers::metrics(server, now))
            })
            .collect()
    }

    pub fn audit_logs(&mut self, settings: &Settings) -> Result<Vec<AuditLogEntry>> {
        let now = self.clock.now();
        let fingerprint = serde_json::to_string(settings)?;
        let key = cache_key("audit", &[("settings", &fingerprint)]);
        self.memoized(key, CacheTtl::AUDIT, || {
            audit::logs(settings, now, AUDIT_LOG_LIMIT)
        })
    }

    pub fn summary(&mut self, settings: &Settings) -> Result<MonitoringSummary> {
        let projects = self.gitlab_projects(settings)?;
        let uptime = self.uptime_stats(settings)?;
        let records = self.dns_records(settings)?;
        let servers = self.server_metrics(settings)?;

        Ok(MonitoringSummary::build(
            settings,
            &projects,
            &uptime,
            &records,
            &servers,
            self.clock.now(),
        ))
    }

    pub fn cache_stats(&mut self) -> CacheStats {
        self.cache.stats()
    }

    /// Return the cached value for `key` or compute, store and return it.
    fn memoized<T, F>(&mut self, key: String, ttl: Duration, compute: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        if let Some(cached) = self.cache.get(&key) {
            return Ok(serde_json::from_value(cached.clone())?);
        }

        let value = compute();
        let ttl = self.ttl_override.unwrap_or(ttl);
        self.cache.set(key, serde_json::to_value(&value)?, Some(ttl));
        Ok(value)
    }
}
