//! Monitoring target settings
//!
//! `Settings` is the one record DashWatch persists. It is always handed out
//! whole: partial or corrupt blobs are replaced by [`Settings::default`]
//! before any caller sees them (see [`store::SettingsStore`]).

pub mod store;

use std::collections::BTreeSet;
use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

pub use store::{SETTINGS_KEY, SettingsStore};

/// DNS record types a domain can be monitored for
pub const RECORD_TYPES: &[&str] = &[
    "A", "AAAA", "CNAME", "MX", "TXT", "NS", "SOA", "SRV", "PTR", "CAA",
];

/// Default Netdata agent port
const NETDATA_PORT: u16 = 19999;

/// Complete monitoring configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub gitlab: GitlabSettings,
    pub uptime: UptimeSettings,
    pub dns: DnsSettings,
    pub servers: ServerSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitlabSettings {
    pub instances: Vec<GitlabInstance>,
}

/// A GitLab instance to report on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitlabInstance {
    pub url: String,
    pub name: String,

    /// Access token, opaque
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UptimeSettings {
    pub websites: Vec<Website>,
}

/// A website checked for uptime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Website {
    pub url: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSettings {
    pub domains: Vec<DnsDomain>,
}

/// A domain and the record types watched on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsDomain {
    pub domain: String,
    pub record_types: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub instances: Vec<Server>,
}

/// A server with a Netdata agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub name: String,
    pub ip: String,
    pub netdata_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gitlab: GitlabSettings {
                instances: vec![GitlabInstance {
                    url: "https://gitlab.com".to_string(),
                    name: "GitLab.com".to_string(),
                    token: None,
                }],
            },
            uptime: UptimeSettings {
                websites: vec![Website {
                    url: "https://example.com".to_string(),
                    name: "Example Website".to_string(),
                }],
            },
            dns: DnsSettings {
                domains: vec![DnsDomain {
                    domain: "example.com".to_string(),
                    record_types: ["A", "AAAA", "MX", "TXT"]
                        .iter()
                        .map(|t| t.to_string())
                        .collect(),
                }],
            },
            servers: ServerSettings {
                instances: vec![Server {
                    name: "Main Server".to_string(),
                    ip: "192.168.1.100".to_string(),
                    netdata_url: format!("http://192.168.1.100:{}", NETDATA_PORT),
                }],
            },
        }
    }
}

impl DnsDomain {
    /// Build a domain entry, normalizing record types to upper case.
    ///
    /// An empty list watches A records only.
    pub fn new<I, S>(domain: impl Into<String>, record_types: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut types = BTreeSet::new();
        for t in record_types {
            types.insert(normalize_record_type(t.as_ref())?);
        }
        if types.is_empty() {
            types.insert("A".to_string());
        }
        Ok(Self {
            domain: domain.into().trim().to_lowercase(),
            record_types: types,
        })
    }
}

impl Server {
    /// Build a server entry; the Netdata URL defaults to the agent's standard port.
    pub fn new(name: impl Into<String>, ip: impl Into<String>, netdata_url: Option<String>) -> Self {
        let ip = ip.into();
        let netdata_url = netdata_url.unwrap_or_else(|| default_netdata_url(&ip));
        Self {
            name: name.into(),
            ip,
            netdata_url,
        }
    }
}

fn default_netdata_url(ip: &str) -> String {
    match ip.parse::<IpAddr>() {
        Ok(IpAddr::V6(_)) => format!("http://[{}]:{}", ip, NETDATA_PORT),
        _ => format!("http://{}:{}", ip, NETDATA_PORT),
    }
}

fn normalize_record_type(record_type: &str) -> Result<String, SettingsError> {
    let upper = record_type.trim().to_uppercase();
    if RECORD_TYPES.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err(SettingsError::Invalid(format!(
            "unsupported DNS record type '{}' (expected one of {})",
            record_type,
            RECORD_TYPES.join(", ")
        )))
    }
}

fn check_url(what: &str, url: &str) -> Result<(), SettingsError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(SettingsError::Invalid(format!(
            "{} URL '{}' must start with http:// or https://",
            what, url
        )))
    }
}

fn check_non_empty(what: &str, value: &str) -> Result<(), SettingsError> {
    if value.trim().is_empty() {
        Err(SettingsError::Invalid(format!("{} must not be empty", what)))
    } else {
        Ok(())
    }
}

fn duplicate(what: &str, name: &str) -> SettingsError {
    SettingsError::Invalid(format!("{} '{}' already exists", what, name))
}

impl GitlabInstance {
    fn validate(&self) -> Result<(), SettingsError> {
        check_non_empty("GitLab instance name", &self.name)?;
        check_url("GitLab instance", &self.url)
    }
}

impl Website {
    fn validate(&self) -> Result<(), SettingsError> {
        check_non_empty("Website name", &self.name)?;
        check_url("Website", &self.url)
    }
}

impl DnsDomain {
    fn validate(&self) -> Result<(), SettingsError> {
        check_non_empty("Domain", &self.domain)?;
        for t in &self.record_types {
            normalize_record_type(t)?;
        }
        Ok(())
    }
}

impl Server {
    fn validate(&self) -> Result<(), SettingsError> {
        check_non_empty("Server name", &self.name)?;
        self.ip.parse::<IpAddr>().map_err(|_| {
            SettingsError::Invalid(format!("Server IP '{}' is not a valid address", self.ip))
        })?;
        check_url("Netdata", &self.netdata_url)
    }
}

impl Settings {
    /// Check every target's fields, collecting all problems found.
    ///
    /// Tokens are never inspected.
    pub fn validate(&self) -> Vec<SettingsError> {
        let checks = self
            .gitlab
            .instances
            .iter()
            .map(GitlabInstance::validate)
            .chain(self.uptime.websites.iter().map(Website::validate))
            .chain(self.dns.domains.iter().map(DnsDomain::validate))
            .chain(self.servers.instances.iter().map(Server::validate));

        checks.filter_map(|r| r.err()).collect()
    }

    pub fn add_gitlab_instance(&mut self, instance: GitlabInstance) -> Result<(), SettingsError> {
        instance.validate()?;
        if self.gitlab.instances.iter().any(|i| i.name == instance.name) {
            return Err(duplicate("GitLab instance", &instance.name));
        }
        self.gitlab.instances.push(instance);
        Ok(())
    }

    pub fn remove_gitlab_instance(&mut self, name: &str) -> bool {
        let before = self.gitlab.instances.len();
        self.gitlab.instances.retain(|i| i.name != name);
        self.gitlab.instances.len() != before
    }

    pub fn add_website(&mut self, website: Website) -> Result<(), SettingsError> {
        website.validate()?;
        if self.uptime.websites.iter().any(|w| w.name == website.name) {
            return Err(duplicate("Website", &website.name));
        }
        self.uptime.websites.push(website);
        Ok(())
    }

    pub fn remove_website(&mut self, name: &str) -> bool {
        let before = self.uptime.websites.len();
        self.uptime.websites.retain(|w| w.name != name);
        self.uptime.websites.len() != before
    }

    pub fn add_domain(&mut self, domain: DnsDomain) -> Result<(), SettingsError> {
        domain.validate()?;
        if self.dns.domains.iter().any(|d| d.domain == domain.domain) {
            return Err(duplicate("Domain", &domain.domain));
        }
        self.dns.domains.push(domain);
        Ok(())
    }

    pub fn remove_domain(&mut self, domain: &str) -> bool {
        let domain = domain.trim().to_lowercase();
        let before = self.dns.domains.len();
        self.dns.domains.retain(|d| d.domain != domain);
        self.dns.domains.len() != before
    }

    pub fn add_server(&mut self, server: Server) -> Result<(), SettingsError> {
        server.validate()?;
        if self.servers.instances.iter().any(|s| s.name == server.name) {
            return Err(duplicate("Server", &server.name));
        }
        self.servers.instances.push(server);
        Ok(())
    }

    pub fn remove_server(&mut self, name: &str) -> bool {
        let before = self.servers.instances.len();
        self.servers.instances.retain(|s| s.name != name);
        self.servers.instances.len() != before
    }

    /// Total number of configured targets across all sections
    pub fn target_count(&self) -> usize {
        self.gitlab.instances.len()
            + self.uptime.websites.len()
            + self.dns.domains.len()
            + self.servers.instances.len()
    }
}
