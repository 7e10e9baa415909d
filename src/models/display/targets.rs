//! Monitoring target display models

use serde::Serialize;
use tabled::Tabled;

use crate::output::formatters::mask_token;
use crate::settings::{DnsDomain, GitlabInstance, Server, Website};

/// GitLab instance row. Tokens are masked unless explicitly revealed.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct GitlabInstanceDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "URL")]
    pub url: String,

    #[tabled(rename = "TOKEN")]
    pub token: String,
}

impl GitlabInstanceDisplay {
    pub fn new(instance: &GitlabInstance, show_token: bool) -> Self {
        let token = match &instance.token {
            Some(t) if show_token => t.clone(),
            Some(t) => mask_token(t),
            None => "--".to_string(),
        };

        Self {
            name: instance.name.clone(),
            url: instance.url.clone(),
            token,
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct WebsiteDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "URL")]
    pub url: String,
}

impl From<&Website> for WebsiteDisplay {
    fn from(website: &Website) -> Self {
        Self {
            name: website.name.clone(),
            url: website.url.clone(),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DomainDisplay {
    #[tabled(rename = "DOMAIN")]
    pub domain: String,

    #[tabled(rename = "RECORD TYPES")]
    pub record_types: String,
}

impl From<&DnsDomain> for DomainDisplay {
    fn from(domain: &DnsDomain) -> Self {
        let types: Vec<&str> = domain.record_types.iter().map(String::as_str).collect();
        Self {
            domain: domain.domain.clone(),
            record_types: types.join(", "),
        }
    }
}

#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ServerDisplay {
    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "IP")]
    pub ip: String,

    #[tabled(rename = "NETDATA")]
    pub netdata_url: String,
}

impl From<&Server> for ServerDisplay {
    fn from(server: &Server) -> Self {
        Self {
            name: server.name.clone(),
            ip: server.ip.clone(),
            netdata_url: server.netdata_url.clone(),
        }
    }
}
