//! Display models for CLI output
//!
//! Conversions from settings and synthetic monitoring types into
//! CLI-friendly table/JSON rows.

pub mod display;

pub use display::{
    AuditDisplay, DnsRecordDisplay, DomainDisplay, GitlabInstanceDisplay, ProjectDisplay,
    ServerDisplay, ServerMetricsDisplay, UptimeDisplay, WebsiteDisplay,
};
