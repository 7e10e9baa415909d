//! Display model implementations for table and JSON output

mod cards;
mod common;
mod targets;

pub use cards::{
    AuditDisplay, DnsRecordDisplay, ProjectDisplay, ServerMetricsDisplay, UptimeDisplay,
};
pub use targets::{DomainDisplay, GitlabInstanceDisplay, ServerDisplay, WebsiteDisplay};
