//! Dashboard command: monitoring cards per section

use chrono::Utc;
use colored::Colorize;
use serde::Serialize;

use crate::cli::{CommandContext, OutputFormat, Section};
use crate::error::Result;
use crate::models::{DnsRecordDisplay, ProjectDisplay, ServerMetricsDisplay, UptimeDisplay};
use crate::monitor::{
    DnsRecord, GitlabProject, MonitoringSummary, PipelineStatus, ServerMetrics, ServerStatus,
    UptimeStats, UptimeStatus,
};
use crate::output::{
    formatters::{format_relative, usage_bar},
    json::format_json,
    print_list,
};

/// Everything the dashboard shows, for JSON output
#[derive(Debug, Serialize)]
struct DashboardData {
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<MonitoringSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gitlab: Option<Vec<GitlabProject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    uptime: Option<Vec<UptimeStats>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dns: Option<Vec<DnsRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    servers: Option<Vec<ServerMetrics>>,
}

pub fn run(ctx: &mut CommandContext, section: Section) -> Result<()> {
    let settings = ctx.store.current().clone();
    let service = &mut ctx.dashboard;
    let wants = |s: Section| section == Section::All || section == s;

    let data = DashboardData {
        summary: match section {
            Section::All => Some(service.summary(&settings)?),
            _ => None,
        },
        gitlab: wants(Section::Gitlab)
            .then(|| service.gitlab_projects(&settings))
            .transpose()?,
        uptime: wants(Section::Uptime)
            .then(|| service.uptime_stats(&settings))
            .transpose()?,
        dns: wants(Section::Dns)
            .then(|| service.dns_records(&settings))
            .transpose()?,
        servers: wants(Section::Servers)
            .then(|| service.server_metrics(&settings))
            .transpose()?,
    };

    let stats = service.cache_stats();
    log::debug!(
        "Dashboard cache: {} entries, {:.1}% hits, {:.1}% misses",
        stats.total_entries,
        stats.hit_rate,
        stats.miss_rate
    );

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&data)?),
        OutputFormat::Table => print_tables(&data)?,
        OutputFormat::Pretty => print_cards(&data),
    }

    Ok(())
}

fn print_tables(data: &DashboardData) -> Result<()> {
    let now = Utc::now();
    if let Some(projects) = &data.gitlab {
        let rows: Vec<ProjectDisplay> = projects.iter().map(|p| ProjectDisplay::new(p, now)).collect();
        print_list(&rows, OutputFormat::Table)?;
    }
    if let Some(uptime) = &data.uptime {
        let rows: Vec<UptimeDisplay> = uptime.iter().map(Into::into).collect();
        print_list(&rows, OutputFormat::Table)?;
    }
    if let Some(records) = &data.dns {
        let rows: Vec<DnsRecordDisplay> = records.iter().map(Into::into).collect();
        print_list(&rows, OutputFormat::Table)?;
    }
    if let Some(servers) = &data.servers {
        let rows: Vec<ServerMetricsDisplay> = servers.iter().map(Into::into).collect();
        print_list(&rows, OutputFormat::Table)?;
    }
    Ok(())
}

fn print_cards(data: &DashboardData) {
    let now = Utc::now();

    if let Some(summary) = &data.summary {
        println!("{}\n", "DashWatch".bold());
        println!(
            "Pipelines failing: {}   Sites down: {}   Servers offline: {}   Avg uptime: {:.1}%\n",
            highlight_count(summary.failing_pipelines),
            highlight_count(summary.websites_down),
            highlight_count(summary.servers_offline),
            summary.average_uptime_percent
        );
    }

    if let Some(projects) = &data.gitlab {
        print_heading("GitLab", projects.len());
        for p in projects {
            let marker = match p.pipeline_status {
                PipelineStatus::Success => "●".green(),
                PipelineStatus::Failed => "●".red(),
                PipelineStatus::Running => "●".yellow(),
                PipelineStatus::Pending => "●".dimmed(),
            };
            println!(
                "  {} {} {}  {} MRs, {} issues, {}",
                marker,
                p.name.bold(),
                format!("({})", p.instance).dimmed(),
                p.open_merge_requests,
                p.open_issues,
                format_relative(p.last_activity, now)
            );
        }
        println!();
    }

    if let Some(uptime) = &data.uptime {
        print_heading("Uptime", uptime.len());
        for s in uptime {
            let (marker, response) = match s.status {
                UptimeStatus::Up => ("▲".green(), format!("{} ms", s.response_time_ms)),
                UptimeStatus::Down => ("▼".red(), "no response".to_string()),
            };
            println!(
                "  {} {} {}  {:.1}% uptime, {}",
                marker,
                s.name.bold(),
                s.url.dimmed(),
                s.uptime_percent,
                response
            );
        }
        println!();
    }

    if let Some(records) = &data.dns {
        print_heading("DNS", records.len());
        for r in records {
            println!(
                "  {:<6} {} → {} {}",
                r.record_type.cyan(),
                r.domain,
                r.value,
                format!("(ttl {})", r.ttl).dimmed()
            );
        }
        println!();
    }

    if let Some(servers) = &data.servers {
        print_heading("Servers", servers.len());
        for m in servers {
            let marker = match m.status {
                ServerStatus::Online => "●".green(),
                ServerStatus::Warning => "●".yellow(),
                ServerStatus::Offline => "●".red(),
            };
            println!("  {} {} {}", marker, m.name.bold(), m.ip.dimmed());
            if m.status == ServerStatus::Offline {
                println!("      unreachable, see {}", m.netdata_url.cyan());
                continue;
            }
            println!("      CPU  {} {:>5.1}%", usage_bar(m.cpu_percent), m.cpu_percent);
            println!("      MEM  {} {:>5.1}%", usage_bar(m.memory_percent), m.memory_percent);
            println!("      DISK {} {:>5.1}%", usage_bar(m.disk_percent), m.disk_percent);
            println!("      load {:.2}, up {}h", m.load_average, m.uptime_hours);
        }
        println!();
    }
}

fn print_heading(title: &str, count: usize) {
    println!("{} {}", title.bold().underline(), format!("({})", count).dimmed());
    if count == 0 {
        println!("  {}", "Nothing configured.".dimmed());
    }
}

fn highlight_count(count: usize) -> colored::ColoredString {
    if count == 0 {
        count.to_string().green()
    } else {
        count.to_string().red()
    }
}
