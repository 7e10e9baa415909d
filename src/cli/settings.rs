//! Settings commands: inspect and edit monitoring targets
//!
//! Every edit follows the same cycle: copy the current settings, change the
//! copy, save it whole.

use colored::Colorize;
use dialoguer::{Confirm, theme::ColorfulTheme};

use crate::cli::{
    CommandContext, DomainCommands, GitlabCommands, OutputFormat, ServerCommands,
    SettingsCommands, WebsiteCommands,
};
use crate::error::{Error, Result};
use crate::models::{DomainDisplay, GitlabInstanceDisplay, ServerDisplay, WebsiteDisplay};
use crate::output::{formatters::mask_token, json::format_json, table::format_table};
use crate::settings::{DnsDomain, GitlabInstance, SETTINGS_KEY, Server, Settings, Website};

pub fn run(ctx: &mut CommandContext, cmd: SettingsCommands) -> Result<()> {
    match cmd {
        SettingsCommands::Show { show_tokens } => show(ctx, show_tokens),
        SettingsCommands::Path => path(ctx),
        SettingsCommands::Reset { yes } => reset(ctx, yes),
        SettingsCommands::Gitlab(cmd) => gitlab(ctx, cmd),
        SettingsCommands::Website(cmd) => website(ctx, cmd),
        SettingsCommands::Domain(cmd) => domain(ctx, cmd),
        SettingsCommands::Server(cmd) => server(ctx, cmd),
    }
}

fn show(ctx: &CommandContext, show_tokens: bool) -> Result<()> {
    let settings = ctx.store.current();

    if ctx.format == OutputFormat::Json {
        let mut redacted = settings.clone();
        if !show_tokens {
            for instance in &mut redacted.gitlab.instances {
                instance.token = instance.token.as_deref().map(mask_token);
            }
        }
        println!("{}", format_json(&redacted)?);
        return Ok(());
    }

    let gitlab: Vec<GitlabInstanceDisplay> = settings
        .gitlab
        .instances
        .iter()
        .map(|i| GitlabInstanceDisplay::new(i, show_tokens))
        .collect();
    let websites: Vec<WebsiteDisplay> = settings.uptime.websites.iter().map(Into::into).collect();
    let domains: Vec<DomainDisplay> = settings.dns.domains.iter().map(Into::into).collect();
    let servers: Vec<ServerDisplay> = settings.servers.instances.iter().map(Into::into).collect();

    println!("{}", "GitLab instances".bold());
    println!("{}\n", format_table(&gitlab));
    println!("{}", "Uptime websites".bold());
    println!("{}\n", format_table(&websites));
    println!("{}", "DNS domains".bold());
    println!("{}\n", format_table(&domains));
    println!("{}", "Servers".bold());
    println!("{}", format_table(&servers));

    Ok(())
}

fn path(ctx: &CommandContext) -> Result<()> {
    let path = ctx.store.storage().slot_path(SETTINGS_KEY)?;
    println!("{}", path.display());
    Ok(())
}

fn reset(ctx: &mut CommandContext, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Replace all monitoring targets with the defaults?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Reset cancelled");
            return Ok(());
        }
    }

    ctx.store.reset()?;
    println!("{} Settings reset to defaults", "✓".green());
    Ok(())
}

/// Apply `edit` to a copy of the current settings and save the result.
fn update<F>(ctx: &mut CommandContext, edit: F) -> Result<()>
where
    F: FnOnce(&mut Settings) -> Result<()>,
{
    let mut settings = ctx.store.current().clone();
    edit(&mut settings)?;
    ctx.store.save(&settings)?;
    Ok(())
}

fn not_found(what: &str, name: &str) -> Error {
    Error::Other(format!("{} '{}' is not configured", what, name))
}

fn gitlab(ctx: &mut CommandContext, cmd: GitlabCommands) -> Result<()> {
    match cmd {
        GitlabCommands::Add { url, name, token } => {
            update(ctx, |s| {
                s.add_gitlab_instance(GitlabInstance {
                    url,
                    name: name.clone(),
                    token,
                })
                .map_err(Into::into)
            })?;
            println!("{} Added GitLab instance {}", "✓".green(), name.bold());
        }
        GitlabCommands::Remove { name } => {
            update(ctx, |s| {
                if s.remove_gitlab_instance(&name) {
                    Ok(())
                } else {
                    Err(not_found("GitLab instance", &name))
                }
            })?;
            println!("{} Removed GitLab instance {}", "✓".green(), name.bold());
        }
    }
    print_section_hint(ctx.format);
    Ok(())
}

fn website(ctx: &mut CommandContext, cmd: WebsiteCommands) -> Result<()> {
    match cmd {
        WebsiteCommands::Add { url, name } => {
            update(ctx, |s| {
                s.add_website(Website {
                    url,
                    name: name.clone(),
                })
                .map_err(Into::into)
            })?;
            println!("{} Added website {}", "✓".green(), name.bold());
        }
        WebsiteCommands::Remove { name } => {
            update(ctx, |s| {
                if s.remove_website(&name) {
                    Ok(())
                } else {
                    Err(not_found("Website", &name))
                }
            })?;
            println!("{} Removed website {}", "✓".green(), name.bold());
        }
    }
    print_section_hint(ctx.format);
    Ok(())
}

fn domain(ctx: &mut CommandContext, cmd: DomainCommands) -> Result<()> {
    match cmd {
        DomainCommands::Add {
            domain,
            record_types,
        } => {
            let entry = DnsDomain::new(domain, &record_types)?;
            let name = entry.domain.clone();
            update(ctx, |s| s.add_domain(entry).map_err(Into::into))?;
            println!("{} Watching domain {}", "✓".green(), name.bold());
        }
        DomainCommands::Remove { domain } => {
            update(ctx, |s| {
                if s.remove_domain(&domain) {
                    Ok(())
                } else {
                    Err(not_found("Domain", &domain))
                }
            })?;
            println!("{} Stopped watching domain {}", "✓".green(), domain.bold());
        }
    }
    print_section_hint(ctx.format);
    Ok(())
}

fn server(ctx: &mut CommandContext, cmd: ServerCommands) -> Result<()> {
    match cmd {
        ServerCommands::Add {
            name,
            ip,
            netdata_url,
        } => {
            let entry = Server::new(name.clone(), ip, netdata_url);
            update(ctx, |s| s.add_server(entry).map_err(Into::into))?;
            println!("{} Added server {}", "✓".green(), name.bold());
        }
        ServerCommands::Remove { name } => {
            update(ctx, |s| {
                if s.remove_server(&name) {
                    Ok(())
                } else {
                    Err(not_found("Server", &name))
                }
            })?;
            println!("{} Removed server {}", "✓".green(), name.bold());
        }
    }
    print_section_hint(ctx.format);
    Ok(())
}

fn print_section_hint(format: OutputFormat) {
    if format == OutputFormat::Pretty {
        println!("  → Run '{}' to see the result", "dashwatch settings show".cyan());
    }
}

