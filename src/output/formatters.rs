//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Utc};

/// Format bytes as a human-readable size
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Format a past instant relative to `now`.
///
/// # Example output
/// - `just now`
/// - `12m ago`
/// - `3h ago`
/// - `2d ago`
pub fn format_relative(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = now.signed_duration_since(then).num_seconds();
    if secs < 60 {
        return "just now".to_string();
    }

    let mins = secs / 60;
    if mins < 60 {
        format!("{}m ago", mins)
    } else if mins < 24 * 60 {
        format!("{}h ago", mins / 60)
    } else {
        format!("{}d ago", mins / (24 * 60))
    }
}

/// Mask a secret, keeping only the last four characters
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}

/// Ten-cell usage bar, e.g. `[######----]`
pub fn usage_bar(percent: f64) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 10.0).round()) as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(10 - filled))
}
