//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod formatters;
pub mod json;
pub mod table;

/// Render a list in the requested format.
///
/// `pretty` and `table` both use the rounded table; commands with a richer
/// pretty view handle that format themselves before calling this.
pub fn render_list<T: Tabled + Serialize>(items: &[T], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(json::format_json(items)?),
        OutputFormat::Pretty | OutputFormat::Table => Ok(table::format_table(items)),
    }
}

/// Format and print a list to stdout
pub fn print_list<T: Tabled + Serialize>(items: &[T], format: OutputFormat) -> Result<()> {
    println!("{}", render_list(items, format)?);
    Ok(())
}
