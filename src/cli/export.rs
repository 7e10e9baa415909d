//! Export command implementation

use std::path::Path;

use colored::Colorize;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::{Error, Result};
use crate::export::export_data;
use crate::output::json::format_json;

pub fn run(
    ctx: &mut CommandContext,
    data_type: &str,
    file_format: &str,
    output: Option<&str>,
) -> Result<()> {
    let settings = ctx.store.current().clone();
    let result = export_data(
        &mut ctx.dashboard,
        &settings,
        data_type,
        file_format,
        output.map(Path::new),
    );

    if ctx.format == OutputFormat::Json {
        println!("{}", format_json(&result)?);
    } else if result.success {
        println!("{} {}", "✓".green(), result.message);
    }

    if result.success {
        Ok(())
    } else {
        Err(Error::Other(result.message))
    }
}
