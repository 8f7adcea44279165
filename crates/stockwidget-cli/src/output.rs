use std::io::Write;

use crate::cli::OutputFormat;
use crate::commands::{CommandResult, QuoteReport};
use crate::error::CliError;

pub fn render(
    result: &CommandResult,
    format: OutputFormat,
    pretty: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Table => render_table(result, out)?,
    }

    Ok(())
}

fn render_table(result: &CommandResult, out: &mut impl Write) -> Result<(), CliError> {
    match result {
        CommandResult::Quote(report) => render_quote(report, out)?,
        CommandResult::LogPath { log_path } => writeln!(out, "{}", log_path.display())?,
    }
    Ok(())
}

fn render_quote(report: &QuoteReport, out: &mut impl Write) -> Result<(), CliError> {
    let display = &report.display;
    writeln!(out, "{}", report.symbol)?;

    if display.status.is_error() {
        writeln!(out, "  error:  {}", display.status.message)?;
        return Ok(());
    }

    let color = display.change_color.map_or("-", |color| color.hex());
    writeln!(out, "  price:  {}", display.price_text)?;
    writeln!(out, "  change: {} [{color}]", display.change_text)?;
    Ok(())
}
