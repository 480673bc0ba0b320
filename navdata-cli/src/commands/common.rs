//! Common types and utilities shared across CLI commands.

use clap::ValueEnum;
use navdata::{FieldMap, Record};

use crate::error::CliError;

/// Output format selection for CLI arguments.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `name: value` line per field
    #[default]
    Text,
    /// JSON object keyed by field name
    Json,
}

/// Render a record in the requested format.
pub fn render<T: Record>(record: &T, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => {
            let width = T::FIELDS.iter().map(|d| d.name.len()).max().unwrap_or(0);
            let lines: Vec<String> = record
                .fields()
                .map(|(name, value)| format!("{:<width$}  {}", name, value, width = width))
                .collect();
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&FieldMap(record))?),
    }
}

/// Render several records; JSON output is an array.
pub fn render_all<'a, T: Record + 'a>(
    records: impl Iterator<Item = &'a T>,
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => {
            let blocks = records
                .map(|r| render(r, format))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(blocks.join("\n\n"))
        }
        OutputFormat::Json => {
            let maps: Vec<FieldMap<'_, T>> = records.map(FieldMap).collect();
            Ok(serde_json::to_string_pretty(&maps)?)
        }
    }
}

/// Print a record, or "not found" when absent.
pub fn print_record<T: Record>(record: Option<&T>, format: OutputFormat) -> Result<(), CliError> {
    match record {
        Some(record) => println!("{}", render(record, format)?),
        None => println!("not found"),
    }
    Ok(())
}
