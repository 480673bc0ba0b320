//! Dataset query commands.
//!
//! Every command resolves the newest cycle and reads its header first;
//! table loads only run once that succeeds. Missing data is reported on
//! stdout and is not an error.

use navdata::{DatasetHeader, NavDataContext};
use tracing::debug;

use super::common::{print_record, render, render_all, OutputFormat};
use crate::error::CliError;
use crate::runner::CliRunner;

const NO_DATA: &str = "no navigation data available";

/// Open the dataset, printing a notice when none is available.
fn open(runner: &CliRunner) -> Result<Option<(NavDataContext, DatasetHeader)>, CliError> {
    let dataset = runner.open_dataset()?;
    if dataset.is_none() {
        println!("{}", NO_DATA);
    }
    Ok(dataset)
}

/// Print the header of the newest cycle.
pub fn run_header(runner: &CliRunner, format: OutputFormat) -> Result<(), CliError> {
    let Some((context, header)) = open(runner)? else {
        return Ok(());
    };
    if let Some(source) = context.loaded_source() {
        debug!(path = %source.path.display(), "Header source");
    }
    println!("{}", render(&header, format)?);
    Ok(())
}

/// Print one airport with its full attribute set.
pub fn run_airport(runner: &CliRunner, ident: &str, format: OutputFormat) -> Result<(), CliError> {
    let Some((context, _)) = open(runner)? else {
        return Ok(());
    };
    context.load_airports();
    print_record(context.get_airport(ident).as_ref(), format)
}

/// List airports in identifier order.
pub fn run_airports(
    runner: &CliRunner,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let Some((context, _)) = open(runner)? else {
        return Ok(());
    };
    context.load_airports();
    let airports = context.airports();

    match format {
        OutputFormat::Text => {
            for airport in airports.iter().take(limit.unwrap_or(usize::MAX)) {
                println!("{:<6}{}", airport.identifier, airport.name);
            }
        }
        OutputFormat::Json => {
            let records = airports.iter().take(limit.unwrap_or(usize::MAX));
            println!("{}", render_all(records, format)?);
        }
    }
    Ok(())
}

/// Print the navigation point with exactly this identifier.
pub fn run_point(runner: &CliRunner, ident: &str, format: OutputFormat) -> Result<(), CliError> {
    let Some((context, _)) = open(runner)? else {
        return Ok(());
    };
    context.load_nav_points();
    print_record(context.get_nav_point(ident).as_ref(), format)
}

/// Print the first navigation point whose identifier starts with `prefix`.
pub fn run_search(runner: &CliRunner, prefix: &str, format: OutputFormat) -> Result<(), CliError> {
    let Some((context, _)) = open(runner)? else {
        return Ok(());
    };
    if let Some(count) = context.load_nav_points() {
        debug!(count, prefix, "Searching navigation points");
    }
    let point = context.search_nav_point(prefix);
    if let Some(point) = &point {
        debug!(table = %point.source, identifier = %point.identifier, "Prefix match");
    }
    print_record(point.as_ref(), format)
}
