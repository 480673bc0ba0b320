//! Dataset location commands.
//!
//! `location set` creates the directory and persists it as
//! `navdata.directory`, so later commands find it without `--dir`.

use std::path::PathBuf;

use clap::Subcommand;
use navdata::config::ConfigKey;
use navdata::NavDataContext;
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Location subcommands.
#[derive(Debug, Subcommand)]
pub enum LocationCommands {
    /// Show the dataset directory and the cycle file it resolves to
    Get,

    /// Set the dataset directory, creating it if needed
    Set {
        /// Directory holding cycle files
        path: PathBuf,
    },
}

/// Run a location subcommand.
pub fn run(runner: &CliRunner, command: LocationCommands) -> Result<(), CliError> {
    match command {
        LocationCommands::Get => run_get(runner),
        LocationCommands::Set { path } => run_set(runner, path),
    }
}

fn run_get(runner: &CliRunner) -> Result<(), CliError> {
    let Ok(dir) = runner.dataset_dir() else {
        println!("(not set)");
        return Ok(());
    };
    println!("{}", dir.display());

    let pattern = runner.config().cycle_pattern();
    match navdata::resolve_latest(&dir, &pattern) {
        Some(file) => println!("  cycle {} ({})", file.cycle, file.path.display()),
        None => println!("  no cycle file found"),
    }
    Ok(())
}

fn run_set(runner: &CliRunner, path: PathBuf) -> Result<(), CliError> {
    let context = NavDataContext::with_pattern(runner.config().cycle_pattern());
    context.set_dataset_location(&path)?;
    let path = std::fs::canonicalize(&path).unwrap_or(path);

    let mut config = runner.config().clone();
    ConfigKey::NavDataDirectory
        .set(&mut config, &path.to_string_lossy())
        .map_err(|e| CliError::Config(e.to_string()))?;
    config.save()?;

    info!(path = %path.display(), "Dataset location saved");
    println!("Set {} = {}", ConfigKey::NavDataDirectory.name(), path.display());
    Ok(())
}
