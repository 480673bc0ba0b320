//! navdata CLI - Command-line interface
//!
//! Queries navigation dataset files through the navdata library.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::common::OutputFormat;
use commands::config::ConfigCommands;
use commands::location::LocationCommands;
use error::CliError;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "navdata")]
#[command(version = navdata::VERSION)]
#[command(about = "Query AIRAC navigation datasets", long_about = None)]
struct Cli {
    /// Dataset directory (overrides navdata.directory from config)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true, default_value = "text")]
    format: OutputFormat,

    /// Also print log output to stdout
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Enable debug-level logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show or set the dataset directory
    Location {
        #[command(subcommand)]
        command: LocationCommands,
    },

    /// Show the header of the newest cycle
    Header,

    /// Show one airport with all attributes
    Airport {
        /// Airport identifier (exact, case-sensitive, e.g. KJFK)
        ident: String,
    },

    /// List airports in identifier order
    Airports {
        /// Maximum number of airports to list
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show the navigation point with this exact identifier
    Point {
        /// Navaid, waypoint or airport identifier
        ident: String,
    },

    /// Show the first navigation point whose identifier starts with a prefix
    Search {
        /// Identifier prefix
        prefix: String,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    // Config commands run without the runner so a broken config file can
    // still be inspected
    let command = match cli.command {
        Commands::Config { command } => return commands::config::run(command),
        other => other,
    };

    let runner = CliRunner::new(cli.dir, cli.verbose, cli.debug)?;
    let format = cli.format;

    match command {
        Commands::Location { command } => {
            runner.log_startup("location");
            commands::location::run(&runner, command)
        }
        Commands::Header => {
            runner.log_startup("header");
            commands::lookup::run_header(&runner, format)
        }
        Commands::Airport { ident } => {
            runner.log_startup("airport");
            commands::lookup::run_airport(&runner, &ident, format)
        }
        Commands::Airports { limit } => {
            runner.log_startup("airports");
            commands::lookup::run_airports(&runner, limit, format)
        }
        Commands::Point { ident } => {
            runner.log_startup("point");
            commands::lookup::run_point(&runner, &ident, format)
        }
        Commands::Search { prefix } => {
            runner.log_startup("search");
            commands::lookup::run_search(&runner, &prefix, format)
        }
        Commands::Config { command } => commands::config::run(command),
    }
}
