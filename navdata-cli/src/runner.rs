//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and context creation
//! to reduce duplication across command handlers.

use std::path::PathBuf;

use navdata::config::ConfigFile;
use navdata::logging::{init_logging_full, LoggingGuard};
use navdata::{DatasetHeader, NavDataContext};
use tracing::info;

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
    /// Dataset directory given on the command line
    dir_override: Option<PathBuf>,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// # Arguments
    ///
    /// * `dir_override` - Dataset directory taking precedence over config
    /// * `verbose` - Mirror log output to stdout
    /// * `debug_mode` - Enable debug-level logging when RUST_LOG is unset
    pub fn new(
        dir_override: Option<PathBuf>,
        verbose: bool,
        debug_mode: bool,
    ) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let log_path = &config.logging.file;
        let log_dir = log_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(navdata::logging::default_log_dir);
        let log_file = log_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| navdata::logging::default_log_file().to_string());

        let logging_guard = init_logging_full(&log_dir, &log_file, verbose, debug_mode)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
            dir_override,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("navdata v{}", navdata::VERSION);
        info!("navdata CLI: {} command", command);
    }

    /// Dataset directory from `--dir` or config.
    pub fn dataset_dir(&self) -> Result<PathBuf, CliError> {
        self.dir_override
            .clone()
            .or_else(|| self.config.navdata.directory.clone())
            .ok_or_else(|| {
                CliError::Config(
                    "Navigation data directory not set. \
                     Use 'navdata location set <PATH>' or --dir"
                        .to_string(),
                )
            })
    }

    /// Create a context pointed at the dataset directory.
    pub fn context(&self) -> Result<NavDataContext, CliError> {
        let context = NavDataContext::with_pattern(self.config.cycle_pattern());
        context.set_dataset_location(self.dataset_dir()?)?;
        Ok(context)
    }

    /// Create a context and load the newest cycle's header.
    ///
    /// Returns `None` when no readable cycle file is found.
    pub fn open_dataset(&self) -> Result<Option<(NavDataContext, DatasetHeader)>, CliError> {
        let context = self.context()?;
        Ok(context.load_header().map(|header| (context, header)))
    }
}
