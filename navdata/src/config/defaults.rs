//! Default values for all configuration settings.

use super::file::config_directory;
use super::settings::*;
use crate::cycle::{DEFAULT_FILE_PREFIX, DEFAULT_FILE_SUFFIX};

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE_NAME: &str = "navdata.log";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            navdata: NavDataSettings {
                directory: None,
                file_prefix: DEFAULT_FILE_PREFIX.to_string(),
                file_suffix: DEFAULT_FILE_SUFFIX.to_string(),
            },
            logging: LoggingSettings {
                file: config_directory().join(DEFAULT_LOG_FILE_NAME),
            },
        }
    }
}
