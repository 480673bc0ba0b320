//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.

use std::path::PathBuf;

/// Complete configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Dataset location and file naming
    pub navdata: NavDataSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// `[navdata]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct NavDataSettings {
    /// Directory holding cycle files. `None` until configured.
    pub directory: Option<PathBuf>,
    /// Cycle file name prefix
    pub file_prefix: String,
    /// Cycle file name suffix
    pub file_suffix: String,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
