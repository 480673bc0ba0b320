//! Configuration key access and validation.
//!
//! Type-safe getting and setting of configuration values by key name, with
//! validation via the Specification Pattern.

use std::str::FromStr;
use thiserror::Error;

use super::parser::{expand_tilde, validate_file_name_part};
use super::settings::ConfigFile;
use super::writer::path_to_string;

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    NavDataDirectory,
    NavDataFilePrefix,
    NavDataFileSuffix,
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "navdata.directory" => Ok(ConfigKey::NavDataDirectory),
            "navdata.file_prefix" => Ok(ConfigKey::NavDataFilePrefix),
            "navdata.file_suffix" => Ok(ConfigKey::NavDataFileSuffix),
            "logging.file" => Ok(ConfigKey::LoggingFile),
            _ => Err(ConfigKeyError::UnknownKey(s.to_string())),
        }
    }
}

impl ConfigKey {
    /// Get the canonical key name (e.g., "navdata.directory").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::NavDataDirectory => "navdata.directory",
            ConfigKey::NavDataFilePrefix => "navdata.file_prefix",
            ConfigKey::NavDataFileSuffix => "navdata.file_suffix",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Get the section name (e.g., "navdata").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Get the key name within its section (e.g., "directory").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or("")
    }

    /// Get the value from a config file as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::NavDataDirectory => config
                .navdata
                .directory
                .as_ref()
                .map(|p| path_to_string(p))
                .unwrap_or_default(),
            ConfigKey::NavDataFilePrefix => config.navdata.file_prefix.clone(),
            ConfigKey::NavDataFileSuffix => config.navdata.file_suffix.clone(),
            ConfigKey::LoggingFile => path_to_string(&config.logging.file),
        }
    }

    /// Set the value in a config file.
    ///
    /// Validates the value according to the key's specification before setting.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        let value = value.trim();
        self.validate(value)?;

        match self {
            ConfigKey::NavDataDirectory => {
                config.navdata.directory = if value.is_empty() {
                    None
                } else {
                    Some(expand_tilde(value))
                };
            }
            ConfigKey::NavDataFilePrefix => config.navdata.file_prefix = value.to_string(),
            ConfigKey::NavDataFileSuffix => config.navdata.file_suffix = value.to_string(),
            ConfigKey::LoggingFile => config.logging.file = expand_tilde(value),
        }
        Ok(())
    }

    /// Validate a value for this key without setting it.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.specification()
            .is_satisfied_by(value)
            .map_err(|reason| ConfigKeyError::ValidationFailed {
                key: self.name().to_string(),
                reason,
            })
    }

    fn specification(&self) -> Box<dyn ValueSpecification> {
        match self {
            ConfigKey::NavDataDirectory => Box::new(OptionalPathSpec),
            ConfigKey::NavDataFilePrefix | ConfigKey::NavDataFileSuffix => {
                Box::new(FileNamePartSpec)
            }
            ConfigKey::LoggingFile => Box::new(PathSpec),
        }
    }

    /// All keys in display order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::NavDataDirectory,
            ConfigKey::NavDataFilePrefix,
            ConfigKey::NavDataFileSuffix,
            ConfigKey::LoggingFile,
        ]
    }
}

trait ValueSpecification {
    /// Returns Ok(()) if valid, Err(reason) if invalid.
    fn is_satisfied_by(&self, value: &str) -> Result<(), String>;
}

/// Non-empty path.
struct PathSpec;

impl ValueSpecification for PathSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            Err("must be a valid path".to_string())
        } else {
            Ok(())
        }
    }
}

/// Path or empty to unset.
struct OptionalPathSpec;

impl ValueSpecification for OptionalPathSpec {
    fn is_satisfied_by(&self, _value: &str) -> Result<(), String> {
        Ok(())
    }
}

/// Cycle file name prefix or suffix.
struct FileNamePartSpec;

impl ValueSpecification for FileNamePartSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        validate_file_name_part(value)
    }
}
