//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [navdata] section
    if let Some(section) = ini.section(Some("navdata")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.navdata.directory = Some(expand_tilde(v));
            }
        }
        if let Some(v) = section.get("file_prefix") {
            config.navdata.file_prefix = file_name_part("file_prefix", v)?;
        }
        if let Some(v) = section.get("file_suffix") {
            config.navdata.file_suffix = file_name_part("file_suffix", v)?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

/// Validate a cycle file name prefix or suffix.
pub(super) fn validate_file_name_part(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("must not be empty".to_string());
    }
    if value.contains(['/', '\\']) {
        return Err("must not contain path separators".to_string());
    }
    Ok(())
}

fn file_name_part(key: &str, value: &str) -> Result<String, ConfigFileError> {
    let value = value.trim();
    validate_file_name_part(value).map_err(|reason| ConfigFileError::InvalidValue {
        section: "navdata".to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason,
    })?;
    Ok(value.to_string())
}

/// Expand a leading `~/` to the home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
