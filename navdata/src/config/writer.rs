//! INI serialization logic for converting `ConfigFile` → INI string.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let directory = config
        .navdata
        .directory
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();

    format!(
        r#"[navdata]
; Directory holding navigation dataset files, one per AIRAC cycle.
; The file with the highest cycle number is loaded.
; Example: directory = ~/navdata
directory = {}
; Dataset file names are <file_prefix><cycle><file_suffix>,
; e.g. ng_jeppesen_fwdfd_2312.s3db
file_prefix = {}
file_suffix = {}

[logging]
; Log file path (cleared at the start of each session)
file = {}
"#,
        directory,
        config.navdata.file_prefix,
        config.navdata.file_suffix,
        path_to_string(&config.logging.file),
    )
}

/// Render a path, abbreviating the home directory as `~`.
pub(super) fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
