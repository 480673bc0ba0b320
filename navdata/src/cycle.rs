//! Cycle file discovery.
//!
//! Navigation datasets are shipped as one SQLite file per AIRAC cycle, named
//! `<prefix><cycle><suffix>` (for example `ng_jeppesen_fwdfd_2312.s3db`).
//! Several cycles may sit side by side in the dataset directory; the newest
//! one is the one to load.
//!
//! # Example
//!
//! ```ignore
//! use navdata::cycle::{resolve_latest, CycleFilePattern};
//!
//! let pattern = CycleFilePattern::default();
//! if let Some(file) = resolve_latest("/path/to/navdata", &pattern) {
//!     println!("cycle {} at {}", file.cycle, file.path.display());
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

/// Default file name prefix of a cycle file.
pub const DEFAULT_FILE_PREFIX: &str = "ng_jeppesen_fwdfd_";

/// Default file name suffix of a cycle file.
pub const DEFAULT_FILE_SUFFIX: &str = ".s3db";

/// File naming rule for discoverable dataset files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleFilePattern {
    prefix: String,
    suffix: String,
}

impl CycleFilePattern {
    /// Create a pattern from an explicit prefix and suffix.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Extract the cycle number from a file name.
    ///
    /// Returns `None` when the name lacks the prefix or suffix, or when the
    /// text between them is not a non-negative decimal integer.
    pub fn parse_cycle(&self, file_name: &str) -> Option<u32> {
        // Prefix and suffix must not overlap ("abc" with prefix "ab" and suffix "bc")
        if file_name.len() < self.prefix.len() + self.suffix.len() {
            return None;
        }
        let digits = file_name
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.suffix.as_str())?;
        digits.parse().ok()
    }

    /// Build the file name for a given cycle.
    pub fn file_name(&self, cycle: u32) -> String {
        format!("{}{}{}", self.prefix, cycle, self.suffix)
    }
}

impl Default for CycleFilePattern {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_PREFIX, DEFAULT_FILE_SUFFIX)
    }
}

/// A dataset file selected for loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleFile {
    /// Full path to the SQLite file.
    pub path: PathBuf,
    /// Cycle number parsed from the file name.
    pub cycle: u32,
}

/// Find the dataset file with the highest cycle number in `dir`.
///
/// Only regular files directly inside `dir` are considered. Returns `None`
/// if `dir` does not exist, is not a directory, or holds no valid candidate.
pub fn resolve_latest<P: AsRef<Path>>(dir: P, pattern: &CycleFilePattern) -> Option<CycleFile> {
    let dir = dir.as_ref();
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "Dataset directory not readable");
            return None;
        }
    };

    let mut best: Option<CycleFile> = None;

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let Some(cycle) = pattern.parse_cycle(file_name) else {
            if file_name.starts_with(pattern.prefix()) && file_name.ends_with(pattern.suffix()) {
                tracing::debug!(file = file_name, "Skipping file with non-numeric cycle");
            }
            continue;
        };

        if best.as_ref().map_or(true, |b| cycle > b.cycle) {
            best = Some(CycleFile { path, cycle });
        }
    }

    match &best {
        Some(file) => tracing::debug!(
            cycle = file.cycle,
            path = %file.path.display(),
            "Resolved navigation data cycle"
        ),
        None => tracing::debug!(dir = %dir.display(), "No navigation data cycle file found"),
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_parse_cycle() {
        let pattern = CycleFilePattern::default();
        assert_eq!(pattern.parse_cycle("ng_jeppesen_fwdfd_2312.s3db"), Some(2312));
        assert_eq!(pattern.parse_cycle("ng_jeppesen_fwdfd_7.s3db"), Some(7));
        assert_eq!(pattern.parse_cycle("ng_jeppesen_fwdfd_23a1.s3db"), None);
        assert_eq!(pattern.parse_cycle("ng_jeppesen_fwdfd_.s3db"), None);
        assert_eq!(pattern.parse_cycle("ng_jeppesen_fwdfd_-1.s3db"), None);
        assert_eq!(pattern.parse_cycle("other_2312.s3db"), None);
        assert_eq!(pattern.parse_cycle("ng_jeppesen_fwdfd_2312.db"), None);
    }

    #[test]
    fn test_parse_cycle_overlapping_prefix_suffix() {
        let pattern = CycleFilePattern::new("ab", "bc");
        assert_eq!(pattern.parse_cycle("abc"), None);
        assert_eq!(pattern.parse_cycle("ab1bc"), Some(1));
    }

    #[test]
    fn test_resolve_picks_highest_cycle() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "ng_jeppesen_fwdfd_2301.s3db");
        touch(dir.path(), "ng_jeppesen_fwdfd_2312.s3db");
        touch(dir.path(), "readme.txt");

        let file = resolve_latest(dir.path(), &CycleFilePattern::default()).unwrap();
        assert_eq!(file.cycle, 2312);
        assert_eq!(file.path, dir.path().join("ng_jeppesen_fwdfd_2312.s3db"));
    }

    #[test]
    fn test_resolve_skips_invalid_and_directories() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "ng_jeppesen_fwdfd_2301.s3db");
        touch(dir.path(), "ng_jeppesen_fwdfd_beta.s3db");
        fs::create_dir(dir.path().join("ng_jeppesen_fwdfd_9999.s3db")).unwrap();

        let file = resolve_latest(dir.path(), &CycleFilePattern::default()).unwrap();
        assert_eq!(file.cycle, 2301);
    }

    #[test]
    fn test_resolve_is_not_recursive() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("old");
        fs::create_dir(&nested).unwrap();
        touch(&nested, "ng_jeppesen_fwdfd_2401.s3db");

        assert!(resolve_latest(dir.path(), &CycleFilePattern::default()).is_none());
    }

    #[test]
    fn test_resolve_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        assert!(resolve_latest(&missing, &CycleFilePattern::default()).is_none());
    }

    #[test]
    fn test_resolve_path_is_a_file() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "ng_jeppesen_fwdfd_2301.s3db");
        let file = dir.path().join("ng_jeppesen_fwdfd_2301.s3db");
        assert!(resolve_latest(&file, &CycleFilePattern::default()).is_none());
    }

    #[test]
    fn test_resolve_cycle_zero() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "ng_jeppesen_fwdfd_0.s3db");

        let file = resolve_latest(dir.path(), &CycleFilePattern::default()).unwrap();
        assert_eq!(file.cycle, 0);
    }

    #[test]
    fn test_custom_pattern() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "nav_1801.sqlite");
        touch(dir.path(), "ng_jeppesen_fwdfd_2312.s3db");

        let pattern = CycleFilePattern::new("nav_", ".sqlite");
        let file = resolve_latest(dir.path(), &pattern).unwrap();
        assert_eq!(file.cycle, 1801);
        assert_eq!(pattern.file_name(1801), "nav_1801.sqlite");
    }

    proptest! {
        #[test]
        fn prop_resolver_returns_max_cycle(
            cycles in proptest::collection::btree_set(0u32..100_000, 1..12),
        ) {
            let dir = TempDir::new().unwrap();
            let pattern = CycleFilePattern::default();
            for cycle in &cycles {
                touch(dir.path(), &pattern.file_name(*cycle));
            }
            touch(dir.path(), "ng_jeppesen_fwdfd_x.s3db");

            let file = resolve_latest(dir.path(), &pattern).unwrap();
            prop_assert_eq!(Some(file.cycle), cycles.iter().max().copied());
        }
    }
}
