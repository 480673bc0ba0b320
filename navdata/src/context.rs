//! Navigation data context.
//!
//! [`NavDataContext`] owns everything a host needs between calls: the
//! configured dataset directory, the file the last header was read from,
//! the availability flag, and both indexes.
//!
//! # Load sequence
//!
//! ```text
//! set_dataset_location(dir)
//!   → load_header()        resolve newest cycle file, read header, mark available
//!   → load_airports()      rebuild AirportIndex from the same file
//!   → load_nav_points()    rebuild NavPointIndex from the same file
//! ```
//!
//! Table loads never resolve a cycle on their own. They read the file that
//! produced the last successful header, and do nothing while no header is
//! loaded.
//!
//! # Thread Safety
//!
//! State sits behind a `RwLock`. Indexes are immutable `Arc` snapshots: a
//! load builds the new index without holding the lock and swaps it in
//! afterwards, so queries observe either the old or the new index in full.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::cycle::{resolve_latest, CycleFile, CycleFilePattern};
use crate::dataset::{AirportRecord, DatasetHeader, DatasetReader, NavPoint};
use crate::index::{AirportIndex, NavPointIndex};

/// Errors surfaced to the host.
#[derive(Debug, thiserror::Error)]
pub enum NavDataError {
    /// The dataset directory could not be created.
    #[error("Failed to create navigation data directory {}: {source}", .path.display())]
    Configuration {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Default)]
struct ContextState {
    location: Option<PathBuf>,
    source: Option<CycleFile>,
    header: Option<DatasetHeader>,
    available: bool,
    airports: Arc<AirportIndex>,
    nav_points: Arc<NavPointIndex>,
}

impl ContextState {
    fn mark_unavailable(&mut self) {
        self.available = false;
        self.source = None;
        self.header = None;
    }
}

/// Owned navigation data state for one host.
#[derive(Debug, Default)]
pub struct NavDataContext {
    pattern: CycleFilePattern,
    state: RwLock<ContextState>,
}

impl NavDataContext {
    /// Create an empty context using the default cycle file pattern.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty context that discovers files with `pattern`.
    pub fn with_pattern(pattern: CycleFilePattern) -> Self {
        Self {
            pattern,
            state: RwLock::new(ContextState::default()),
        }
    }

    /// Set the dataset directory, creating it if needed.
    ///
    /// Does not load anything and does not change availability; call
    /// [`load_header`](Self::load_header) to pick up data from the new
    /// location.
    pub fn set_dataset_location<P: AsRef<Path>>(&self, path: P) -> Result<(), NavDataError> {
        let path = path.as_ref();
        std::fs::create_dir_all(path).map_err(|source| NavDataError::Configuration {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), "Navigation data location set");
        self.state.write().location = Some(path.to_path_buf());
        Ok(())
    }

    /// The configured dataset directory.
    pub fn dataset_location(&self) -> Option<PathBuf> {
        self.state.read().location.clone()
    }

    /// Resolve the newest cycle file and read its header.
    ///
    /// On success the file becomes the loaded source for subsequent table
    /// loads and navigation data is marked available. On any failure
    /// availability is cleared and `None` is returned. Existing indexes are
    /// left untouched either way.
    pub fn load_header(&self) -> Option<DatasetHeader> {
        let Some(location) = self.dataset_location() else {
            tracing::warn!("Navigation data location not set");
            self.state.write().mark_unavailable();
            return None;
        };

        let Some(file) = resolve_latest(&location, &self.pattern) else {
            tracing::warn!(location = %location.display(), "No navigation data cycle found");
            self.state.write().mark_unavailable();
            return None;
        };

        let header = match DatasetReader::open(&file.path).and_then(|r| r.read_header()) {
            Ok(header) => header,
            Err(e) => {
                tracing::warn!(error = %e, "Navigation data header unavailable");
                self.state.write().mark_unavailable();
                return None;
            }
        };

        tracing::info!(
            cycle = file.cycle,
            path = %file.path.display(),
            revision = %header.revision,
            "Navigation data header loaded"
        );

        let mut state = self.state.write();
        state.available = true;
        state.source = Some(file);
        state.header = Some(header.clone());
        Some(header)
    }

    /// Whether the last header read succeeded.
    pub fn is_available(&self) -> bool {
        self.state.read().available
    }

    /// The file the last successful header was read from.
    pub fn loaded_source(&self) -> Option<CycleFile> {
        self.state.read().source.clone()
    }

    /// The last successfully read header.
    pub fn header(&self) -> Option<DatasetHeader> {
        self.state.read().header.clone()
    }

    /// Rebuild the airport index from the loaded source.
    ///
    /// Returns the number of airports loaded, or `None` if no header has been
    /// loaded. A file or table that cannot be read yields an empty index.
    pub fn load_airports(&self) -> Option<usize> {
        let source = self.available_source()?;

        let records = match DatasetReader::open(&source.path).and_then(|r| r.read_airports()) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "Airport table unreadable, loading empty index");
                Vec::new()
            }
        };

        let index = Arc::new(AirportIndex::from_records(records));
        let count = index.len();
        self.state.write().airports = index;

        tracing::info!(count, cycle = source.cycle, "Built airport index");
        Some(count)
    }

    /// Snapshot of the current airport index.
    pub fn airports(&self) -> Arc<AirportIndex> {
        Arc::clone(&self.state.read().airports)
    }

    /// Look up an airport by exact identifier.
    pub fn get_airport(&self, identifier: &str) -> Option<AirportRecord> {
        self.airports().get(identifier).cloned()
    }

    /// Rebuild the unified navigation index from the loaded source.
    ///
    /// Returns the number of points loaded, or `None` if no header has been
    /// loaded. Tables that cannot be read contribute no points.
    pub fn load_nav_points(&self) -> Option<usize> {
        let source = self.available_source()?;

        let points = match DatasetReader::open(&source.path) {
            Ok(reader) => reader.read_nav_points(),
            Err(e) => {
                tracing::warn!(error = %e, "Dataset unreadable, loading empty navigation index");
                Vec::new()
            }
        };

        let index = Arc::new(NavPointIndex::from_points(points));
        for (table, rows) in index.counts_by_source() {
            tracing::debug!(table = %table, rows, "Indexed navigation points");
        }
        let count = index.len();
        self.state.write().nav_points = index;

        tracing::info!(count, cycle = source.cycle, "Built navigation point index");
        Some(count)
    }

    /// Snapshot of the current unified navigation index.
    pub fn nav_points(&self) -> Arc<NavPointIndex> {
        Arc::clone(&self.state.read().nav_points)
    }

    /// Look up a navigation point by exact identifier.
    pub fn get_nav_point(&self, identifier: &str) -> Option<NavPoint> {
        self.nav_points().get(identifier).cloned()
    }

    /// First navigation point whose identifier starts with `prefix`.
    pub fn search_nav_point(&self, prefix: &str) -> Option<NavPoint> {
        self.nav_points().search_prefix(prefix).cloned()
    }

    /// Load the header and, if it succeeds, both indexes.
    pub fn load_all(&self) -> Option<DatasetHeader> {
        let header = self.load_header()?;
        self.load_airports();
        self.load_nav_points();
        Some(header)
    }

    /// Drop loaded data and availability. The dataset location is kept.
    pub fn reset(&self) {
        let mut state = self.state.write();
        state.mark_unavailable();
        state.airports = Arc::new(AirportIndex::new());
        state.nav_points = Arc::new(NavPointIndex::new());
        tracing::debug!("Navigation data context reset");
    }

    fn available_source(&self) -> Option<CycleFile> {
        let state = self.state.read();
        if !state.available {
            tracing::debug!("Navigation data not available, skipping table load");
            return None;
        }
        state.source.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SourceTable;
    use crate::test_support::{DatasetBuilder, TestAirport, TestPoint};
    use tempfile::TempDir;

    const CYCLE_FILE: &str = "ng_jeppesen_fwdfd_2312.s3db";

    fn populated(dir: &Path) -> PathBuf {
        DatasetBuilder::new()
            .with_header("2312")
            .with_airport(TestAirport::new("KJFK", "JOHN F KENNEDY INTL", 40.6, -73.7, 13.0))
            .with_point(SourceTable::VhfNavaids, TestPoint::new("JFK", "KENNEDY"))
            .write(dir, CYCLE_FILE)
    }

    #[test]
    fn test_set_location_creates_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let context = NavDataContext::new();

        context.set_dataset_location(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(context.dataset_location(), Some(nested));
    }

    #[test]
    fn test_set_location_failure_reports_path() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("occupied");
        std::fs::write(&file, b"").unwrap();
        let target = file.join("navdata");

        let context = NavDataContext::new();
        let err = context.set_dataset_location(&target).unwrap_err();
        assert!(err.to_string().contains(&target.display().to_string()));
        assert!(context.dataset_location().is_none());
    }

    #[test]
    fn test_load_header_without_location() {
        let context = NavDataContext::new();
        assert!(context.load_header().is_none());
        assert!(!context.is_available());
    }

    #[test]
    fn test_load_header_marks_available() {
        let dir = TempDir::new().unwrap();
        let path = populated(dir.path());

        let context = NavDataContext::new();
        context.set_dataset_location(dir.path()).unwrap();
        let header = context.load_header().unwrap();

        assert_eq!(header.cycle, "2312");
        assert!(context.is_available());
        assert_eq!(context.loaded_source().unwrap().path, path);
        assert_eq!(context.header(), Some(header));
    }

    #[test]
    fn test_table_loads_require_header() {
        let dir = TempDir::new().unwrap();
        populated(dir.path());

        let context = NavDataContext::new();
        context.set_dataset_location(dir.path()).unwrap();

        assert_eq!(context.load_airports(), None);
        assert_eq!(context.load_nav_points(), None);
        assert!(context.airports().is_empty());
        assert!(context.get_nav_point("JFK").is_none());
    }

    #[test]
    fn test_failed_header_clears_stale_availability() {
        let dir = TempDir::new().unwrap();
        populated(dir.path());

        let context = NavDataContext::new();
        context.set_dataset_location(dir.path()).unwrap();
        assert!(context.load_header().is_some());

        // A newer cycle without a header row takes precedence and fails
        DatasetBuilder::new().write(dir.path(), "ng_jeppesen_fwdfd_2401.s3db");
        assert!(context.load_header().is_none());
        assert!(!context.is_available());
        assert!(context.loaded_source().is_none());
        assert_eq!(context.load_airports(), None);
    }

    #[test]
    fn test_load_and_query() {
        let dir = TempDir::new().unwrap();
        populated(dir.path());

        let context = NavDataContext::new();
        context.set_dataset_location(dir.path()).unwrap();
        context.load_header().unwrap();

        assert_eq!(context.load_airports(), Some(1));
        assert_eq!(context.load_nav_points(), Some(2));
        let counts = context.nav_points().counts_by_source();
        assert_eq!(counts.get(&SourceTable::Airports), Some(&1));
        assert_eq!(counts.get(&SourceTable::VhfNavaids), Some(&1));

        assert_eq!(context.get_airport("KJFK").unwrap().elevation, 13.0);
        assert!(context.get_airport("JFK").is_none());
        assert_eq!(
            context.get_nav_point("JFK").unwrap().source,
            SourceTable::VhfNavaids
        );
        assert_eq!(context.search_nav_point("KJ").unwrap().identifier, "KJFK");
        assert!(context.search_nav_point("ZZ").is_none());
    }

    #[test]
    fn test_table_loads_use_loaded_source() {
        let dir = TempDir::new().unwrap();
        populated(dir.path());

        let context = NavDataContext::new();
        context.set_dataset_location(dir.path()).unwrap();
        context.load_header().unwrap();

        // A newer file appearing after the header read is not picked up
        DatasetBuilder::new()
            .with_header("2401")
            .with_airport(TestAirport::new("EGLL", "HEATHROW", 51.4, -0.4, 83.0))
            .write(dir.path(), "ng_jeppesen_fwdfd_2401.s3db");

        context.load_airports().unwrap();
        assert!(context.get_airport("KJFK").is_some());
        assert!(context.get_airport("EGLL").is_none());
    }

    #[test]
    fn test_snapshot_survives_reload() {
        let dir = TempDir::new().unwrap();
        populated(dir.path());

        let context = NavDataContext::new();
        context.set_dataset_location(dir.path()).unwrap();
        context.load_all().unwrap();

        let before = context.nav_points();
        context.reset();
        assert_eq!(before.len(), 2);
        assert!(context.nav_points().is_empty());
        assert!(!context.is_available());
        assert_eq!(context.dataset_location(), Some(dir.path().to_path_buf()));
    }

    #[test]
    fn test_context_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NavDataContext>();
    }
}
