//! Unified navigation point index.

use std::collections::BTreeMap;

use super::SortedRecords;
use crate::dataset::{NavPoint, SourceTable};

/// Navaids, waypoints and airports merged into one identifier-sorted index.
///
/// Built from the output of
/// [`DatasetReader::read_nav_points`](crate::dataset::DatasetReader::read_nav_points).
/// When several tables contribute the same identifier, lookups return the
/// point from the earliest table in build order (VHF, NDB, enroute,
/// terminal, airports).
#[derive(Debug, Clone, Default)]
pub struct NavPointIndex {
    points: SortedRecords<NavPoint>,
}

impl NavPointIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from points in build order.
    pub fn from_points(points: Vec<NavPoint>) -> Self {
        Self {
            points: SortedRecords::new(points),
        }
    }

    /// Exact identifier lookup.
    pub fn get(&self, identifier: &str) -> Option<&NavPoint> {
        self.points.get(identifier)
    }

    /// First point, in index order, whose identifier starts with `prefix`.
    ///
    /// Only the single first match is returned. An empty prefix matches the
    /// first point in the index.
    pub fn search_prefix(&self, prefix: &str) -> Option<&NavPoint> {
        self.points.first_with_prefix(prefix)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate points in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &NavPoint> {
        self.points.iter()
    }

    /// Number of points contributed by each source table.
    pub fn counts_by_source(&self) -> BTreeMap<SourceTable, usize> {
        let mut counts = BTreeMap::new();
        for point in self.points.iter() {
            *counts.entry(point.source).or_insert(0) += 1;
        }
        counts
    }
}
