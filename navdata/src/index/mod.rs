//! Sorted in-memory indexes over loaded records.
//!
//! Both indexes keep their records in a `Vec` sorted ascending by identifier
//! (byte-wise) and answer lookups with a lower-bound binary search. Records
//! that share an identifier stay in the order they were supplied, and the
//! first of them is the one a lookup returns.
//!
//! - [`NavPointIndex`] - the unified index over navaids, waypoints and airports
//! - [`AirportIndex`] - full-attribute airport records

mod airports;
mod navpoints;

pub use airports::AirportIndex;
pub use navpoints::NavPointIndex;

use crate::dataset::{AirportRecord, NavPoint};

/// A record keyed by an identifier.
pub trait Identified {
    fn identifier(&self) -> &str;
}

impl Identified for NavPoint {
    fn identifier(&self) -> &str {
        &self.identifier
    }
}

impl Identified for AirportRecord {
    fn identifier(&self) -> &str {
        &self.identifier
    }
}

/// Records sorted by identifier.
#[derive(Debug, Clone)]
struct SortedRecords<T> {
    records: Vec<T>,
}

impl<T: Identified> SortedRecords<T> {
    /// Stable-sort `records` by identifier.
    fn new(mut records: Vec<T>) -> Self {
        records.sort_by(|a, b| a.identifier().cmp(b.identifier()));
        Self { records }
    }

    /// Position of the first record whose identifier is `>= key`.
    fn lower_bound(&self, key: &str) -> usize {
        self.records.partition_point(|r| r.identifier() < key)
    }

    fn get(&self, identifier: &str) -> Option<&T> {
        self.records
            .get(self.lower_bound(identifier))
            .filter(|r| r.identifier() == identifier)
    }

    fn first_with_prefix(&self, prefix: &str) -> Option<&T> {
        self.records
            .get(self.lower_bound(prefix))
            .filter(|r| r.identifier().starts_with(prefix))
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }
}

impl<T> Default for SortedRecords<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}
