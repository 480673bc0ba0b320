//! Airport index over full-attribute records.

use super::SortedRecords;
use crate::dataset::AirportRecord;

/// Full airport records sorted by identifier.
///
/// Independent of [`NavPointIndex`](super::NavPointIndex): each is built by
/// its own load operation.
#[derive(Debug, Clone, Default)]
pub struct AirportIndex {
    airports: SortedRecords<AirportRecord>,
}

impl AirportIndex {
    /// Create an empty airport index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from airport records.
    pub fn from_records(records: Vec<AirportRecord>) -> Self {
        Self {
            airports: SortedRecords::new(records),
        }
    }

    /// Get an airport by identifier (exact, case-sensitive).
    ///
    /// Returns the first record in table order if the identifier repeats.
    pub fn get(&self, identifier: &str) -> Option<&AirportRecord> {
        self.airports.get(identifier)
    }

    /// Returns the number of airports in the index.
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Returns an iterator over all airports in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &AirportRecord> {
        self.airports.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn airport(identifier: &str, name: &str) -> AirportRecord {
        AirportRecord {
            identifier: identifier.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_index() {
        let index = AirportIndex::new();
        assert!(index.is_empty());
        assert!(index.get("KJFK").is_none());
    }

    #[test]
    fn test_lookup() {
        let index = AirportIndex::from_records(vec![
            airport("LFBO", "Toulouse-Blagnac"),
            airport("KJFK", "John F Kennedy Intl"),
            airport("EGLL", "London Heathrow"),
        ]);

        assert_eq!(index.len(), 3);
        assert_eq!(index.get("KJFK").unwrap().name, "John F Kennedy Intl");
        assert!(index.get("kjfk").is_none());
        assert!(index.get("KJF").is_none());
        assert!(index.get("ZZZZ").is_none());

        let order: Vec<&str> = index.iter().map(|a| a.identifier.as_str()).collect();
        assert_eq!(order, vec!["EGLL", "KJFK", "LFBO"]);
    }

    #[test]
    fn test_duplicate_returns_first() {
        let index = AirportIndex::from_records(vec![
            airport("XXXX", "first"),
            airport("AAAA", "other"),
            airport("XXXX", "second"),
        ]);
        assert_eq!(index.get("XXXX").unwrap().name, "first");
    }

    proptest! {
        #[test]
        fn prop_binary_search_matches_linear_scan(
            idents in prop::collection::vec("[K-M][A-C]{0,2}", 0..30),
            query in "[K-M][A-C]{0,2}",
        ) {
            let records: Vec<AirportRecord> = idents
                .iter()
                .enumerate()
                .map(|(i, ident)| airport(ident, &i.to_string()))
                .collect();
            let index = AirportIndex::from_records(records.clone());

            let sorted: Vec<&str> = index.iter().map(|a| a.identifier.as_str()).collect();
            prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

            let linear = records.iter().find(|a| a.identifier == query);
            prop_assert_eq!(index.get(&query), linear);
        }
    }
}
