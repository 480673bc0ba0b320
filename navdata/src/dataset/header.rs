//! Dataset header record.

use rusqlite::Row;

use super::columns::text;
use crate::fields::{FieldDescriptor, Record};
use crate::text_field;

/// Metadata describing a loaded dataset.
///
/// A successfully read header is what marks navigation data as available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetHeader {
    pub creator: String,
    /// AIRAC cycle as stored in the file (e.g. "2312").
    pub cycle: String,
    pub data_provider: String,
    pub dataset_version: String,
    /// Dataset name.
    pub dataset: String,
    /// Effective date range, as stored (e.g. "281223251223").
    pub effective_fromto: String,
    pub parsed_at: String,
    pub revision: String,
}

impl DatasetHeader {
    pub(crate) fn from_row(row: &Row<'_>) -> Self {
        Self {
            creator: text(row, 0),
            cycle: text(row, 1),
            data_provider: text(row, 2),
            dataset_version: text(row, 3),
            dataset: text(row, 4),
            effective_fromto: text(row, 5),
            parsed_at: text(row, 6),
            revision: text(row, 7),
        }
    }
}

impl Record for DatasetHeader {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        text_field!(DatasetHeader, "creator", creator),
        text_field!(DatasetHeader, "cycle", cycle),
        text_field!(DatasetHeader, "data_provider", data_provider),
        text_field!(DatasetHeader, "dataset_version", dataset_version),
        text_field!(DatasetHeader, "dataset", dataset),
        text_field!(DatasetHeader, "effective_fromto", effective_fromto),
        text_field!(DatasetHeader, "parsed_at", parsed_at),
        text_field!(DatasetHeader, "revision", revision),
    ];
}
