//! Unified navigation point record.
//!
//! VHF navaids, NDB navaids, enroute waypoints, terminal waypoints and
//! airports are all projected onto [`NavPoint`] so they can be searched
//! together. Airport-only attributes are dropped; use
//! [`AirportRecord`](super::AirportRecord) for those.

use std::fmt;

use rusqlite::Row;

use super::columns::{number, text};
use super::schema;
use crate::fields::{FieldDescriptor, FieldKind, FieldValue, Record};
use crate::{number_field, text_field};

/// Table a navigation point was read from.
///
/// Variants are declared in build order, which is also the tie-break order
/// for duplicate identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceTable {
    VhfNavaids,
    NdbNavaids,
    EnrouteWaypoints,
    TerminalWaypoints,
    Airports,
}

impl SourceTable {
    /// All source tables in build order.
    pub const ALL: [SourceTable; 5] = [
        SourceTable::VhfNavaids,
        SourceTable::NdbNavaids,
        SourceTable::EnrouteWaypoints,
        SourceTable::TerminalWaypoints,
        SourceTable::Airports,
    ];

    /// Name of the backing table.
    pub fn table_name(self) -> &'static str {
        match self {
            SourceTable::VhfNavaids => schema::VHF_NAVAIDS_TABLE,
            SourceTable::NdbNavaids => schema::NDB_NAVAIDS_TABLE,
            SourceTable::EnrouteWaypoints => schema::ENROUTE_WAYPOINTS_TABLE,
            SourceTable::TerminalWaypoints => schema::TERMINAL_WAYPOINTS_TABLE,
            SourceTable::Airports => schema::AIRPORTS_TABLE,
        }
    }

    /// Columns read for the unified projection, in mapping order.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            SourceTable::VhfNavaids => schema::VHF_NAVAID_COLUMNS,
            SourceTable::NdbNavaids => schema::NDB_NAVAID_COLUMNS,
            SourceTable::EnrouteWaypoints | SourceTable::TerminalWaypoints => {
                schema::WAYPOINT_COLUMNS
            }
            SourceTable::Airports => schema::AIRPORT_POINT_COLUMNS,
        }
    }

    /// `SELECT` statement for this table's projection.
    pub fn query(self) -> String {
        schema::select(self.table_name(), self.columns())
    }

    /// Map one row of this table onto a [`NavPoint`].
    pub(crate) fn map_row(self, row: &Row<'_>) -> NavPoint {
        let (city, latitude, longitude, elevation) = match self {
            SourceTable::VhfNavaids => (
                String::new(),
                number(row, 4),
                number(row, 5),
                number(row, 6),
            ),
            SourceTable::NdbNavaids
            | SourceTable::EnrouteWaypoints
            | SourceTable::TerminalWaypoints => {
                (String::new(), number(row, 4), number(row, 5), 0.0)
            }
            SourceTable::Airports => (
                text(row, 4),
                number(row, 5),
                number(row, 6),
                number(row, 7),
            ),
        };

        NavPoint {
            source: self,
            identifier: text(row, 0),
            name: text(row, 1),
            continent: text(row, 2),
            country: text(row, 3),
            city,
            latitude,
            longitude,
            elevation,
        }
    }
}

impl fmt::Display for SourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// A point of interest from any of the five source tables.
#[derive(Debug, Clone, PartialEq)]
pub struct NavPoint {
    pub source: SourceTable,
    pub identifier: String,
    pub name: String,
    pub continent: String,
    pub country: String,
    /// Only populated for airports.
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Elevation in feet; `0.0` for tables without one.
    pub elevation: f64,
}

impl Record for NavPoint {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        FieldDescriptor {
            name: "table",
            kind: FieldKind::Text,
            read: {
                fn read(p: &NavPoint) -> FieldValue<'_> {
                    FieldValue::Text(p.source.table_name())
                }
                read
            },
        },
        text_field!(NavPoint, "identifier", identifier),
        text_field!(NavPoint, "name", name),
        text_field!(NavPoint, "continent", continent),
        text_field!(NavPoint, "country", country),
        text_field!(NavPoint, "city", city),
        number_field!(NavPoint, "latitude", latitude),
        number_field!(NavPoint, "longitude", longitude),
        number_field!(NavPoint, "elevation", elevation),
    ];
}
