//! Full-attribute airport record.

use rusqlite::Row;

use super::columns::{number, text};
use crate::fields::{FieldDescriptor, Record};
use crate::{number_field, text_field};

/// One row of the airport table with every attribute the dataset provides.
///
/// Columns map positionally from
/// [`schema::AIRPORT_COLUMNS`](super::schema::AIRPORT_COLUMNS).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirportRecord {
    pub area_code: String,
    pub icao_code: String,
    /// Airport identifier (ICAO location indicator, e.g. "KJFK").
    pub identifier: String,
    pub identifier_3letter: String,
    pub name: String,
    /// Reference point latitude in decimal degrees.
    pub latitude: f64,
    /// Reference point longitude in decimal degrees.
    pub longitude: f64,
    pub ifr_capability: String,
    pub longest_runway_surface_code: String,
    /// Elevation in feet.
    pub elevation: f64,
    pub transition_altitude: f64,
    pub transition_level: f64,
    /// Speed limit in knots.
    pub speed_limit: f64,
    pub speed_limit_altitude: f64,
    pub iata_ata_designator: String,
    pub airport_type: String,
    pub continent: String,
    pub country: String,
    pub country_3letter: String,
    pub state: String,
    pub state_2letter: String,
    pub city: String,
    pub magnetic_variation: f64,
    pub time_zone: String,
}

impl AirportRecord {
    pub(crate) fn from_row(row: &Row<'_>) -> Self {
        Self {
            area_code: text(row, 0),
            icao_code: text(row, 1),
            identifier: text(row, 2),
            identifier_3letter: text(row, 3),
            name: text(row, 4),
            latitude: number(row, 5),
            longitude: number(row, 6),
            ifr_capability: text(row, 7),
            longest_runway_surface_code: text(row, 8),
            elevation: number(row, 9),
            transition_altitude: number(row, 10),
            transition_level: number(row, 11),
            speed_limit: number(row, 12),
            speed_limit_altitude: number(row, 13),
            iata_ata_designator: text(row, 14),
            airport_type: text(row, 15),
            continent: text(row, 16),
            country: text(row, 17),
            country_3letter: text(row, 18),
            state: text(row, 19),
            state_2letter: text(row, 20),
            city: text(row, 21),
            magnetic_variation: number(row, 22),
            time_zone: text(row, 23),
        }
    }
}

impl Record for AirportRecord {
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        text_field!(AirportRecord, "area_code", area_code),
        text_field!(AirportRecord, "icao_code", icao_code),
        text_field!(AirportRecord, "airport_identifier", identifier),
        text_field!(AirportRecord, "airport_identifier_3letter", identifier_3letter),
        text_field!(AirportRecord, "airport_name", name),
        number_field!(AirportRecord, "airport_ref_latitude", latitude),
        number_field!(AirportRecord, "airport_ref_longitude", longitude),
        text_field!(AirportRecord, "ifr_capability", ifr_capability),
        text_field!(AirportRecord, "longest_runway_surface_code", longest_runway_surface_code),
        number_field!(AirportRecord, "elevation", elevation),
        number_field!(AirportRecord, "transition_altitude", transition_altitude),
        number_field!(AirportRecord, "transition_level", transition_level),
        number_field!(AirportRecord, "speed_limit", speed_limit),
        number_field!(AirportRecord, "speed_limit_altitude", speed_limit_altitude),
        text_field!(AirportRecord, "iata_ata_designator", iata_ata_designator),
        text_field!(AirportRecord, "airport_type", airport_type),
        text_field!(AirportRecord, "continent", continent),
        text_field!(AirportRecord, "country", country),
        text_field!(AirportRecord, "country_3letter", country_3letter),
        text_field!(AirportRecord, "state", state),
        text_field!(AirportRecord, "state_2letter", state_2letter),
        text_field!(AirportRecord, "city", city),
        number_field!(AirportRecord, "magnetic_variation", magnetic_variation),
        text_field!(AirportRecord, "time_zone", time_zone),
    ];
}
