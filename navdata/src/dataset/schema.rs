//! Table and column names of the navigation dataset.
//!
//! Column lists are positional: row mapping code reads columns by index in
//! the order they are listed here.

pub const HEADER_TABLE: &str = "tbl_hdr_header";
pub const AIRPORTS_TABLE: &str = "tbl_pa_airports";
pub const VHF_NAVAIDS_TABLE: &str = "tbl_d_vhfnavaids";
pub const NDB_NAVAIDS_TABLE: &str = "tbl_db_enroute_ndbnavaids";
pub const ENROUTE_WAYPOINTS_TABLE: &str = "tbl_ea_enroute_waypoints";
pub const TERMINAL_WAYPOINTS_TABLE: &str = "tbl_pc_terminal_waypoints";

pub const HEADER_COLUMNS: &[&str] = &[
    "creator",
    "cycle",
    "data_provider",
    "dataset_version",
    "dataset",
    "effective_fromto",
    "parsed_at",
    "revision",
];

/// Full airport attribute set, in [`AirportRecord`](super::AirportRecord) order.
pub const AIRPORT_COLUMNS: &[&str] = &[
    "area_code",
    "icao_code",
    "airport_identifier",
    "airport_identifier_3letter",
    "airport_name",
    "airport_ref_latitude",
    "airport_ref_longitude",
    "ifr_capability",
    "longest_runway_surface_code",
    "elevation",
    "transition_altitude",
    "transition_level",
    "speed_limit",
    "speed_limit_altitude",
    "iata_ata_designator",
    "airport_type",
    "continent",
    "country",
    "country_3letter",
    "state",
    "state_2letter",
    "city",
    "magnetic_variation",
    "time_zone",
];

pub const VHF_NAVAID_COLUMNS: &[&str] = &[
    "navaid_identifier",
    "navaid_name",
    "continent",
    "country",
    "navaid_latitude",
    "navaid_longitude",
    "dme_elevation",
];

pub const NDB_NAVAID_COLUMNS: &[&str] = &[
    "navaid_identifier",
    "navaid_name",
    "continent",
    "country",
    "navaid_latitude",
    "navaid_longitude",
];

pub const WAYPOINT_COLUMNS: &[&str] = &[
    "waypoint_identifier",
    "waypoint_name",
    "continent",
    "country",
    "waypoint_latitude",
    "waypoint_longitude",
];

/// Airport columns used for the unified navigation point projection.
pub const AIRPORT_POINT_COLUMNS: &[&str] = &[
    "airport_identifier",
    "airport_name",
    "continent",
    "country",
    "city",
    "airport_ref_latitude",
    "airport_ref_longitude",
    "elevation",
];

/// Build a `SELECT` over the given columns.
pub fn select(table: &str, columns: &[&str]) -> String {
    format!("SELECT {} FROM {}", columns.join(", "), table)
}
