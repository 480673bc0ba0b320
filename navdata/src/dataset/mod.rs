//! Navigation dataset files.
//!
//! A dataset is a SQLite file holding one cycle's navigation tables:
//!
//! ```text
//! tbl_hdr_header              dataset metadata, one row
//! tbl_pa_airports             airports (full attribute set)
//! tbl_d_vhfnavaids            VOR/DME navaids
//! tbl_db_enroute_ndbnavaids   NDB navaids
//! tbl_ea_enroute_waypoints    enroute waypoints
//! tbl_pc_terminal_waypoints   terminal waypoints
//! ```
//!
//! [`DatasetReader`] maps rows of these tables onto [`DatasetHeader`],
//! [`AirportRecord`] and [`NavPoint`].

mod airport;
mod columns;
mod header;
mod navpoint;
mod reader;
pub mod schema;

use std::path::PathBuf;

pub use airport::AirportRecord;
pub use header::DatasetHeader;
pub use navpoint::{NavPoint, SourceTable};
pub use reader::DatasetReader;

/// Errors raised while reading a dataset file.
///
/// None of these are fatal to the caller: the context layer turns them into
/// "no data" results.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The file could not be opened.
    #[error("Failed to open dataset {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A table could not be queried.
    #[error("Failed to query table {table}: {source}")]
    Query {
        table: String,
        #[source]
        source: rusqlite::Error,
    },

    /// The header table returned no rows.
    #[error("Dataset {} has no header row", .0.display())]
    MissingHeader(PathBuf),
}
