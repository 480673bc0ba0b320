//! Navigation database ingestion and lookup.
//!
//! Discovers the newest AIRAC cycle file in a directory, reads its header
//! and navigation tables from SQLite, and serves exact and prefix lookups
//! from sorted in-memory indexes.
//!
//! ```ignore
//! use navdata::NavDataContext;
//!
//! let context = NavDataContext::new();
//! context.set_dataset_location("/data/navdata")?;
//!
//! if let Some(header) = context.load_header() {
//!     println!("cycle {}", header.cycle);
//!     context.load_airports();
//!     context.load_nav_points();
//! }
//!
//! let point = context.get_nav_point("KJFK");
//! ```

pub mod config;
pub mod context;
pub mod cycle;
pub mod dataset;
pub mod fields;
pub mod index;
pub mod logging;

#[cfg(test)]
mod test_support;

pub use context::{NavDataContext, NavDataError};
pub use cycle::{resolve_latest, CycleFile, CycleFilePattern};
pub use dataset::{AirportRecord, DatasetHeader, NavPoint, SourceTable};
pub use fields::{FieldMap, FieldValue, Record};

/// Version of the navdata library and CLI.
///
/// Defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
