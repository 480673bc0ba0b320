//! Configuration for navdata hosts.
//!
//! Settings live in `~/.navdata/config.ini`:
//!
//! ```ini
//! [navdata]
//! directory = ~/navdata
//! file_prefix = ng_jeppesen_fwdfd_
//! file_suffix = .s3db
//!
//! [logging]
//! file = ~/.navdata/navdata.log
//! ```
//!
//! Settings structs live in `settings`, constants in `defaults`, INI
//! parsing in `parser`, serialization in `writer`, and typed key access in
//! `keys`.

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use settings::{ConfigFile, LoggingSettings, NavDataSettings};
