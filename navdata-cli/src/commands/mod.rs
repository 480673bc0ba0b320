//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (get, set, list, path)
//! - [`location`] - Dataset directory (get, set)
//! - [`lookup`] - Header, airport and navigation point queries

pub mod common;
pub mod config;
pub mod location;
pub mod lookup;
