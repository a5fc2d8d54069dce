//! Parsing and validation of `tracenet.toml` report configuration files.
//!
//! This crate reads the configuration file and produces a strongly-typed
//! [`ReportConfig`]; [`ReportConfig::resolve_output`] merges it with a
//! command-line destination override.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod resolve;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
