//! Failures while reading `tracenet.toml` or resolving the report destination.

use std::io;

/// Why a configuration could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read configuration: {0}")]
    Read(#[from] io::Error),

    /// The file is not valid TOML or has the wrong shape.
    #[error("malformed configuration: {0}")]
    Parse(String),

    /// A value the run needs was supplied by neither the file nor the
    /// command line.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A value parsed but cannot be used.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
