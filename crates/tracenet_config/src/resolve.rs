//! Destination resolution: merging the configured output with a CLI override.

use crate::error::ConfigError;
use crate::types::ReportConfig;
use std::path::{Path, PathBuf};

impl ReportConfig {
    /// Returns the report destination.
    ///
    /// A command-line path wins over `report.output`. With neither, the run
    /// has nowhere to write and fails with
    /// [`ConfigError::MissingField`]`("report.output")`.
    pub fn resolve_output(&self, cli_override: Option<&Path>) -> Result<PathBuf, ConfigError> {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.report.output.clone())
            .ok_or_else(|| ConfigError::MissingField("report.output".to_string()))
    }
}
