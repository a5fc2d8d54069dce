//! Configuration types deserialized from `tracenet.toml`.

use serde::Deserialize;
use std::path::PathBuf;

/// The top-level configuration parsed from `tracenet.toml`.
///
/// Every section is optional; an empty file is a valid configuration.
#[derive(Debug, Default, Deserialize)]
pub struct ReportConfig {
    /// Report destination and content settings.
    #[serde(default)]
    pub report: ReportSection,
    /// Settings for the diagnostics summary printed after the run.
    #[serde(default)]
    pub diagnostics: DiagnosticsSection,
}

/// The `[report]` section.
#[derive(Debug, Deserialize)]
pub struct ReportSection {
    /// Path the report is written to; may be overridden on the command line.
    #[serde(default)]
    pub output: Option<PathBuf>,
    /// Whether the run computes a fingerprint of the emitted report.
    #[serde(default = "default_true")]
    pub fingerprint: bool,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            output: None,
            fingerprint: true,
        }
    }
}

/// The `[diagnostics]` section.
#[derive(Debug, Default, Deserialize)]
pub struct DiagnosticsSection {
    /// When to colour the diagnostics summary.
    #[serde(default)]
    pub color: ColorChoice,
    /// Show at most this many diagnostics; the rest are only counted.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// When terminal output is coloured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    /// Colour when stderr is a terminal.
    #[default]
    Auto,
    /// Always colour.
    Always,
    /// Never colour.
    Never,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ReportConfig::default();
        assert!(config.report.output.is_none());
        assert!(config.report.fingerprint);
        assert_eq!(config.diagnostics.color, ColorChoice::Auto);
        assert!(config.diagnostics.limit.is_none());
    }

    #[test]
    fn color_choice_lowercase() {
        let section: DiagnosticsSection = toml::from_str("color = \"never\"").unwrap();
        assert_eq!(section.color, ColorChoice::Never);
    }
}
