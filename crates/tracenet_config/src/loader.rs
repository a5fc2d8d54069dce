//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ReportConfig;
use std::path::Path;

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "tracenet.toml";

/// Loads and validates a configuration file.
pub fn load_config(path: &Path) -> Result<ReportConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `tracenet.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ReportConfig, ConfigError> {
    let config: ReportConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates values that parse but cannot be used.
fn validate_config(config: &ReportConfig) -> Result<(), ConfigError> {
    if let Some(output) = &config.report.output {
        if output.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "report.output must not be empty".to_string(),
            ));
        }
    }
    if config.diagnostics.limit == Some(0) {
        return Err(ConfigError::Invalid(
            "diagnostics.limit must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ColorChoice;
    use std::path::PathBuf;

    #[test]
    fn parse_empty_config() {
        let config = load_config_from_str("").unwrap();
        assert!(config.report.output.is_none());
        assert!(config.report.fingerprint);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[report]
output = "build/netlist.txt"
fingerprint = false

[diagnostics]
color = "always"
limit = 20
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(
            config.report.output,
            Some(PathBuf::from("build/netlist.txt"))
        );
        assert!(!config.report.fingerprint);
        assert_eq!(config.diagnostics.color, ColorChoice::Always);
        assert_eq!(config.diagnostics.limit, Some(20));
    }

    #[test]
    fn empty_output_errors() {
        let err = load_config_from_str("[report]\noutput = \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_limit_errors() {
        let err = load_config_from_str("[diagnostics]\nlimit = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn unknown_color_errors() {
        let err = load_config_from_str("[diagnostics]\ncolor = \"sometimes\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[report]\noutput = \"out.txt\"\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.report.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
