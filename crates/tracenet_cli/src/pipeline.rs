//! Shared steps of a reporting run: configuration discovery, design loading
//! and rendering the diagnostics summary.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use tracenet_config::{load_config, ColorChoice as ConfigColor, ReportConfig, CONFIG_FILE_NAME};
use tracenet_diagnostics::{Diagnostic, DiagnosticRenderer, TerminalRenderer};
use tracenet_ir::Design;

use crate::{Cli, ColorChoice};

/// Finds the configuration for this run.
///
/// An explicit `--config` path must exist. Otherwise `tracenet.toml` in
/// `dir` is used when present, and the defaults apply when it is not.
pub fn resolve_config(
    explicit: Option<&Path>,
    dir: &Path,
) -> Result<ReportConfig, Box<dyn std::error::Error>> {
    if let Some(path) = explicit {
        return load_config(path)
            .map_err(|e| format!("failed to load {}: {e}", path.display()).into());
    }
    let candidate = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        tracing::debug!(path = %candidate.display(), "using discovered configuration");
        let config = load_config(&candidate)
            .map_err(|e| format!("failed to load {}: {e}", candidate.display()))?;
        return Ok(config);
    }
    Ok(ReportConfig::default())
}

/// Loads the configuration named by the command line, looking in the
/// current directory when none was given.
pub fn config_for(cli: &Cli) -> Result<ReportConfig, Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_config(cli.config.as_deref(), &cwd)
}

/// Reads a serialized design from a JSON file.
pub fn load_design(path: &Path) -> Result<Design, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read design {}: {e}", path.display()))?;
    let design: Design = serde_json::from_str(&text)
        .map_err(|e| format!("malformed design {}: {e}", path.display()))?;
    Ok(design)
}

/// Decides whether diagnostics are coloured. The command line wins over
/// the configuration file; `auto` checks whether stderr is a terminal.
pub fn use_color(cli: Option<ColorChoice>, config: ConfigColor) -> bool {
    let choice = match cli {
        Some(ColorChoice::Always) => ConfigColor::Always,
        Some(ColorChoice::Never) => ConfigColor::Never,
        Some(ColorChoice::Auto) => ConfigColor::Auto,
        None => config,
    };
    match choice {
        ConfigColor::Always => true,
        ConfigColor::Never => false,
        ConfigColor::Auto => std::io::stderr().is_terminal(),
    }
}

/// Renders diagnostics for the terminal, showing at most `limit` of them.
pub fn render_diagnostics(diags: &[Diagnostic], color: bool, limit: Option<usize>) -> String {
    let renderer = TerminalRenderer::new(color);
    let shown = limit.unwrap_or(diags.len()).min(diags.len());
    let mut out = String::new();
    for diag in &diags[..shown] {
        out.push_str(&renderer.render(diag));
    }
    let hidden = diags.len() - shown;
    if hidden > 0 {
        out.push_str(&format!("... and {hidden} more diagnostic(s) not shown\n"));
    }
    out
}
