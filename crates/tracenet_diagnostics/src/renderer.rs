//! Diagnostic rendering for terminal output.

use crate::diagnostic::Diagnostic;

/// Trait for rendering diagnostics into formatted strings.
pub trait DiagnosticRenderer {
    /// Renders a single diagnostic.
    fn render(&self, diag: &Diagnostic) -> String;
}

/// Renders diagnostics in a rustc-like terminal format.
///
/// ```text
/// error[E201]: Width of B is 4, not 8
///   --> top.add0
///    = note: ...
/// ```
pub struct TerminalRenderer {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint_severity(&self, diag: &Diagnostic) -> String {
        let plain = format!("{}[{}]", diag.severity, diag.code);
        if !self.color {
            return plain;
        }
        let ansi = if diag.severity.is_error() { "31" } else { "33" };
        format!("\x1b[1;{ansi}m{plain}\x1b[0m")
    }
}

impl DiagnosticRenderer for TerminalRenderer {
    fn render(&self, diag: &Diagnostic) -> String {
        let mut out = format!("{}: {}\n", self.paint_severity(diag), diag.message);
        if !diag.location.is_empty() {
            out.push_str(&format!("  --> {}\n", diag.location));
        }
        for note in &diag.notes {
            out.push_str(&format!("   = note: {note}\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::{Category, DiagnosticCode};

    #[test]
    fn render_error_with_location() {
        let diag = Diagnostic::error(
            DiagnosticCode::new(Category::Error, 201),
            "Width of B is 4, not 8",
            "top.add0",
        );
        let output = TerminalRenderer::new(false).render(&diag);
        assert!(output.starts_with("error[E201]: Width of B is 4, not 8\n"));
        assert!(output.contains("  --> top.add0"));
    }

    #[test]
    fn render_warning_with_notes() {
        let diag = Diagnostic::warning(
            DiagnosticCode::new(Category::Warning, 301),
            "unsupported macro-cell kind 42",
            "top.m",
        )
        .with_note("the device was reported without checks");
        let output = TerminalRenderer::new(false).render(&diag);
        assert!(output.contains("warning[W301]"));
        assert!(output.contains("= note: the device was reported without checks"));
    }

    #[test]
    fn empty_location_omitted() {
        let diag = Diagnostic::error(DiagnosticCode::new(Category::Error, 999), "general", "");
        let output = TerminalRenderer::new(false).render(&diag);
        assert!(!output.contains("-->"));
    }

    #[test]
    fn color_wraps_header() {
        let diag = Diagnostic::error(DiagnosticCode::new(Category::Error, 201), "m", "x");
        let output = TerminalRenderer::new(true).render(&diag);
        assert!(output.starts_with("\x1b[1;31merror[E201]\x1b[0m: m"));
    }
}
