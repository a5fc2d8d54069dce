//! Diagnostic accumulator that owns the running defect count.

use crate::diagnostic::Diagnostic;

/// Collects the diagnostics of one report run in emission order.
///
/// Only error diagnostics are counted as defects; the count is kept
/// alongside the list so it never has to be recomputed.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
    errors: usize,
}

impl DiagnosticSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn emit(&mut self, diag: Diagnostic) {
        if diag.severity.is_error() {
            self.errors += 1;
        }
        self.diagnostics.push(diag);
    }

    /// Number of defects recorded so far.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Number of recorded diagnostics that are not defects.
    pub fn warning_count(&self) -> usize {
        self.diagnostics.len() - self.errors
    }

    /// Iterates over the recorded diagnostics in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Consumes the sink, yielding its diagnostics in emission order.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
