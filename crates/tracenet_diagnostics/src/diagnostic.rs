//! Structured diagnostic records.

use crate::code::DiagnosticCode;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};

/// One finding about the inspected design.
///
/// Each diagnostic includes:
/// - a severity level and code
/// - the message that also appears in the report's `ERROR:` line
/// - the hierarchical name of the object it concerns (e.g. `top.u1`)
/// - optional notes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level of this diagnostic.
    pub severity: Severity,
    /// The code identifying the kind of finding.
    pub code: DiagnosticCode,
    /// The main diagnostic message.
    pub message: String,
    /// Hierarchical name of the scope, signal, or device involved.
    pub location: String,
    /// Explanatory footnotes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Creates a new error diagnostic.
    pub fn error(
        code: DiagnosticCode,
        message: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Error, code, message, location)
    }

    /// Creates a new warning diagnostic.
    pub fn warning(
        code: DiagnosticCode,
        message: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, code, message, location)
    }

    fn new(
        severity: Severity,
        code: DiagnosticCode,
        message: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            location: location.into(),
            notes: Vec::new(),
        }
    }

    /// Adds a note to this diagnostic.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}
