//! Top-level behavioral processes (`initial` and `always` blocks).

use crate::attribute::Attribute;
use crate::ids::ScopeId;
use crate::stmt::Statement;
use serde::{Deserialize, Serialize};

/// The kind of process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessKind {
    /// Runs once at time zero.
    Initial,
    /// Restarts whenever its body completes.
    Always,
}

impl ProcessKind {
    /// Returns the keyword that introduces the process.
    pub fn keyword(self) -> &'static str {
        match self {
            ProcessKind::Initial => "initial",
            ProcessKind::Always => "always",
        }
    }
}

/// A behavioral process.
///
/// Processes are stored flat in the design, in elaboration order, rather
/// than under their scopes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// The kind of process.
    pub kind: ProcessKind,
    /// The scope the process was declared in.
    pub scope: ScopeId,
    /// Source attributes.
    pub attributes: Vec<Attribute>,
    /// The process body.
    pub body: Statement,
}
