//! Structured defect reporting for design inspection.
//!
//! This crate provides [`Diagnostic`] records with severity levels, codes and
//! the hierarchical location of the offending object. The [`DiagnosticSink`]
//! accumulates them and keeps the error count that becomes the run's defect
//! count; [`TerminalRenderer`] formats them for a human.

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
