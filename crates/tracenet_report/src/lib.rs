//! Structural verification and text reporting for elaborated netlists.
//!
//! A [`Reporter`] walks a [`Design`](tracenet_ir::Design) from its root
//! scopes and writes a line-oriented description of every scope, signal,
//! gate and macro-cell. While doing so it checks the structural invariants an
//! elaborator is expected to uphold: pin widths, shared-nexus agreement,
//! constant shapes, UDP arity, part-select ranges and so on. Each violation
//! becomes an `ERROR:` line in the report and an error
//! [`Diagnostic`](tracenet_diagnostics::Diagnostic) in the returned
//! [`ReportSummary`]; the walk itself never stops for a defect.
//!
//! Output order is fixed: for each root, `root module = <name>;` and the
//! scope tree depth first; then each UDP definition that was instantiated,
//! once, in first-use order; then every process.

#![warn(missing_docs)]

pub mod codes;
mod context;
mod driver;
mod gate;
mod lpm;
mod primitive;
mod printer;
mod process;
mod registry;
mod resolve;
mod scope;
mod signal;
mod writer;

pub use driver::{ReportError, ReportSummary, Reporter};
pub use printer::{OutlinePrinter, StatementPrinter};
pub use registry::UdpRegistry;
pub use resolve::{resolve, width_of, NexusShape};
pub use writer::ReportWriter;
