//! The report run: roots, then referenced primitives, then processes.

use crate::context::ReportContext;
use crate::printer::{OutlinePrinter, StatementPrinter};
use crate::primitive::show_primitive;
use crate::process::show_process;
use crate::scope::show_scope;
use crate::writer::ReportWriter;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracenet_common::{ContentHash, InternalError, TraceResult};
use tracenet_config::{ConfigError, ReportConfig};
use tracenet_diagnostics::Diagnostic;
use tracenet_ir::Design;

/// The outcome of one report run.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    /// Number of `ERROR:` lines written.
    pub defects: usize,
    /// One diagnostic per defect, plus warnings for unsupported devices.
    pub diagnostics: Vec<Diagnostic>,
    /// Hash of the emitted text, when fingerprinting is on.
    pub fingerprint: Option<ContentHash>,
}

impl ReportSummary {
    /// Returns `true` when the design has no defects.
    pub fn is_clean(&self) -> bool {
        self.defects == 0
    }
}

/// Faults that stop a run before or while the report is written.
#[derive(Debug, Error)]
pub enum ReportError {
    /// No usable destination was configured.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The destination could not be created.
    #[error("cannot open report destination {}: {source}", .path.display())]
    Open {
        /// The destination path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The design was malformed or the report could not be written.
    #[error(transparent)]
    Internal(#[from] InternalError),
}

/// Walks a design and writes its report.
///
/// The design is only read. Running the same reporter twice produces the
/// same bytes, defect count and fingerprint.
pub struct Reporter<'d, P: StatementPrinter = OutlinePrinter> {
    design: &'d Design,
    printer: P,
    fingerprint: bool,
}

impl<'d, P: StatementPrinter> Reporter<'d, P> {
    /// Creates a reporter that fingerprints its output.
    pub fn new(design: &'d Design, printer: P) -> Self {
        Self {
            design,
            printer,
            fingerprint: true,
        }
    }

    /// Turns fingerprinting of the emitted text on or off.
    pub fn with_fingerprint(mut self, fingerprint: bool) -> Self {
        self.fingerprint = fingerprint;
        self
    }

    /// Writes the report to `out`.
    ///
    /// Structural defects are counted in the summary, not returned as
    /// errors. `Err` means the design's ids or scope tree are malformed, or
    /// writing failed.
    pub fn run<W: Write>(&self, out: &mut W) -> TraceResult<ReportSummary> {
        self.check_design()?;
        self.run_inner(out, self.fingerprint)
    }

    /// Writes the report to the configured destination.
    ///
    /// `cli_override` wins over `report.output`; the file is buffered and
    /// closed before this returns, on success or failure. A malformed design
    /// is rejected before the destination is opened, so an existing file is
    /// left untouched.
    pub fn run_to_path(
        &self,
        config: &ReportConfig,
        cli_override: Option<&Path>,
    ) -> Result<ReportSummary, ReportError> {
        let path = config.resolve_output(cli_override)?;
        self.check_design()?;
        let file = File::create(&path).map_err(|source| ReportError::Open {
            path: path.clone(),
            source,
        })?;
        let mut out = BufWriter::new(file);
        tracing::debug!(path = %path.display(), "writing report");
        let summary = self.run_inner(&mut out, self.fingerprint && config.report.fingerprint)?;
        Ok(summary)
    }

    fn check_design(&self) -> TraceResult<()> {
        self.design
            .check_hierarchy()
            .map_err(|err| InternalError::new(format!("malformed design: {err}")))
    }

    /// Expects a design that passed [`Reporter::check_design`].
    fn run_inner(&self, out: &mut dyn Write, fingerprint: bool) -> TraceResult<ReportSummary> {
        let design = self.design;

        let writer = ReportWriter::new(out, fingerprint);
        let mut cx = ReportContext::new(design, &self.printer, writer);

        for &root in &design.roots {
            writeln!(cx.out, "root module = {};", design.scope_name(root))?;
            show_scope(&mut cx, root)?;
        }

        let udps = std::mem::take(&mut cx.udps);
        for (udp, refs) in udps.drain() {
            show_primitive(&mut cx, &design.udps[udp], refs)?;
        }

        for process in design.processes.values() {
            show_process(&mut cx, process)?;
        }

        let defects = cx.out.defects();
        let (fingerprint, diagnostics) = cx.out.finish()?;
        tracing::info!(
            defects,
            roots = design.roots.len(),
            processes = design.processes.len(),
            "report complete"
        );
        Ok(ReportSummary {
            defects,
            diagnostics,
            fingerprint,
        })
    }
}
