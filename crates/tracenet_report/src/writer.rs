//! The report sink: a line writer that fingerprints and counts defects.

use std::io::{self, Write};
use tracenet_common::{ContentHash, ContentHasher};
use tracenet_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink};

/// Writes report text to the output while feeding a [`ContentHasher`] and
/// mirroring every `ERROR:` line into a [`DiagnosticSink`].
///
/// Every byte that reaches the output also reaches the hasher, so the final
/// fingerprint is the hash of exactly what was written.
pub struct ReportWriter<'a> {
    out: &'a mut dyn Write,
    hasher: Option<ContentHasher>,
    sink: DiagnosticSink,
}

impl<'a> ReportWriter<'a> {
    /// Wraps `out`; `fingerprint` enables hashing of the emitted text.
    pub fn new(out: &'a mut dyn Write, fingerprint: bool) -> Self {
        Self {
            out,
            hasher: fingerprint.then(ContentHasher::new),
            sink: DiagnosticSink::new(),
        }
    }

    /// Writes one `ERROR:` line at `indent` and records the matching diagnostic.
    pub fn defect(
        &mut self,
        indent: usize,
        code: DiagnosticCode,
        location: &str,
        message: impl Into<String>,
    ) -> io::Result<()> {
        let message = message.into();
        writeln!(self, "{:indent$}ERROR: {message}", "")?;
        self.sink.emit(Diagnostic::error(code, message, location));
        Ok(())
    }

    /// Records a warning for a device printed without structural checks.
    /// Warnings never appear in the report text.
    pub fn warning(&mut self, code: DiagnosticCode, location: &str, message: impl Into<String>) {
        let diag = Diagnostic::warning(code, message, location)
            .with_note("the device was printed without structural checks");
        self.sink.emit(diag);
    }

    /// Number of defects written so far.
    pub fn defects(&self) -> usize {
        self.sink.error_count()
    }

    /// Flushes the output and returns the fingerprint and diagnostics.
    pub fn finish(mut self) -> io::Result<(Option<ContentHash>, Vec<Diagnostic>)> {
        self.out.flush()?;
        let fingerprint = self.hasher.as_ref().map(ContentHasher::finish);
        Ok((fingerprint, self.sink.into_diagnostics()))
    }
}

impl Write for ReportWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.out.write(buf)?;
        if let Some(hasher) = &mut self.hasher {
            hasher.update(&buf[..n]);
        }
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
