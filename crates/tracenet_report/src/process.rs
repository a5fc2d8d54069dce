//! Behavioral process reporting.

use crate::context::ReportContext;
use std::io::{self, Write};
use tracenet_ir::Process;

pub(crate) fn show_process(cx: &mut ReportContext<'_, '_>, process: &Process) -> io::Result<()> {
    writeln!(cx.out, "{}", process.kind.keyword())?;
    cx.bracketed_attributes(&process.attributes, 4)?;
    cx.statement(&process.body, 4)
}
