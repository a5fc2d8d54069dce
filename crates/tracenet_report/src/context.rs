//! State shared by the per-object report functions during one run.

use crate::printer::StatementPrinter;
use crate::registry::UdpRegistry;
use crate::resolve::{resolve, NexusShape};
use crate::writer::ReportWriter;
use std::io::{self, Write};
use tracenet_common::Ident;
use tracenet_ir::{AttrValue, Attribute, Design, Expr, NexusId, ScopeId, Statement};

/// One report run in progress.
///
/// The design has passed [`Design::check_hierarchy`], so every id reachable
/// from it can be indexed directly.
pub(crate) struct ReportContext<'d, 'w> {
    pub design: &'d Design,
    pub printer: &'d dyn StatementPrinter,
    pub out: ReportWriter<'w>,
    pub udps: UdpRegistry,
}

impl<'d, 'w> ReportContext<'d, 'w> {
    pub fn new(design: &'d Design, printer: &'d dyn StatementPrinter, out: ReportWriter<'w>) -> Self {
        Self {
            design,
            printer,
            out,
            udps: UdpRegistry::new(),
        }
    }

    pub fn shape(&self, nexus: Option<NexusId>) -> NexusShape {
        resolve(self.design, nexus)
    }

    pub fn width(&self, nexus: Option<NexusId>) -> u32 {
        self.shape(nexus).width
    }

    pub fn nexus(&self, nexus: Option<NexusId>) -> &'d str {
        self.design.nexus_name(nexus)
    }

    /// `<scope>.<name>`, the location recorded with a diagnostic.
    pub fn location(&self, scope: ScopeId, name: Ident) -> String {
        format!("{}.{}", self.design.scope_name(scope), self.design.name(name))
    }

    pub fn expression(&mut self, expr: &Expr, indent: usize) -> io::Result<()> {
        self.printer
            .print_expression(self.design, expr, indent, &mut self.out)
    }

    pub fn statement(&mut self, stmt: &Statement, indent: usize) -> io::Result<()> {
        self.printer
            .print_statement(self.design, stmt, indent, &mut self.out)
    }

    /// Writes attributes as `(* key = value *)` lines, the scope and
    /// process form.
    pub fn bracketed_attributes(&mut self, attrs: &[Attribute], indent: usize) -> io::Result<()> {
        for attr in attrs {
            let key = self.design.name(attr.key);
            match &attr.value {
                AttrValue::Void => writeln!(self.out, "{:indent$}(* {key} *)", "")?,
                AttrValue::Str(s) => writeln!(self.out, "{:indent$}(* {key} = \"{s}\" *)", "")?,
                AttrValue::Num(n) => writeln!(self.out, "{:indent$}(* {key} = {n} *)", "")?,
            }
        }
        Ok(())
    }

    /// Writes attributes as bare `key = value` lines, the signal and gate form.
    pub fn plain_attributes(&mut self, attrs: &[Attribute]) -> io::Result<()> {
        for attr in attrs {
            let key = self.design.name(attr.key);
            match &attr.value {
                AttrValue::Void => writeln!(self.out, "    {key}")?,
                AttrValue::Str(s) => writeln!(self.out, "    {key} = {s}")?,
                AttrValue::Num(n) => writeln!(self.out, "    {key} = {n}")?,
            }
        }
        Ok(())
    }
}
