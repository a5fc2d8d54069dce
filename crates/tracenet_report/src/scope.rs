//! Depth-first walk of the scope tree.

use crate::codes;
use crate::context::ReportContext;
use crate::gate::show_gate;
use crate::lpm::show_lpm;
use crate::signal::show_signal;
use std::io::{self, Write};
use tracenet_ir::{Event, ScopeId, ScopeKind};

/// Prints `id` and everything it owns, then its children in order.
pub(crate) fn show_scope(cx: &mut ReportContext<'_, '_>, id: ScopeId) -> io::Result<()> {
    let design = cx.design;
    let scope = &design.scopes[id];
    let name = design.name(scope.name);
    tracing::debug!(scope = name, "reporting scope");

    let tname = design.name(scope.tname);
    let kind = match scope.kind {
        ScopeKind::Module => format!("module {tname}"),
        ScopeKind::Function => format!("function {tname}"),
        ScopeKind::Task => format!("task {tname}"),
        ScopeKind::Begin => format!("begin : {tname}"),
        ScopeKind::Fork => format!("fork : {tname}"),
    };
    writeln!(
        cx.out,
        "scope: {name} ({} parameters, {} signals, {} logic) {kind} time units = 1e{}",
        scope.params.len(),
        scope.signals.len(),
        scope.gates.len(),
        scope.time_units
    )?;
    cx.bracketed_attributes(&scope.attributes, 2)?;

    for param in &scope.params {
        writeln!(cx.out, "   parameter {};", design.name(param.name))?;
        cx.expression(&param.value, 7)?;
    }
    for &sig in &scope.signals {
        show_signal(cx, &design.signals[sig])?;
    }
    for &ev in &scope.events {
        show_event(cx, &design.events[ev])?;
    }
    for &gate in &scope.gates {
        show_gate(cx, &design.gates[gate])?;
    }
    for &lpm in &scope.lpms {
        show_lpm(cx, &design.lpms[lpm])?;
    }

    if scope.kind.is_subprogram() {
        writeln!(cx.out, "  scope function/task definition")?;
        if let Some(def) = &scope.def {
            cx.statement(def, 6)?;
        }
    } else if let Some(def) = &scope.def {
        cx.out.defect(
            2,
            codes::STRAY_DEFINITION,
            name,
            "scope has an attached task definition:",
        )?;
        cx.statement(def, 6)?;
    }

    writeln!(cx.out, "end scope {name}")?;
    for &child in &scope.children {
        show_scope(cx, child)?;
    }
    Ok(())
}

fn show_event(cx: &mut ReportContext<'_, '_>, ev: &Event) -> io::Result<()> {
    writeln!(
        cx.out,
        "  event {} ({} pos, {} neg, {} any);",
        cx.design.name(ev.name),
        ev.pos.len(),
        ev.neg.len(),
        ev.any.len()
    )?;
    for (label, edges) in [("ANYEDGE", &ev.any), ("NEGEDGE", &ev.neg), ("POSEDGE", &ev.pos)] {
        for &nex in edges {
            writeln!(cx.out, "      {label}: {}", cx.nexus(Some(nex)))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::OutlinePrinter;
    use crate::writer::ReportWriter;
    use tracenet_ir::{AttrValue, Design, DesignBuilder, Expr, Statement};

    fn show(design: &Design, root: ScopeId) -> (String, usize) {
        let mut buf = Vec::new();
        let printer = OutlinePrinter::new();
        let defects = {
            let writer = ReportWriter::new(&mut buf, false);
            let mut cx = ReportContext::new(design, &printer, writer);
            show_scope(&mut cx, root).unwrap();
            cx.out.defects()
        };
        (String::from_utf8(buf).unwrap(), defects)
    }

    #[test]
    fn header_attributes_and_params() {
        let mut b = DesignBuilder::new();
        let top = b.root_scope("top", "top", ScopeKind::Module);
        b.scope_mut(top).time_units = -9;
        let attr = b.attribute("src", AttrValue::Str("top.v".into()));
        b.scope_mut(top).attributes.push(attr);
        b.parameter(top, "WIDTH", Expr::ULong(8));
        let d = b.finish();

        let (text, defects) = show(&d, top);
        assert_eq!(
            text,
            "scope: top (1 parameters, 0 signals, 0 logic) module top time units = 1e-9\n\
             \x20 (* src = \"top.v\" *)\n\
             \x20  parameter WIDTH;\n\
             \x20      8\n\
             end scope top\n"
        );
        assert_eq!(defects, 0);
    }

    #[test]
    fn children_follow_end_scope() {
        let mut b = DesignBuilder::new();
        let top = b.root_scope("top", "top", ScopeKind::Module);
        let u1 = b.child_scope(top, "u1", "leaf", ScopeKind::Module);
        b.child_scope(u1, "blk", "blk", ScopeKind::Begin);
        b.child_scope(top, "u2", "leaf", ScopeKind::Module);
        let d = b.finish();

        let (text, _) = show(&d, top);
        let order: Vec<_> = text.lines().filter(|l| l.starts_with("scope:")).collect();
        assert_eq!(order.len(), 4);
        assert!(order[1].starts_with("scope: top.u1 "));
        assert!(order[2].contains(" begin : blk "));
        assert!(order[3].starts_with("scope: top.u2 "));
        let end_top = text.find("end scope top\n").unwrap();
        let u1 = text.find("scope: top.u1").unwrap();
        assert!(end_top < u1);
    }

    #[test]
    fn task_definition_is_printed() {
        let mut b = DesignBuilder::new();
        let top = b.root_scope("top", "top", ScopeKind::Module);
        let t = b.child_scope(top, "t", "t", ScopeKind::Task);
        b.definition(t, Statement::Nop);
        let d = b.finish();

        let (text, defects) = show(&d, t);
        assert!(text.contains("  scope function/task definition\n      ;\n"));
        assert_eq!(defects, 0);
    }

    #[test]
    fn definition_on_module_is_a_defect() {
        let mut b = DesignBuilder::new();
        let top = b.root_scope("top", "top", ScopeKind::Module);
        b.definition(top, Statement::Nop);
        let d = b.finish();

        let (text, defects) = show(&d, top);
        assert!(text.contains("  ERROR: scope has an attached task definition:\n      ;\n"));
        assert_eq!(defects, 1);
    }

    #[test]
    fn events_list_edges() {
        let mut b = DesignBuilder::new();
        let top = b.root_scope("top", "top", ScopeKind::Module);
        let clk = b.signal(top, "clk", 1);
        let clk = b.nexus_of(clk);
        b.event(top, "ev", &[], &[], &[clk]);
        let d = b.finish();

        let (text, _) = show(&d, top);
        assert!(text.contains("  event ev (1 pos, 0 neg, 0 any);\n      POSEDGE: top.clk\n"));
    }
}
