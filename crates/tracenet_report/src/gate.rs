//! Primitive gate and UDP instance reporting.

use crate::codes;
use crate::context::ReportContext;
use std::io::{self, Write};
use tracenet_ir::{Expr, Gate, GateKind};

/// Prints one gate, checks its delays and pin widths, and registers UDP use.
pub(crate) fn show_gate(cx: &mut ReportContext<'_, '_>, gate: &Gate) -> io::Result<()> {
    let design = cx.design;
    let name = design.name(gate.name);
    let loc = cx.location(gate.scope, gate.name);

    match gate.kind {
        GateKind::Udp(udp) => {
            let udp_name = design.name(design.udps[udp].name);
            write!(cx.out, "  primitive<{udp_name}> {name}")?;
        }
        GateKind::Unsupported(code) => {
            tracing::warn!(gate = %loc, code, "unsupported gate kind");
            cx.out.warning(
                codes::UNSUPPORTED_GATE,
                &loc,
                format!("unsupported gate kind {code}"),
            );
            write!(cx.out, "  unsupported gate<type={code}> {name}")?;
        }
        kind => {
            let keyword = kind.keyword().unwrap_or("?");
            write!(cx.out, "  {keyword} {name}")?;
        }
    }
    writeln!(cx.out, " <width={}>", gate.width)?;

    writeln!(cx.out, "    <Delays...>")?;
    for delay in gate.delays.iter().flatten() {
        if !is_delay(delay) {
            cx.out.defect(
                6,
                codes::UNSUITABLE_DELAY,
                &loc,
                "Expression is not a suitable delay",
            )?;
        }
        cx.expression(delay, 6)?;
    }

    // Inputs may float, but every connected pin carries the gate width.
    for (idx, &pin) in gate.pins.iter().enumerate() {
        write!(cx.out, "    {idx}: {}", cx.nexus(pin))?;
        if idx == 0 {
            write!(
                cx.out,
                " <drive0/1 = {}/{}>",
                gate.drive0.level(),
                gate.drive1.level()
            )?;
        }
        writeln!(cx.out)?;

        if pin.is_none() {
            if idx == 0 {
                cx.out.defect(
                    4,
                    codes::UNCONNECTED_OUTPUT,
                    &loc,
                    "Pin 0 must not be unconnected",
                )?;
            }
            continue;
        }
        let width = cx.width(pin);
        if width != gate.width {
            let msg = format!("pin {idx}: Nexus width is {width}");
            cx.out.defect(4, codes::NEXUS_WIDTH, &loc, msg)?;
        }
    }

    if let GateKind::Udp(udp) = gate.kind {
        let def = &design.udps[udp];
        if gate.pins.len() != 1 + def.inputs as usize {
            let msg = format!("UDP {} expects {} inputs", design.name(def.name), def.inputs);
            cx.out.defect(4, codes::UDP_ARITY, &loc, msg)?;
        }
        cx.udps.reference(udp);
    }

    cx.plain_attributes(&gate.attributes)
}

/// A gate delay must be a literal, a machine-word constant or a signal.
fn is_delay(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Number { .. } | Expr::ULong(_) | Expr::Signal { .. }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::OutlinePrinter;
    use crate::writer::ReportWriter;
    use tracenet_common::Logic;
    use tracenet_diagnostics::Diagnostic;
    use tracenet_ir::{AttrValue, BinaryOp, Design, DesignBuilder, GateId, ScopeKind};

    fn show(design: &Design, id: GateId) -> (String, Vec<Diagnostic>, usize) {
        let mut buf = Vec::new();
        let printer = OutlinePrinter::new();
        let (diags, refs) = {
            let writer = ReportWriter::new(&mut buf, false);
            let mut cx = ReportContext::new(design, &printer, writer);
            show_gate(&mut cx, &design.gates[id]).unwrap();
            let refs = cx.udps.len();
            (cx.out.finish().unwrap().1, refs)
        };
        (String::from_utf8(buf).unwrap(), diags, refs)
    }

    #[test]
    fn and_with_unconnected_output() {
        let mut b = DesignBuilder::new();
        let top = b.root_scope("top", "top", ScopeKind::Module);
        let a = b.signal(top, "a", 4);
        let c = b.signal(top, "c", 4);
        let (a, c) = (b.nexus_of(a), b.nexus_of(c));
        let id = b.gate(top, "g0", GateKind::And, 4, &[None, Some(a), Some(c)]);
        let d = b.finish();

        let (text, diags, _) = show(&d, id);
        assert_eq!(
            text,
            "  and g0 <width=4>\n\
             \x20   <Delays...>\n\
             \x20   0:  <drive0/1 = 6/6>\n\
             \x20   ERROR: Pin 0 must not be unconnected\n\
             \x20   1: top.a\n\
             \x20   2: top.c\n"
        );
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, codes::UNCONNECTED_OUTPUT);
        assert_eq!(diags[0].location, "top.g0");
    }

    #[test]
    fn unconnected_input_is_fine_but_width_is_checked() {
        let mut b = DesignBuilder::new();
        let top = b.root_scope("top", "top", ScopeKind::Module);
        let y = b.signal(top, "y", 1);
        let wide = b.signal(top, "wide", 2);
        let (y, wide) = (b.nexus_of(y), b.nexus_of(wide));
        let id = b.gate(top, "g", GateKind::Or, 1, &[Some(y), None, Some(wide)]);
        let d = b.finish();

        let (text, diags, _) = show(&d, id);
        assert!(text.contains("    ERROR: pin 2: Nexus width is 2\n"));
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn delays_are_checked_and_printed() {
        let mut b = DesignBuilder::new();
        let top = b.root_scope("top", "top", ScopeKind::Module);
        let y = b.signal(top, "y", 1);
        let a = b.signal(top, "a", 1);
        let (y, a) = (b.nexus_of(y), b.nexus_of(a));
        let id = b.gate(top, "g", GateKind::Buf, 1, &[Some(y), Some(a)]);
        b.gate_mut(id).delays = [
            Some(Expr::ULong(3)),
            Some(Expr::Binary {
                op: BinaryOp::Add,
                lhs: Box::new(Expr::ULong(1)),
                rhs: Box::new(Expr::ULong(2)),
            }),
            None,
        ];
        let d = b.finish();

        let (text, diags, _) = show(&d, id);
        assert!(text.contains(
            "    <Delays...>\n      3\n      ERROR: Expression is not a suitable delay\n      (1 + 2)\n"
        ));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, codes::UNSUITABLE_DELAY);
    }

    #[test]
    fn udp_instance_arity_and_reference() {
        let mut b = DesignBuilder::new();
        let top = b.root_scope("top", "top", ScopeKind::Module);
        let mux = b.udp("mux2", false, Logic::X, 3, &["0?00", "1?11"]);
        let y = b.signal(top, "y", 1);
        let s = b.signal(top, "s", 1);
        let (y, s) = (b.nexus_of(y), b.nexus_of(s));
        let id = b.gate(top, "u0", GateKind::Udp(mux), 1, &[Some(y), Some(s), Some(s)]);
        let d = b.finish();

        let (text, diags, refs) = show(&d, id);
        assert!(text.starts_with("  primitive<mux2> u0 <width=1>\n"));
        assert!(text.contains("    ERROR: UDP mux2 expects 3 inputs\n"));
        assert_eq!(diags[0].code, codes::UDP_ARITY);
        assert_eq!(refs, 1);
    }

    #[test]
    fn unsupported_gate_and_attributes() {
        let mut b = DesignBuilder::new();
        let top = b.root_scope("top", "top", ScopeKind::Module);
        let y = b.signal(top, "y", 1);
        let y = b.nexus_of(y);
        let id = b.gate(top, "x", GateKind::Unsupported(99), 1, &[Some(y)]);
        let keep = b.attribute("keep", AttrValue::Void);
        let src = b.attribute("src", AttrValue::Str("a.v:3".into()));
        b.gate_mut(id).attributes = vec![keep, src];
        let d = b.finish();

        let (text, diags, _) = show(&d, id);
        assert!(text.starts_with("  unsupported gate<type=99> x <width=1>\n"));
        assert!(text.ends_with("    keep\n    src = a.v:3\n"));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, codes::UNSUPPORTED_GATE);
    }
}
