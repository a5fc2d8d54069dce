//! Signal reporting and shared-nexus consistency checks.
//!
//! Every word of a signal is printed with the endpoints of its nexus. Other
//! signals on the same nexus must agree in width and type; constants must
//! match the signal they drive.

use crate::codes;
use crate::context::ReportContext;
use std::io::{self, Write};
use tracenet_ir::{
    ConstValue, DataType, NetConst, NexusPointer, PointerTarget, PortDirection, Signal, SignalKind,
};

/// Prints one signal, its nexus endpoints, timing paths and attributes.
pub(crate) fn show_signal(cx: &mut ReportContext<'_, '_>, sig: &Signal) -> io::Result<()> {
    let design = cx.design;
    let kind = match sig.kind {
        SignalKind::Reg => "reg",
        SignalKind::Tri => "tri",
        SignalKind::Tri0 => "tri0",
        SignalKind::Tri1 => "tri1",
        SignalKind::Other => "?",
    };
    let sign = if sig.signed { "signed" } else { "unsigned" };
    let port = match sig.port {
        PortDirection::None => "",
        PortDirection::Input => "input ",
        PortDirection::Output => "output ",
        PortDirection::Inout => "inout ",
    };
    let data_type = match sig.data_type {
        DataType::Bool | DataType::Logic | DataType::Real => sig.data_type.as_str(),
        DataType::NoType | DataType::Void => "?data?",
    };
    let basename = design.name(sig.name);
    let loc = cx.location(sig.scope, sig.name);

    for (word, &nexus) in sig.words.iter().enumerate() {
        writeln!(
            cx.out,
            "  {kind} {sign} {port}{data_type}[{}:{}] {basename}[word={word}, adr={}]  <width={}> nexus={}",
            sig.msb,
            sig.lsb,
            i64::from(sig.array_base) + word as i64,
            sig.width,
            design.name(design.nexuses[nexus].name),
        )?;
        for ptr in &design.nexuses[nexus].pointers {
            show_pointer(cx, sig, &loc, ptr)?;
        }
    }

    for path in &sig.paths {
        write!(cx.out, "      path {}", cx.nexus(Some(path.source)))?;
        if path.posedge {
            write!(cx.out, " posedge")?;
        }
        if path.negedge {
            write!(cx.out, " negedge")?;
        }
        if path.condition.is_some() {
            write!(cx.out, " (if {})", cx.nexus(path.condition))?;
        }
        for triple in path.delays.chunks(3) {
            write!(cx.out, " {},{},{}", triple[0], triple[1], triple[2])?;
        }
        writeln!(cx.out)?;
    }

    cx.plain_attributes(&sig.attributes)
}

fn show_pointer(
    cx: &mut ReportContext<'_, '_>,
    sig: &Signal,
    loc: &str,
    ptr: &NexusPointer,
) -> io::Result<()> {
    let design = cx.design;
    let (d0, d1) = (ptr.drive0, ptr.drive1);
    match ptr.target {
        PointerTarget::Signal(other) => {
            let peer = &design.signals[other];
            writeln!(
                cx.out,
                "      SIG {} word={} ({d0}0, {d1}1)",
                design.full_name(other),
                ptr.pin
            )?;
            if peer.width != sig.width {
                let msg = format!("Signal width mismatch. Width={}", peer.width);
                cx.out.defect(6, codes::SIGNAL_WIDTH, loc, msg)?;
            }
            if peer.data_type != sig.data_type {
                cx.out
                    .defect(6, codes::SIGNAL_TYPE, loc, "Signal data type mismatch")?;
            }
        }
        PointerTarget::Gate(gate) => {
            let gate = &design.gates[gate];
            writeln!(
                cx.out,
                "      LOG {}[{}] ({d0}0, {d1}1)",
                cx.location(gate.scope, gate.name),
                ptr.pin
            )?;
        }
        PointerTarget::Lpm(lpm) => {
            let lpm = &design.lpms[lpm];
            writeln!(
                cx.out,
                "      LPM {} ({d0}0, {d1}1)",
                cx.location(lpm.scope, lpm.name)
            )?;
        }
        PointerTarget::Const(con) => show_const(cx, sig, loc, ptr, &design.consts[con])?,
        PointerTarget::Unknown => {
            writeln!(cx.out, "      ?[{}] ({d0}0, {d1}1)", ptr.pin)?;
        }
    }
    Ok(())
}

fn show_const(
    cx: &mut ReportContext<'_, '_>,
    sig: &Signal,
    loc: &str,
    ptr: &NexusPointer,
    con: &NetConst,
) -> io::Result<()> {
    let value = match &con.value {
        ConstValue::Bits(bits) => bits.to_string(),
        ConstValue::Real(r) => format!("{r:.6}"),
    };
    writeln!(
        cx.out,
        "      const-{value} ({}0, {}1, width={})",
        ptr.drive0, ptr.drive1, con.width
    )?;
    if sig.width != con.width {
        cx.out.defect(
            6,
            codes::CONST_WIDTH,
            loc,
            "Width of signal does not match width of connected constant vector.",
        )?;
    }
    if sig.data_type != con.data_type {
        cx.out.defect(
            6,
            codes::CONST_TYPE,
            loc,
            "Signal data type does not match literal type.",
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::printer::OutlinePrinter;
    use crate::writer::ReportWriter;
    use tracenet_common::LogicVec;
    use tracenet_diagnostics::Diagnostic;
    use tracenet_ir::{AttrValue, DelayPath, Design, DesignBuilder, GateKind, ScopeKind, SignalId};

    fn show(design: &Design, id: SignalId) -> (String, Vec<Diagnostic>) {
        let mut buf = Vec::new();
        let printer = OutlinePrinter::new();
        let diags = {
            let writer = ReportWriter::new(&mut buf, false);
            let mut cx = ReportContext::new(design, &printer, writer);
            show_signal(&mut cx, &design.signals[id]).unwrap();
            cx.out.finish().unwrap().1
        };
        (String::from_utf8(buf).unwrap(), diags)
    }

    #[test]
    fn header_and_endpoints() {
        let mut b = DesignBuilder::new();
        let top = b.root_scope("top", "top", ScopeKind::Module);
        let a = b.signal(top, "a", 4);
        b.signal_mut(a).port = PortDirection::Input;
        let nex = b.nexus_of(a);
        b.gate(top, "g", GateKind::Not, 4, &[Some(nex), None]);
        let d = b.finish();

        let (text, diags) = show(&d, a);
        assert_eq!(
            text,
            "  tri unsigned input logic[3:0] a[word=0, adr=0]  <width=4> nexus=top.a\n\
             \x20     SIG top.a word=0 (HiZ0, HiZ1)\n\
             \x20     LOG top.g[0] (strong0, strong1)\n"
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn peer_width_and_type_mismatch() {
        let mut b = DesignBuilder::new();
        let top = b.root_scope("top", "top", ScopeKind::Module);
        let a = b.signal(top, "a", 4);
        let nex = b.nexus_of(a);
        let alias = b.signal_on(top, "alias", 2, nex);
        b.signal_mut(alias).data_type = DataType::Bool;
        let d = b.finish();

        let (text, diags) = show(&d, a);
        assert!(text.contains("      SIG top.alias word=0 (HiZ0, HiZ1)\n"));
        assert!(text.contains("      ERROR: Signal width mismatch. Width=2\n"));
        assert!(text.contains("      ERROR: Signal data type mismatch\n"));
        let found: Vec<_> = diags.iter().map(|d| d.code).collect();
        assert_eq!(found, vec![codes::SIGNAL_WIDTH, codes::SIGNAL_TYPE]);
    }

    #[test]
    fn constant_mismatches() {
        let mut b = DesignBuilder::new();
        let top = b.root_scope("top", "top", ScopeKind::Module);
        let a = b.signal(top, "a", 4);
        let nex = b.nexus_of(a);
        b.constant(nex, NetConst::bits(LogicVec::from_u64(0b101, 3)));
        let r = b.signal(top, "r", 4);
        let rn = b.nexus_of(r);
        let mut real = NetConst::real(1.5);
        real.width = 4;
        b.constant(rn, real);
        let d = b.finish();

        let (text, diags) = show(&d, a);
        assert!(text.contains("      const-101 (strong0, strong1, width=3)\n"));
        assert!(text.contains(
            "      ERROR: Width of signal does not match width of connected constant vector.\n"
        ));
        assert_eq!(diags.len(), 1);

        let (text, diags) = show(&d, r);
        assert!(text.contains("      const-1.500000 (strong0, strong1, width=4)\n"));
        assert!(text.contains("      ERROR: Signal data type does not match literal type.\n"));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, codes::CONST_TYPE);
    }

    #[test]
    fn array_words_and_paths() {
        let mut b = DesignBuilder::new();
        let top = b.root_scope("top", "top", ScopeKind::Module);
        let mem = b.array_signal(top, "mem", 8, 2);
        let clk = b.signal(top, "clk", 1);
        let clk = b.nexus_of(clk);
        let attr = b.attribute("init", AttrValue::Num(0));
        let sig = b.signal_mut(mem);
        sig.kind = SignalKind::Reg;
        sig.array_base = 4;
        sig.attributes.push(attr);
        sig.paths.push(DelayPath {
            source: clk,
            condition: None,
            posedge: true,
            negedge: false,
            delays: [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
        });
        let d = b.finish();

        let (text, _) = show(&d, mem);
        assert!(text.contains("  reg unsigned logic[7:0] mem[word=1, adr=5]  <width=8> nexus=top.mem[1]\n"));
        assert!(text.contains("      path top.clk posedge 1,2,3 4,5,6 7,8,9 10,11,12\n"));
        assert!(text.ends_with("    init = 0\n"));
    }
}
