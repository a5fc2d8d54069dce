//! Macro-cell (LPM) reporting and width rules.
//!
//! Each device prints a header line naming its kind and declared width,
//! then one line per pin, then one `ERROR:` line per violated rule. A
//! violation never stops the device from being printed in full.

use crate::codes;
use crate::context::ReportContext;
use std::io::{self, Write};
use tracenet_ir::{Lpm, LpmKind, NexusId, ShiftDir};

const PIN: usize = 4;

/// Prints one macro-cell and checks its widths.
pub(crate) fn show_lpm(cx: &mut ReportContext<'_, '_>, lpm: &Lpm) -> io::Result<()> {
    let design = cx.design;
    let loc = cx.location(lpm.scope, lpm.name);
    let name = design.name(lpm.name);
    match &lpm.kind {
        LpmKind::Add => arithmetic(cx, lpm, "ADD", name, &loc),
        LpmKind::Sub => arithmetic(cx, lpm, "SUB", name, &loc),
        LpmKind::Divide => arithmetic(cx, lpm, "DIVIDE", name, &loc),
        LpmKind::Mod => arithmetic(cx, lpm, "MOD", name, &loc),
        LpmKind::Mult => mult(cx, lpm, name, &loc),
        LpmKind::CmpEeq => compare(cx, lpm, "EEQ", None, name, &loc),
        LpmKind::CmpNee => compare(cx, lpm, "NEE", None, name, &loc),
        LpmKind::CmpNe => compare(cx, lpm, "NE", None, name, &loc),
        LpmKind::CmpGe => compare(cx, lpm, "GE", Some(lpm.signed), name, &loc),
        LpmKind::CmpGt => compare(cx, lpm, "GT", Some(lpm.signed), name, &loc),
        LpmKind::Concat => concat(cx, lpm, name, &loc),
        LpmKind::Mux {
            size,
            selects,
            select,
        } => mux(cx, lpm, *size, *selects, *select, name, &loc),
        LpmKind::PartVp { base, select } => {
            part(cx, lpm, Part::Vp, *base, *select, name, &loc)
        }
        LpmKind::PartPv { base, select } => {
            part(cx, lpm, Part::Pv, *base, *select, name, &loc)
        }
        LpmKind::PartBi { base } => part_bi(cx, lpm, *base, name, &loc),
        LpmKind::Reduce(op) => reduce(cx, lpm, op.label(), &loc),
        LpmKind::Shift(dir) => shift(cx, lpm, *dir, name, &loc),
        LpmKind::SignExt => sign_ext(cx, lpm, name, &loc),
        LpmKind::Repeat { count } => repeat(cx, lpm, *count, name, &loc),
        LpmKind::Array {
            array,
            selects,
            address,
        } => {
            let sig = &design.signals[*array];
            let array_name = design.name(sig.name);
            let word_width = sig.width;
            writeln!(
                cx.out,
                "  LPM_ARRAY: <width={}, signal={array_name}>",
                lpm.width
            )?;
            writeln!(cx.out, "    Q: {}", cx.nexus(lpm.q))?;
            writeln!(
                cx.out,
                "    Address: {} (address width={selects})",
                cx.nexus(*address)
            )?;
            let q = cx.width(lpm.q);
            if q != lpm.width {
                let msg = format!("Data Q width doesn't match nexus width={q}");
                cx.out.defect(PIN, codes::NEXUS_WIDTH, &loc, msg)?;
            }
            if word_width != lpm.width {
                let msg = format!("Data width doesn't match word width={word_width}");
                cx.out.defect(PIN, codes::ARRAY_WORD_WIDTH, &loc, msg)?;
            }
            Ok(())
        }
        LpmKind::Ff { clock, enable } => ff(cx, lpm, *clock, *enable, name, &loc),
        LpmKind::Sfunc { call } => sfunc(cx, lpm, call, name, &loc),
        LpmKind::Ufunc { definition } => {
            let call = design.scope_name(*definition);
            writeln!(
                cx.out,
                "  LPM_UFUNC {name}: <call={call}, width={}, ports={}>",
                lpm.width,
                lpm.data.len()
            )?;
            q_matches_part(cx, lpm, &loc)?;
            writeln!(cx.out, "    Q: {}", cx.nexus(lpm.q))?;
            for (i, &pin) in lpm.data.iter().enumerate() {
                writeln!(cx.out, "    D{i}: {} <width={}>", cx.nexus(pin), cx.width(pin))?;
            }
            Ok(())
        }
        LpmKind::Unsupported { code } => {
            tracing::warn!(lpm = %loc, code, "unsupported macro-cell kind");
            cx.out.warning(
                codes::UNSUPPORTED_LPM,
                &loc,
                format!("unsupported macro-cell kind {code}"),
            );
            writeln!(
                cx.out,
                "  LPM({code}) {name}: <width={}, signed={}>",
                lpm.width,
                u8::from(lpm.signed)
            )
        }
    }
}

/// `Width of <port> is <actual>, not <expected>` when they differ.
fn port_width(
    cx: &mut ReportContext<'_, '_>,
    port: &str,
    nexus: Option<NexusId>,
    expected: u32,
    loc: &str,
) -> io::Result<()> {
    let actual = cx.width(nexus);
    if actual != expected {
        let msg = format!("Width of {port} is {actual}, not {expected}");
        cx.out.defect(PIN, codes::NEXUS_WIDTH, loc, msg)?;
    }
    Ok(())
}

/// `<port>: Nexus width is <actual>` when it differs from `expected`.
fn pin_width(
    cx: &mut ReportContext<'_, '_>,
    port: &str,
    nexus: Option<NexusId>,
    expected: u32,
    loc: &str,
) -> io::Result<()> {
    let actual = cx.width(nexus);
    if actual != expected {
        let msg = format!("{port}: Nexus width is {actual}");
        cx.out.defect(PIN, codes::NEXUS_WIDTH, loc, msg)?;
    }
    Ok(())
}

fn q_matches_part(cx: &mut ReportContext<'_, '_>, lpm: &Lpm, loc: &str) -> io::Result<()> {
    let q = cx.width(lpm.q);
    if q != lpm.width {
        let msg = format!("Q output nexus width={q} does not match part width");
        cx.out.defect(PIN, codes::NEXUS_WIDTH, loc, msg)?;
    }
    Ok(())
}

fn arithmetic(
    cx: &mut ReportContext<'_, '_>,
    lpm: &Lpm,
    kind: &str,
    name: &str,
    loc: &str,
) -> io::Result<()> {
    writeln!(cx.out, "  LPM_{kind} {name}: <width={}>", lpm.width)?;
    writeln!(cx.out, "    Q: {}", cx.nexus(lpm.q))?;
    writeln!(cx.out, "    DataA: {}", cx.nexus(lpm.data(0)))?;
    writeln!(cx.out, "    DataB: {}", cx.nexus(lpm.data(1)))?;
    port_width(cx, "Q", lpm.q, lpm.width, loc)?;
    port_width(cx, "A", lpm.data(0), lpm.width, loc)?;
    port_width(cx, "B", lpm.data(1), lpm.width, loc)
}

fn mult(cx: &mut ReportContext<'_, '_>, lpm: &Lpm, name: &str, loc: &str) -> io::Result<()> {
    writeln!(cx.out, "  LPM_MULT {name}: <width={}>", lpm.width)?;
    writeln!(cx.out, "    O: {}", cx.nexus(lpm.q))?;
    for (port, pin) in [("A", lpm.data(0)), ("B", lpm.data(1))] {
        writeln!(cx.out, "    {port}: {} <width={}>", cx.nexus(pin), cx.width(pin))?;
    }
    port_width(cx, "Q", lpm.q, lpm.width, loc)
}

/// `signed` is `Some` for the ordering comparisons, whose header names it.
fn compare(
    cx: &mut ReportContext<'_, '_>,
    lpm: &Lpm,
    kind: &str,
    signed: Option<bool>,
    name: &str,
    loc: &str,
) -> io::Result<()> {
    match signed {
        Some(signed) => {
            let sign = if signed { "signed" } else { "unsigned" };
            writeln!(cx.out, "  LPM_CMP_{kind} {name}: <width={} {sign}>", lpm.width)?;
        }
        None => writeln!(cx.out, "  LPM_CMP_{kind} {name}: <width={}>", lpm.width)?,
    }
    writeln!(cx.out, "    O: {}", cx.nexus(lpm.q))?;
    writeln!(cx.out, "    A: {}", cx.nexus(lpm.data(0)))?;
    writeln!(cx.out, "    B: {}", cx.nexus(lpm.data(1)))?;
    port_width(cx, "A", lpm.data(0), lpm.width, loc)?;
    port_width(cx, "B", lpm.data(1), lpm.width, loc)?;
    port_width(cx, "Q", lpm.q, 1, loc)
}

fn concat(cx: &mut ReportContext<'_, '_>, lpm: &Lpm, name: &str, loc: &str) -> io::Result<()> {
    writeln!(
        cx.out,
        "  LPM_CONCAT {name}: <width={}, inputs={}>",
        lpm.width,
        lpm.data.len()
    )?;
    writeln!(cx.out, "    O: {}", cx.nexus(lpm.q))?;
    let mut sum: u64 = 0;
    for (i, &pin) in lpm.data.iter().enumerate() {
        let width = cx.width(pin);
        writeln!(cx.out, "    I{i}: {} (width={width})", cx.nexus(pin))?;
        sum += u64::from(width);
    }
    if sum != u64::from(lpm.width) {
        let msg = format!("Got {sum} bits input, expecting {}", lpm.width);
        cx.out.defect(PIN, codes::CONCAT_WIDTH, loc, msg)?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn mux(
    cx: &mut ReportContext<'_, '_>,
    lpm: &Lpm,
    size: u32,
    selects: u32,
    select: Option<NexusId>,
    name: &str,
    loc: &str,
) -> io::Result<()> {
    writeln!(cx.out, "  LPM_MUX {name}: <width={}, size={size}>", lpm.width)?;
    writeln!(cx.out, "    Q: {}", cx.nexus(lpm.q))?;
    pin_width(cx, "Q", lpm.q, lpm.width, loc)?;
    writeln!(cx.out, "    S: {} <width={selects}>", cx.nexus(select))?;
    pin_width(cx, "S", select, selects, loc)?;
    for i in 0..size as usize {
        let pin = lpm.data(i);
        writeln!(cx.out, "    D{i}: {}", cx.nexus(pin))?;
        pin_width(cx, &format!("D{i}"), pin, lpm.width, loc)?;
    }
    Ok(())
}

#[derive(Clone, Copy)]
enum Part {
    Vp,
    Pv,
}

#[allow(clippy::too_many_arguments)]
fn part(
    cx: &mut ReportContext<'_, '_>,
    lpm: &Lpm,
    dir: Part,
    base: u32,
    select: Option<NexusId>,
    name: &str,
    loc: &str,
) -> io::Result<()> {
    let tag = match dir {
        Part::Vp => "VP",
        Part::Pv => "PV",
    };
    writeln!(
        cx.out,
        "  LPM_PART_{tag} {name}: <width={}, base={base}, signed={}>",
        lpm.width,
        u8::from(lpm.signed)
    )?;
    writeln!(cx.out, "    O: {}", cx.nexus(lpm.q))?;
    writeln!(cx.out, "    I: {}", cx.nexus(lpm.data(0)))?;
    if select.is_some() {
        writeln!(cx.out, "    S: {}", cx.nexus(select))?;
        if base != 0 {
            cx.out.defect(
                PIN,
                codes::PART_BASE_AND_SELECT,
                loc,
                "Part select has base AND selector",
            )?;
        }
    }

    // The wide side must hold the whole part; the narrow side is exact.
    let (wide, wide_label, narrow) = match dir {
        Part::Vp => (lpm.data(0), "Data", lpm.q),
        Part::Pv => (lpm.q, "Target", lpm.data(0)),
    };
    let reach = u64::from(lpm.width) + u64::from(base);
    let wide_width = cx.width(wide);
    if u64::from(wide_width) < reach {
        let msg = format!(
            "Part select is out of range. {wide_label} nexus width={wide_width}, width+base={reach}"
        );
        cx.out.defect(PIN, codes::PART_RANGE, loc, msg)?;
    }
    part_exact(cx, narrow, lpm.width, loc)
}

fn part_exact(
    cx: &mut ReportContext<'_, '_>,
    nexus: Option<NexusId>,
    width: u32,
    loc: &str,
) -> io::Result<()> {
    let actual = cx.width(nexus);
    if actual != width {
        let msg = format!("Part select input mismatch. Nexus width={actual}, expect width={width}");
        cx.out.defect(PIN, codes::NEXUS_WIDTH, loc, msg)?;
    }
    Ok(())
}

fn part_bi(
    cx: &mut ReportContext<'_, '_>,
    lpm: &Lpm,
    base: u32,
    name: &str,
    loc: &str,
) -> io::Result<()> {
    let (port_p, port_v) = (lpm.q, lpm.data(0));
    writeln!(
        cx.out,
        "  LPM_PART_BI {name}: <width={}, base={base}, signed={}>",
        lpm.width,
        u8::from(lpm.signed)
    )?;
    writeln!(cx.out, "    P: {}", cx.nexus(port_p))?;
    let v_width = cx.width(port_v);
    writeln!(cx.out, "    V: {} <width={v_width}>", cx.nexus(port_v))?;
    let reach = u64::from(lpm.width) + u64::from(base);
    if u64::from(v_width) < reach {
        let msg = format!(
            "Part select is out of range. Data nexus width={v_width}, width+base={reach}"
        );
        cx.out.defect(PIN, codes::PART_RANGE, loc, msg)?;
    }
    part_exact(cx, port_p, lpm.width, loc)
}

fn reduce(cx: &mut ReportContext<'_, '_>, lpm: &Lpm, label: &str, loc: &str) -> io::Result<()> {
    writeln!(cx.out, "  LPM_RE_{label}: {loc} <width={}>", lpm.width)?;
    writeln!(cx.out, "    Q: {}", cx.nexus(lpm.q))?;
    writeln!(cx.out, "    D: {}", cx.nexus(lpm.data(0)))?;
    let q = cx.width(lpm.q);
    if q != 1 {
        let msg = format!("Width of Q is {q}, expecting 1");
        cx.out.defect(PIN, codes::NEXUS_WIDTH, loc, msg)?;
    }
    let d = cx.width(lpm.data(0));
    if d != lpm.width {
        let msg = format!("Width of input is {d}, expecting {}", lpm.width);
        cx.out.defect(PIN, codes::NEXUS_WIDTH, loc, msg)?;
    }
    Ok(())
}

fn shift(
    cx: &mut ReportContext<'_, '_>,
    lpm: &Lpm,
    dir: ShiftDir,
    name: &str,
    loc: &str,
) -> io::Result<()> {
    let un = if lpm.signed { "" } else { "un" };
    writeln!(
        cx.out,
        "  LPM_SHIFT{} {name}: <width={}, {un}signed>",
        dir.suffix(),
        lpm.width
    )?;
    writeln!(cx.out, "    Q: {}", cx.nexus(lpm.q))?;
    q_matches_part(cx, lpm, loc)?;
    writeln!(cx.out, "    D: {}", cx.nexus(lpm.data(0)))?;
    let d = cx.width(lpm.data(0));
    if d != lpm.width {
        let msg = format!("D input nexus width={d} does not match part width");
        cx.out.defect(PIN, codes::NEXUS_WIDTH, loc, msg)?;
    }
    let s = lpm.data(1);
    writeln!(cx.out, "    S: {} <width={}>", cx.nexus(s), cx.width(s))
}

fn sign_ext(cx: &mut ReportContext<'_, '_>, lpm: &Lpm, name: &str, loc: &str) -> io::Result<()> {
    writeln!(cx.out, "  LPM_SIGN_EXT {name}: <width={}>", lpm.width)?;
    writeln!(cx.out, "    Q: {}", cx.nexus(lpm.q))?;
    let d = lpm.data(0);
    writeln!(cx.out, "    D: {} <width={}>", cx.nexus(d), cx.width(d))?;
    let q = cx.width(lpm.q);
    if q != lpm.width {
        let msg = format!("Width of Q is {q}, expecting {}", lpm.width);
        cx.out.defect(PIN, codes::NEXUS_WIDTH, loc, msg)?;
    }
    Ok(())
}

fn repeat(
    cx: &mut ReportContext<'_, '_>,
    lpm: &Lpm,
    count: u32,
    name: &str,
    loc: &str,
) -> io::Result<()> {
    let width = lpm.width;
    writeln!(cx.out, "  LPM_REPEAT {name}: <width={width}, count={count}>")?;
    writeln!(cx.out, "    Q: {}", cx.nexus(lpm.q))?;
    writeln!(cx.out, "    D: {}", cx.nexus(lpm.data(0)))?;
    let q = cx.width(lpm.q);
    if q != width {
        let msg = format!("Width of Q is {q}, expecting {width}");
        cx.out.defect(PIN, codes::NEXUS_WIDTH, loc, msg)?;
    }
    if count == 0 || count > width || width % count != 0 {
        cx.out
            .defect(PIN, codes::REPEAT_COUNT, loc, "Repeat count not reasonable")?;
    } else {
        let d = cx.width(lpm.data(0));
        if d != width / count {
            let msg = format!("Width of D is {d}, expecting {}", width / count);
            cx.out.defect(PIN, codes::NEXUS_WIDTH, loc, msg)?;
        }
    }
    Ok(())
}

fn ff(
    cx: &mut ReportContext<'_, '_>,
    lpm: &Lpm,
    clock: Option<NexusId>,
    enable: Option<NexusId>,
    name: &str,
    loc: &str,
) -> io::Result<()> {
    writeln!(cx.out, "  LPM_FF {name}: <width={}>", lpm.width)?;
    writeln!(cx.out, "    clk: {}", cx.nexus(clock))?;
    pin_width(cx, "clk", clock, 1, loc)?;
    if enable.is_some() {
        writeln!(cx.out, "    CE: {}", cx.nexus(enable))?;
        pin_width(cx, "CE", enable, 1, loc)?;
    }
    writeln!(cx.out, "    D: {}", cx.nexus(lpm.data(0)))?;
    pin_width(cx, "D", lpm.data(0), lpm.width, loc)?;
    writeln!(cx.out, "    Q: {}", cx.nexus(lpm.q))?;
    pin_width(cx, "Q", lpm.q, lpm.width, loc)
}

fn sfunc(
    cx: &mut ReportContext<'_, '_>,
    lpm: &Lpm,
    call: &str,
    name: &str,
    loc: &str,
) -> io::Result<()> {
    let data_type = cx.shape(lpm.q).data_type;
    writeln!(
        cx.out,
        "  LPM_SFUNC {name}: <call={call}, width={}, type={data_type}, ports={}>",
        lpm.width,
        lpm.data.len()
    )?;
    q_matches_part(cx, lpm, loc)?;
    writeln!(cx.out, "    Q: {}", cx.nexus(lpm.q))?;
    for (i, &pin) in lpm.data.iter().enumerate() {
        let shape = cx.shape(pin);
        writeln!(
            cx.out,
            "    D{i}: {} <width={}, type={}>",
            cx.nexus(pin),
            shape.width,
            shape.data_type
        )?;
    }
    Ok(())
}
