//! Conformance helpers for the tracenet reporter.
//!
//! Provides small reference designs and a helper that runs the complete
//! report over a design and returns the emitted text with its summary, so
//! integration tests can assert on both.

#![warn(missing_docs)]

use tracenet_common::Logic;
use tracenet_diagnostics::DiagnosticCode;
use tracenet_ir::{
    Design, DesignBuilder, GateKind, LpmKind, ProcessKind, ScopeId, ScopeKind, Statement,
};
use tracenet_report::{OutlinePrinter, ReportSummary, Reporter};

/// Text and summary of one complete report.
pub struct ReportRun {
    /// The emitted report.
    pub text: String,
    /// The run summary.
    pub summary: ReportSummary,
}

impl ReportRun {
    /// Returns every `ERROR:` line with its indentation removed.
    pub fn error_lines(&self) -> Vec<&str> {
        self.text
            .lines()
            .map(str::trim_start)
            .filter(|l| l.starts_with("ERROR:"))
            .collect()
    }

    /// Returns the codes of the error diagnostics, in emission order.
    pub fn error_codes(&self) -> Vec<DiagnosticCode> {
        self.summary
            .diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .map(|d| d.code)
            .collect()
    }

    /// Counts lines equal to `line` exactly.
    pub fn count_line(&self, line: &str) -> usize {
        self.text.lines().filter(|l| *l == line).count()
    }
}

/// Runs the full report over `design` into memory.
///
/// Panics if the report cannot be produced; conformance designs are
/// always well formed.
pub fn report(design: &Design) -> ReportRun {
    let mut buf = Vec::new();
    let summary = Reporter::new(design, OutlinePrinter::new())
        .run(&mut buf)
        .expect("report should complete");
    let text = String::from_utf8(buf).expect("report should be UTF-8");
    ReportRun { text, summary }
}

/// Starts a design with a single root module `top`.
pub fn top_module() -> (DesignBuilder, ScopeId) {
    let mut b = DesignBuilder::new();
    let top = b.root_scope("top", "top", ScopeKind::Module);
    (b, top)
}

/// An 8-bit adder `top.add0` whose B input is `b_width` bits wide.
pub fn adder(b_width: u32) -> Design {
    let (mut b, top) = top_module();
    let q = b.signal(top, "sum", 8);
    let a = b.signal(top, "a", 8);
    let bb = b.signal(top, "b", b_width);
    let (q, a, bb) = (b.nexus_of(q), b.nexus_of(a), b.nexus_of(bb));
    b.lpm(top, "add0", 8, LpmKind::Add, Some(q), &[Some(a), Some(bb)]);
    b.finish()
}

/// A 2-input AND gate `top.g1` with its output left unconnected.
pub fn dangling_and() -> Design {
    let (mut b, top) = top_module();
    let x = b.signal(top, "x", 1);
    let y = b.signal(top, "y", 1);
    let (x, y) = (b.nexus_of(x), b.nexus_of(y));
    b.gate(top, "g1", GateKind::And, 1, &[None, Some(x), Some(y)]);
    b.finish()
}

/// A combinational two-input primitive `maj2` instanced `instances` times.
pub fn udp_instances(instances: usize) -> Design {
    let (mut b, top) = top_module();
    let udp = b.udp("maj2", false, Logic::X, 2, &["000", "010", "100", "111"]);
    let out = b.signal(top, "o", 1);
    let i0 = b.signal(top, "i0", 1);
    let i1 = b.signal(top, "i1", 1);
    let pins = [Some(b.nexus_of(out)), Some(b.nexus_of(i0)), Some(b.nexus_of(i1))];
    for n in 0..instances {
        b.gate(top, &format!("u{n}"), GateKind::Udp(udp), 1, &pins);
    }
    b.finish()
}

/// A 4-way, 8-bit multiplexer whose data input `narrow` is 7 bits wide.
pub fn mux_with_narrow_input(narrow: usize) -> Design {
    let (mut b, top) = top_module();
    let q = b.signal(top, "q", 8);
    let s = b.signal(top, "s", 2);
    let (q, s) = (b.nexus_of(q), b.nexus_of(s));
    let data: Vec<_> = (0..4)
        .map(|i| {
            let width = if i == narrow { 7 } else { 8 };
            let sig = b.signal(top, &format!("d{i}"), width);
            Some(b.nexus_of(sig))
        })
        .collect();
    let kind = LpmKind::Mux {
        size: 4,
        selects: 2,
        select: Some(s),
    };
    b.lpm(top, "mux0", 8, kind, Some(q), &data);
    b.finish()
}

/// An 8-bit replication `top.rep` with the given count and input width.
pub fn repeat(count: u32, d_width: u32) -> Design {
    let (mut b, top) = top_module();
    let q = b.signal(top, "q", 8);
    let d = b.signal(top, "d", d_width);
    let (q, d) = (b.nexus_of(q), b.nexus_of(d));
    b.lpm(top, "rep", 8, LpmKind::Repeat { count }, Some(q), &[Some(d)]);
    b.finish()
}

/// An 8-bit concatenation of a 3-bit and a `second`-bit input.
pub fn concat(second: u32) -> Design {
    let (mut b, top) = top_module();
    let q = b.signal(top, "q", 8);
    let x = b.signal(top, "x", 3);
    let y = b.signal(top, "y", second);
    let (q, x, y) = (b.nexus_of(q), b.nexus_of(x), b.nexus_of(y));
    b.lpm(top, "cat", 8, LpmKind::Concat, Some(q), &[Some(x), Some(y)]);
    b.finish()
}

/// Two roots; `top` holds children `u1` and `u2`, and `u1` holds `u1.blk`.
/// A task scope carries a definition and an `initial` process runs in `top`.
pub fn hierarchy() -> Design {
    let mut b = DesignBuilder::new();
    let top = b.root_scope("top", "top", ScopeKind::Module);
    let u1 = b.child_scope(top, "u1", "cell", ScopeKind::Module);
    b.child_scope(u1, "blk", "blk", ScopeKind::Begin);
    b.child_scope(top, "u2", "cell", ScopeKind::Module);
    let t = b.child_scope(top, "tick", "tick", ScopeKind::Task);
    b.definition(t, Statement::Nop);
    b.root_scope("bench", "bench", ScopeKind::Module);
    b.process(
        top,
        ProcessKind::Initial,
        Statement::Block {
            scope: None,
            stmts: vec![Statement::Nop],
        },
    );
    b.finish()
}
