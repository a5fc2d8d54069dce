//! User-defined primitive definitions, printed once after the scope tree.

use crate::codes;
use crate::context::ReportContext;
use std::io::{self, Write};
use tracenet_ir::UdpDefinition;

/// Prints a definition with its reference count and truth table.
///
/// A row of the wrong length is reported and then printed with `?` in
/// place of the missing levels.
pub(crate) fn show_primitive(
    cx: &mut ReportContext<'_, '_>,
    def: &UdpDefinition,
    refs: u32,
) -> io::Result<()> {
    let name = cx.design.name(def.name);
    writeln!(cx.out, "primitive {name} (referenced {refs} times)")?;
    if def.sequential {
        writeln!(cx.out, "    reg out = {};", def.init.as_char())?;
    } else {
        writeln!(cx.out, "    wire out;")?;
    }
    writeln!(cx.out, "    table")?;

    let expected = def.row_len();
    for (r, row) in def.rows.iter().enumerate() {
        let levels = row.chars().count();
        if levels != expected {
            let msg = format!("table row {r} has {levels} levels, expecting {expected}");
            cx.out.defect(4, codes::UDP_ROW, name, msg)?;
        }
        let mut level = row.chars();
        let mut next = || level.next().unwrap_or('?');

        let mut line = String::from("    ");
        if def.sequential {
            line.push_str(&format!(" cur={} :", next()));
        }
        for _ in 0..def.inputs {
            line.push(' ');
            line.push(next());
        }
        line.push_str(&format!(" : out={}", next()));
        writeln!(cx.out, "{line}")?;
    }

    writeln!(cx.out, "    endtable")?;
    writeln!(cx.out, "endprimitive")
}
