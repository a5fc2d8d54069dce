//! The reporting run: load, inspect, write, summarize.

use tracenet_report::{OutlinePrinter, ReportSummary, Reporter};

use crate::pipeline::{config_for, load_design, render_diagnostics, use_color};
use crate::{Cli, SummaryFormat};

/// Exit code when the design has no defects.
const EXIT_CLEAN: i32 = 0;
/// Exit code when at least one defect was reported.
const EXIT_DEFECTS: i32 = 1;

/// Runs the reporter for the design named on the command line.
pub fn run(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let config = config_for(cli)?;
    let design = load_design(&cli.design)?;

    if !cli.quiet && cli.format == SummaryFormat::Text {
        eprintln!("   Checking {}", cli.design.display());
    }

    let summary = Reporter::new(&design, OutlinePrinter::new())
        .run_to_path(&config, cli.output.as_deref())?;

    match cli.format {
        SummaryFormat::Text => {
            if !cli.quiet {
                let color = use_color(cli.color, config.diagnostics.color);
                eprint!(
                    "{}",
                    render_diagnostics(&summary.diagnostics, color, config.diagnostics.limit)
                );
                eprintln!("{}", result_line(&summary));
            }
        }
        SummaryFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(exit_code(&summary))
}

fn result_line(summary: &ReportSummary) -> String {
    let warnings = summary.diagnostics.len().saturating_sub(summary.defects);
    let mut line = format!(
        "   Result: {} error(s), {} warning(s)",
        summary.defects, warnings
    );
    if let Some(hash) = summary.fingerprint {
        line.push_str(&format!(", fingerprint {hash}"));
    }
    line
}

fn exit_code(summary: &ReportSummary) -> i32 {
    if summary.is_clean() {
        EXIT_CLEAN
    } else {
        EXIT_DEFECTS
    }
}
