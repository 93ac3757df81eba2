//! Run summary printing.
//!
//! Separate from the run itself so the library can be used without any
//! terminal output.

use std::io::{self, Write};

use colored::Colorize;

use super::run::RunSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the summary of a successful run to stdout.
pub fn print(summary: &RunSummary, verbose: bool) {
    print_to(summary, verbose, &mut io::stdout().lock());
}

/// Print the summary to a custom writer.
pub fn print_to<W: Write>(summary: &RunSummary, verbose: bool, writer: &mut W) {
    let count = summary.block.len();
    let headline = if count == 0 {
        format!(
            "No global statements found in {} ({}) - rendered empty hooks",
            summary.input.display(),
            summary.format.name()
        )
    } else {
        format!(
            "Extracted {} global {} from {} ({})",
            count,
            if count == 1 { "statement" } else { "statements" },
            summary.input.display(),
            summary.format.name()
        )
    };
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), headline.green());

    if verbose {
        if let Some(path) = &summary.config_path {
            let _ = writeln!(writer, "  {} {}", "config:".dimmed(), path.display());
        }
        for statement in summary.block.statements() {
            for line in statement.lines() {
                let _ = writeln!(writer, "  {} {}", "|".blue(), line);
            }
        }
    }

    for path in &summary.written {
        let _ = writeln!(writer, "  {} {}", "wrote".cyan(), path.display());
    }
    let _ = writeln!(
        writer,
        "{} {} files written to {}",
        SUCCESS_MARK.green(),
        summary.written.len(),
        summary.output_dir.display()
    );
}
