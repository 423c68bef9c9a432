//! Report formatting and printing utilities.
//!
//! Human-readable end-of-run summaries; not a machine-readable interface.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::exporter::ExportSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Export(summary) => {
            print_export_to(summary, &mut io::stdout().lock());
        }
        CommandSummary::Init(summary) => {
            print_init(summary);
        }
    }
}

/// Print an export summary to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_export_to<W: Write>(summary: &ExportSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Exported {} block(s) from {} header {} to {}",
            summary.exports,
            summary.headers_scanned,
            if summary.headers_scanned == 1 {
                "file"
            } else {
                "files"
            },
            summary.output_root
        )
        .green()
    );
    let _ = writeln!(writer, "  - umbrella: {}", summary.umbrella_path);
    let _ = writeln!(writer, "  - headers written: {}", summary.headers_written);
    if summary.headers_skipped > 0 {
        let _ = writeln!(
            writer,
            "  - skipped (no exported blocks): {}",
            summary.headers_skipped
        );
    }
    if let Some(extern_lines) = summary.extern_lines {
        let _ = writeln!(writer, "  - extern lines rewritten: {}", extern_lines);
    }
    if summary.unreadable_entries > 0 {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be accessed during the scan",
            "warning:".bold().yellow(),
            summary.unreadable_entries
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
