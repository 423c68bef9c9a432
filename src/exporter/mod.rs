//! Tree exporter: walks the source tree, transforms each header, writes the
//! output tree and assembles the umbrella header.
//!
//! One-shot batch execution: the first I/O error aborts the whole run with
//! no partial cleanup. Rerunning with unchanged inputs produces
//! byte-identical outputs; stale files from earlier runs are only removed
//! when `cleanOutput` is enabled.

use std::{fs, path::Path};

use anyhow::{Context, Ok, Result};
use colored::Colorize;

use crate::config::Config;
use crate::engine::{compose_header, transform};
use crate::strategy::Strategy;

pub mod scanner;

use scanner::scan_headers;

/// Per-run totals reported after an export.
#[derive(Debug)]
pub struct ExportSummary {
    pub headers_scanned: usize,
    pub headers_written: usize,
    /// Headers discarded because they opened no exported region
    /// (marker strategy only; the keyword strategy writes every header).
    pub headers_skipped: usize,
    /// Total exported regions across all headers.
    pub exports: usize,
    /// Lines with a rewritten extern keyword; `None` under the marker
    /// strategy, where no rewriting happens.
    pub extern_lines: Option<usize>,
    /// Walk entries that could not be accessed.
    pub unreadable_entries: usize,
    pub output_root: String,
    pub umbrella_path: String,
}

/// Run one export over the configured source tree.
pub fn export(config: &Config, verbose: bool) -> Result<ExportSummary> {
    let strategy = config.strategy();
    let source_prefix = config.source_prefix();
    let source_root = Path::new(&config.source_root);
    let output_root = Path::new(&config.output_root);
    let umbrella_path = output_root.join(&config.umbrella_file);

    if verbose {
        print_banner(config, &strategy, &umbrella_path);
    }

    // A missing source root is a config error, not a skippable walk entry
    if !source_root.is_dir() {
        anyhow::bail!(
            "Source root is not a directory: {}",
            source_root.display()
        );
    }

    if config.clean_output && output_root.exists() {
        fs::remove_dir_all(output_root).with_context(|| {
            format!("Failed to clean output directory: {}", output_root.display())
        })?;
    }
    fs::create_dir_all(output_root).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_root.display()
        )
    })?;

    let scan = scan_headers(source_root, &config.header_extension, &config.ignores, verbose);

    let mut summary = ExportSummary {
        headers_scanned: scan.files.len(),
        headers_written: 0,
        headers_skipped: 0,
        exports: 0,
        extern_lines: match strategy {
            Strategy::SingleKeyword { .. } => Some(0),
            Strategy::BlockMarkers { .. } => None,
        },
        unreadable_entries: scan.skipped_count,
        output_root: config.output_root.clone(),
        umbrella_path: umbrella_path.to_string_lossy().into_owned(),
    };

    let mut umbrella_body = String::new();

    for header_path in &scan.files {
        let relative = header_path
            .strip_prefix(source_root)
            .with_context(|| format!("Header outside source root: {}", header_path.display()))?;
        let relative = relative.to_string_lossy().replace('\\', "/");

        let source = fs::read_to_string(header_path)
            .with_context(|| format!("Failed to read header: {}", header_path.display()))?;

        let transformed = transform(&source, &strategy, &source_prefix);
        summary.exports += transformed.exports;
        if let Some(count) = summary.extern_lines.as_mut() {
            *count += transformed.extern_lines;
        }

        // Marker strategy: a header with no exported blocks leaves no
        // artifact behind and is not referenced by the umbrella.
        if matches!(strategy, Strategy::BlockMarkers { .. }) && transformed.is_empty_export() {
            summary.headers_skipped += 1;
            if verbose {
                eprintln!(
                    "{} No exported blocks in {}",
                    "skipped:".bold().yellow(),
                    header_path.display()
                );
            }
            continue;
        }

        let output_path = output_root.join(&relative);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
        fs::write(&output_path, compose_header(&relative, &transformed.body))
            .with_context(|| format!("Failed to write header: {}", output_path.display()))?;
        summary.headers_written += 1;

        umbrella_body.push_str(&format!("#include \"{}\"\n", relative));

        if verbose {
            println!("  {} -> {}", header_path.display(), output_path.display());
        }
    }

    fs::write(
        &umbrella_path,
        compose_header(&config.umbrella_file, &umbrella_body),
    )
    .with_context(|| format!("Failed to write umbrella header: {}", umbrella_path.display()))?;

    Ok(summary)
}

fn print_banner(config: &Config, strategy: &Strategy, umbrella_path: &Path) {
    println!("Generating {}", umbrella_path.display());
    println!("Headers from {} (recursively)", config.source_root);
    match strategy {
        Strategy::SingleKeyword {
            keyword,
            extern_keyword,
            extern_replacement,
        } => {
            println!("\tExport keyword is \"{}\"", keyword);
            println!(
                "\tExtern keyword is \"{}\", replacing with \"{}\"",
                extern_keyword, extern_replacement
            );
        }
        Strategy::BlockMarkers { start, end } => {
            println!("\tExport block markers are \"{}\" .. \"{}\"", start, end);
        }
    }
}
