use crate::engine::classify::{LineKind, classify};
use crate::engine::region::RegionTracker;
use crate::strategy::Strategy;

/// Output of transforming one header file.
#[derive(Debug, PartialEq, Eq)]
pub struct TransformedHeader {
    /// Transformed body lines, each terminated with `\n`. May be empty.
    pub body: String,
    /// Number of exported regions opened in this file.
    pub exports: usize,
    /// Number of lines on which the extern keyword was rewritten.
    pub extern_lines: usize,
}

impl TransformedHeader {
    /// True when the file opened no exported region. Under the marker
    /// strategy such files produce no output artifact at all.
    pub fn is_empty_export(&self) -> bool {
        self.exports == 0
    }
}

/// Transform the raw text of one header into its exported body.
///
/// Include directives are rewritten and forwarded unconditionally, whether
/// or not a region is active; everything else goes through the region
/// tracker. Guard and linkage wrapping are applied later by the exporter.
pub fn transform(source: &str, strategy: &Strategy, source_prefix: &str) -> TransformedHeader {
    let mut tracker = RegionTracker::new();
    let mut body = String::new();

    for line in source.lines() {
        let classified = classify(line, strategy, source_prefix);
        if classified.kind == LineKind::Include {
            body.push_str(&classified.text);
            body.push('\n');
            continue;
        }
        if let Some(out) = tracker.step(classified, strategy) {
            body.push_str(&out);
            body.push('\n');
        }
    }

    TransformedHeader {
        body,
        exports: tracker.exports,
        extern_lines: tracker.extern_lines,
    }
}
