use crate::strategy::Strategy;

const INCLUDE_PREFIX: &str = "#include";

/// What a single source line means to the extraction engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// An `#include` directive; forwarded to the output unconditionally.
    Include,
    /// A line opening an exported region (keyword or start marker).
    RegionStart,
    /// A line closing an exported region (marker strategy only).
    RegionEnd,
    /// Ordinary content.
    Content,
    /// Empty or whitespace-only line.
    Blank,
}

/// Classification of one line plus its marker-stripped text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub kind: LineKind,
    pub text: String,
}

/// Classify one line of header source.
///
/// Markers are matched by prefix only, never as substrings; a marker that is
/// not the first token on the line is ordinary content. Include lines have
/// every occurrence of `source_prefix` removed so their paths become
/// relative to the exported tree.
pub fn classify(line: &str, strategy: &Strategy, source_prefix: &str) -> Classified {
    if line.starts_with(INCLUDE_PREFIX) {
        return Classified {
            kind: LineKind::Include,
            text: line.replace(source_prefix, ""),
        };
    }

    match strategy {
        Strategy::SingleKeyword { keyword, .. } => {
            if let Some(rest) = line.strip_prefix(keyword.as_str()) {
                return Classified {
                    kind: LineKind::RegionStart,
                    text: rest.trim_start().to_string(),
                };
            }
        }
        Strategy::BlockMarkers { start, end } => {
            // The end marker is checked first so that a start marker which
            // happens to be a prefix of the end marker cannot shadow it.
            if let Some(rest) = line.strip_prefix(end.as_str()) {
                return Classified {
                    kind: LineKind::RegionEnd,
                    text: rest.trim_start().to_string(),
                };
            }
            if let Some(rest) = line.strip_prefix(start.as_str()) {
                return Classified {
                    kind: LineKind::RegionStart,
                    text: rest.trim_start().to_string(),
                };
            }
        }
    }

    if line.trim().is_empty() {
        Classified {
            kind: LineKind::Blank,
            text: line.to_string(),
        }
    } else {
        Classified {
            kind: LineKind::Content,
            text: line.to_string(),
        }
    }
}
