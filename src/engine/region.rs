use crate::engine::classify::{Classified, LineKind};
use crate::strategy::Strategy;

/// Per-file state machine deciding which lines belong to the exported
/// surface.
///
/// Starts `Outside`; a `RegionStart` switches to `Inside`. With the keyword
/// strategy a region closes on a blank line at zero brace depth, with the
/// marker strategy only on the explicit end marker. A region still open at
/// end of file keeps emitting until the file runs out; that lenience matches
/// the original tool and is intentional.
#[derive(Debug)]
pub struct RegionTracker {
    inside: bool,
    depth: i32,
    /// Number of region-start lines seen.
    pub exports: usize,
    /// Number of lines on which the extern keyword was rewritten
    /// (counted per line, not per occurrence; keyword strategy only).
    pub extern_lines: usize,
}

impl Default for RegionTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionTracker {
    pub fn new() -> Self {
        Self {
            inside: false,
            depth: 0,
            exports: 0,
            extern_lines: 0,
        }
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }

    /// Feed one classified line; returns the text to emit, if any.
    ///
    /// Include lines are handled by the caller and must not be fed here.
    pub fn step(&mut self, classified: Classified, strategy: &Strategy) -> Option<String> {
        match strategy {
            Strategy::SingleKeyword {
                extern_keyword,
                extern_replacement,
                ..
            } => self.step_keyword(classified, extern_keyword, extern_replacement),
            Strategy::BlockMarkers { .. } => self.step_markers(classified),
        }
    }

    fn step_keyword(
        &mut self,
        classified: Classified,
        extern_keyword: &str,
        extern_replacement: &str,
    ) -> Option<String> {
        match classified.kind {
            LineKind::RegionStart => {
                // A start while already inside is tolerated: it still counts
                // and its remainder is ordinary content.
                self.exports += 1;
                self.inside = true;
                if classified.text.trim().is_empty() {
                    None
                } else {
                    Some(self.emit_content(&classified.text, extern_keyword, extern_replacement))
                }
            }
            LineKind::Content if self.inside => {
                Some(self.emit_content(&classified.text, extern_keyword, extern_replacement))
            }
            LineKind::Blank if self.inside => {
                if self.depth == 0 {
                    // Blank line at zero depth terminates the region; the
                    // blank itself is still part of the output.
                    self.inside = false;
                    Some(String::new())
                } else {
                    Some(classified.text)
                }
            }
            _ => None,
        }
    }

    fn step_markers(&mut self, classified: Classified) -> Option<String> {
        match classified.kind {
            LineKind::RegionStart => {
                self.exports += 1;
                self.inside = true;
                if classified.text.trim().is_empty() {
                    None
                } else {
                    Some(classified.text)
                }
            }
            LineKind::RegionEnd => {
                // Unconditional close; an end with no matching start is a
                // no-op. Marker lines are never emitted.
                self.inside = false;
                None
            }
            LineKind::Content | LineKind::Blank if self.inside => Some(classified.text),
            _ => None,
        }
    }

    fn emit_content(
        &mut self,
        line: &str,
        extern_keyword: &str,
        extern_replacement: &str,
    ) -> String {
        self.depth += line.matches('{').count() as i32;
        self.depth -= line.matches('}').count() as i32;

        if line.contains(extern_keyword) {
            self.extern_lines += 1;
            line.replace(extern_keyword, extern_replacement)
        } else {
            line.to_string()
        }
    }
}
