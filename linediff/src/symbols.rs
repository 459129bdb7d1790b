//! Symbols used for diff rendering.

use linediff_core::LineKind;

/// Gutter symbols shown before lines to indicate what changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSymbols {
    /// Symbol for removed lines (default: "-")
    pub removed: &'static str,

    /// Symbol for added lines (default: "+")
    pub added: &'static str,
}

impl Default for DiffSymbols {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl DiffSymbols {
    /// Standard diff symbols using `-` and `+`
    pub const STANDARD: Self = Self {
        removed: "-",
        added: "+",
    };

    /// Get the symbol for a line kind, if any.
    pub const fn symbol(&self, kind: LineKind) -> Option<&'static str> {
        match kind {
            LineKind::Same => None,
            LineKind::Removed => Some(self.removed),
            LineKind::Added => Some(self.added),
        }
    }
}
