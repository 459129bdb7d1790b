//! Core diff types.
//!
//! These types represent the result of a diff computation and can be
//! traversed/rendered by presentation layers.

/// How a row of the aligned output relates the two inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The line is present in both inputs at this alignment position
    Same,
    /// The line is present in `modified` only
    Added,
    /// The line is present in `original` only
    Removed,
}

impl LineKind {
    /// Returns true if this row should be highlighted (not [`LineKind::Same`]).
    pub const fn is_changed(self) -> bool {
        !matches!(self, Self::Same)
    }
}

/// One row of the aligned two-column view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRow<'a> {
    /// How this row relates the two inputs
    pub kind: LineKind,

    /// Line content from `original`; empty when `kind` is [`LineKind::Added`]
    pub original: &'a str,

    /// Line content from `modified`; empty when `kind` is [`LineKind::Removed`]
    pub modified: &'a str,

    /// 1-based index in the aligned output (not the source line number)
    pub position: usize,
}

/// The kind of a character-level span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Identical in both lines
    Context,
    /// Present in the original line only
    Removed,
    /// Present in the modified line only
    Added,
}

/// A contiguous piece of a character-level sub-diff between two lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSpan<'a> {
    /// The kind of change
    pub kind: SpanKind,

    /// The substring this span covers
    pub text: &'a str,
}

/// Aggregate change counts, measured in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeCount {
    /// Total characters across all [`SpanKind::Added`] spans
    pub additions: usize,

    /// Total characters across all [`SpanKind::Removed`] spans
    pub removals: usize,
}
