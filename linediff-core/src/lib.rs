#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod align;
mod chardiff;
mod stats;
mod types;

pub use align::align;
pub use chardiff::char_diff;
pub use stats::count_changes;
pub use types::{ChangeCount, CharSpan, LineKind, LineRow, SpanKind};

use core::fmt;

use tracing::debug;

/// Options controlling a [`TextDiff`] computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Refuse the computation when either input has more lines than this.
    ///
    /// The alignment table is quadratic in the input sizes; a ceiling lets
    /// interactive callers fail fast with [`DiffError::TooLarge`] instead
    /// of exhausting memory. `None` (the default) imposes no limit.
    pub max_lines: Option<usize>,
}

impl DiffOptions {
    /// Creates options with no limits.
    pub const fn new() -> Self {
        Self { max_lines: None }
    }

    /// Sets the line-count ceiling.
    pub const fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }
}

/// Error returned when a diff computation is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The inputs exceed the configured line-count ceiling.
    TooLarge {
        /// Line count of the original input
        original_lines: usize,
        /// Line count of the modified input
        modified_lines: usize,
        /// The configured ceiling that was exceeded
        limit: usize,
    },
}

impl fmt::Display for DiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge {
                original_lines,
                modified_lines,
                limit,
            } => write!(
                f,
                "diff skipped: input too large ({original_lines} vs {modified_lines} lines, limit {limit})"
            ),
        }
    }
}

impl std::error::Error for DiffError {}

/// A computed line diff between two texts.
///
/// Both inputs are split on `'\n'`; carriage returns are not stripped,
/// so `\r\n` input leaves a trailing `'\r'` on each line unless the
/// caller normalizes first. Splitting the empty string yields a single
/// empty line, which is why two empty inputs diff to one unchanged row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDiff<'a> {
    rows: Vec<LineRow<'a>>,
    original_lines: usize,
    modified_lines: usize,
}

impl<'a> TextDiff<'a> {
    /// Computes the line diff between two texts.
    pub fn compute(original: &'a str, modified: &'a str) -> Self {
        let original_lines: Vec<&str> = original.split('\n').collect();
        let modified_lines: Vec<&str> = modified.split('\n').collect();
        debug!(
            original = original_lines.len(),
            modified = modified_lines.len(),
            "computing line diff"
        );

        let rows = align(&original_lines, &modified_lines);
        Self {
            rows,
            original_lines: original_lines.len(),
            modified_lines: modified_lines.len(),
        }
    }

    /// Computes the line diff, honoring the given options.
    pub fn compute_with(
        original: &'a str,
        modified: &'a str,
        options: &DiffOptions,
    ) -> Result<Self, DiffError> {
        if let Some(limit) = options.max_lines {
            let original_lines = original.split('\n').count();
            let modified_lines = modified.split('\n').count();
            if original_lines > limit || modified_lines > limit {
                debug!(original_lines, modified_lines, limit, "refusing oversized diff");
                return Err(DiffError::TooLarge {
                    original_lines,
                    modified_lines,
                    limit,
                });
            }
        }

        Ok(Self::compute(original, modified))
    }

    /// The aligned rows, in order; `position` fields run `1..=len`.
    pub fn rows(&self) -> &[LineRow<'a>] {
        &self.rows
    }

    /// Character-level change counts across all changed rows.
    pub fn counts(&self) -> ChangeCount {
        count_changes(&self.rows)
    }

    /// Returns true if any row differs between the two inputs.
    pub fn has_changes(&self) -> bool {
        self.rows.iter().any(|row| row.kind.is_changed())
    }

    /// Number of lines the original input split into.
    pub const fn original_line_count(&self) -> usize {
        self.original_lines
    }

    /// Number of lines the modified input split into.
    pub const fn modified_line_count(&self) -> usize {
        self.modified_lines
    }
}
