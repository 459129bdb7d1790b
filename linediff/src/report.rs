//! Diff report with multi-layout rendering capabilities.
//!
//! This module provides [`DiffReport`], which holds a computed diff
//! along with the input texts, enabling rendering in both layouts with
//! or without ANSI colors, plus the one-line change summary.

use linediff_core::{ChangeCount, DiffError, DiffOptions, TextDiff};

use crate::render::{RenderOptions, render_side_by_side, render_unified};

/// A computed diff plus its inputs, allowing rendering in different
/// output styles without recomputing the alignment.
#[derive(Debug, Clone)]
pub struct DiffReport<'a> {
    diff: TextDiff<'a>,
    original: &'a str,
    modified: &'a str,
}

impl<'a> DiffReport<'a> {
    /// Computes the diff between two texts and wraps it in a report.
    pub fn new(original: &'a str, modified: &'a str) -> Self {
        Self {
            diff: TextDiff::compute(original, modified),
            original,
            modified,
        }
    }

    /// Like [`DiffReport::new`], honoring the given options.
    pub fn with_options(
        original: &'a str,
        modified: &'a str,
        options: &DiffOptions,
    ) -> Result<Self, DiffError> {
        Ok(Self {
            diff: TextDiff::compute_with(original, modified, options)?,
            original,
            modified,
        })
    }

    /// Access the computed diff.
    pub const fn diff(&self) -> &TextDiff<'a> {
        &self.diff
    }

    /// The original input text.
    pub const fn original(&self) -> &'a str {
        self.original
    }

    /// The modified input text.
    pub const fn modified(&self) -> &'a str {
        self.modified
    }

    /// Character-level change counts.
    pub fn counts(&self) -> ChangeCount {
        self.diff.counts()
    }

    /// One-line change summary with per-side line counts.
    pub fn summary(&self) -> String {
        let counts = self.counts();
        format!(
            "-{} removals, +{} additions | {} -> {} lines",
            counts.removals,
            counts.additions,
            self.diff.original_line_count(),
            self.diff.modified_line_count(),
        )
    }

    /// Render the unified view with ANSI colors.
    pub fn render_ansi_unified(&self) -> String {
        render_unified(&self.diff, &RenderOptions::default())
    }

    /// Render the unified view without colors.
    pub fn render_plain_unified(&self) -> String {
        render_unified(&self.diff, &RenderOptions::plain())
    }

    /// Render the side-by-side view with ANSI colors.
    pub fn render_ansi_side_by_side(&self) -> String {
        render_side_by_side(&self.diff, &RenderOptions::default())
    }

    /// Render the side-by-side view without colors.
    pub fn render_plain_side_by_side(&self) -> String {
        render_side_by_side(&self.diff, &RenderOptions::plain())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_reports_counts_and_line_totals() {
        let report = DiffReport::new("foo\nbar\nbaz", "foo\nbaz");

        assert_eq!(report.summary(), "-3 removals, +0 additions | 3 -> 2 lines");
    }

    #[test]
    fn summary_of_identical_inputs_is_all_zeroes() {
        let report = DiffReport::new("same", "same");

        assert_eq!(report.summary(), "-0 removals, +0 additions | 1 -> 1 lines");
    }

    #[test]
    fn with_options_propagates_the_limit_error() {
        let options = DiffOptions::new().with_max_lines(1);

        let err = DiffReport::with_options("a\nb", "a", &options).unwrap_err();
        assert!(matches!(err, DiffError::TooLarge { limit: 1, .. }));
    }
}
