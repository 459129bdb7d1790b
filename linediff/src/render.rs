//! Terminal renderers for computed diffs.
//!
//! Two layouts are provided: a unified view (one row per aligned line,
//! gutter symbol in front) and a side-by-side view (original on the
//! left, modified on the right), the terminal analogue of a two-pane
//! diff checker. Both render with ANSI colors or as plain text.

use linediff_core::{LineKind, LineRow, SpanKind, TextDiff, char_diff};
use owo_colors::{OwoColorize, Rgb};
use tracing::trace;
use unicode_width::UnicodeWidthStr;

use crate::symbols::DiffSymbols;
use crate::theme::DiffTheme;

/// Whether to emit ANSI color codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Emit 24-bit ANSI color codes
    Ansi,
    /// Emit plain text only
    Plain,
}

/// Options controlling rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Color mode (default: ANSI)
    pub color: ColorMode,

    /// Colors used in ANSI mode
    pub theme: DiffTheme,

    /// Gutter symbols for changed lines
    pub symbols: DiffSymbols,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: ColorMode::Ansi,
            theme: DiffTheme::default(),
            symbols: DiffSymbols::default(),
        }
    }
}

impl RenderOptions {
    /// Options for plain-text output.
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Plain,
            ..Self::default()
        }
    }
}

/// Wraps `text` in color codes in ANSI mode, passes it through in plain
/// mode.
fn paint(text: &str, color: Rgb, mode: ColorMode) -> String {
    if text.is_empty() {
        return String::new();
    }
    match mode {
        ColorMode::Ansi => format!("{}", text.color(color)),
        ColorMode::Plain => text.to_owned(),
    }
}

/// Paints one side of a changed row: context spans plus the spans that
/// belong to that side, skipping the other side's spans.
///
/// Line-level rows always have one empty side, so the sub-diff
/// degenerates to a single whole-line span here; routing through
/// [`char_diff`] anyway keeps this the one code path for highlights.
fn paint_changed_side(row: &LineRow<'_>, skip: SpanKind, opts: &RenderOptions) -> String {
    let mut out = String::new();
    for span in char_diff(row.original, row.modified) {
        if span.kind == skip {
            continue;
        }
        out.push_str(&paint(span.text, opts.theme.color_for(span.kind), opts.color));
    }
    out
}

/// Renders the unified view: one line per aligned row, prefixed with the
/// gutter symbol for its kind.
pub fn render_unified(diff: &TextDiff<'_>, opts: &RenderOptions) -> String {
    trace!(rows = diff.rows().len(), "rendering unified view");

    let mut out = String::new();
    for row in diff.rows() {
        let mut line = String::new();

        match row.kind {
            LineKind::Same => {
                line.push_str("  ");
                line.push_str(&paint(row.original, opts.theme.context, opts.color));
            }
            LineKind::Removed => {
                line.push_str(&paint(opts.symbols.removed, opts.theme.removed, opts.color));
                line.push(' ');
                line.push_str(&paint_changed_side(row, SpanKind::Added, opts));
            }
            LineKind::Added => {
                line.push_str(&paint(opts.symbols.added, opts.theme.added, opts.color));
                line.push(' ');
                line.push_str(&paint_changed_side(row, SpanKind::Removed, opts));
            }
        }

        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Renders the side-by-side view: aligned position, original column,
/// modified column. Column widths are measured in display cells so
/// wide characters line up.
pub fn render_side_by_side(diff: &TextDiff<'_>, opts: &RenderOptions) -> String {
    trace!(rows = diff.rows().len(), "rendering side-by-side view");

    let num_width = decimal_width(diff.rows().len());
    let left_width = diff
        .rows()
        .iter()
        .map(|row| row.original.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in diff.rows() {
        let position = format!("{:>num_width$}", row.position);

        let (left_symbol, right_symbol) = match row.kind {
            LineKind::Same => (" ", " "),
            LineKind::Removed => (opts.symbols.removed, " "),
            LineKind::Added => (" ", opts.symbols.added),
        };

        let (left, right) = match row.kind {
            LineKind::Same => (
                paint(row.original, opts.theme.context, opts.color),
                paint(row.modified, opts.theme.context, opts.color),
            ),
            LineKind::Removed | LineKind::Added => (
                paint_changed_side(row, SpanKind::Added, opts),
                paint_changed_side(row, SpanKind::Removed, opts),
            ),
        };

        let mut line = String::new();
        line.push_str(&paint(&position, opts.theme.gutter, opts.color));
        line.push(' ');
        line.push_str(left_symbol);
        line.push_str(&left);
        // Pad to the column edge based on the unpainted width, so color
        // codes do not throw the layout off.
        for _ in 0..left_width - row.original.width() {
            line.push(' ');
        }
        line.push_str("  ");
        line.push_str(right_symbol);
        line.push_str(&right);

        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Number of decimal digits needed to print `n`.
fn decimal_width(n: usize) -> usize {
    if n == 0 {
        return 1;
    }

    let mut digits = 0;
    let mut n = n;
    while n > 0 {
        digits += 1;
        n /= 10;
    }
    digits
}
