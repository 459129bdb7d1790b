#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

mod render;
mod report;
mod symbols;
mod theme;

pub use render::{ColorMode, RenderOptions, render_side_by_side, render_unified};
pub use report::DiffReport;
pub use symbols::DiffSymbols;
pub use theme::DiffTheme;

// Re-export the engine types from linediff-core
pub use linediff_core::{
    ChangeCount, CharSpan, DiffError, DiffOptions, LineKind, LineRow, SpanKind, TextDiff, align,
    char_diff, count_changes,
};
