//! Color themes for diff rendering.

use linediff_core::SpanKind;
use owo_colors::Rgb;

/// Color theme for diff rendering.
///
/// Defines colors for each kind of content. The default uses Tokyo
/// Night colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTheme {
    /// Color for removed content (default: red)
    pub removed: Rgb,

    /// Color for added content (default: green)
    pub added: Rgb,

    /// Color for unchanged content (default: white)
    pub context: Rgb,

    /// Color for positions in the gutter (default: gray)
    pub gutter: Rgb,
}

impl Default for DiffTheme {
    fn default() -> Self {
        Self::TOKYO_NIGHT
    }
}

impl DiffTheme {
    /// Tokyo Night color theme (default).
    pub const TOKYO_NIGHT: Self = Self {
        removed: Rgb(247, 118, 142), // red
        added: Rgb(158, 206, 106),   // green
        context: Rgb(192, 202, 245), // white
        gutter: Rgb(86, 95, 137),    // gray
    };

    /// Get the color for a span kind.
    pub const fn color_for(&self, kind: SpanKind) -> Rgb {
        match kind {
            SpanKind::Context => self.context,
            SpanKind::Removed => self.removed,
            SpanKind::Added => self.added,
        }
    }
}
