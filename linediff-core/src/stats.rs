//! Aggregate change statistics.

use crate::chardiff::char_diff;
use crate::types::{ChangeCount, LineRow, SpanKind};

/// Counts added and removed characters across an alignment.
///
/// Every changed row routes through [`char_diff`], including whole-line
/// additions and removals: there one side is empty, so the sub-diff
/// degenerates to a single span covering the entire line. Counts are in
/// Unicode scalar values, not bytes.
pub fn count_changes(rows: &[LineRow<'_>]) -> ChangeCount {
    let mut counts = ChangeCount::default();
    for row in rows {
        if !row.kind.is_changed() {
            continue;
        }

        for span in char_diff(row.original, row.modified) {
            match span.kind {
                SpanKind::Added => counts.additions += span.text.chars().count(),
                SpanKind::Removed => counts.removals += span.text.chars().count(),
                SpanKind::Context => {}
            }
        }
    }
    counts
}
