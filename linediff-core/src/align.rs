//! Line-level alignment using longest-common-subsequence matching.

use tracing::trace;

use crate::types::{LineKind, LineRow};

/// Aligns two line sequences into a single row-per-row view.
///
/// Lines are matched by exact string equality; trailing whitespace
/// differences count as a mismatch. The alignment is recovered from a
/// classic `(m+1) × (n+1)` LCS table, so both time and memory are
/// `O(m·n)`. That is fine for interactive inputs (hundreds of lines) but
/// becomes prohibitive around tens of thousands of lines; see
/// [`DiffOptions::max_lines`](crate::DiffOptions) for the escape hatch.
///
/// Concatenating `original` over rows where `kind != Added` reproduces
/// the input `original` exactly, and symmetrically for `modified` over
/// rows where `kind != Removed`.
pub fn align<'a>(original: &[&'a str], modified: &[&'a str]) -> Vec<LineRow<'a>> {
    let m = original.len();
    let n = modified.len();
    trace!(m, n, "building LCS table");

    // table[i][j] = length of the LCS of original[..i] and modified[..j]
    let mut table = vec![vec![0usize; n + 1]; m + 1];
    for i in 1..=m {
        for j in 1..=n {
            table[i][j] = if original[i - 1] == modified[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }

    // Backtrack from (m, n); rows come out back to front.
    let mut rows: Vec<(LineKind, &str, &str)> = Vec::with_capacity(m.max(n));
    let (mut i, mut j) = (m, n);
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && original[i - 1] == modified[j - 1] {
            rows.push((LineKind::Same, original[i - 1], modified[j - 1]));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table[i][j - 1] >= table[i - 1][j]) {
            // On equal table values the addition wins. Callers depend on
            // this exact row ordering, so the `>=` must not change.
            rows.push((LineKind::Added, "", modified[j - 1]));
            j -= 1;
        } else {
            rows.push((LineKind::Removed, original[i - 1], ""));
            i -= 1;
        }
    }

    rows.reverse();
    rows.into_iter()
        .enumerate()
        .map(|(idx, (kind, original, modified))| LineRow {
            kind,
            original,
            modified,
            position: idx + 1,
        })
        .collect()
}
