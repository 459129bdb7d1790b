//! Character-level sub-diff between two single lines.
//!
//! This is a prefix/suffix expansion, not a minimal-edit-distance diff:
//! it yields at most one removed hunk and one added hunk per line. That
//! single-hunk shape is part of the contract (rendered output and change
//! counts depend on it), so it must not be swapped for Myers or similar.

use crate::types::{CharSpan, SpanKind};

/// Computes the character-level sub-diff between two lines.
///
/// Equal inputs (including two empty strings) produce a single
/// [`SpanKind::Context`] span. Otherwise the result is, in order: the
/// common prefix, the differing middle of `a` as [`SpanKind::Removed`],
/// the differing middle of `b` as [`SpanKind::Added`], and the common
/// suffix — with empty pieces omitted. Concatenating the `Context` and
/// `Removed` spans reproduces `a`; `Context` and `Added` reproduce `b`.
pub fn char_diff<'a>(a: &'a str, b: &'a str) -> Vec<CharSpan<'a>> {
    if a == b {
        return vec![CharSpan {
            kind: SpanKind::Context,
            text: a,
        }];
    }

    let prefix = common_prefix(a, b);
    // Scanning the post-prefix remainders keeps the suffix from
    // overlapping the already-claimed prefix region.
    let suffix = common_suffix(&a[prefix..], &b[prefix..]);

    let mut spans = Vec::with_capacity(4);
    if prefix > 0 {
        spans.push(CharSpan {
            kind: SpanKind::Context,
            text: &a[..prefix],
        });
    }

    let a_middle = &a[prefix..a.len() - suffix];
    let b_middle = &b[prefix..b.len() - suffix];
    if !a_middle.is_empty() {
        spans.push(CharSpan {
            kind: SpanKind::Removed,
            text: a_middle,
        });
    }
    if !b_middle.is_empty() {
        spans.push(CharSpan {
            kind: SpanKind::Added,
            text: b_middle,
        });
    }

    if suffix > 0 {
        spans.push(CharSpan {
            kind: SpanKind::Context,
            text: &a[a.len() - suffix..],
        });
    }

    spans
}

/// Byte length of the longest common prefix, advancing one `char` at a
/// time so the boundary never lands inside a code point.
fn common_prefix(a: &str, b: &str) -> usize {
    let mut len = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        len += ca.len_utf8();
    }
    len
}

/// Byte length of the longest common suffix of the two remainders.
fn common_suffix(a: &str, b: &str) -> usize {
    let mut len = 0;
    for (ca, cb) in a.chars().rev().zip(b.chars().rev()) {
        if ca != cb {
            break;
        }
        len += ca.len_utf8();
    }
    len
}
