//! Greedy lookahead diff.
//!
//! Two cursors walk `before` and `after` together. Matching chars extend a
//! keep run. On a mismatch the engine looks ahead for the nearest pair of
//! positions where the two inputs agree again, emits a remove for the
//! skipped part of `before` and an add for the skipped part of `after`, and
//! resumes from that pair.
//!
//! "Nearest" means the smallest combined lookahead distance; among pairs at
//! the same distance the one with the smaller `before` offset wins, so pure
//! insertions are preferred over removals.

use crate::config::DiffConfig;
use crate::script::{EditOp, EditScript};

/// Compute an edit script transforming `before` into `after` with the
/// default (unbounded) configuration.
pub fn diff(before: &str, after: &str) -> EditScript {
    diff_with_config(before, after, &DiffConfig::default())
}

/// Compute an edit script transforming `before` into `after`.
pub fn diff_with_config(before: &str, after: &str, config: &DiffConfig) -> EditScript {
    let old: Vec<char> = before.chars().collect();
    let new: Vec<char> = after.chars().collect();
    let mut script = EditScript::new();
    let (mut i, mut j) = (0usize, 0usize);

    while i < old.len() && j < new.len() {
        if old[i] == new[j] {
            let start = i;
            while i < old.len() && j < new.len() && old[i] == new[j] {
                i += 1;
                j += 1;
            }
            script.push(EditOp::Keep {
                pos: start,
                len: i - start,
            });
            continue;
        }

        let Some((p, q)) = resync(&old, &new, i, j, config.lookahead_limit) else {
            break;
        };
        if p > i {
            script.push(EditOp::Remove { pos: i, len: p - i });
        }
        if q > j {
            script.push(EditOp::Add {
                pos: j,
                content: new[j..q].iter().collect(),
            });
        }
        i = p;
        j = q;
    }

    if i < old.len() {
        script.push(EditOp::Remove {
            pos: i,
            len: old.len() - i,
        });
    }
    if j < new.len() {
        script.push(EditOp::Add {
            pos: j,
            content: new[j..].iter().collect(),
        });
    }

    script
}

/// Find the nearest `(p, q)` with `p >= i`, `q >= j`, `(p, q) != (i, j)` and
/// `old[p] == new[q]`.
///
/// Requires `i < old.len()` and `j < new.len()`. Scans anti-diagonals of
/// increasing distance `(p - i) + (q - j)`; a divergence resolved after `d`
/// chars costs O(d²) comparisons.
fn resync(
    old: &[char],
    new: &[char],
    i: usize,
    j: usize,
    limit: Option<usize>,
) -> Option<(usize, usize)> {
    let old_tail = old.len() - i - 1;
    let new_tail = new.len() - j - 1;
    let mut max_distance = old_tail + new_tail;
    if let Some(limit) = limit {
        max_distance = max_distance.min(limit);
    }

    for distance in 1..=max_distance {
        let lo = distance.saturating_sub(new_tail);
        let hi = distance.min(old_tail);
        for skip_old in lo..=hi {
            let p = i + skip_old;
            let q = j + (distance - skip_old);
            if old[p] == new[q] {
                return Some((p, q));
            }
        }
    }

    None
}
