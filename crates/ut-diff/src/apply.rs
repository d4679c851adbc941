//! Replaying edit scripts.

use crate::error::{DiffError, DiffResult};
use crate::script::{EditOp, EditScript};

/// Replay `script` against `before`, strictly in script order.
///
/// Kept spans are copied from `before`, removed spans are skipped, and added
/// content is emitted literally. Given the script from
/// `diff(before, after)` this reproduces `after` exactly.
///
/// Fails only when a keep or remove span does not fit inside `before`,
/// which means the script was produced against some other input.
pub fn apply(before: &str, script: &EditScript) -> DiffResult<String> {
    let chars: Vec<char> = before.chars().collect();
    let mut out = String::with_capacity(before.len());

    for op in script {
        match op {
            EditOp::Keep { pos, len } => {
                let end = span_end(*pos, *len, chars.len())?;
                out.extend(&chars[*pos..end]);
            }
            EditOp::Remove { pos, len } => {
                span_end(*pos, *len, chars.len())?;
            }
            EditOp::Add { content, .. } => out.push_str(content),
        }
    }

    Ok(out)
}

fn span_end(pos: usize, len: usize, available: usize) -> DiffResult<usize> {
    match pos.checked_add(len) {
        Some(end) if end <= available => Ok(end),
        _ => Err(DiffError::OutOfBounds {
            pos,
            len,
            available,
        }),
    }
}
