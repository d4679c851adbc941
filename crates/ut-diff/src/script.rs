//! Edit script types.
//!
//! Positions and lengths count chars (Unicode scalar values), not bytes.

use serde::{Deserialize, Serialize};

/// A single edit operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum EditOp {
    /// Copy `len` chars of `before`, starting at `pos`, into the output.
    Keep { pos: usize, len: usize },
    /// Skip `len` chars of `before`, starting at `pos`.
    Remove { pos: usize, len: usize },
    /// Emit `content` literally. `pos` is the offset in `after`, kept for
    /// traceability only; replay is driven by script order.
    Add { pos: usize, content: String },
}

impl EditOp {
    /// Number of chars this op contributes to the output.
    pub fn output_len(&self) -> usize {
        match self {
            Self::Keep { len, .. } => *len,
            Self::Remove { .. } => 0,
            Self::Add { content, .. } => content.chars().count(),
        }
    }
}

/// An ordered sequence of edit operations transforming one string into
/// another.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditScript(Vec<EditOp>);

impl EditScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// The operations, in replay order.
    pub fn ops(&self) -> &[EditOp] {
        &self.0
    }

    pub fn into_ops(self) -> Vec<EditOp> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn push(&mut self, op: EditOp) {
        self.0.push(op);
    }

    /// Returns `true` if replaying the script against an input of
    /// `before_len` chars reproduces that input: the ops are keeps that cover
    /// `0..before_len` in order without gaps.
    pub fn is_identity(&self, before_len: usize) -> bool {
        let mut cursor = 0;
        for op in &self.0 {
            match op {
                EditOp::Keep { pos, len } if *pos == cursor => cursor += len,
                _ => return false,
            }
        }
        cursor == before_len
    }

    /// Total chars copied from `before`.
    pub fn kept_chars(&self) -> usize {
        self.0
            .iter()
            .map(|op| match op {
                EditOp::Keep { len, .. } => *len,
                _ => 0,
            })
            .sum()
    }

    /// Total chars skipped in `before`.
    pub fn removed_chars(&self) -> usize {
        self.0
            .iter()
            .map(|op| match op {
                EditOp::Remove { len, .. } => *len,
                _ => 0,
            })
            .sum()
    }

    /// Total chars inserted literally.
    pub fn inserted_chars(&self) -> usize {
        self.0
            .iter()
            .map(|op| match op {
                EditOp::Add { content, .. } => content.chars().count(),
                _ => 0,
            })
            .sum()
    }
}

impl From<Vec<EditOp>> for EditScript {
    fn from(ops: Vec<EditOp>) -> Self {
        Self(ops)
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOp;
    type IntoIter = std::slice::Iter<'a, EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
