//! History node: one stored document state.

use serde::{Deserialize, Serialize};

use ut_types::{ContentId, CursorPosition, Timestamp};

/// One document state in the version tree.
///
/// This is also the externally observable shape of a node: hosts receive
/// owned copies of it (for example to draw the tree), never references into
/// the live store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryNode {
    /// Hash of the document text this node represents.
    pub id: ContentId,
    /// Predecessor state; `None` only for the synthetic root.
    pub parent: Option<ContentId>,
    /// Successor states, in the order they were first reached from here.
    pub children: Vec<ContentId>,
    /// Encoded edit script from the parent's content to this node's
    /// content; `None` only for the synthetic root.
    pub diff: Option<String>,
    /// Creation time, strictly increasing within a tree.
    pub timestamp: Timestamp,
    /// Cursor captured at commit time.
    pub cursor_position: Option<CursorPosition>,
}

impl HistoryNode {
    pub(crate) fn root(id: ContentId, timestamp: Timestamp) -> Self {
        Self {
            id,
            parent: None,
            children: Vec::new(),
            diff: None,
            timestamp,
            cursor_position: None,
        }
    }

    /// Returns `true` if this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns `true` if history forks at this node.
    pub fn is_branch_point(&self) -> bool {
        self.children.len() > 1
    }

    /// Human-readable one-line summary.
    pub fn summary(&self) -> String {
        let parent = self
            .parent
            .map(|p| p.short_hex())
            .unwrap_or_else(|| "-".into());
        format!(
            "{} parent={} children={} at {}",
            self.id.short_hex(),
            parent,
            self.children.len(),
            self.timestamp,
        )
    }
}
