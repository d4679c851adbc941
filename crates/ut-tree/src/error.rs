//! Error types for the version tree.
//!
//! Every variant signals a broken tree invariant. Ordinary "nothing there"
//! outcomes (unknown id, undo at the floor, no redo) are not errors; they
//! come back as empty content, `None`, or [`RedoOutcome::NoHistory`].
//!
//! A tree that returns one of these cannot be repaired by retrying. The host
//! should discard it and start a new one from the current document text.
//!
//! [`RedoOutcome::NoHistory`]: crate::RedoOutcome::NoHistory

use ut_diff::DiffError;
use ut_types::ContentId;

/// Tree corruption detected while reconstructing or validating.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// A node the tree itself refers to (head, root, a child) is absent.
    #[error("node missing from store: {0:?}")]
    MissingNode(ContentId),

    /// A node's recorded parent is absent from the store.
    #[error("dangling parent reference: node {node:?} references missing parent {parent:?}")]
    DanglingParent {
        /// The node containing the bad reference.
        node: ContentId,
        /// The missing parent.
        parent: ContentId,
    },

    /// A node other than the synthetic root has no parent.
    #[error("node {0:?} has no parent but is not the synthetic root")]
    OrphanRoot(ContentId),

    /// A parent walk revisited a node.
    #[error("cycle detected involving node {0:?}")]
    CycleDetected(ContentId),

    /// A non-root node carries no edit script.
    #[error("node {0:?} has no diff from its parent")]
    MissingDiff(ContentId),

    /// A node's stored edit script could not be decoded or replayed.
    #[error("corrupt diff on node {node:?}: {source}")]
    CorruptDiff {
        node: ContentId,
        #[source]
        source: DiffError,
    },

    /// Reconstructed content does not hash to the node's id.
    #[error("content of node {node:?} hashes to {actual:?}")]
    HashMismatch { node: ContentId, actual: ContentId },

    /// The parent/children index disagrees with a node's parent pointer.
    #[error("children index inconsistent between parent {parent:?} and child {child:?}")]
    InconsistentChildren { parent: ContentId, child: ContentId },

    /// A child id appears more than once under the same parent.
    #[error("duplicate child {child:?} under parent {parent:?}")]
    DuplicateChild { parent: ContentId, child: ContentId },

    /// Encoding a freshly computed edit script failed.
    #[error("diff error: {0}")]
    Diff(#[from] DiffError),
}

/// Convenience alias for tree results.
pub type TreeResult<T> = Result<T, TreeError>;
