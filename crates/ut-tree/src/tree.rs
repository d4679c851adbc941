//! The version tree and its head-movement state machine.
//!
//! [`VersionTree`] stores nodes in a [`HashMap`] keyed by content hash and
//! keeps each node's ordered children inline. Nodes are append-only; the
//! only mutable state besides the store is `head`.
//!
//! # Invariants
//!
//! - Exactly one root: the synthetic node for the empty string.
//! - Every non-root node's diff, applied to its parent's content, yields
//!   content hashing to the node's id.
//! - `children` lists never hold duplicates; a node is a child of exactly
//!   its parent.
//! - `head` always names a stored node.

use std::collections::HashMap;

use tracing::debug;

use ut_crypto::ContentHasher;
use ut_diff::diff_with_config;
use ut_types::{ContentId, CursorPosition};

use crate::clock::{Clock, MonotonicClock};
use crate::config::TreeConfig;
use crate::error::{TreeError, TreeResult};
use crate::node::HistoryNode;

/// Result of a redo request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RedoOutcome {
    /// Head had exactly one child and moved to it.
    Advanced(ContentId),
    /// History forks here. Head did not move; the caller picks one of the
    /// children and calls [`VersionTree::set_head`].
    Branch(Vec<ContentId>),
    /// Head has no children.
    NoHistory,
}

/// Branching, content-addressed history of one document.
pub struct VersionTree<C: Clock = MonotonicClock> {
    pub(crate) nodes: HashMap<ContentId, HistoryNode>,
    pub(crate) head: ContentId,
    pub(crate) root_id: ContentId,
    pub(crate) initial_snapshot: Option<ContentId>,
    config: TreeConfig,
    clock: C,
}

impl VersionTree<MonotonicClock> {
    /// Start tracking a document whose current text is `initial_content`.
    pub fn new(initial_content: &str) -> TreeResult<Self> {
        Self::with_config(initial_content, TreeConfig::default())
    }

    /// Like [`new`](Self::new) with an explicit configuration.
    pub fn with_config(initial_content: &str, config: TreeConfig) -> TreeResult<Self> {
        Self::with_clock(initial_content, config, MonotonicClock::new())
    }
}

impl<C: Clock> VersionTree<C> {
    /// Build a tree with an injected clock.
    ///
    /// The synthetic empty root is always created. Non-empty
    /// `initial_content` is committed as its single child and remembered as
    /// the initial snapshot, the floor for [`undo`](Self::undo).
    pub fn with_clock(
        initial_content: &str,
        config: TreeConfig,
        mut clock: C,
    ) -> TreeResult<Self> {
        let root_id = ContentHasher::DOCUMENT.hash("");
        let root = HistoryNode::root(root_id, clock.now());

        let mut tree = Self {
            nodes: HashMap::from([(root_id, root)]),
            head: root_id,
            root_id,
            initial_snapshot: None,
            config,
            clock,
        };

        if !initial_content.is_empty() {
            let id = tree.commit(initial_content, None)?;
            tree.initial_snapshot = Some(id);
        }

        Ok(tree)
    }

    // ---------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------

    /// The state the user currently sees.
    pub fn head(&self) -> ContentId {
        self.head
    }

    /// Id of the synthetic empty root.
    pub fn root_id(&self) -> ContentId {
        self.root_id
    }

    /// Id of the first non-empty content observed, if any.
    pub fn initial_snapshot(&self) -> Option<ContentId> {
        self.initial_snapshot
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Total number of nodes, including the synthetic root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the synthetic root is always present.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &ContentId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Borrow a node from the live store.
    pub fn node(&self, id: &ContentId) -> Option<&HistoryNode> {
        self.nodes.get(id)
    }

    /// Children of `id` in first-reached order; empty for unknown ids.
    pub fn children(&self, id: &ContentId) -> &[ContentId] {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Owned snapshot of every node, oldest first.
    ///
    /// Later mutation of the tree does not affect the returned copy.
    pub fn nodes(&self) -> Vec<HistoryNode> {
        let mut nodes: Vec<HistoryNode> = self.nodes.values().cloned().collect();
        nodes.sort_by_key(|n| n.timestamp);
        nodes
    }

    // ---------------------------------------------------------------
    // Commit
    // ---------------------------------------------------------------

    /// Record `content` as the new current state and return its id.
    ///
    /// Content already present anywhere in the tree only moves head there;
    /// no diff is computed and no node is created. Otherwise a new child of
    /// head is created holding the diff from head's content.
    pub fn commit(
        &mut self,
        content: &str,
        cursor: Option<CursorPosition>,
    ) -> TreeResult<ContentId> {
        let id = ContentHasher::DOCUMENT.hash(content);

        if self.nodes.contains_key(&id) {
            debug!(node = %id.short_hex(), "commit deduplicated; moving head");
            self.head = id;
            return Ok(id);
        }

        let parent_id = self.head;
        let current = self.reconstruct(&parent_id)?;
        let script = diff_with_config(&current, content, &self.config.diff);
        let encoded = ut_diff::serialize(&script)?;

        let node = HistoryNode {
            id,
            parent: Some(parent_id),
            children: Vec::new(),
            diff: Some(encoded),
            timestamp: self.clock.now(),
            cursor_position: cursor,
        };

        self.nodes
            .get_mut(&parent_id)
            .ok_or(TreeError::MissingNode(parent_id))?
            .children
            .push(id);

        debug!(
            node = %id.short_hex(),
            parent = %parent_id.short_hex(),
            ops = script.len(),
            "committed history node"
        );
        self.nodes.insert(id, node);
        self.head = id;

        Ok(id)
    }

    // ---------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------

    /// Move head to its parent.
    ///
    /// Returns `None` without moving at the synthetic root, and at the
    /// initial snapshot: the empty root exists to make reconstruction well
    /// defined and is never exposed as a state reachable by undo.
    pub fn undo(&mut self) -> Option<ContentId> {
        let parent = self.nodes.get(&self.head)?.parent?;

        if parent == self.root_id && self.initial_snapshot == Some(self.head) {
            debug!(node = %self.head.short_hex(), "undo refused at initial snapshot");
            return None;
        }

        debug!(from = %self.head.short_hex(), to = %parent.short_hex(), "undo");
        self.head = parent;
        Some(parent)
    }

    /// Move head forward.
    ///
    /// Advances automatically when there is exactly one child. With several
    /// children head stays put and all of them are returned.
    pub fn redo(&mut self) -> RedoOutcome {
        let Some(node) = self.nodes.get(&self.head) else {
            return RedoOutcome::NoHistory;
        };

        match node.children.as_slice() {
            [] => RedoOutcome::NoHistory,
            [only] => {
                let only = *only;
                debug!(from = %self.head.short_hex(), to = %only.short_hex(), "redo");
                self.head = only;
                RedoOutcome::Advanced(only)
            }
            branches => RedoOutcome::Branch(branches.to_vec()),
        }
    }

    /// Jump head to any known node. Returns `false` for unknown ids.
    pub fn set_head(&mut self, id: &ContentId) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }
        debug!(from = %self.head.short_hex(), to = %id.short_hex(), "set head");
        self.head = *id;
        true
    }

    // ---------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------

    /// Content at `id`, or at head when `id` is `None`.
    ///
    /// Unknown ids yield the empty string. An error means the tree is
    /// corrupt.
    pub fn content(&self, id: Option<&ContentId>) -> TreeResult<String> {
        let target = id.copied().unwrap_or(self.head);
        if !self.nodes.contains_key(&target) {
            return Ok(String::new());
        }
        self.reconstruct(&target)
    }

    /// Cursor stored at `id`, or at head when `id` is `None`.
    pub fn cursor_position(&self, id: Option<&ContentId>) -> Option<CursorPosition> {
        let target = id.copied().unwrap_or(self.head);
        self.nodes.get(&target)?.cursor_position
    }

    /// The most recent state whose content is not blank.
    ///
    /// Head itself wins if it is not blank. Otherwise every node except the
    /// synthetic root is reconstructed and the newest non-blank one is
    /// returned. This is a full scan, meant for explicit recovery.
    pub fn find_latest_non_empty_state(&self) -> TreeResult<Option<ContentId>> {
        if !is_blank(&self.reconstruct(&self.head)?) {
            return Ok(Some(self.head));
        }

        let mut latest: Option<&HistoryNode> = None;
        for node in self.nodes.values() {
            if node.id == self.root_id {
                continue;
            }
            if latest.is_some_and(|l| l.timestamp >= node.timestamp) {
                continue;
            }
            if !is_blank(&self.reconstruct(&node.id)?) {
                latest = Some(node);
            }
        }

        Ok(latest.map(|n| n.id))
    }

    /// Move head to [`find_latest_non_empty_state`](Self::find_latest_non_empty_state).
    ///
    /// Returns the new head, or `None` when there is nowhere to go or head
    /// is already there.
    pub fn z_to_latest_non_empty(&mut self) -> TreeResult<Option<ContentId>> {
        let Some(target) = self.find_latest_non_empty_state()? else {
            return Ok(None);
        };
        if target == self.head {
            return Ok(None);
        }
        debug!(
            from = %self.head.short_hex(),
            to = %target.short_hex(),
            "jump to latest non-empty state"
        );
        self.head = target;
        Ok(Some(target))
    }
}

fn is_blank(content: &str) -> bool {
    content.trim().is_empty()
}
