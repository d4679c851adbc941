//! Structural audit of a version tree.

use std::collections::HashSet;

use tracing::warn;

use ut_crypto::ContentHasher;

use crate::clock::Clock;
use crate::error::{TreeError, TreeResult};
use crate::tree::VersionTree;

impl<C: Clock> VersionTree<C> {
    /// Validate every tree invariant.
    ///
    /// Checks that:
    /// - The synthetic root, head, and initial snapshot are stored.
    /// - Every parent reference resolves and lists the node as a child.
    /// - Every children list is duplicate-free and points back.
    /// - Only the synthetic root lacks a parent, and no parent walk loops.
    /// - Every node's content hashes to its id.
    ///
    /// Cost is a full reconstruction of every node.
    pub fn validate(&self) -> TreeResult<()> {
        self.check_structure()
            .and_then(|()| self.check_content())
            .inspect_err(|e| warn!(error = %e, "version tree failed validation"))
    }

    fn check_structure(&self) -> TreeResult<()> {
        if !self.nodes.contains_key(&self.root_id) {
            return Err(TreeError::MissingNode(self.root_id));
        }
        if !self.nodes.contains_key(&self.head) {
            return Err(TreeError::MissingNode(self.head));
        }
        if let Some(initial) = self.initial_snapshot {
            if !self.nodes.contains_key(&initial) {
                return Err(TreeError::MissingNode(initial));
            }
        }

        for node in self.nodes.values() {
            match node.parent {
                Some(parent_id) => {
                    let parent = self.nodes.get(&parent_id).ok_or(TreeError::DanglingParent {
                        node: node.id,
                        parent: parent_id,
                    })?;
                    if !parent.children.contains(&node.id) {
                        return Err(TreeError::InconsistentChildren {
                            parent: parent_id,
                            child: node.id,
                        });
                    }
                }
                None if node.id != self.root_id => return Err(TreeError::OrphanRoot(node.id)),
                None => {}
            }

            let mut seen = HashSet::new();
            for child_id in &node.children {
                if !seen.insert(*child_id) {
                    return Err(TreeError::DuplicateChild {
                        parent: node.id,
                        child: *child_id,
                    });
                }
                let child = self
                    .nodes
                    .get(child_id)
                    .ok_or(TreeError::MissingNode(*child_id))?;
                if child.parent != Some(node.id) {
                    return Err(TreeError::InconsistentChildren {
                        parent: node.id,
                        child: *child_id,
                    });
                }
            }
        }

        for id in self.nodes.keys() {
            self.path_to_root(id)?;
        }

        Ok(())
    }

    fn check_content(&self) -> TreeResult<()> {
        for id in self.nodes.keys() {
            let content = self.reconstruct(id)?;
            let actual = ContentHasher::DOCUMENT.hash(&content);
            if actual != *id {
                return Err(TreeError::HashMismatch { node: *id, actual });
            }
        }
        Ok(())
    }
}
