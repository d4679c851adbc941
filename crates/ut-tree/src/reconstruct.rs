//! Rebuilding content by replaying diffs from the synthetic root.
//!
//! The path from a node to the root is collected first (target first, root
//! last), then walked backwards applying each node's diff to the running
//! content, starting from the empty string. Cost is one diff application per
//! level of depth.

use std::collections::HashSet;

use tracing::warn;

use ut_diff::{apply, deserialize};
use ut_types::ContentId;

use crate::clock::Clock;
use crate::error::{TreeError, TreeResult};
use crate::tree::VersionTree;

impl<C: Clock> VersionTree<C> {
    /// Ids from `id` up to and including the synthetic root.
    ///
    /// Unknown ids yield an empty path.
    pub fn path_to_root(&self, id: &ContentId) -> TreeResult<Vec<ContentId>> {
        if !self.nodes.contains_key(id) {
            return Ok(Vec::new());
        }

        let mut path = Vec::new();
        let mut seen = HashSet::new();
        let mut current = *id;

        loop {
            if !seen.insert(current) {
                return Err(TreeError::CycleDetected(current));
            }
            path.push(current);

            let node = self
                .nodes
                .get(&current)
                .ok_or(TreeError::MissingNode(current))?;
            match node.parent {
                Some(parent) if self.nodes.contains_key(&parent) => current = parent,
                Some(parent) => {
                    return Err(TreeError::DanglingParent {
                        node: current,
                        parent,
                    })
                }
                None if current == self.root_id => return Ok(path),
                None => return Err(TreeError::OrphanRoot(current)),
            }
        }
    }

    /// Content of a stored node. Callers check the id is known first.
    pub(crate) fn reconstruct(&self, id: &ContentId) -> TreeResult<String> {
        self.replay_path(id).inspect_err(|e| {
            warn!(node = %id.short_hex(), error = %e, "history reconstruction failed");
        })
    }

    fn replay_path(&self, id: &ContentId) -> TreeResult<String> {
        let path = self.path_to_root(id)?;
        let mut content = String::new();

        for node_id in path.iter().rev().skip(1) {
            let node = self
                .nodes
                .get(node_id)
                .ok_or(TreeError::MissingNode(*node_id))?;
            let encoded = node
                .diff
                .as_deref()
                .ok_or(TreeError::MissingDiff(*node_id))?;
            let script = deserialize(encoded).map_err(|source| TreeError::CorruptDiff {
                node: *node_id,
                source,
            })?;
            content = apply(&content, &script).map_err(|source| TreeError::CorruptDiff {
                node: *node_id,
                source,
            })?;
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::config::TreeConfig;
    use ut_crypto::ContentHasher;
    use ut_diff::DiffError;

    fn tree(initial: &str) -> VersionTree<ManualClock> {
        VersionTree::with_clock(initial, TreeConfig::default(), ManualClock::default()).unwrap()
    }

    #[test]
    fn path_runs_target_to_root() {
        let mut t = tree("a");
        let ab = t.commit("ab", None).unwrap();
        let abc = t.commit("abc", None).unwrap();
        let path = t.path_to_root(&abc).unwrap();
        assert_eq!(path, vec![abc, ab, ContentHasher::DOCUMENT.hash("a"), t.root_id()]);
    }

    #[test]
    fn path_of_root_is_root() {
        let t = tree("");
        assert_eq!(t.path_to_root(&t.root_id()).unwrap(), vec![t.root_id()]);
    }

    #[test]
    fn path_of_unknown_is_empty() {
        let t = tree("a");
        let unknown = ContentHasher::DOCUMENT.hash("zzz");
        assert!(t.path_to_root(&unknown).unwrap().is_empty());
    }

    #[test]
    fn long_chain_reconstructs_every_level() {
        let mut t = tree("x");
        let mut text = String::from("x");
        let mut ids = Vec::new();
        for i in 0..300 {
            text.push_str(&format!(" {i}"));
            if i % 7 == 0 {
                text = text.replacen('x', "y", 1);
            }
            ids.push((t.commit(&text, None).unwrap(), text.clone()));
        }
        for (id, expected) in &ids {
            assert_eq!(&t.content(Some(id)).unwrap(), expected);
        }
    }

    #[test]
    fn undecodable_diff_is_corruption_not_empty() {
        let mut t = tree("a");
        let ab = t.commit("ab", None).unwrap();
        t.nodes.get_mut(&ab).unwrap().diff = Some("{not a script".into());

        let err = t.content(Some(&ab)).unwrap_err();
        assert!(matches!(
            err,
            TreeError::CorruptDiff {
                source: DiffError::MalformedScript(_),
                ..
            }
        ));
        // The parent is still intact.
        assert_eq!(t.content(Some(&ContentHasher::DOCUMENT.hash("a"))).unwrap(), "a");
    }

    #[test]
    fn out_of_range_diff_is_corruption() {
        let mut t = tree("a");
        let ab = t.commit("ab", None).unwrap();
        t.nodes.get_mut(&ab).unwrap().diff =
            Some(r#"[{"op":"keep","pos":0,"len":99}]"#.into());
        assert!(matches!(
            t.content(Some(&ab)),
            Err(TreeError::CorruptDiff {
                source: DiffError::OutOfBounds { .. },
                ..
            })
        ));
    }

    #[test]
    fn missing_diff_is_corruption() {
        let mut t = tree("a");
        let a = t.head();
        t.nodes.get_mut(&a).unwrap().diff = None;
        assert!(matches!(t.content(None), Err(TreeError::MissingDiff(id)) if id == a));
    }

    #[test]
    fn dangling_parent_is_reported() {
        let mut t = tree("a");
        let ab = t.commit("ab", None).unwrap();
        let ghost = ContentHasher::DOCUMENT.hash("ghost");
        t.nodes.get_mut(&ab).unwrap().parent = Some(ghost);
        assert!(matches!(
            t.path_to_root(&ab),
            Err(TreeError::DanglingParent { node, parent }) if node == ab && parent == ghost
        ));
    }

    #[test]
    fn cycle_is_reported() {
        let mut t = tree("a");
        let a = t.head();
        let ab = t.commit("ab", None).unwrap();
        t.nodes.get_mut(&a).unwrap().parent = Some(ab);
        assert!(matches!(t.path_to_root(&ab), Err(TreeError::CycleDetected(_))));
    }

    #[test]
    fn orphan_root_is_reported() {
        let mut t = tree("a");
        let a = t.head();
        t.nodes.get_mut(&a).unwrap().parent = None;
        assert!(matches!(t.content(None), Err(TreeError::OrphanRoot(id)) if id == a));
    }

    #[test]
    fn corrupt_head_fails_commit() {
        let mut t = tree("a");
        let a = t.head();
        t.nodes.get_mut(&a).unwrap().diff = Some("garbage".into());
        let size = t.len();
        assert!(t.commit("ab", None).is_err());
        assert_eq!(t.len(), size);
        assert_eq!(t.head(), a);
    }
}
