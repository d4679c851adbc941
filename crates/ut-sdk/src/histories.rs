//! Per-document version trees keyed by URI.

use std::collections::HashMap;

use tracing::{debug, info};

use ut_tree::VersionTree;

use crate::config::HistoryConfig;
use crate::error::{SdkError, SdkResult};

/// Owns one [`VersionTree`] per tracked document.
///
/// Trees are independent; nothing is shared between documents. Like the
/// trees themselves, the registry is single-writer.
pub struct DocumentHistories {
    config: HistoryConfig,
    trees: HashMap<String, VersionTree>,
}

impl DocumentHistories {
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            config,
            trees: HashMap::new(),
        }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Start tracking `uri` with `content` as its initial state.
    ///
    /// A document already tracked keeps its existing history.
    pub fn track(&mut self, uri: &str, content: &str) -> SdkResult<&mut VersionTree> {
        if !self.trees.contains_key(uri) {
            if let Some(limit) = self.config.max_documents {
                if self.trees.len() >= limit {
                    return Err(SdkError::TooManyDocuments {
                        uri: uri.to_string(),
                        limit,
                    });
                }
            }
            let tree = VersionTree::with_config(content, self.config.tree.clone())?;
            debug!(uri, nodes = tree.len(), "tracking document");
            self.trees.insert(uri.to_string(), tree);
        }
        self.get_mut(uri)
    }

    /// Discard the history of `uri` and start a new one from `content`.
    ///
    /// Works whether or not the document was tracked before.
    pub fn reset(&mut self, uri: &str, content: &str) -> SdkResult<&mut VersionTree> {
        if let Some(old) = self.trees.remove(uri) {
            info!(uri, discarded = old.len(), "reset document history");
        }
        self.track(uri, content)
    }

    /// Stop tracking `uri`, returning its tree.
    pub fn untrack(&mut self, uri: &str) -> Option<VersionTree> {
        let tree = self.trees.remove(uri);
        if tree.is_some() {
            debug!(uri, "untracked document");
        }
        tree
    }

    pub fn is_tracked(&self, uri: &str) -> bool {
        self.trees.contains_key(uri)
    }

    pub fn get(&self, uri: &str) -> SdkResult<&VersionTree> {
        self.trees
            .get(uri)
            .ok_or_else(|| SdkError::NotTracked(uri.to_string()))
    }

    pub fn get_mut(&mut self, uri: &str) -> SdkResult<&mut VersionTree> {
        self.trees
            .get_mut(uri)
            .ok_or_else(|| SdkError::NotTracked(uri.to_string()))
    }

    /// Tracked URIs, sorted.
    pub fn uris(&self) -> Vec<String> {
        let mut uris: Vec<String> = self.trees.keys().cloned().collect();
        uris.sort();
        uris
    }

    pub fn len(&self) -> usize {
        self.trees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

impl Default for DocumentHistories {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}
