use std::path::Path;

use serde::{Deserialize, Serialize};

use ut_tree::TreeConfig;

use crate::error::{SdkError, SdkResult};

/// Configuration for [`DocumentHistories`](crate::DocumentHistories).
///
/// ```toml
/// max_documents = 64
///
/// [tree.diff]
/// lookahead_limit = 4096
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Settings applied to every tree created.
    pub tree: TreeConfig,
    /// Upper bound on simultaneously tracked documents. `None` is unbounded.
    pub max_documents: Option<usize>,
}

impl HistoryConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> SdkResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> SdkResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| SdkError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }
}
