use serde::{Deserialize, Serialize};
use ut_diff::DiffConfig;

/// Configuration for a [`VersionTree`](crate::VersionTree).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Diff tuning used for every commit.
    pub diff: DiffConfig,
}
