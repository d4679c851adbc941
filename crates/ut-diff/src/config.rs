use serde::{Deserialize, Serialize};

/// Tuning for [`diff_with_config`](crate::diff_with_config).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Maximum combined lookahead distance (chars skipped in `before` plus
    /// chars skipped in `after`) searched when the two inputs diverge.
    ///
    /// `None` searches until the tails are exhausted. With a bound, a
    /// divergence that cannot be resynchronised within it ends the script
    /// with one remove of the rest of `before` and one add of the rest of
    /// `after`.
    pub lookahead_limit: Option<usize>,
}

impl DiffConfig {
    /// A configuration with a bounded lookahead.
    pub fn bounded(lookahead_limit: usize) -> Self {
        Self {
            lookahead_limit: Some(lookahead_limit),
        }
    }
}
