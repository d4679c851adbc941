//! Diff engine for undotree.
//!
//! Computes character-level edit scripts between two document states,
//! replays them, and encodes them for storage on history nodes.
//!
//! # Key Types
//!
//! - [`EditOp`] / [`EditScript`] -- Ordered keep/remove/add operations
//! - [`DiffConfig`] -- Lookahead bound for the greedy resynchronisation search
//!
//! The diff is a greedy heuristic, not a minimal edit distance. Small local
//! edits (typing, deleting a word) cost time proportional to the edit; two
//! strings with nothing left in common cost quadratic lookahead over the
//! unmatched tails.

pub mod apply;
pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod script;

pub use apply::apply;
pub use codec::{deserialize, serialize};
pub use config::DiffConfig;
pub use engine::{diff, diff_with_config};
pub use error::{DiffError, DiffResult};
pub use script::{EditOp, EditScript};
