//! Content-addressed version tree for undotree.
//!
//! Every distinct document state is a node keyed by the hash of its text.
//! Nodes store an edit script from their parent; any state is rebuilt by
//! replaying scripts from a synthetic empty root. A movable `head` marks the
//! state the user currently sees, and undo, redo, and arbitrary jumps move
//! it around the tree without ever discarding a branch.
//!
//! A tree is single-writer: every method runs to completion, nothing is
//! locked, and a host sharing a tree between threads must serialise access
//! itself (one owning task per document).

pub mod clock;
pub mod config;
pub mod error;
pub mod node;
pub mod reconstruct;
pub mod tree;
pub mod validate;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::TreeConfig;
pub use error::{TreeError, TreeResult};
pub use node::HistoryNode;
pub use tree::{RedoOutcome, VersionTree};
