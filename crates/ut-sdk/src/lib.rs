//! High-level undotree API.
//!
//! A host editor keeps one [`VersionTree`] per open document.
//! [`DocumentHistories`] owns those trees, addresses them by URI, and
//! implements the reset that discards a document's history and starts over
//! from its current text.

pub mod config;
pub mod error;
pub mod histories;

pub use config::HistoryConfig;
pub use error::{SdkError, SdkResult};
pub use histories::DocumentHistories;

pub use ut_tree::{HistoryNode, RedoOutcome, TreeConfig, VersionTree};
pub use ut_types::{ContentId, CursorPosition, Timestamp};
