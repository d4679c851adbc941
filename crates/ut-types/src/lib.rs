//! Foundation types for undotree.
//!
//! Every other undotree crate depends on `ut-types`.
//!
//! # Key Types
//!
//! - [`ContentId`] -- Content-addressed identifier of a document state (BLAKE3 digest)
//! - [`Timestamp`] -- Monotonic creation time of a history node
//! - [`CursorPosition`] -- Editor cursor captured when a state was committed

pub mod cursor;
pub mod error;
pub mod id;
pub mod temporal;

pub use cursor::CursorPosition;
pub use error::TypeError;
pub use id::ContentId;
pub use temporal::Timestamp;
