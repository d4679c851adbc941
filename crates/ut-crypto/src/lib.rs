//! Content hashing for undotree.
//!
//! Document states are identified by a domain-separated BLAKE3 digest of
//! their text. No custom cryptography.

pub mod hasher;

pub use hasher::ContentHasher;
