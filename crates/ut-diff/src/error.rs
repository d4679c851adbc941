//! Error types for the diff crate.

/// Errors that can occur while replaying or decoding edit scripts.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiffError {
    /// A stored edit script could not be decoded.
    #[error("malformed edit script: {0}")]
    MalformedScript(String),

    /// An edit script could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A keep or remove span reaches past the end of the input it is
    /// replayed against.
    #[error("span {pos}+{len} out of bounds for input of {available} chars")]
    OutOfBounds {
        pos: usize,
        len: usize,
        available: usize,
    },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
