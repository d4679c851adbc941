use std::fmt;

use serde::{Deserialize, Serialize};

/// Editor cursor coordinates captured when a state was committed.
///
/// Opaque to the history core: stored with a node and handed back on
/// request, never interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CursorPosition {
    /// Zero-based line index.
    pub line: u32,
    /// Zero-based character offset within the line.
    pub character: u32,
}

impl CursorPosition {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

impl fmt::Display for CursorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}
