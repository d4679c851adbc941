use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("document not tracked: {0}")]
    NotTracked(String),

    #[error("document limit reached ({limit}); cannot track {uri}")]
    TooManyDocuments { uri: String, limit: usize },

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("tree error: {0}")]
    Tree(#[from] ut_tree::TreeError),
}

pub type SdkResult<T> = Result<T, SdkError>;
