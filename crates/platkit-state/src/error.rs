use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error(transparent)]
    Fs(#[from] platkit_fs::Error),

    #[error("failed to serialize asset state: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("corrupt asset state in {path}: {source}")]
    Deserialize {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("state backend unavailable: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, StateError>;
