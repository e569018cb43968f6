use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ChecksumError {
    #[error("failed to open {path}: {source}")]
    Open {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid checksum: {0:?}")]
    Invalid(String),
}

impl ChecksumError {
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            ChecksumError::Open { source, .. } | ChecksumError::Read { source, .. } => Some(source),
            ChecksumError::Invalid(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ChecksumError>;
