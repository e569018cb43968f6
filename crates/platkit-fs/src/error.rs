use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to write {path}: {source}")]
    Write {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path has no parent directory: {path}")]
    NoParent { path: PathBuf },

    #[error("path has no file name: {path}")]
    NoFileName { path: PathBuf },
}

impl Error {
    /// The underlying I/O error, if any.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Error::Write { source, .. }
            | Error::Read { source, .. }
            | Error::CreateDir { source, .. } => Some(source),
            Error::NoParent { .. } | Error::NoFileName { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
