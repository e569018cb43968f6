//! Error types for platkit-fetch.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status; nothing was written.
    #[error("GET {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// The request could not be sent or the response headers never arrived.
    #[error("network error: {0}")]
    Network(String),

    /// The body stream failed after the response started.
    #[error("stream error after {bytes_received} bytes: {message}")]
    Stream { bytes_received: u64, message: String },

    #[error(transparent)]
    Fs(#[from] platkit_fs::Error),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
