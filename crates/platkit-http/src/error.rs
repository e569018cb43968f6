//! Error types for platkit-http.

use thiserror::Error;

pub const UNAUTHORIZED: u16 = 401;

#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-2xx response; `body` is the parsed error payload.
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: serde_json::Value },

    /// The response body was not valid JSON.
    #[error("failed to decode response body (status {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("invalid header {name}")]
    InvalidHeader { name: String },

    #[error("token refresh failed: {0}")]
    Refresh(String),
}

impl HttpError {
    /// Status code of a rejected response.
    ///
    /// Only [`HttpError::Status`] carries one: a failure body that could not
    /// be parsed surfaces as a decode error instead.
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parsed error body of a rejected response.
    pub fn body(&self) -> Option<&serde_json::Value> {
        match self {
            HttpError::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool { self.status() == Some(UNAUTHORIZED) }
}

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for HttpError {
    fn from(e: reqwest::Error) -> Self { HttpError::Transport(e.to_string()) }
}

pub type Result<T> = std::result::Result<T, HttpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessors() {
        let err = HttpError::Status {
            status: 401,
            body:   serde_json::json!({ "message": "expired" }),
        };
        assert!(err.is_unauthorized());
        assert_eq!(err.body().unwrap()["message"], "expired");

        let err = HttpError::Status {
            status: 403,
            body:   serde_json::Value::Null,
        };
        assert!(!err.is_unauthorized());
        assert!(!HttpError::Transport("reset".into()).is_unauthorized());
    }
}
