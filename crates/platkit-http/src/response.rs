use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::error::{HttpError, Result};

/// A fully received response: status line plus body bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body:   Bytes,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool { (200..300).contains(&self.status) }
}

/// Turn a response into its parsed body, or an error carrying the parsed
/// failure body.
///
/// Both paths decode JSON; a failure body that is not JSON rejects with
/// [`HttpError::Decode`]. An empty body decodes as `null`.
pub fn normalize<T: DeserializeOwned>(response: RawResponse) -> Result<T> {
    let status = response.status;
    if response.is_success() {
        return decode(status, &response.body);
    }

    let body: serde_json::Value = decode(status, &response.body)?;
    Err(HttpError::Status { status, body })
}

fn decode<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T> {
    let body = if body.is_empty() { b"null".as_slice() } else { body };
    serde_json::from_slice(body).map_err(|source| HttpError::Decode { status, source })
}
