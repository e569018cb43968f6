use std::future::Future;

use crate::error::Result;
use crate::{RawResponse, Request};

/// Sends a [`Request`] and buffers the whole response.
///
/// Implementations report transport failures only; status codes are left for
/// [`crate::normalize`] to interpret.
pub trait Transport: Send + Sync {
    fn send(&self, request: &Request) -> impl Future<Output = Result<RawResponse>> + Send;
}

impl<T: Transport> Transport for &T {
    fn send(&self, request: &Request) -> impl Future<Output = Result<RawResponse>> + Send {
        (**self).send(request)
    }
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;
    use crate::{HttpError, Method};

    /// Production transport backed by `reqwest`.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Self { Self::default() }

        pub fn with_client(client: reqwest::Client) -> Self { Self { client } }
    }

    impl Transport for ReqwestTransport {
        async fn send(&self, request: &Request) -> Result<RawResponse> {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Patch => reqwest::Method::PATCH,
                Method::Delete => reqwest::Method::DELETE,
            };

            let mut builder = self.client.request(method, &request.url);
            for (name, value) in &request.headers {
                let invalid = || HttpError::InvalidHeader { name: name.clone() };
                let header_name =
                    reqwest::header::HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
                let header_value =
                    reqwest::header::HeaderValue::from_str(value).map_err(|_| invalid())?;
                builder = builder.header(header_name, header_value);
            }
            if let Some(ref body) = request.body {
                let bytes = serde_json::to_vec(body)
                    .map_err(|e| HttpError::Transport(format!("failed to encode request body: {e}")))?;
                builder = builder
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .body(bytes);
            }

            tracing::debug!(method = %request.method, url = %request.url, "sending request");
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?;
            Ok(RawResponse { status, body })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestTransport;
