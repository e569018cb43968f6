use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Response head plus a lazy body.
///
/// The body yields chunks in arrival order, ends after the last one, and
/// cannot be restarted.
pub struct StreamingResponse<E> {
    pub status:         u16,
    pub content_length: Option<u64>,
    pub body:           BoxStream<'static, Result<Bytes, E>>,
}

impl<E> StreamingResponse<E> {
    pub fn is_success(&self) -> bool { (200..300).contains(&self.status) }
}

/// Asynchronous HTTP client abstraction.
///
/// Implementations follow redirects and report transport failures through
/// `Self::Error`. Non-2xx statuses are *not* errors at this level; the
/// downloader decides what to do with them.
pub trait HttpClient: Send + Sync {
    type Error: std::error::Error + Send + 'static;

    /// Issue a GET for `url` and return as soon as the response head arrives.
    fn stream(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> impl Future<Output = Result<StreamingResponse<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;

    /// Production HTTP client implementation using reqwest.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        pub fn new() -> Self { Self::default() }

        pub fn with_client(client: reqwest::Client) -> Self { Self { client } }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn stream(
            &self,
            url: &str,
            headers: &[(String, String)],
        ) -> Result<StreamingResponse<Self::Error>, Self::Error> {
            let mut request = self.client.get(url);
            for (key, value) in headers {
                request = request.header(key, value);
            }

            let response = request.send().await?;
            Ok(StreamingResponse {
                status:         response.status().as_u16(),
                content_length: response.content_length(),
                body:           Box::pin(response.bytes_stream()),
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
