use std::future::Future;

use serde::de::DeserializeOwned;

use crate::error::{HttpError, Result};
use crate::{Request, Transport, authorized_headers, normalize, with_token_refresh};

/// The authentication collaborator: owns the access token and knows how to
/// obtain a new one.
pub trait TokenProvider: Send + Sync {
    /// The token to present on the next request.
    fn access_token(&self) -> String;

    /// Replace the access token. Once this resolves, [`Self::access_token`]
    /// returns the fresh token.
    fn refresh_token(&self) -> impl Future<Output = Result<()>> + Send;
}

/// Sends bearer-authenticated JSON requests and recovers from an expired
/// token by refreshing and replaying once.
///
/// Platform API methods (fetching a stream key, searching games, ...) are
/// written against [`AuthorizedClient::send_json`].
pub struct AuthorizedClient<T, P> {
    transport: T,
    tokens:    P,
}

impl<T: Transport, P: TokenProvider> AuthorizedClient<T, P> {
    pub fn new(transport: T, tokens: P) -> Self { Self { transport, tokens } }

    pub fn tokens(&self) -> &P { &self.tokens }

    /// Send `request` with the current token and decode the JSON response.
    ///
    /// Each attempt reads the token afresh, so the replay after a refresh
    /// carries the new credential while every other part of the request is
    /// identical.
    pub async fn send_json<R: DeserializeOwned>(&self, request: &Request) -> Result<R> {
        with_token_refresh(
            || self.attempt(request),
            || self.tokens.refresh_token(),
            HttpError::is_unauthorized,
        )
        .await
    }

    async fn attempt<R: DeserializeOwned>(&self, request: &Request) -> Result<R> {
        let mut authorized = request.clone();
        authorized.headers = authorized_headers(&self.tokens.access_token(), Some(authorized.headers));

        let response = self.transport.send(&authorized).await?;
        tracing::debug!(url = %request.url, status = response.status, "received response");
        normalize(response)
    }
}
