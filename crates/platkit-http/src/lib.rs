//! Authenticated JSON calls against remote platform APIs.
//!
//! # Architecture
//!
//! - [`normalize`] - turns a buffered response into `Ok(parsed body)` or
//!   `Err(HttpError::Status { status, body })`; callers never branch on
//!   status codes
//! - [`authorized_headers`] - bearer credential header construction
//! - [`with_token_refresh`] - refresh-once replay around any fallible
//!   async operation
//! - [`AuthorizedClient`] - the three above composed over a [`Transport`]
//!   and a [`TokenProvider`]
//!
//! Token acquisition (the OAuth authorization-code exchange) happens
//! elsewhere; this crate only asks the provider for a replacement.

mod client;
mod error;
mod headers;
mod request;
mod response;
mod retry;
mod transport;

pub use client::{AuthorizedClient, TokenProvider};
pub use error::{HttpError, Result, UNAUTHORIZED};
pub use headers::{AUTHORIZATION, Headers, authorized_headers};
pub use request::{Method, Request};
pub use response::{RawResponse, normalize};
pub use retry::with_token_refresh;
pub use transport::Transport;

#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
