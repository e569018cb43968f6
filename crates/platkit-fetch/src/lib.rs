//! Streaming downloads with all-or-nothing placement.
//!
//! [`Downloader`] consumes a response body as a stream of byte chunks,
//! concatenates them in arrival order and writes the result only after the
//! stream ends. A non-2xx response, a transport failure or a mid-stream error
//! all fail the download without touching the destination.
//!
//! The HTTP layer sits behind the [`HttpClient`] trait; [`ReqwestClient`] is
//! the production implementation.

mod data;
mod downloader;
mod error;
mod http;

pub use data::{FetchOptions, FetchPhase, Progress, ProgressCallback};
pub use downloader::Downloader;
pub use error::{FetchError, Result};
pub use http::{BoxStream, HttpClient, StreamingResponse};

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
