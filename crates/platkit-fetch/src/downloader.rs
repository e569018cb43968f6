use std::path::Path;

use futures_util::StreamExt;
use platkit_fs::AtomicWriteOptions;

use crate::data::{FetchOptions, FetchPhase, Progress};
use crate::error::{FetchError, Result};
use crate::http::{HttpClient, StreamingResponse};

/// Upper bound on buffer preallocation taken from `Content-Length`.
const MAX_PREALLOCATION: u64 = 64 * 1024 * 1024;

/// Downloads a URL to a file, all or nothing.
///
/// The body is gathered in memory and only written once the stream has
/// ended, through a staging file and rename. A caller awaiting
/// [`Downloader::download`] therefore sees either the complete file or the
/// destination exactly as it was before the call.
pub struct Downloader<C: HttpClient> {
    client:  C,
    options: FetchOptions,
}

impl<C: HttpClient> Downloader<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            options: FetchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn client(&self) -> &C { &self.client }

    /// Fetch `url` and write its body to `destination`.
    ///
    /// The parent directory of `destination` must exist.
    pub async fn download(&self, url: &str, destination: &Path) -> Result<()> {
        tracing::debug!(url, destination = %destination.display(), "starting download");
        self.notify_progress(FetchPhase::Connecting, 0, None);

        let response = self
            .client
            .stream(url, &self.options.headers)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.is_success() {
            return Err(FetchError::Status {
                url:    url.to_string(),
                status: response.status,
            });
        }

        let total_bytes = response.content_length;
        let buffer = self.collect_body(response).await?;
        let bytes = buffer.len() as u64;

        self.notify_progress(FetchPhase::Committing, bytes, total_bytes);
        platkit_fs::atomic_write(destination, &buffer, AtomicWriteOptions::new()).await?;

        self.notify_progress(FetchPhase::Completed, bytes, total_bytes);
        tracing::debug!(url, bytes, "download complete");
        Ok(())
    }

    async fn collect_body(&self, response: StreamingResponse<C::Error>) -> Result<Vec<u8>> {
        let total_bytes = response.content_length;
        let capacity = total_bytes.unwrap_or(0).min(MAX_PREALLOCATION) as usize;
        let mut buffer = Vec::with_capacity(capacity);
        let mut body = response.body;

        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| FetchError::Stream {
                bytes_received: buffer.len() as u64,
                message:        e.to_string(),
            })?;
            buffer.extend_from_slice(&chunk);
            self.notify_progress(FetchPhase::Downloading, buffer.len() as u64, total_bytes);
        }

        Ok(buffer)
    }

    fn notify_progress(&self, phase: FetchPhase, bytes_downloaded: u64, total_bytes: Option<u64>) {
        if let Some(ref callback) = self.options.on_progress {
            callback(&Progress {
                phase,
                bytes_downloaded,
                total_bytes,
            });
        }
    }
}
