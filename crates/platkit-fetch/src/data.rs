//! Options and progress types for downloads.

use std::fmt;
use std::sync::Arc;

/// Phases of a download, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    /// Request sent, waiting for the response head.
    #[default]
    Connecting,

    /// Receiving body chunks into memory.
    Downloading,

    /// Writing the complete buffer to its destination.
    Committing,

    /// The destination file is complete.
    Completed,
}

impl fmt::Display for FetchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchPhase::Connecting => write!(f, "Connecting"),
            FetchPhase::Downloading => write!(f, "Downloading"),
            FetchPhase::Committing => write!(f, "Committing"),
            FetchPhase::Completed => write!(f, "Completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub phase:            FetchPhase,
    pub bytes_downloaded: u64,

    /// From `Content-Length`, when the server sent one.
    pub total_bytes: Option<u64>,
}

impl Progress {
    pub fn percentage(&self) -> Option<f32> {
        self.total_bytes.map(|total| {
            if total == 0 {
                0.0
            } else {
                (self.bytes_downloaded as f32 / total as f32) * 100.0
            }
        })
    }
}

pub type ProgressCallback = Arc<dyn Fn(&Progress) + Send + Sync>;

/// Per-downloader configuration.
///
/// # Examples
///
/// ```
/// use platkit_fetch::FetchOptions;
/// use std::sync::Arc;
///
/// let options = FetchOptions::default()
///     .header("User-Agent", "platkit/0.1")
///     .on_progress(Arc::new(|progress| {
///         if let Some(pct) = progress.percentage() {
///             println!("{}: {pct:.1}%", progress.phase);
///         }
///     }));
/// ```
#[derive(Clone, Default)]
pub struct FetchOptions {
    /// Headers sent with every download request.
    pub headers: Arc<[(String, String)]>,

    pub on_progress: Option<ProgressCallback>,
}

impl fmt::Debug for FetchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchOptions")
            .field("headers", &self.headers)
            .field("on_progress", &self.on_progress.as_ref().map(|_| "{ ... }"))
            .finish()
    }
}

impl FetchOptions {
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers: Vec<_> = self.headers.iter().cloned().collect();
        headers.push((key.into(), value.into()));
        self.headers = Arc::from(headers);
        self
    }

    /// Replace all headers.
    #[must_use]
    pub fn headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers = Arc::from(headers);
        self
    }

    #[must_use]
    pub fn on_progress(mut self, on_progress: ProgressCallback) -> Self {
        self.on_progress = Some(on_progress);
        self
    }
}
