//! Integration tests for the streaming downloader.

use std::sync::{Arc, Mutex};

use bytes::Bytes;
use platkit_fetch::{
    Downloader, FetchError, FetchOptions, FetchPhase, HttpClient, Progress, ReqwestClient,
    StreamingResponse,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug)]
struct TestError(String);

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

impl std::error::Error for TestError {}

/// Mock HTTP client replaying a fixed status and chunk sequence.
struct ChunkedClient {
    status:  u16,
    chunks:  Vec<Result<&'static [u8], &'static str>>,
    refused: bool,
}

impl ChunkedClient {
    fn ok(chunks: Vec<&'static [u8]>) -> Self {
        Self {
            status:  200,
            chunks:  chunks.into_iter().map(Ok).collect(),
            refused: false,
        }
    }

    fn status(status: u16, body: &'static [u8]) -> Self {
        Self {
            status,
            chunks: vec![Ok(body)],
            refused: false,
        }
    }
}

impl HttpClient for ChunkedClient {
    type Error = TestError;

    async fn stream(
        &self,
        _url: &str,
        _headers: &[(String, String)],
    ) -> Result<StreamingResponse<Self::Error>, Self::Error> {
        if self.refused {
            return Err(TestError("connection refused".into()));
        }

        let items: Vec<Result<Bytes, TestError>> = self
            .chunks
            .iter()
            .map(|chunk| match chunk {
                Ok(data) => Ok(Bytes::from_static(*data)),
                Err(msg) => Err(TestError(msg.to_string())),
            })
            .collect();
        let content_length = self
            .chunks
            .iter()
            .map(|c| c.map(|d| d.len() as u64).unwrap_or(0))
            .sum();

        Ok(StreamingResponse {
            status: self.status,
            content_length: Some(content_length),
            body: Box::pin(futures_util::stream::iter(items)),
        })
    }
}

fn recording_options() -> (FetchOptions, Arc<Mutex<Vec<Progress>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let options = FetchOptions::default().on_progress(Arc::new(move |p: &Progress| {
        sink.lock().unwrap().push(p.clone());
    }));
    (options, seen)
}

#[tokio::test]
async fn test_chunks_written_in_arrival_order() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("transition.mp4");
    let (options, seen) = recording_options();

    let downloader = Downloader::new(ChunkedClient::ok(vec![&b"abc"[..], &b""[..], &b"def"[..], &b"ghij"[..]]))
        .with_options(options);
    downloader
        .download("https://cdn.example.com/transition.mp4", &destination)
        .await
        .unwrap();

    assert_eq!(std::fs::read(&destination).unwrap(), b"abcdefghij");

    let phases: Vec<FetchPhase> = seen.lock().unwrap().iter().map(|p| p.phase).collect();
    assert_eq!(phases.first(), Some(&FetchPhase::Connecting));
    assert_eq!(phases.last(), Some(&FetchPhase::Completed));
    assert!(phases.contains(&FetchPhase::Committing));
    assert_eq!(phases.iter().filter(|p| **p == FetchPhase::Downloading).count(), 4);

    let last = seen.lock().unwrap().last().cloned().unwrap();
    assert_eq!(last.bytes_downloaded, 10);
    assert_eq!(last.percentage(), Some(100.0));
}

#[tokio::test]
async fn test_not_found_leaves_existing_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("logo.png");
    std::fs::write(&destination, b"previous contents").unwrap();

    let downloader = Downloader::new(ChunkedClient::status(404, br#"{"error":"not found"}"#));
    let err = downloader
        .download("https://cdn.example.com/logo.png", &destination)
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(std::fs::read(&destination).unwrap(), b"previous contents");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[tokio::test]
async fn test_not_found_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("logo.png");

    let downloader = Downloader::new(ChunkedClient::status(500, b"oops"));
    let err = downloader.download("https://x/logo.png", &destination).await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 500, .. }));
    assert!(!destination.exists());
}

#[tokio::test]
async fn test_stream_error_rejects_without_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("big.bin");

    let client = ChunkedClient {
        status:  200,
        chunks:  vec![Ok(&b"first"[..]), Err("connection reset by peer"), Ok(&b"never"[..])],
        refused: false,
    };
    let err = Downloader::new(client)
        .download("https://x/big.bin", &destination)
        .await
        .unwrap_err();

    match err {
        FetchError::Stream {
            bytes_received,
            message,
        } => {
            assert_eq!(bytes_received, 5);
            assert!(message.contains("reset"));
        }
        other => panic!("expected stream error, got {other:?}"),
    }
    assert!(!destination.exists());
}

#[tokio::test]
async fn test_transport_failure_is_network_error() {
    let dir = tempfile::tempdir().unwrap();
    let client = ChunkedClient {
        status:  200,
        chunks:  vec![],
        refused: true,
    };

    let err = Downloader::new(client)
        .download("https://x/a", &dir.path().join("a"))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}

#[tokio::test]
async fn test_unwritable_destination_is_fs_error() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("missing-dir").join("a.bin");

    let err = Downloader::new(ChunkedClient::ok(vec![&b"data"[..]]))
        .download("https://x/a.bin", &destination)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Fs(_)));
}

#[tokio::test]
async fn test_reqwest_client_downloads_and_rejects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/apps/app-1/transition.mp4"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![9u8; 100_000]))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/apps/app-1/missing.mp4"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let downloader = Downloader::new(ReqwestClient::new());

    let ok_dest = dir.path().join("transition.mp4");
    downloader
        .download(&format!("{}/apps/app-1/transition.mp4", server.uri()), &ok_dest)
        .await
        .unwrap();
    assert_eq!(std::fs::read(&ok_dest).unwrap(), vec![9u8; 100_000]);

    let missing_dest = dir.path().join("missing.mp4");
    let err = downloader
        .download(&format!("{}/apps/app-1/missing.mp4", server.uri()), &missing_dest)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert!(!missing_dest.exists());
}
