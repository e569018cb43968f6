use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use platkit_fs::AtomicWriteOptions;

use crate::error::{Result, StateError};
use crate::table::AssetChecksumTable;

/// Durable storage for an [`AssetChecksumTable`].
///
/// `commit` replaces the stored table as a whole. A backend must not leave a
/// half-written table behind when it fails.
pub trait StateBackend: Send + Sync {
    /// Load the stored table. `None` means nothing has been stored yet.
    fn load(&self) -> impl Future<Output = Result<Option<AssetChecksumTable>>> + Send;

    fn commit(&self, table: &AssetChecksumTable) -> impl Future<Output = Result<()>> + Send;
}

impl<B: StateBackend> StateBackend for &B {
    fn load(&self) -> impl Future<Output = Result<Option<AssetChecksumTable>>> + Send {
        (**self).load()
    }

    fn commit(&self, table: &AssetChecksumTable) -> impl Future<Output = Result<()>> + Send {
        (**self).commit(table)
    }
}

/// Stores the table as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    pub fn path(&self) -> &Path { &self.path }
}

impl StateBackend for JsonFileBackend {
    async fn load(&self) -> Result<Option<AssetChecksumTable>> {
        let bytes = match platkit_fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.io_error().map(|io| io.kind()) == Some(ErrorKind::NotFound) => {
                tracing::debug!(path = %self.path.display(), "no asset state file yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let table = serde_json::from_slice(&bytes).map_err(|source| StateError::Deserialize {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(table))
    }

    async fn commit(&self, table: &AssetChecksumTable) -> Result<()> {
        let json = serde_json::to_vec_pretty(table).map_err(StateError::Serialize)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            platkit_fs::ensure_dir(parent).await?;
        }
        platkit_fs::atomic_write(&self.path, &json, AtomicWriteOptions::new().sync(true)).await?;

        tracing::debug!(
            path = %self.path.display(),
            assets = table.asset_count(),
            "asset state committed"
        );
        Ok(())
    }
}

/// Keeps the table in memory. Useful for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    stored:  Mutex<Option<AssetChecksumTable>>,
    commits: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self { Self::default() }

    /// Start with `table` already stored.
    pub fn with_table(table: AssetChecksumTable) -> Self {
        Self {
            stored:  Mutex::new(Some(table)),
            commits: AtomicUsize::new(0),
        }
    }

    /// Number of successful commits so far.
    pub fn commit_count(&self) -> usize { self.commits.load(Ordering::SeqCst) }

    pub fn stored(&self) -> Option<AssetChecksumTable> { lock(&self.stored).clone() }
}

impl StateBackend for MemoryBackend {
    async fn load(&self) -> Result<Option<AssetChecksumTable>> { Ok(self.stored()) }

    async fn commit(&self, table: &AssetChecksumTable) -> Result<()> {
        *lock(&self.stored) = Some(table.clone());
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// A poisoned lock only means another thread panicked mid-assignment; the
// value itself is always a whole table.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
