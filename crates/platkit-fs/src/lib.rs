//! Filesystem primitives shared by the platkit crates.
//!
//! Two guarantees matter to callers:
//!
//! - **Atomic placement**: [`atomic_write`] stages bytes in a hidden sibling
//!   file and renames it over the destination, so a reader never observes a
//!   half-written file and a failed write leaves the previous contents alone.
//! - **Lazy directories**: [`ensure_dir`] creates a directory tree on demand
//!   and treats an existing directory as success.

mod error;

pub use error::{Error, Result};

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

#[derive(Clone, Copy, Debug)]
pub struct AtomicWriteOptions {
    prefix: &'static str,
    suffix: &'static str,
    sync:   bool,
}

impl Default for AtomicWriteOptions {
    fn default() -> Self { Self::new() }
}

impl AtomicWriteOptions {
    pub fn new() -> Self {
        Self {
            prefix: ".",
            suffix: ".tmp",
            sync:   false,
        }
    }

    pub fn prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = suffix;
        self
    }

    /// Flush file contents to stable storage before the rename.
    pub fn sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    /// A sibling of `path` named `<prefix><name>.<uuid><suffix>`.
    ///
    /// Every call yields a fresh name, so concurrent writes to one
    /// destination never share a staging file.
    fn staging_path(&self, path: &Path) -> Result<PathBuf> {
        let parent = path.parent().ok_or_else(|| Error::NoParent {
            path: path.to_path_buf(),
        })?;
        let file_name = path.file_name().ok_or_else(|| Error::NoFileName {
            path: path.to_path_buf(),
        })?;
        let tmp_name = format!(
            "{}{}.{}{}",
            self.prefix,
            file_name.to_string_lossy(),
            uuid::Uuid::new_v4().simple(),
            self.suffix
        );
        Ok(parent.join(tmp_name))
    }
}

/// Write `content` to `path` through a staging file and rename.
///
/// The parent directory must already exist.
pub async fn atomic_write(
    path: impl AsRef<Path>,
    content: &[u8],
    options: AtomicWriteOptions,
) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = options.staging_path(path)?;

    if let Err(e) = write_staging(&tmp_path, content, options.sync).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(e);
    }

    if let Err(e) = tokio::fs::rename(&tmp_path, path).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(Error::Write {
            path:   path.to_path_buf(),
            source: e,
        });
    }

    tracing::trace!(path = %path.display(), bytes = content.len(), "atomic write committed");
    Ok(())
}

async fn write_staging(tmp_path: &Path, content: &[u8], sync: bool) -> Result<()> {
    let write_err = |source| Error::Write {
        path: tmp_path.to_path_buf(),
        source,
    };

    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(tmp_path)
        .await
        .map_err(write_err)?;
    file.write_all(content).await.map_err(write_err)?;
    file.flush().await.map_err(write_err)?;
    if sync {
        file.sync_all().await.map_err(write_err)?;
    }
    Ok(())
}

/// Create `path` and any missing parents. Existing directories are fine.
pub async fn ensure_dir(path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|source| Error::CreateDir {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(path.to_path_buf())
}

pub async fn read(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    tokio::fs::read(path).await.map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}
