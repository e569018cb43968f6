//! Content checksums for downloaded assets.
//!
//! Files are hashed incrementally: [`checksum_file`] reads fixed-size blocks
//! and feeds them through a [`Hasher`], so memory use does not grow with the
//! file. The reference digest is MD5, rendered as 32 lowercase hex
//! characters; SHA-256 is available behind the `sha256` feature.
//!
//! # Example
//!
//! ```
//! use platkit_verify::Checksum;
//!
//! let checksum = Checksum::of_bytes(b"hello world");
//! assert_eq!(checksum.as_str(), "5eb63bbbe01eeed093cb22bb8f5acdc3");
//! ```

pub use self::checksum::Checksum;
pub use self::error::{ChecksumError, Result};
pub use self::hasher::{ChecksumAlgorithm, Hasher, Md5Hasher};

#[cfg(feature = "sha256")]
pub use self::hasher::Sha256Hasher;

mod checksum;
mod error;
mod hasher;

use std::path::Path;

use tokio::io::AsyncReadExt;

const BLOCK_SIZE: usize = 64 * 1024;

/// Compute the MD5 checksum of the file at `path`.
pub async fn checksum_file(path: impl AsRef<Path>) -> Result<Checksum> {
    checksum_file_with(path, Md5Hasher::new()).await
}

/// Compute the checksum of the file at `path` with the given algorithm.
pub async fn checksum_file_as(
    path: impl AsRef<Path>,
    algorithm: ChecksumAlgorithm,
) -> Result<Checksum> {
    match algorithm {
        ChecksumAlgorithm::Md5 => checksum_file_with(path, Md5Hasher::new()).await,
        #[cfg(feature = "sha256")]
        ChecksumAlgorithm::Sha256 => checksum_file_with(path, Sha256Hasher::new()).await,
    }
}

/// Stream the file at `path` through `hasher` and return the hex digest.
pub async fn checksum_file_with<H: Hasher>(path: impl AsRef<Path>, mut hasher: H) -> Result<Checksum> {
    let path = path.as_ref();
    let mut file = tokio::fs::File::open(path)
        .await
        .map_err(|source| ChecksumError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let mut buf = vec![0u8; BLOCK_SIZE];
    let mut total = 0u64;
    loop {
        let n = file.read(&mut buf).await.map_err(|source| ChecksumError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
        total += n as u64;
    }

    let checksum = Checksum::from_digest(&hasher.finalize());
    tracing::debug!(path = %path.display(), bytes = total, checksum = %checksum, "computed checksum");
    Ok(checksum)
}
