//! Persisted asset checksum state.
//!
//! [`AssetCache`] maps `app id -> asset filename -> checksum` and writes every
//! change through a [`StateBackend`]. The default backend,
//! [`JsonFileBackend`], keeps the table in one JSON file that is replaced
//! atomically on each commit.

mod backend;
mod cache;
mod error;
mod table;

pub use backend::{JsonFileBackend, MemoryBackend, StateBackend};
pub use cache::AssetCache;
pub use error::{Result, StateError};
pub use table::{AssetChecksumTable, AssetMap};
