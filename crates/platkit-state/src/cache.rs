use platkit_verify::Checksum;
use tokio::sync::RwLock;

use crate::backend::StateBackend;
use crate::error::Result;
use crate::table::{AssetChecksumTable, AssetMap};

/// The last known checksum of every acquired asset, keyed by app and filename.
///
/// Reads are served from memory. [`AssetCache::record`] commits the updated
/// table to the backend before the change becomes visible, so a failed
/// commit leaves both the backend and readers on the previous table.
pub struct AssetCache<B> {
    table:   RwLock<AssetChecksumTable>,
    backend: B,
}

impl<B: StateBackend> AssetCache<B> {
    /// Load the persisted table, or start empty if nothing was stored.
    pub async fn open(backend: B) -> Result<Self> {
        let table = backend.load().await?.unwrap_or_default();
        tracing::debug!(assets = table.asset_count(), "asset cache opened");
        Ok(Self {
            table: RwLock::new(table),
            backend,
        })
    }

    pub async fn lookup(&self, app_id: &str, asset_name: &str) -> Option<Checksum> {
        self.table.read().await.get(app_id, asset_name).cloned()
    }

    pub async fn has(&self, app_id: &str, asset_name: &str) -> bool {
        self.table.read().await.get(app_id, asset_name).is_some()
    }

    /// Store `checksum` for the asset, replacing any previous value, and
    /// persist the table.
    pub async fn record(&self, app_id: &str, asset_name: &str, checksum: Checksum) -> Result<()> {
        let mut table = self.table.write().await;

        let mut updated = table.clone();
        let previous = updated.insert(app_id, asset_name, checksum);
        self.backend.commit(&updated).await?;
        *table = updated;

        tracing::debug!(
            app_id,
            asset_name,
            replaced = previous.is_some(),
            "asset checksum recorded"
        );
        Ok(())
    }

    pub async fn assets_for(&self, app_id: &str) -> Option<AssetMap> {
        self.table.read().await.app(app_id).cloned()
    }

    pub async fn snapshot(&self) -> AssetChecksumTable { self.table.read().await.clone() }

    pub fn backend(&self) -> &B { &self.backend }
}
