use std::path::PathBuf;

use platkit_fetch::{Downloader, HttpClient};
use platkit_state::{AssetCache, StateBackend};
use platkit_verify::Checksum;
use url::Url;

use crate::error::{AssetError, Result};
use crate::layout::AssetLayout;
use crate::registry::AppRegistry;

/// Downloads application assets into their per-app directory and records
/// the checksum of every file it places.
pub struct AssetManager<C: HttpClient, R, B> {
    downloader: Downloader<C>,
    registry:   R,
    cache:      AssetCache<B>,
    layout:     AssetLayout,
}

impl<C, R, B> AssetManager<C, R, B>
where
    C: HttpClient,
    R: AppRegistry,
    B: StateBackend,
{
    pub fn new(
        downloader: Downloader<C>,
        registry: R,
        cache: AssetCache<B>,
        layout: AssetLayout,
    ) -> Self {
        Self {
            downloader,
            registry,
            cache,
            layout,
        }
    }

    /// Download `asset_ref` for `app_id` and return where it was placed.
    ///
    /// The asset is fetched on every call. `force` is accepted for callers
    /// that distinguish explicit refreshes, but no cached state is consulted
    /// either way. The checksum is recorded only once the file is in place
    /// and hashed.
    pub async fn acquire(&self, app_id: &str, asset_ref: &str, force: bool) -> Result<PathBuf> {
        if self.registry.get_app(app_id).is_none() {
            return Err(AssetError::InvalidApp(app_id.to_string()));
        }
        tracing::debug!(app_id, asset_ref, force, "acquiring asset");

        let url = self.registry.resolve_asset_url(app_id, asset_ref)?;
        let file_name = file_name_from_url(&url)?;

        let dir = self.layout.ensure_app_dir(app_id).await?;
        let destination = dir.join(&file_name);

        self.downloader.download(url.as_str(), &destination).await?;
        let checksum = platkit_verify::checksum_file(&destination).await?;
        self.cache.record(app_id, &file_name, checksum.clone()).await?;

        tracing::info!(
            app_id,
            url = %url,
            path = %destination.display(),
            checksum = %checksum,
            "asset acquired"
        );
        Ok(destination)
    }

    pub async fn has_asset(&self, app_id: &str, asset_name: &str) -> bool {
        self.cache.has(app_id, asset_name).await
    }

    pub async fn asset_checksum(&self, app_id: &str, asset_name: &str) -> Option<Checksum> {
        self.cache.lookup(app_id, asset_name).await
    }

    pub fn downloader(&self) -> &Downloader<C> { &self.downloader }

    pub fn cache(&self) -> &AssetCache<B> { &self.cache }

    pub fn layout(&self) -> &AssetLayout { &self.layout }

    pub fn registry(&self) -> &R { &self.registry }
}

/// The last non-empty path segment of `url`.
///
/// Segments that could name something other than a file in the app
/// directory (`.`, `..`, or anything containing a backslash) are rejected.
pub fn file_name_from_url(url: &Url) -> Result<String> {
    let name = url
        .path_segments()
        .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
        .ok_or_else(|| AssetError::InvalidAssetUrl(format!("{url}: no file name")))?;

    if name == "." || name == ".." || name.contains('\\') {
        return Err(AssetError::InvalidAssetUrl(format!("{url}: unusable file name {name:?}")));
    }
    Ok(name.to_string())
}
