//! On-disk layout for downloaded assets.
//!
//! ```text
//! <data root>/platkit/media-apps/
//!     asset-checksums.json
//!     storage/
//!         <app id>/
//!             <asset file name>
//! ```

use std::path::{Path, PathBuf};

use crate::dirs;
use crate::error::{AssetError, Result};

const APP_DIR_NAME: &str = "platkit";
const MEDIA_APPS: &str = "media-apps";
const STORAGE: &str = "storage";
const STATE_FILE: &str = "asset-checksums.json";

#[derive(Debug, Clone)]
pub struct AssetLayout {
    storage:    PathBuf,
    state_file: PathBuf,
}

impl AssetLayout {
    pub fn builder() -> AssetLayoutBuilder { AssetLayoutBuilder::new() }

    /// Directory holding one subdirectory per application.
    pub fn storage_dir(&self) -> &Path { &self.storage }

    pub fn state_file(&self) -> &Path { &self.state_file }

    pub fn app_dir(&self, app_id: &str) -> PathBuf { self.storage.join(app_id) }

    /// Create the application's directory if it does not exist yet.
    pub async fn ensure_app_dir(&self, app_id: &str) -> platkit_fs::Result<PathBuf> {
        let dir = platkit_fs::ensure_dir(self.app_dir(app_id)).await?;
        tracing::debug!(app_id, dir = %dir.display(), "asset directory ready");
        Ok(dir)
    }
}

#[derive(Debug, Default)]
pub struct AssetLayoutBuilder {
    data_root: Option<PathBuf>,
}

impl AssetLayoutBuilder {
    pub fn new() -> Self { Self { data_root: None } }

    /// Use `path` instead of the platform's user data directory.
    pub fn data_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_root = Some(path.into());
        self
    }

    pub fn build(self) -> Result<AssetLayout> {
        let data_root = match self.data_root {
            Some(root) => root,
            None => dirs::user_data().ok_or(AssetError::NoDataDirectory)?,
        };
        let media_apps = data_root.join(APP_DIR_NAME).join(MEDIA_APPS);

        Ok(AssetLayout {
            storage:    media_apps.join(STORAGE),
            state_file: media_apps.join(STATE_FILE),
        })
    }
}
