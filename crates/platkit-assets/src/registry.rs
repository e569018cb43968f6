use std::collections::HashMap;

use url::Url;

use crate::error::{AssetError, Result};

/// What the asset layer needs to know about an installed application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppDescriptor {
    pub id:       String,
    /// Relative asset references are resolved against this URL.
    pub base_url: Url,
    /// Loaded from a local directory rather than a packaged bundle.
    pub unpacked: bool,
}

impl AppDescriptor {
    pub fn new(id: impl Into<String>, base_url: Url) -> Self {
        Self {
            id: id.into(),
            base_url,
            unpacked: false,
        }
    }

    pub fn unpacked(mut self, unpacked: bool) -> Self {
        self.unpacked = unpacked;
        self
    }
}

/// Source of truth for which applications exist and where their assets live.
pub trait AppRegistry: Send + Sync {
    fn get_app(&self, app_id: &str) -> Option<AppDescriptor>;

    /// Resolve `asset_ref` to an absolute URL for `app_id`.
    fn resolve_asset_url(&self, app_id: &str, asset_ref: &str) -> Result<Url> {
        let app = self
            .get_app(app_id)
            .ok_or_else(|| AssetError::InvalidApp(app_id.to_string()))?;
        resolve_against_base(&app.base_url, asset_ref)
    }
}

impl<R: AppRegistry> AppRegistry for &R {
    fn get_app(&self, app_id: &str) -> Option<AppDescriptor> { (**self).get_app(app_id) }

    fn resolve_asset_url(&self, app_id: &str, asset_ref: &str) -> Result<Url> {
        (**self).resolve_asset_url(app_id, asset_ref)
    }
}

/// Absolute references pass through; relative ones are joined onto `base`,
/// which is treated as a directory even without a trailing slash.
pub fn resolve_against_base(base: &Url, asset_ref: &str) -> Result<Url> {
    match Url::parse(asset_ref) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let mut dir = base.clone();
            if !dir.path().ends_with('/') {
                let path = format!("{}/", dir.path());
                dir.set_path(&path);
            }
            dir.join(asset_ref)
                .map_err(|e| AssetError::InvalidAssetUrl(format!("{asset_ref}: {e}")))
        }
        Err(e) => Err(AssetError::InvalidAssetUrl(format!("{asset_ref}: {e}"))),
    }
}

/// In-memory registry for embedders with a fixed set of applications.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    apps: HashMap<String, AppDescriptor>,
}

impl StaticRegistry {
    pub fn new() -> Self { Self::default() }

    pub fn with_app(mut self, app: AppDescriptor) -> Self {
        self.insert(app);
        self
    }

    pub fn insert(&mut self, app: AppDescriptor) -> Option<AppDescriptor> {
        self.apps.insert(app.id.clone(), app)
    }

    pub fn remove(&mut self, app_id: &str) -> Option<AppDescriptor> { self.apps.remove(app_id) }
}

impl FromIterator<AppDescriptor> for StaticRegistry {
    fn from_iter<I: IntoIterator<Item = AppDescriptor>>(iter: I) -> Self {
        let mut registry = Self::new();
        for app in iter {
            registry.insert(app);
        }
        registry
    }
}

impl AppRegistry for StaticRegistry {
    fn get_app(&self, app_id: &str) -> Option<AppDescriptor> { self.apps.get(app_id).cloned() }
}
