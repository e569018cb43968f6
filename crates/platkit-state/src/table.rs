use std::collections::BTreeMap;

use platkit_verify::Checksum;
use serde::{Deserialize, Serialize};

/// Asset filename to last recorded checksum, for one application.
pub type AssetMap = BTreeMap<String, Checksum>;

/// Application id to [`AssetMap`].
///
/// Serializes as a plain JSON object:
///
/// ```json
/// { "app-1": { "transition.mp4": "5eb63bbbe01eeed093cb22bb8f5acdc3" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetChecksumTable(BTreeMap<String, AssetMap>);

impl AssetChecksumTable {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, app_id: &str, asset_name: &str) -> Option<&Checksum> {
        self.0.get(app_id)?.get(asset_name)
    }

    pub fn app(&self, app_id: &str) -> Option<&AssetMap> { self.0.get(app_id) }

    /// Set the checksum for `asset_name`, creating the app's map on demand.
    /// Returns the checksum it replaced.
    pub fn insert(
        &mut self,
        app_id: impl Into<String>,
        asset_name: impl Into<String>,
        checksum: Checksum,
    ) -> Option<Checksum> {
        self.0
            .entry(app_id.into())
            .or_default()
            .insert(asset_name.into(), checksum)
    }

    pub fn apps(&self) -> impl Iterator<Item = (&str, &AssetMap)> {
        self.0.iter().map(|(id, assets)| (id.as_str(), assets))
    }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Number of recorded assets across all applications.
    pub fn asset_count(&self) -> usize { self.0.values().map(BTreeMap::len).sum() }
}
