//! Media asset acquisition for platform applications.
//!
//! An acquisition resolves an asset reference against the application's
//! base URL, downloads it into `<storage>/<app id>/<file name>`, hashes the
//! placed file and records the checksum in the [`AssetCache`].
//!
//! ```no_run
//! use platkit_assets::{AppDescriptor, AssetLayout, AssetManager, StaticRegistry};
//! use platkit_fetch::{Downloader, ReqwestClient};
//! use platkit_state::{AssetCache, JsonFileBackend};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let layout = AssetLayout::builder().build()?;
//! let registry = StaticRegistry::new().with_app(AppDescriptor::new(
//!     "app-1",
//!     "https://cdn.example.com/apps/app-1/".parse()?,
//! ));
//! let cache = AssetCache::open(JsonFileBackend::new(layout.state_file())).await?;
//!
//! let manager = AssetManager::new(Downloader::new(ReqwestClient::new()), registry, cache, layout);
//! let path = manager.acquire("app-1", "transition.mp4", false).await?;
//! println!("placed at {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! [`AssetCache`]: platkit_state::AssetCache

mod dirs;
mod error;
mod layout;
mod manager;
mod registry;

pub use error::{AssetError, Result};
pub use layout::{AssetLayout, AssetLayoutBuilder};
pub use manager::{AssetManager, file_name_from_url};
pub use registry::{AppDescriptor, AppRegistry, StaticRegistry, resolve_against_base};
