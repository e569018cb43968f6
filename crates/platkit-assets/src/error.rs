#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("invalid application: {0}")]
    InvalidApp(String),

    #[error("invalid asset url: {0}")]
    InvalidAssetUrl(String),

    #[error("no platform data directory available")]
    NoDataDirectory,

    #[error(transparent)]
    Fetch(#[from] platkit_fetch::FetchError),

    #[error(transparent)]
    Checksum(#[from] platkit_verify::ChecksumError),

    #[error(transparent)]
    State(#[from] platkit_state::StateError),

    #[error(transparent)]
    Fs(#[from] platkit_fs::Error),
}

pub type Result<T> = std::result::Result<T, AssetError>;
