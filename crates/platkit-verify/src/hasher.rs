use md5::Digest as _;

pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Vec<u8>;
}

#[derive(Clone, Default)]
pub struct Md5Hasher(md5::Md5);

impl Md5Hasher {
    pub fn new() -> Self { Self(md5::Md5::new()) }

    pub fn digest(data: &[u8]) -> Vec<u8> { md5::Md5::digest(data).to_vec() }
}

impl Hasher for Md5Hasher {
    fn update(&mut self, data: &[u8]) { self.0.update(data); }
    fn finalize(self) -> Vec<u8> { self.0.finalize().to_vec() }
}

#[cfg(feature = "sha256")]
#[derive(Clone, Default)]
pub struct Sha256Hasher(sha2::Sha256);

#[cfg(feature = "sha256")]
impl Sha256Hasher {
    pub fn new() -> Self { Self(sha2::Sha256::new()) }

    pub fn digest(data: &[u8]) -> Vec<u8> { sha2::Sha256::digest(data).to_vec() }
}

#[cfg(feature = "sha256")]
impl Hasher for Sha256Hasher {
    fn update(&mut self, data: &[u8]) { self.0.update(data); }
    fn finalize(self) -> Vec<u8> { self.0.finalize().to_vec() }
}

/// Digest algorithms a [`crate::Checksum`] can be produced with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecksumAlgorithm {
    #[default]
    Md5,
    #[cfg(feature = "sha256")]
    Sha256,
}

impl ChecksumAlgorithm {
    /// Digest length in bytes.
    pub fn digest_len(self) -> usize {
        match self {
            ChecksumAlgorithm::Md5 => 16,
            #[cfg(feature = "sha256")]
            ChecksumAlgorithm::Sha256 => 32,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChecksumAlgorithm::Md5 => "md5",
            #[cfg(feature = "sha256")]
            ChecksumAlgorithm::Sha256 => "sha256",
        }
    }
}

impl std::str::FromStr for ChecksumAlgorithm {
    type Err = crate::ChecksumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md5" => Ok(ChecksumAlgorithm::Md5),
            #[cfg(feature = "sha256")]
            "sha256" | "sha-256" => Ok(ChecksumAlgorithm::Sha256),
            other => Err(crate::ChecksumError::Invalid(format!("unknown algorithm {other}"))),
        }
    }
}
