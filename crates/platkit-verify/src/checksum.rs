use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ChecksumAlgorithm, ChecksumError, Hasher, Md5Hasher};

/// A lowercase hex digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Checksum(String);

impl Checksum {
    pub fn from_digest(digest: &[u8]) -> Self { Self(hex::encode(digest)) }

    /// MD5 of an in-memory buffer.
    pub fn of_bytes(data: &[u8]) -> Self {
        let mut hasher = Md5Hasher::new();
        hasher.update(data);
        Self::from_digest(&hasher.finalize())
    }

    pub fn from_hex(s: &str) -> Result<Self, ChecksumError> { s.parse() }

    pub fn as_str(&self) -> &str { &self.0 }

    /// Algorithm implied by the digest length.
    pub fn algorithm(&self) -> Option<ChecksumAlgorithm> {
        match self.0.len() / 2 {
            16 => Some(ChecksumAlgorithm::Md5),
            #[cfg(feature = "sha256")]
            32 => Some(ChecksumAlgorithm::Sha256),
            _ => None,
        }
    }
}

impl FromStr for Checksum {
    type Err = ChecksumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 32 && s.len() != 64 {
            return Err(ChecksumError::Invalid(s.to_string()));
        }
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ChecksumError::Invalid(s.to_string()));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }
}

impl TryFrom<String> for Checksum {
    type Error = ChecksumError;

    fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
}

impl From<Checksum> for String {
    fn from(value: Checksum) -> Self { value.0 }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case() {
        let checksum: Checksum = "  5EB63BBBE01EEED093CB22BB8F5ACDC3\n".parse().unwrap();
        assert_eq!(checksum.as_str(), "5eb63bbbe01eeed093cb22bb8f5acdc3");
        assert_eq!(checksum.algorithm(), Some(ChecksumAlgorithm::Md5));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("abc".parse::<Checksum>().is_err());
        assert!("zz63bbbbe01eeed093cb22bb8f5acdc3".parse::<Checksum>().is_err());
    }

    #[test]
    fn test_serde_is_plain_string() {
        let checksum = Checksum::of_bytes(b"hello world");
        let json = serde_json::to_string(&checksum).unwrap();
        assert_eq!(json, "\"5eb63bbbe01eeed093cb22bb8f5acdc3\"");

        let parsed: Checksum = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, checksum);
        assert!(serde_json::from_str::<Checksum>("\"not-hex\"").is_err());
    }
}
