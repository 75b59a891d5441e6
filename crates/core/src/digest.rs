use core::fmt;
use core::ops::Deref;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::SpongeError;

/// Length of the longest digest (512 bits).
pub const MAX_DIGEST_LEN: usize = 64;

/// A finished digest of 28, 32, 48 or 64 bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    bytes: [u8; MAX_DIGEST_LEN],
    len: usize,
}

impl Digest {
    /// Copies a digest out of `bytes`, which must have one of the four digest lengths.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SpongeError> {
        if !matches!(bytes.len(), 28 | 32 | 48 | 64) {
            return Err(SpongeError::InvalidDigestLength(bytes.len()));
        }
        let mut digest = Digest { bytes: [0u8; MAX_DIGEST_LEN], len: bytes.len() };
        digest.bytes[..bytes.len()].copy_from_slice(bytes);
        Ok(digest)
    }

    pub(crate) fn from_array(bytes: [u8; MAX_DIGEST_LEN], len: usize) -> Self {
        debug_assert!(matches!(len, 28 | 32 | 48 | 64));
        Digest { bytes, len }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    pub fn from_hex(encoded: &str) -> Result<Self, SpongeError> {
        let bytes = hex::decode(encoded).map_err(|e| SpongeError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }
}

impl Deref for Digest {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        Digest::from_hex(&encoded).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths() {
        for len in [28, 32, 48, 64] {
            let digest = Digest::from_slice(&vec![0xab; len]).unwrap();
            assert_eq!(digest.len(), len);
            assert_eq!(digest.as_bytes(), &vec![0xab; len][..]);
        }
        assert_eq!(Digest::from_slice(&[0u8; 31]), Err(SpongeError::InvalidDigestLength(31)));
        assert_eq!(Digest::from_slice(&[]), Err(SpongeError::InvalidDigestLength(0)));
    }

    #[test]
    fn test_hex() {
        let digest = Digest::from_slice(&[0x0f; 32]).unwrap();
        assert_eq!(digest.to_string(), "0f".repeat(32));
        assert_eq!(format!("{digest:x}"), "0f".repeat(32));
        assert_eq!(Digest::from_hex(&digest.to_hex()), Ok(digest));
        assert!(matches!(Digest::from_hex("zz"), Err(SpongeError::InvalidHex(_))));
    }

    #[test]
    fn test_serde() {
        let digest = Digest::from_slice(&[7u8; 48]).unwrap();
        let json = serde_json::to_string(&digest).unwrap();
        assert_eq!(json, format!("\"{}\"", "07".repeat(48)));
        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, digest);
        assert!(serde_json::from_str::<Digest>("\"0707\"").is_err());
    }
}
