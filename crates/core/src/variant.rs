use core::str::FromStr;

use serde::{Deserialize, Serialize};
use sponge_primitives::STATE_BYTES;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::SpongeError;

/// The domain-separation byte appended to the message before the final `0x80`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Padding {
    /// The original Keccak submission padding.
    #[strum(serialize = "keccak")]
    #[serde(rename = "keccak")]
    Keccak,
    /// FIPS 202 SHA-3 padding.
    #[strum(serialize = "sha3")]
    #[serde(rename = "sha3")]
    Sha3,
}

impl Padding {
    pub const fn delimiter(self) -> u8 {
        match self {
            Padding::Keccak => 0x01,
            Padding::Sha3 => 0x06,
        }
    }
}

/// A fixed-output member of the Keccak / SHA-3 family.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum Variant {
    #[strum(serialize = "keccak-224")]
    #[serde(rename = "keccak-224")]
    Keccak224,
    #[strum(serialize = "keccak-256")]
    #[serde(rename = "keccak-256")]
    Keccak256,
    #[strum(serialize = "keccak-384")]
    #[serde(rename = "keccak-384")]
    Keccak384,
    #[strum(serialize = "keccak-512")]
    #[serde(rename = "keccak-512")]
    Keccak512,
    #[strum(serialize = "sha3-224")]
    #[serde(rename = "sha3-224")]
    Sha3_224,
    #[strum(serialize = "sha3-256")]
    #[serde(rename = "sha3-256")]
    Sha3_256,
    #[strum(serialize = "sha3-384")]
    #[serde(rename = "sha3-384")]
    Sha3_384,
    #[strum(serialize = "sha3-512")]
    #[serde(rename = "sha3-512")]
    Sha3_512,
}

impl Variant {
    /// Selects a variant from its padding and digest size in bits.
    pub fn new(padding: Padding, output_bits: usize) -> Result<Self, SpongeError> {
        let variant = match (padding, output_bits) {
            (Padding::Keccak, 224) => Variant::Keccak224,
            (Padding::Keccak, 256) => Variant::Keccak256,
            (Padding::Keccak, 384) => Variant::Keccak384,
            (Padding::Keccak, 512) => Variant::Keccak512,
            (Padding::Sha3, 224) => Variant::Sha3_224,
            (Padding::Sha3, 256) => Variant::Sha3_256,
            (Padding::Sha3, 384) => Variant::Sha3_384,
            (Padding::Sha3, 512) => Variant::Sha3_512,
            (padding, bits) => {
                return Err(SpongeError::Configuration(format!(
                    "{padding} has no {bits}-bit output"
                )))
            }
        };
        Ok(variant)
    }

    /// Parses a canonical name such as `keccak-256` or `sha3-512`.
    pub fn from_name(name: &str) -> Result<Self, SpongeError> {
        Variant::from_str(name)
            .map_err(|_| SpongeError::Configuration(format!("unknown variant {name:?}")))
    }

    pub const fn padding(self) -> Padding {
        match self {
            Variant::Keccak224 | Variant::Keccak256 | Variant::Keccak384 | Variant::Keccak512 => {
                Padding::Keccak
            }
            Variant::Sha3_224 | Variant::Sha3_256 | Variant::Sha3_384 | Variant::Sha3_512 => {
                Padding::Sha3
            }
        }
    }

    pub const fn output_bits(self) -> usize {
        match self {
            Variant::Keccak224 | Variant::Sha3_224 => 224,
            Variant::Keccak256 | Variant::Sha3_256 => 256,
            Variant::Keccak384 | Variant::Sha3_384 => 384,
            Variant::Keccak512 | Variant::Sha3_512 => 512,
        }
    }

    /// Digest length in bytes.
    pub const fn digest_len(self) -> usize {
        self.output_bits() / 8
    }

    /// Block size in bytes. The capacity is twice the digest length.
    pub const fn rate(self) -> usize {
        STATE_BYTES - 2 * self.digest_len()
    }
}
