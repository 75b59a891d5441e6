//! SHA-3 (FIPS 202) fixed-output hashers.

use crate::{Digest, Hasher, KeccakState, SpongeError, Variant};

#[derive(Clone, Debug)]
pub struct Sha3 {
    state: KeccakState,
}

impl Sha3 {
    /// Creates a new [`Sha3`] hasher with a 224-bit output.
    pub fn v224() -> Sha3 {
        Sha3::new(Variant::Sha3_224)
    }

    /// Creates a new [`Sha3`] hasher with a 256-bit output.
    pub fn v256() -> Sha3 {
        Sha3::new(Variant::Sha3_256)
    }

    /// Creates a new [`Sha3`] hasher with a 384-bit output.
    pub fn v384() -> Sha3 {
        Sha3::new(Variant::Sha3_384)
    }

    /// Creates a new [`Sha3`] hasher with a 512-bit output.
    pub fn v512() -> Sha3 {
        Sha3::new(Variant::Sha3_512)
    }

    fn new(variant: Variant) -> Sha3 {
        Sha3 { state: KeccakState::new(variant) }
    }

    pub fn finalize(&mut self) -> Digest {
        self.state.finalize()
    }
}

impl Hasher for Sha3 {
    fn update(&mut self, input: &[u8]) {
        self.state.update(input);
    }

    fn finalize_into(&mut self, output: &mut [u8]) -> Result<(), SpongeError> {
        self.state.finalize_into(output)
    }

    fn output_len(&self) -> usize {
        self.state.output_len()
    }
}

/// SHA3-256 of `data`.
pub fn sha3_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha3::v256();
    hasher.update(data);
    let mut sha3_256_result = [0u8; 32];
    sha3_256_result.copy_from_slice(hasher.finalize().as_bytes());
    sha3_256_result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha3_256_empty() {
        let hash = sha3_256(b"");
        let expected = [
            0xa7, 0xff, 0xc6, 0xf8, 0xbf, 0x1e, 0xd7, 0x66, 0x51, 0xc1, 0x47, 0x56, 0xa0, 0x61,
            0xd6, 0x62, 0xf5, 0x80, 0xff, 0x4d, 0xe4, 0x3b, 0x49, 0xfa, 0x82, 0xd8, 0x0a, 0x4b,
            0x80, 0xf8, 0x43, 0x4a,
        ];
        assert_eq!(hash, expected);
    }

    #[test]
    fn test_sha3_256_abc() {
        let hash = sha3_256(b"abc");
        let expected = [
            0x3a, 0x98, 0x5d, 0xa7, 0x4f, 0xe2, 0x25, 0xb2, 0x04, 0x5c, 0x17, 0x2d, 0x6b, 0xd3,
            0x90, 0xbd, 0x85, 0x5f, 0x08, 0x6e, 0x3e, 0x9d, 0x52, 0x5b, 0x46, 0xbf, 0xe2, 0x45,
            0x11, 0x43, 0x15, 0x32,
        ];
        assert_eq!(hash, expected);
    }

    #[test]
    fn test_generic_over_hasher() {
        fn digest_of<H: Hasher>(mut hasher: H, chunks: &[&[u8]]) -> Vec<u8> {
            for chunk in chunks {
                hasher.update(chunk);
            }
            let mut out = vec![0u8; hasher.output_len()];
            hasher.finalize_into(&mut out).unwrap();
            out
        }

        let chunked = digest_of(Sha3::v384(), &[&b"a"[..], &b""[..], &b"bc"[..]]);
        let whole = digest_of(KeccakState::new(Variant::Sha3_384), &[&b"abc"[..]]);
        assert_eq!(chunked, whole);
    }
}
