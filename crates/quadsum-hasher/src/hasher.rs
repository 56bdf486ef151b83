use crate::{Digest, Error, Result};

/// Largest digest BLAKE2b can produce, in bytes.
pub const OUTBYTES: usize = blake2b_simd::OUTBYTES;

/// Incremental hash state.
///
/// `finalize` consumes the state, so absorbing after finalization cannot be expressed.
pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Digest;
}

pub struct Blake2bHasher {
    state: blake2b_simd::State,
}

impl Blake2bHasher {
    /// Create a state producing `output_length` bytes (1..=64).
    pub fn new(output_length: usize) -> Result<Self> {
        if !(1..=OUTBYTES).contains(&output_length) {
            return Err(Error::InvalidLength {
                length: output_length,
            });
        }

        let state = blake2b_simd::Params::new()
            .hash_length(output_length)
            .to_state();

        Ok(Self { state })
    }

    /// Single-shot digest of `data`.
    pub fn digest(output_length: usize, data: &[u8]) -> Result<Digest> {
        let mut hasher = Self::new(output_length)?;
        hasher.update(data);
        Ok(hasher.finalize())
    }

    /// Bytes absorbed so far.
    pub fn count(&self) -> u128 { self.state.count() }
}

impl Default for Blake2bHasher {
    fn default() -> Self {
        Self {
            state: blake2b_simd::State::new(),
        }
    }
}

impl Hasher for Blake2bHasher {
    fn update(&mut self, data: &[u8]) { self.state.update(data); }
    fn finalize(self) -> Digest { Digest::new(self.state.finalize().as_bytes()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blake2b_512_abc() {
        let digest = Blake2bHasher::digest(OUTBYTES, b"abc").unwrap();

        let expected = hex::decode(
            "ba80a53f981c4d0d6a2797b69f12f6e94c212f14685ac4b74b12bb6fdbffa2d1\
             7d87c5392aab792dc252d5de4533cc9518d38aa8dbf1925ab92386edd4009923",
        )
        .unwrap();
        assert_eq!(digest.as_bytes(), expected.as_slice());
    }

    #[test]
    fn test_blake2b_512_empty() {
        let digest = Blake2bHasher::default().finalize();

        assert_eq!(
            digest.to_hex(),
            "786a02f742015903c6c6fd852552d272912f4740e15847618a86e217f71f5419\
             d25e1031afee585313896444934eb04b903a685b1448b755d56f701afe9be2ce"
        );
    }

    #[test]
    fn test_blake2b_256_abc() {
        let digest = Blake2bHasher::digest(32, b"abc").unwrap();
        assert_eq!(
            digest.to_hex(),
            "bddd813c634239723171ef3fee98579b94964e3bb1cb3e427262c8c068d52319"
        );
    }

    #[test]
    fn test_incremental_matches_single_shot() {
        let data: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();

        let mut hasher = Blake2bHasher::new(48).unwrap();
        for chunk in data.chunks(7) {
            hasher.update(chunk);
        }
        assert_eq!(hasher.count(), 1000);

        let digest = hasher.finalize();
        assert_eq!(digest.len(), 48);
        assert_eq!(digest, Blake2bHasher::digest(48, &data).unwrap());
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut hasher = Blake2bHasher::new(OUTBYTES).unwrap();
        hasher.update(b"");
        hasher.update(b"abc");
        hasher.update(b"");
        assert_eq!(
            hasher.finalize(),
            Blake2bHasher::digest(OUTBYTES, b"abc").unwrap()
        );
    }

    #[test]
    fn test_invalid_length() {
        assert!(matches!(
            Blake2bHasher::new(0),
            Err(Error::InvalidLength { length: 0 })
        ));
        assert!(matches!(
            Blake2bHasher::new(65),
            Err(Error::InvalidLength { length: 65 })
        ));
        assert!(Blake2bHasher::new(1).is_ok());
    }

    #[test]
    fn test_hasher_is_send() {
        fn assert_send<T: Send>(_: &T) {}

        let hasher: Box<dyn Hasher> = Box::new(Blake2bHasher::default());
        assert_send(&hasher);
    }
}
