use std::fmt;

/// Fixed-length output of a finalized hash state.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Digest(Vec<u8>);

impl Digest {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self { Self(bytes.into()) }

    pub fn as_bytes(&self) -> &[u8] { &self.0 }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String { hex::encode(&self.0) }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.to_hex()) }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}
