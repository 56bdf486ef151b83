use quadsum_hasher::OUTBYTES;

/// Per-stream segment size used by the reference tool.
pub const DEFAULT_BUFFER_CAPACITY: usize = 32768;

/// Largest per-stream segment the command line accepts (four are allocated).
pub const MAX_BUFFER_CAPACITY: usize = 1 << 28;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigestOptions {
    output_length:   usize,
    buffer_capacity: usize,
}

impl Default for DigestOptions {
    fn default() -> Self { Self::new() }
}

impl DigestOptions {
    pub fn new() -> Self {
        Self {
            output_length:   OUTBYTES,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }

    /// Digest length in bytes.
    pub fn output_length(mut self, bytes: usize) -> Self {
        self.output_length = bytes;
        self
    }

    /// Capacity of each stream's segment.
    pub fn buffer_capacity(mut self, bytes: usize) -> Self {
        self.buffer_capacity = bytes;
        self
    }

    pub fn get_output_length(&self) -> usize { self.output_length }

    pub fn get_buffer_capacity(&self) -> usize { self.buffer_capacity }
}
