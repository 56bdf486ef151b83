use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not open '{path}': {source}")]
    OpenFailure { path: PathBuf, source: io::Error },

    #[error("stream lengths differ at byte {offset} (round counts {counts:?})")]
    LengthMismatch { offset: u64, counts: [usize; 4] },

    #[error("failed to read stream {stream}: {source}")]
    ReadFailure { stream: usize, source: io::Error },

    #[error("failed to allocate {capacity} byte buffer")]
    AllocationFailure { capacity: usize },

    #[error("buffer capacity must be non-zero")]
    InvalidCapacity,

    #[error(transparent)]
    Hasher(#[from] quadsum_hasher::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
