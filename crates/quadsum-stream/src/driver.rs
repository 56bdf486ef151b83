use std::io::Read;

use quadsum_hasher::{Blake2bHasher, Digest, Hasher};
use tracing::{debug, warn};

use crate::buffer::{RefillBuffer, RoundTally, STREAMS};
use crate::{DigestOptions, Result};

/// Where the read loop goes after a successful round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Flushing,
    Draining,
}

impl Phase {
    /// A round only stops short of a full buffer at end of data.
    fn after(buffer: &RefillBuffer, tally: &RoundTally) -> Self {
        if buffer.is_full() {
            Self::Flushing
        } else {
            debug_assert!(tally.reached_end());
            Self::Draining
        }
    }
}

/// Digest four streams of equal length with BLAKE2b.
///
/// Only the first stream's bytes are hashed; the other three are read in
/// lockstep and counted. The single digest is reported in all four slots.
/// Streams are borrowed, never closed or rewound, and are left positioned at
/// their end (or at the point where their lengths diverged).
pub fn digest_streams<R: Read>(
    streams: &mut [R; STREAMS],
    options: &DigestOptions,
) -> Result<[Digest; STREAMS]> {
    let hasher = Blake2bHasher::new(options.get_output_length())?;
    let digest = digest_streams_with(streams, hasher, options.get_buffer_capacity())?;

    Ok(std::array::from_fn(|_| digest.clone()))
}

/// Drive `hasher` over the primary stream while checking all four lengths.
///
/// `hasher` is finalized exactly once on success and dropped unfinalized on
/// any fault.
pub fn digest_streams_with<R: Read, H: Hasher>(
    streams: &mut [R; STREAMS],
    mut hasher: H,
    capacity: usize,
) -> Result<Digest> {
    let mut buffer = RefillBuffer::with_capacity(capacity)?;

    loop {
        let tally = buffer.refill_round(streams).inspect_err(|e| {
            warn!(error = %e, consumed = buffer.consumed(), "aborting digest");
        })?;

        match Phase::after(&buffer, &tally) {
            Phase::Flushing => {
                debug!(bytes = buffer.fill_offset(), "absorbing full buffer");
                hasher.update(buffer.primary());
                buffer.clear();
            }
            Phase::Draining => break,
        }
    }

    if !buffer.primary().is_empty() {
        debug!(bytes = buffer.fill_offset(), "absorbing remainder");
        hasher.update(buffer.primary());
    }

    let digest = hasher.finalize();
    debug!(total = buffer.consumed(), "digest finalized");

    Ok(digest)
}
