//! Per-stream segment buffers and the refill round.
//!
//! Each of the four streams gets its own segment of equal capacity. A round
//! tops every segment up from its stream, in stream order, and then checks
//! that all four streams produced the same number of bytes.

use std::io::{self, Read};

use tracing::trace;

use crate::{Error, Result};

/// Number of streams hashed together.
pub const STREAMS: usize = 4;

/// Owned byte buffer with an explicit fill length.
#[derive(Debug)]
pub struct SegmentBuffer {
    data: Vec<u8>,
    len:  usize,
}

impl SegmentBuffer {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }

        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| Error::AllocationFailure { capacity })?;
        data.resize(capacity, 0);

        Ok(Self { data, len: 0 })
    }

    pub fn capacity(&self) -> usize { self.data.len() }

    pub fn len(&self) -> usize { self.len }

    pub fn is_empty(&self) -> bool { self.len == 0 }

    pub fn remaining(&self) -> usize { self.capacity() - self.len }

    pub fn is_full(&self) -> bool { self.len == self.capacity() }

    /// Valid bytes.
    pub fn filled(&self) -> &[u8] { &self.data[..self.len] }

    /// Unfilled tail, where the next read lands.
    pub fn spare_mut(&mut self) -> &mut [u8] { &mut self.data[self.len..] }

    /// Mark `n` more bytes of the spare region as valid.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds [`remaining`](Self::remaining).
    pub fn advance(&mut self, n: usize) {
        assert!(
            n <= self.remaining(),
            "advance({n}) past capacity: {} of {} bytes filled",
            self.len,
            self.capacity()
        );
        self.len += n;
    }

    pub fn clear(&mut self) { self.len = 0; }

    /// Read until the segment is full or the reader reports end of data.
    ///
    /// Short reads are retried, as are reads interrupted by a signal. Returns
    /// the number of bytes added.
    pub fn fill_from<R: Read + ?Sized>(&mut self, reader: &mut R) -> io::Result<usize> {
        let start = self.len;

        while !self.is_full() {
            match reader.read(self.spare_mut()) {
                Ok(0) => break,
                Ok(n) => self.advance(n),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(self.len - start)
    }
}

/// Byte counts produced by one refill round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundTally {
    /// Bytes already valid in each segment when the round started.
    pub fill_offset: usize,
    /// Bytes asked of each stream.
    pub requested:   usize,
    pub counts:      [usize; STREAMS],
}

impl RoundTally {
    /// Fill position of the primary segment after the round.
    pub fn combined(&self) -> usize { self.fill_offset + self.counts[0] }

    pub fn mean(&self) -> usize { self.counts.iter().sum::<usize>() / STREAMS }

    /// Every stream produced as many bytes as the primary one.
    pub fn is_balanced(&self) -> bool { self.counts.iter().all(|&n| n == self.counts[0]) }

    /// A stream produced nothing, or the primary stream came up short.
    pub fn reached_end(&self) -> bool {
        self.counts.contains(&0) || self.counts[0] < self.requested
    }

    fn shortest(&self) -> usize { self.counts.iter().copied().min().unwrap_or_default() }
}

/// Four equal segments, filled in lockstep.
#[derive(Debug)]
pub struct RefillBuffer {
    segments: [SegmentBuffer; STREAMS],
    flushed:  u64,
}

impl RefillBuffer {
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let segments = [
            SegmentBuffer::with_capacity(capacity)?,
            SegmentBuffer::with_capacity(capacity)?,
            SegmentBuffer::with_capacity(capacity)?,
            SegmentBuffer::with_capacity(capacity)?,
        ];

        Ok(Self {
            segments,
            flushed: 0,
        })
    }

    pub fn capacity(&self) -> usize { self.segments[0].capacity() }

    /// Bytes valid in the current buffer, per stream.
    pub fn fill_offset(&self) -> usize { self.segments[0].len() }

    pub fn is_full(&self) -> bool { self.segments[0].is_full() }

    /// Valid bytes of the primary stream; the only content that gets hashed.
    pub fn primary(&self) -> &[u8] { self.segments[0].filled() }

    /// Bytes consumed from each stream since the buffer was created.
    pub fn consumed(&self) -> u64 { self.flushed + self.fill_offset() as u64 }

    /// Reset every segment after its content has been absorbed.
    pub fn clear(&mut self) {
        self.flushed += self.fill_offset() as u64;
        self.segments.iter_mut().for_each(SegmentBuffer::clear);
    }

    /// Top up each segment from its stream, streams read in order.
    ///
    /// Fails with [`Error::ReadFailure`] on the first I/O error, and with
    /// [`Error::LengthMismatch`] when the streams did not all produce the same
    /// number of bytes. The mismatch offset is where the shortest stream ended.
    pub fn refill_round<R: Read>(&mut self, streams: &mut [R; STREAMS]) -> Result<RoundTally> {
        let fill_offset = self.fill_offset();
        let requested = self.capacity() - fill_offset;
        let mut counts = [0; STREAMS];

        for (index, (segment, stream)) in
            self.segments.iter_mut().zip(streams.iter_mut()).enumerate()
        {
            counts[index] = segment
                .fill_from(stream)
                .map_err(|source| Error::ReadFailure {
                    stream: index + 1,
                    source,
                })?;
        }

        let tally = RoundTally {
            fill_offset,
            requested,
            counts,
        };
        trace!(?counts, mean = tally.mean(), combined = tally.combined(), "refill round");

        if !tally.is_balanced() {
            return Err(Error::LengthMismatch {
                offset: self.flushed + (fill_offset + tally.shortest()) as u64,
                counts,
            });
        }

        Ok(tally)
    }
}
