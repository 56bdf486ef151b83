//! Lockstep four-stream digesting with length verification.
//!
//! # Architecture
//!
//! - `buffer.rs` - Per-stream segments and the refill round
//! - `driver.rs` - Flush/drain/finalize loop over a [`quadsum_hasher::Hasher`]
//! - `input.rs` - Opening stdin or files as stream handles
//! - `options.rs` - Digest length and buffer sizing
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use quadsum_stream::{digest_streams, DigestOptions};
//!
//! let mut streams = [b"abc"; 4].map(|s| Cursor::new(s.to_vec()));
//! let digests = digest_streams(&mut streams, &DigestOptions::new().output_length(32)).unwrap();
//!
//! assert_eq!(
//!     digests[0].to_hex(),
//!     "bddd813c634239723171ef3fee98579b94964e3bb1cb3e427262c8c068d52319"
//! );
//! ```

pub use self::buffer::{RefillBuffer, RoundTally, STREAMS, SegmentBuffer};
pub use self::driver::{digest_streams, digest_streams_with};
pub use self::error::{Error, Result};
pub use self::input::{Input, InputSpec, open_group, open_input};
pub use self::options::{DEFAULT_BUFFER_CAPACITY, DigestOptions, MAX_BUFFER_CAPACITY};

pub use quadsum_hasher::{Blake2bHasher, Digest, Hasher, OUTBYTES};

pub mod buffer;
mod driver;
mod error;
mod input;
mod options;
