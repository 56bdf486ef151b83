//! Incremental hashing primitive for quadsum.
//!
//! The [`Hasher`] trait is the only contract the stream driver relies on:
//! create a state, absorb bytes any number of times, finalize once.
//! [`Blake2bHasher`] backs it with BLAKE2b at a caller-chosen output length.
//!
//! # Example
//!
//! ```
//! use quadsum_hasher::{Blake2bHasher, Hasher};
//!
//! let mut hasher = Blake2bHasher::new(32).unwrap();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//!
//! let digest = hasher.finalize();
//! assert_eq!(digest, Blake2bHasher::digest(32, b"hello world").unwrap());
//! ```

pub use self::digest::Digest;
pub use self::error::{Error, Result};
pub use self::hasher::{Blake2bHasher, Hasher, OUTBYTES};

mod digest;
mod error;
mod hasher;
