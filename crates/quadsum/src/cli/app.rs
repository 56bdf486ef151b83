use std::path::PathBuf;

use clap::{ArgAction, Parser};
use quadsum_stream::{DEFAULT_BUFFER_CAPACITY, DigestOptions, MAX_BUFFER_CAPACITY, OUTBYTES};

const MAX_BITS: usize = OUTBYTES * 8;

/// Parsed once at startup and never mutated.
#[derive(Clone, Debug, Parser)]
#[command(
    name = "quadsum",
    version = env!("CARGO_PKG_VERSION"),
    about = "Hash four equal-length files in lockstep with BLAKE2b",
    long_about = None
)]
pub struct App {
    #[arg(value_name = "FILE", required = true, help = "Files to hash, four per group ('-' reads stdin)")]
    pub files: Vec<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "BITS",
        default_value_t = MAX_BITS,
        value_parser = parse_length,
        help = "Digest length in bits, a multiple of 8 up to 512"
    )]
    pub length: usize,

    #[arg(long, help = "Create a BSD-style checksum")]
    pub tag: bool,

    #[arg(
        long,
        value_name = "BYTES",
        default_value_t = DEFAULT_BUFFER_CAPACITY,
        value_parser = parse_buffer_size,
        help = "Bytes read from each file per round"
    )]
    pub buffer_size: usize,

    #[arg(long, help = "Exit non-zero when any group fails")]
    pub strict: bool,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
}

impl App {
    pub fn digest_options(&self) -> DigestOptions {
        DigestOptions::new()
            .output_length(self.length / 8)
            .buffer_capacity(self.buffer_size)
    }
}

fn parse_length(s: &str) -> Result<usize, String> {
    let bits: usize = s.parse().map_err(|e| format!("`{s}` is not a number: {e}"))?;

    if bits == 0 || bits > MAX_BITS || bits % 8 != 0 {
        return Err(format!("length must be a multiple of 8 between 8 and {MAX_BITS}"));
    }
    Ok(bits)
}

fn parse_buffer_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("buffer size must be non-zero".to_string()),
        Ok(bytes) if bytes > MAX_BUFFER_CAPACITY => {
            Err(format!("buffer size must be at most {MAX_BUFFER_CAPACITY} bytes"))
        }
        Ok(bytes) => Ok(bytes),
        Err(e) => Err(format!("`{s}` is not a number: {e}")),
    }
}
