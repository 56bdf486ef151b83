#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid digest length {length}: expected 1..={max} bytes", max = crate::OUTBYTES)]
    InvalidLength { length: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
