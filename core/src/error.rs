use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A rating that is negative or too large to store.
    #[error("invalid rating {0}: ratings must be between 0 and {max}", max = u32::MAX)]
    InvalidRating(i64),

    #[error("corpus is full: at most {} documents", u64::from(u32::MAX) + 1)]
    CorpusFull,

    /// Book file without its `Title:`/`Author:` preamble.
    #[error("missing `{0}` header line")]
    MissingHeader(&'static str),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("invalid seed configuration: {0}")]
    InvalidSeedConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
