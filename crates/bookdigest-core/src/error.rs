//! Error types for BookDigest.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Lexicon error: {0}")]
    Lexicon(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
