use std::{io, path::PathBuf};

use thiserror::Error;

/// A puzzle string that is not 81 symbols from `0-9`.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FormatError {
    #[error("puzzle has length {len}, needs to be 81")]
    Length { len: usize },
    #[error("puzzle has unrecognizable char {symbol:?} at position {position}")]
    Symbol { position: usize, symbol: char },
}

#[derive(Debug, Error)]
#[error("cannot read {}: {source}", .path.display())]
pub struct FileError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// First malformed puzzle of a batch, by input position.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("puzzle {index}: {source}")]
pub struct BatchError {
    pub index: usize,
    #[source]
    pub source: FormatError,
}
