/// Module containing the error types for wavstrip
use thiserror::Error;

use crate::chunks::ChunkIdentifier;

pub type StripResult<T> = Result<T, StripError>;

/// Error types for wavstrip
#[derive(Error, Debug)]
pub enum StripError {
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
    #[error("IO error with file")]
    IOError(#[from] std::io::Error),
    #[error(
        "Truncated chunk {id} at offset {offset}: declares {declared} bytes but only {available} remain"
    )]
    TruncatedChunk {
        offset: usize,
        id: ChunkIdentifier,
        declared: u32,
        available: usize,
    },
    #[error("Rewritten container is {0} bytes, too large for a 32-bit RIFF size field")]
    ContainerTooLarge(usize),
    #[error("Directory walk failed")]
    WalkDir(#[from] walkdir::Error),
}

/// The input is not a RIFF/WAVE container. Callers treat this as a skip, not a failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("not a RIFF file")]
    NotRiff,
    #[error("not a WAVE file")]
    NotWave,
}

impl StripError {
    /// Returns the format error if this error only means the file should be skipped.
    pub fn as_format(&self) -> Option<FormatError> {
        match self {
            StripError::Format(e) => Some(*e),
            _ => None,
        }
    }
}
