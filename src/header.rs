///
/// Module containing the RIFF container header and the pre-check run before any rewrite.
///
use std::fmt::Display;

use crate::{
    chunks::{read_u32_le, RIFF, WAVE},
    error::FormatError,
};

/// Length of the container header: "RIFF", the 4 byte size field and "WAVE".
pub const RIFF_SIZE: usize = 12;

/// The 12 byte header at the start of every RIFF/WAVE file.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RiffHeader {
    /// Size field as found in the file. Excludes the 8 bytes of "RIFF" and the size field itself.
    pub declared_size: u32,
    pub form: [u8; 4],
}

impl RiffHeader {
    /// Total file length implied by the size field.
    pub fn declared_len(&self) -> usize {
        self.declared_size as usize + 8
    }

    /// Whether the size field agrees with the actual length of the buffer.
    pub fn is_consistent(&self, buffer_len: usize) -> bool {
        self.declared_len() == buffer_len
    }

    pub fn as_bytes(&self) -> [u8; RIFF_SIZE] {
        let mut bytes = [0; RIFF_SIZE];
        bytes[0..4].copy_from_slice(&RIFF);
        bytes[4..8].copy_from_slice(&self.declared_size.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.form);
        bytes
    }
}

impl Display for RiffHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RIFF (size: {}, form: {:?})",
            self.declared_size,
            String::from_utf8_lossy(&self.form)
        )
    }
}

/// Checks that `bytes` starts with a RIFF/WAVE header.
///
/// A buffer shorter than the 12 byte header counts as not RIFF. Either error means the file should be
/// skipped and left as it is.
pub fn check_container(bytes: &[u8]) -> Result<RiffHeader, FormatError> {
    if bytes.len() < RIFF_SIZE || bytes[0..4] != RIFF {
        return Err(FormatError::NotRiff);
    }
    if bytes[8..12] != WAVE {
        return Err(FormatError::NotWave);
    }
    Ok(RiffHeader {
        declared_size: read_u32_le(&bytes[4..8]),
        form: WAVE,
    })
}
