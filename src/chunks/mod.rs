pub mod list;

use std::fmt::Display;

pub use crate::chunks::list::ListChunk;

// Container magic
pub const RIFF: [u8; 4] = *b"RIFF";
pub const WAVE: [u8; 4] = *b"WAVE";

// Common body chunks
pub const FMT: [u8; 4] = *b"fmt ";
pub const DATA: [u8; 4] = *b"data";
pub const FACT: [u8; 4] = *b"fact";
pub const LIST: [u8; 4] = *b"LIST";

// List sub-type stripped by the rewriter
pub const INFO: [u8; 4] = *b"INFO";

/// Size of a chunk header: 4 byte ID followed by a 4 byte little-endian size.
pub const CHUNK_HEADER_SIZE: usize = 8;

/// Wrapper around a 4 byte buffer. Used for storing and displaying/debugging the identifier of a chunk.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ChunkIdentifier {
    identifier: [u8; 4],
}

impl ChunkIdentifier {
    pub fn new(identifier: [u8; 4]) -> Self {
        ChunkIdentifier { identifier }
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.identifier
    }
}

impl From<&[u8; 4]> for ChunkIdentifier {
    fn from(identifier: &[u8; 4]) -> Self {
        ChunkIdentifier {
            identifier: *identifier,
        }
    }
}

impl From<[u8; 4]> for ChunkIdentifier {
    fn from(identifier: [u8; 4]) -> Self {
        ChunkIdentifier { identifier }
    }
}

impl PartialEq<[u8; 4]> for ChunkIdentifier {
    fn eq(&self, other: &[u8; 4]) -> bool {
        &self.identifier == other
    }
}

impl Display for ChunkIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str: &str = match std::str::from_utf8(&self.identifier) {
            Ok(s) => s,
            Err(_) => "Invalid identifier",
        };
        write!(f, "{:?}", as_str)
    }
}

/// The 8 byte header in front of every chunk in the container body.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ChunkHeader {
    pub id: ChunkIdentifier,
    /// Byte count of the chunk data, excluding this header and any padding byte.
    pub size: u32,
}

impl ChunkHeader {
    pub fn new(id: [u8; 4], size: u32) -> Self {
        ChunkHeader {
            id: id.into(),
            size,
        }
    }

    /// Reads a header from the first 8 bytes of `bytes`. Returns None if fewer than 8 bytes are available.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let header = bytes.get(..CHUNK_HEADER_SIZE)?;
        let id = [header[0], header[1], header[2], header[3]];
        let size = read_u32_le(&header[4..8]);
        Some(ChunkHeader::new(id, size))
    }

    /// Returns the header in its on-disk representation.
    pub fn as_bytes(&self) -> [u8; CHUNK_HEADER_SIZE] {
        let mut bytes = [0; CHUNK_HEADER_SIZE];
        bytes[0..4].copy_from_slice(self.id.as_bytes());
        bytes[4..8].copy_from_slice(&self.size.to_le_bytes());
        bytes
    }

    #[inline(always)]
    pub fn is_padded(&self) -> bool {
        self.size % 2 == 1
    }

    /// Size of the data plus the padding byte, if any.
    #[inline(always)]
    pub fn padded_size(&self) -> usize {
        self.size as usize + self.is_padded() as usize
    }

    /// Full footprint of the chunk in the container: header, data and padding.
    #[inline(always)]
    pub fn total_size(&self) -> usize {
        CHUNK_HEADER_SIZE + self.padded_size()
    }
}

impl Display for ChunkHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (size: {})", self.id, self.size)
    }
}

#[inline(always)]
pub(crate) fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[cfg(test)]
mod chunk_tests {
    use super::*;

    #[test]
    fn header_sizes_include_padding() {
        let even = ChunkHeader::new(LIST, 20);
        assert_eq!(even.padded_size(), 20);
        assert_eq!(even.total_size(), 28);

        let odd = ChunkHeader::new(LIST, 7);
        assert!(odd.is_padded());
        assert_eq!(odd.padded_size(), 8);
        assert_eq!(odd.total_size(), 16);
    }

    #[test]
    fn header_reads_little_endian_size() {
        let bytes = [b'd', b'a', b't', b'a', 0x10, 0x02, 0x00, 0x00, 0xFF];
        let header = ChunkHeader::from_bytes(&bytes).expect("header should parse");
        assert_eq!(header.id, DATA);
        assert_eq!(header.size, 0x0210);
        assert_eq!(&header.as_bytes()[..], &bytes[..8]);
    }

    #[test]
    fn header_needs_eight_bytes() {
        assert!(ChunkHeader::from_bytes(b"fmt \x10\x00\x00").is_none());
    }

    #[test]
    fn identifier_display_is_quoted() {
        assert_eq!(ChunkIdentifier::from(FMT).to_string(), "\"fmt \"");
        assert_eq!(
            ChunkIdentifier::from([0xFF, 0xFE, 0x00, 0x01]).to_string(),
            "\"Invalid identifier\""
        );
    }
}
