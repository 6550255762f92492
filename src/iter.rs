//! Module containing the chunk iterator over a buffered RIFF container.
//! The ChunkIter walks the container body one chunk at a time, starting right after the 12 byte RIFF header.
//! It never copies, every RawChunk borrows from the original buffer.
use crate::{
    chunks::{ChunkHeader, CHUNK_HEADER_SIZE, INFO, LIST},
    error::{StripError, StripResult},
    header::RIFF_SIZE,
};

/// A chunk as found in the container, borrowing its data from the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawChunk<'a> {
    /// Offset of the chunk header from the start of the container.
    pub offset: usize,
    pub header: ChunkHeader,
    /// The chunk data, exactly `header.size` bytes.
    pub data: &'a [u8],
    /// The 4 bytes directly after the chunk header, if the container has them.
    list_type: Option<[u8; 4]>,
    /// Number of bytes consumed from the input after the data (0 or 1).
    pad_len: usize,
}

impl<'a> RawChunk<'a> {
    /// Whether this is a LIST chunk whose first 4 bytes after the header read "INFO".
    pub fn is_info_list(&self) -> bool {
        self.header.id == LIST && self.list_type == Some(INFO)
    }

    /// Number of bytes this chunk occupies in the input, including any padding byte that was present.
    pub fn consumed(&self) -> usize {
        CHUNK_HEADER_SIZE + self.data.len() + self.pad_len
    }

    /// True if the chunk has odd size but the input ended before its padding byte.
    pub fn missing_pad(&self) -> bool {
        self.header.is_padded() && self.pad_len == 0
    }
}

/// Iterator over the chunks of a RIFF container body.
///
/// Stops when fewer than 8 bytes remain. A chunk declaring more data than the buffer holds yields a
/// single ``StripError::TruncatedChunk`` and ends the iteration.
pub struct ChunkIter<'a> {
    bytes: &'a [u8],
    pos: usize,
    done: bool,
}

impl<'a> ChunkIter<'a> {
    /// Creates an iterator over the body of `bytes`, which must hold the whole container including its header.
    pub fn new(bytes: &'a [u8]) -> ChunkIter<'a> {
        ChunkIter {
            bytes,
            pos: RIFF_SIZE.min(bytes.len()),
            done: false,
        }
    }

    /// Current read position in the container.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left after the read position. Once the iterator is exhausted these are trailing garbage.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}

impl<'a> Iterator for ChunkIter<'a> {
    type Item = StripResult<RawChunk<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let offset = self.pos;
        let header = match ChunkHeader::from_bytes(&self.bytes[offset..]) {
            Some(header) => header,
            None => {
                self.done = true;
                return None;
            }
        };

        let data_start = offset + CHUNK_HEADER_SIZE;
        let available = self.bytes.len() - data_start;
        let data_end = match data_start.checked_add(header.size as usize) {
            Some(end) if end <= self.bytes.len() => end,
            _ => {
                self.done = true;
                return Some(Err(StripError::TruncatedChunk {
                    offset,
                    id: header.id,
                    declared: header.size,
                    available,
                }));
            }
        };

        let list_type: Option<[u8; 4]> = self
            .bytes
            .get(data_start..data_start + 4)
            .and_then(|b| b.try_into().ok());
        let pad_len = if header.is_padded() && data_end < self.bytes.len() {
            1
        } else {
            0
        };

        self.pos = data_end + pad_len;
        Some(Ok(RawChunk {
            offset,
            header,
            data: &self.bytes[data_start..data_end],
            list_type,
            pad_len,
        }))
    }
}

impl std::iter::FusedIterator for ChunkIter<'_> {}
