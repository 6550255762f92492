//! List Chunk - a chunk that contains a list of other chunks. Each chunk in the list is identified by a 4 byte ID, followed by a 4 byte size, and then the data.
//!
//! The rewriter never needs the decoded form to drop an INFO list, it is only decoded so that the removed tags can be reported.
use std::fmt::{Display, Formatter};

#[cfg(feature = "colored")]
use colored::Colorize;

use crate::chunks::{read_u32_le, ChunkHeader, CHUNK_HEADER_SIZE, INFO, LIST};

pub type InfoId = [u8; 4];

/// A decoded List Chunk. Entries are kept in the order they appear in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListChunk {
    list_type_id: [u8; 4],
    entries: Vec<(InfoId, String)>,
}

impl ListChunk {
    /// Creates a new ListChunk.
    pub fn new(list_type_id: [u8; 4], entries: Vec<(InfoId, String)>) -> Self {
        Self {
            list_type_id,
            entries,
        }
    }

    pub fn list_type_id(&self) -> &[u8; 4] {
        &self.list_type_id
    }

    pub fn entries(&self) -> &[(InfoId, String)] {
        &self.entries
    }

    pub fn is_info(&self) -> bool {
        self.list_type_id == INFO
    }

    /// Decodes a ListChunk from the data of a LIST chunk, i.e. starting at the list type ID.
    ///
    /// Returns None if there are not even 4 bytes for the list type. Decoding stops quietly at the
    /// first sub-chunk that runs past the end of `data`.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        let list_type_id: [u8; 4] = data.get(0..4)?.try_into().ok()?;
        let mut entries = Vec::new();
        let mut i: usize = 4;
        while i + CHUNK_HEADER_SIZE <= data.len() {
            let id = [data[i], data[i + 1], data[i + 2], data[i + 3]];
            let size = read_u32_le(&data[i + 4..i + 8]) as usize;
            i += CHUNK_HEADER_SIZE;
            let value = match data.get(i..i + size) {
                Some(value) => value,
                None => break,
            };
            let value = String::from_utf8_lossy(value)
                .trim_end_matches('\0')
                .to_string();
            entries.push((id, value));
            i += size + size % 2;
        }
        Some(ListChunk::new(list_type_id, entries))
    }

    /// Size of the list data, i.e. the value stored in the LIST chunk header.
    pub fn size(&self) -> u32 {
        let n_bytes = 4 + self
            .entries
            .iter()
            .map(|(_, value)| {
                let len = value.len() + 1; // NUL terminated
                (CHUNK_HEADER_SIZE + len + len % 2) as u32
            })
            .sum::<u32>();
        n_bytes
    }

    /// Returns the full LIST chunk in bytes. Values are written NUL terminated and word aligned.
    pub fn as_bytes(&self) -> Box<[u8]> {
        let mut bytes = Vec::with_capacity(CHUNK_HEADER_SIZE + self.size() as usize);
        bytes.extend_from_slice(&ChunkHeader::new(LIST, self.size()).as_bytes());
        bytes.extend_from_slice(&self.list_type_id);

        for (id, value) in &self.entries {
            let len = value.len() + 1;
            bytes.extend_from_slice(&ChunkHeader::new(*id, len as u32).as_bytes());
            bytes.extend_from_slice(value.as_bytes());
            bytes.push(0);
            if len % 2 == 1 {
                bytes.push(0);
            }
        }

        bytes.into_boxed_slice()
    }
}

impl Default for ListChunk {
    fn default() -> Self {
        ListChunk::new(INFO, Vec::new())
    }
}

#[cfg(feature = "colored")]
impl Display for ListChunk {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match std::str::from_utf8(&self.list_type_id) {
            Ok(id) => {
                write!(
                    f,
                    "{} ({})",
                    "ListChunk:".white().bold(),
                    id.white().underline()
                )?;
            }
            Err(_) => write!(f, "ListChunk: {}", "[ERROR]".red().bold().underline())?,
        }
        for (id, value) in &self.entries {
            match std::str::from_utf8(id) {
                Ok(id) => {
                    write!(f, "\n\t{}: ", id.green().bold())?;
                    write!(f, "{}", value.white())?;
                }
                Err(_) => write!(f, "\n\t{}", "[ERROR]".red().bold().underline())?,
            }
        }
        Ok(())
    }
}

#[cfg(not(feature = "colored"))]
impl Display for ListChunk {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match std::str::from_utf8(&self.list_type_id) {
            Ok(id) => write!(f, "ListChunk: {}", id)?,
            Err(_) => write!(f, "ListChunk: [ERROR]")?,
        }
        for (id, value) in &self.entries {
            match std::str::from_utf8(id) {
                Ok(id) => {
                    write!(f, "\n\t{}: ", id)?;
                    write!(f, "{}", value)?;
                }
                Err(_) => write!(f, "\n\t{}", "[ERROR]")?,
            }
        }
        Ok(())
    }
}
