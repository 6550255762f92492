//! The chunk rewriter. Takes a fully buffered RIFF/WAVE container and builds a copy without any LIST-INFO chunks.
//!
//! Every other chunk is copied verbatim and in order. The RIFF size field of the output is computed once,
//! after the last chunk has been visited.
use crate::{
    chunks::{ListChunk, CHUNK_HEADER_SIZE},
    error::{StripError, StripResult},
    header::{check_container, RIFF_SIZE},
    iter::ChunkIter,
    log,
};

/// Result of a rewrite. Holds the new container and what was removed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    bytes: Vec<u8>,
    removed: usize,
    info: Vec<ListChunk>,
    input_len: usize,
}

impl Rewrite {
    /// The rewritten container.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of LIST-INFO chunks dropped.
    pub fn removed(&self) -> usize {
        self.removed
    }

    /// True if at least one LIST-INFO chunk was dropped, i.e. the file on disk needs replacing.
    pub fn modified(&self) -> bool {
        self.removed > 0
    }

    /// The decoded contents of the removed INFO lists, for reporting.
    pub fn removed_info(&self) -> &[ListChunk] {
        &self.info
    }

    /// How much smaller the output is than the input.
    pub fn bytes_saved(&self) -> usize {
        self.input_len.saturating_sub(self.bytes.len())
    }
}

/// Rewrites `input` without its LIST-INFO chunks.
///
/// Fails with a ``FormatError`` if `input` is not a RIFF/WAVE container, and with
/// ``StripError::TruncatedChunk`` if a chunk declares more data than the buffer holds. Fewer than 8
/// bytes left at the end of the input are dropped.
///
/// # Examples
///
/// ```no_run
/// let input = std::fs::read("click.wav")?;
/// let rewrite = wavstrip::rewrite(&input)?;
/// if rewrite.modified() {
///     std::fs::write("click.wav", rewrite.bytes())?;
/// }
/// ```
pub fn rewrite(input: &[u8]) -> StripResult<Rewrite> {
    check_container(input)?;

    let mut out: Vec<u8> = Vec::with_capacity(input.len());
    out.extend_from_slice(&input[..RIFF_SIZE]); // size field is patched below

    let mut removed = 0;
    let mut info = Vec::new();
    let mut chunks = ChunkIter::new(input);

    for chunk in chunks.by_ref() {
        let chunk = chunk?;
        if chunk.is_info_list() {
            log!(
                log::Level::Debug,
                "Dropping {} at offset {}",
                chunk.header,
                chunk.offset
            );
            if let Some(list) = ListChunk::from_bytes(chunk.data) {
                info.push(list);
            }
            removed += 1;
            continue;
        }

        let end = chunk.offset + CHUNK_HEADER_SIZE + chunk.data.len();
        out.extend_from_slice(&input[chunk.offset..end]);
        if chunk.header.is_padded() {
            out.push(0);
        }
    }

    if chunks.remaining() > 0 {
        log!(
            log::Level::Debug,
            "Dropping {} trailing bytes after the last chunk",
            chunks.remaining()
        );
    }

    let riff_size =
        u32::try_from(out.len() - 8).map_err(|_| StripError::ContainerTooLarge(out.len()))?;
    out[4..8].copy_from_slice(&riff_size.to_le_bytes());

    Ok(Rewrite {
        bytes: out,
        removed,
        info,
        input_len: input.len(),
    })
}
