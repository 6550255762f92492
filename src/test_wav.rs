//! Helpers for building RIFF/WAVE buffers in tests.
use crate::chunks::{ChunkHeader, DATA, FMT, INFO, LIST, RIFF, WAVE};

/// A 16 byte PCM format block: 1 channel, 16 kHz, 16 bit.
pub(crate) const PCM_FMT: [u8; 16] = [
    0x01, 0x00, 0x01, 0x00, 0x80, 0x3E, 0x00, 0x00, 0x00, 0x7D, 0x00, 0x00, 0x02, 0x00, 0x10, 0x00,
];

/// Encodes one chunk, appending a zero padding byte when `data` has odd length.
pub(crate) fn chunk(id: [u8; 4], data: &[u8]) -> Vec<u8> {
    let mut bytes = ChunkHeader::new(id, data.len() as u32).as_bytes().to_vec();
    bytes.extend_from_slice(data);
    if data.len() % 2 == 1 {
        bytes.push(0);
    }
    bytes
}

/// Wraps already encoded chunks in a RIFF/WAVE header with a correct size field.
pub(crate) fn container(chunks: &[Vec<u8>]) -> Vec<u8> {
    let body_len: usize = chunks.iter().map(Vec::len).sum();
    let mut bytes = Vec::with_capacity(12 + body_len);
    bytes.extend_from_slice(&RIFF);
    bytes.extend_from_slice(&((body_len + 4) as u32).to_le_bytes());
    bytes.extend_from_slice(&WAVE);
    for c in chunks {
        bytes.extend_from_slice(c);
    }
    bytes
}

pub(crate) fn fmt_chunk() -> Vec<u8> {
    chunk(FMT, &PCM_FMT)
}

pub(crate) fn data_chunk(samples: &[u8]) -> Vec<u8> {
    chunk(DATA, samples)
}

/// A LIST chunk of the given sub-type whose data is `list_type` followed by `payload`.
pub(crate) fn list_chunk(list_type: [u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut data = list_type.to_vec();
    data.extend_from_slice(payload);
    chunk(LIST, &data)
}

/// An INFO list holding a single INAM entry, 20 bytes of list data in total.
pub(crate) fn info_list() -> Vec<u8> {
    list_chunk(INFO, &chunk(*b"INAM", b"Click\0\0\0"))
}

/// The canonical 44 byte header-only WAVE file.
pub(crate) fn minimal_wave() -> Vec<u8> {
    container(&[fmt_chunk(), data_chunk(&[])])
}

/// Reads the RIFF size field.
pub(crate) fn riff_size(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]])
}
