use std::fmt::Display;
use wavstrip::{ChunkHeader, ListChunk, DATA, FMT, INFO, RIFF, WAVE};

pub const PCM_FMT: [u8; 16] = [
    0x01, 0x00, 0x02, 0x00, 0x44, 0xAC, 0x00, 0x00, 0x10, 0xB1, 0x02, 0x00, 0x04, 0x00, 0x10, 0x00,
];

#[derive(Debug, Clone, Copy)]
pub struct ContainerConfig {
    /// Size of the data chunk in bytes.
    pub data_len: usize,
    /// Number of INFO lists placed after the data chunk.
    pub info_lists: usize,
}

impl Display for ContainerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}B_{}info", self.data_len, self.info_lists)
    }
}

pub const CONFIGS: &[ContainerConfig] = &[
    ContainerConfig {
        data_len: 4 * 1024,
        info_lists: 0,
    },
    ContainerConfig {
        data_len: 4 * 1024,
        info_lists: 1,
    },
    ContainerConfig {
        data_len: 1024 * 1024,
        info_lists: 1,
    },
    ContainerConfig {
        data_len: 16 * 1024 * 1024,
        info_lists: 4,
    },
];

fn push_chunk(bytes: &mut Vec<u8>, id: [u8; 4], data: &[u8]) {
    bytes.extend_from_slice(&ChunkHeader::new(id, data.len() as u32).as_bytes());
    bytes.extend_from_slice(data);
    if data.len() % 2 == 1 {
        bytes.push(0);
    }
}

/// Builds a stereo 16 bit container with a noise-like data chunk and the configured INFO lists.
pub fn generate_container(config: &ContainerConfig) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(config.data_len + 1024);
    bytes.extend_from_slice(&RIFF);
    bytes.extend_from_slice(&[0; 4]);
    bytes.extend_from_slice(&WAVE);

    push_chunk(&mut bytes, FMT, &PCM_FMT);
    let data: Vec<u8> = (0..config.data_len)
        .map(|i| (i.wrapping_mul(2654435761) >> 13) as u8)
        .collect();
    push_chunk(&mut bytes, DATA, &data);

    let info = ListChunk::new(
        INFO,
        vec![
            (*b"INAM", "Metronome click".to_string()),
            (*b"IART", "wavstrip".to_string()),
            (*b"ISFT", "Lavf58.76.100".to_string()),
        ],
    );
    for _ in 0..config.info_lists {
        bytes.extend_from_slice(&info.as_bytes());
    }

    let size = (bytes.len() - 8) as u32;
    bytes[4..8].copy_from_slice(&size.to_le_bytes());
    bytes
}
