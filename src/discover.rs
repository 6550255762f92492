//! Finding candidate wav files on disk.
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{error::StripResult, log};

/// Whether `path` has a `.wav` extension, ignoring case.
pub fn is_wav(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("wav"))
        .unwrap_or(false)
}

/// Lists the wav files under `root`, sorted by path.
///
/// A file given directly is returned as is, whatever its extension. A directory is listed one level deep,
/// or fully when `recursive` is set.
pub fn find_wav_files<P: AsRef<Path>>(root: P, recursive: bool) -> StripResult<Vec<PathBuf>> {
    let root = root.as_ref();
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files = Vec::new();
    for entry in WalkDir::new(root).max_depth(max_depth) {
        let entry = entry?;
        if entry.file_type().is_file() && is_wav(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();

    log!(
        log::Level::Debug,
        "Found {} wav file(s) in {}",
        files.len(),
        root.display()
    );
    Ok(files)
}
