//! Reading a wav file, stripping it and replacing it on disk.
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    error::{StripError, StripResult},
    log,
    options::StripOptions,
    outcome::Outcome,
    rewrite::rewrite,
};

/// Strips the LIST-INFO chunks from the wav file at `path`.
///
/// The whole file is read and rewritten in memory. It is only replaced when something was removed and
/// `options.dry_run` is false, and the replacement is atomic: either the old or the new file is on disk,
/// never a partial one. Files that are not RIFF/WAVE are reported as skipped, not as errors.
///
/// # Examples
///
/// ```no_run
/// use wavstrip::{strip_file, Outcome, StripOptions};
///
/// match strip_file("data/click.wav", &StripOptions::default())? {
///     Outcome::Rewritten { removed, .. } => println!("removed {} INFO list(s)", removed),
///     other => println!("{}", other),
/// }
/// ```
pub fn strip_file<P: AsRef<Path>>(path: P, options: &StripOptions) -> StripResult<Outcome> {
    let path = path.as_ref();
    let input = std::fs::read(path)?;

    let rewrite = match rewrite(&input) {
        Ok(rewrite) => rewrite,
        Err(StripError::Format(e)) => {
            log!(
                log::Level::Info,
                "Skipping {}: {}",
                path.display(),
                e
            );
            return Ok(e.into());
        }
        Err(e) => return Err(e),
    };

    if !rewrite.modified() {
        log!(log::Level::Debug, "{} has no INFO list", path.display());
        return Ok(Outcome::Unchanged);
    }

    for list in rewrite.removed_info() {
        log!(
            log::Level::Debug,
            "Removing metadata from {}\n{}",
            path.display(),
            list
        );
    }

    if !options.dry_run {
        replace_file(path, rewrite.bytes())?;
        log!(log::Level::Info, "Rewrote {}", path.display());
    }

    Ok(Outcome::Rewritten {
        removed: rewrite.removed(),
        bytes_saved: rewrite.bytes_saved(),
    })
}

/// Replaces the contents of `path` with `bytes` via a temporary file in the same directory.
fn replace_file(path: &Path, bytes: &[u8]) -> StripResult<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let permissions = std::fs::metadata(path)?.permissions();

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    {
        let mut buf_writer = BufWriter::new(tmp.as_file_mut());
        buf_writer.write_all(bytes)?;
        buf_writer.flush()?;
    }
    let file: &File = tmp.as_file();
    file.sync_all()?;
    file.set_permissions(permissions)?;

    tmp.persist(path).map_err(|e| StripError::IOError(e.error))?;
    Ok(())
}
