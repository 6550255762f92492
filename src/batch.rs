//! Stripping many files in one go.
//!
//! Every file is handled on its own, nothing is shared between files, so the paths can come from any
//! iterator.
use std::path::{Path, PathBuf};

use crate::{
    error::{StripError, StripResult},
    io::strip_file,
    log,
    options::{ErrorPolicy, StripOptions},
    outcome::Outcome,
};

/// Summary of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<(PathBuf, Outcome)>,
    pub failures: Vec<(PathBuf, StripError)>,
}

impl BatchReport {
    pub fn count(&self, category: &str) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| o.category() == category)
            .count()
    }

    pub fn rewritten(&self) -> usize {
        self.count("rewritten")
    }

    pub fn unchanged(&self) -> usize {
        self.count("unchanged")
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_skip()).count()
    }

    /// Total number of LIST-INFO chunks removed across the batch.
    pub fn removed_chunks(&self) -> usize {
        self.outcomes
            .iter()
            .map(|(_, o)| match o {
                Outcome::Rewritten { removed, .. } => *removed,
                _ => 0,
            })
            .sum()
    }

    pub fn bytes_saved(&self) -> usize {
        self.outcomes
            .iter()
            .map(|(_, o)| match o {
                Outcome::Rewritten { bytes_saved, .. } => *bytes_saved,
                _ => 0,
            })
            .sum()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Strips every file in `paths`.
///
/// Format skips are recorded as outcomes. Other errors are recorded as failures when
/// `options.error_policy` is ``ErrorPolicy::Continue``, or returned straight away when it is
/// ``ErrorPolicy::Abort``. Files already processed keep their new contents either way.
pub fn strip_all<I, P>(paths: I, options: &StripOptions) -> StripResult<BatchReport>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut report = BatchReport::default();
    for path in paths {
        let path = path.as_ref();
        match strip_file(path, options) {
            Ok(outcome) => report.outcomes.push((path.to_path_buf(), outcome)),
            Err(e) => match options.error_policy {
                ErrorPolicy::Abort => return Err(e),
                ErrorPolicy::Continue => {
                    log!(
                        log::Level::Warn,
                        "Failed to strip {}: {}",
                        path.display(),
                        e
                    );
                    report.failures.push((path.to_path_buf(), e));
                }
            },
        }
    }
    Ok(report)
}

#[cfg(test)]
mod batch_tests {
    use super::*;
    use crate::test_wav::*;

    fn write_files(dir: &tempfile::TempDir) -> Vec<PathBuf> {
        let mut rifx = minimal_wave();
        rifx[0..4].copy_from_slice(b"RIFX");
        let mut truncated = container(&[fmt_chunk(), data_chunk(&[0; 10])]);
        truncated.truncate(truncated.len() - 2);

        let files: Vec<(&str, Vec<u8>)> = vec![
            ("a_tagged.wav", container(&[fmt_chunk(), info_list(), data_chunk(&[])])),
            ("b_broken.wav", truncated),
            ("c_plain.wav", minimal_wave()),
            ("d_rifx.wav", rifx),
            (
                "e_twice.wav",
                container(&[info_list(), fmt_chunk(), data_chunk(&[1]), info_list()]),
            ),
        ];
        files
            .into_iter()
            .map(|(name, bytes)| {
                let path = dir.path().join(name);
                std::fs::write(&path, bytes).unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn continue_policy_processes_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_files(&dir);

        let report = strip_all(&paths, &StripOptions::default()).unwrap();
        assert_eq!(report.rewritten(), 2);
        assert_eq!(report.unchanged(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.count("skipped-not-riff"), 1);
        assert_eq!(report.removed_chunks(), 3);
        assert_eq!(report.bytes_saved(), 28 * 3);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, paths[1]);

        assert_eq!(std::fs::read(&paths[0]).unwrap(), minimal_wave());
    }

    #[test]
    fn abort_policy_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_files(&dir);
        let before = std::fs::read(&paths[4]).unwrap();

        let options = StripOptions::new().error_policy(ErrorPolicy::Abort);
        let err = strip_all(&paths, &options).unwrap_err();
        assert!(matches!(err, StripError::TruncatedChunk { .. }));

        // first file was already rewritten, the last one was never reached
        assert_eq!(std::fs::read(&paths[0]).unwrap(), minimal_wave());
        assert_eq!(std::fs::read(&paths[4]).unwrap(), before);
    }

    #[test]
    fn empty_batch() {
        let report = strip_all(Vec::<PathBuf>::new(), &StripOptions::default()).unwrap();
        assert_eq!(report.outcomes.len(), 0);
        assert!(!report.has_failures());
    }
}
