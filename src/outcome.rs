//! Per-file outcome of a strip, as reported to the user.
use std::fmt::{Display, Formatter};

#[cfg(feature = "colored")]
use colored::Colorize;

use crate::error::FormatError;

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The file does not start with "RIFF". Left untouched.
    SkippedNotRiff,
    /// The file is RIFF but not WAVE. Left untouched.
    SkippedNotWave,
    /// At least one LIST-INFO chunk was removed and the file replaced (unless dry running).
    Rewritten { removed: usize, bytes_saved: usize },
    /// No LIST-INFO chunk was found. Left untouched.
    Unchanged,
}

impl Outcome {
    /// Stable name of the outcome category.
    pub fn category(&self) -> &'static str {
        match self {
            Outcome::SkippedNotRiff => "skipped-not-riff",
            Outcome::SkippedNotWave => "skipped-not-wave",
            Outcome::Rewritten { .. } => "rewritten",
            Outcome::Unchanged => "unchanged",
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Outcome::SkippedNotRiff | Outcome::SkippedNotWave)
    }
}

impl From<FormatError> for Outcome {
    fn from(value: FormatError) -> Self {
        match value {
            FormatError::NotRiff => Outcome::SkippedNotRiff,
            FormatError::NotWave => Outcome::SkippedNotWave,
        }
    }
}

#[cfg(feature = "colored")]
impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Rewritten {
                removed,
                bytes_saved,
            } => write!(
                f,
                "{} ({} INFO list(s), {} bytes)",
                self.category().green().bold(),
                removed,
                bytes_saved
            ),
            Outcome::Unchanged => write!(f, "{}", self.category().white()),
            _ => write!(f, "{}", self.category().yellow()),
        }
    }
}

#[cfg(not(feature = "colored"))]
impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Rewritten {
                removed,
                bytes_saved,
            } => write!(
                f,
                "{} ({} INFO list(s), {} bytes)",
                self.category(),
                removed,
                bytes_saved
            ),
            _ => write!(f, "{}", self.category()),
        }
    }
}
