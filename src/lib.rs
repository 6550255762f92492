//! # WavStrip
//!
//! WavStrip removes embedded metadata from WAV files. It reads a RIFF/WAVE container, drops every
//! `LIST` chunk whose list type is `INFO` (title, artist, encoder tags and so on) and writes back a
//! byte-valid container with a corrected RIFF size field. All other chunks are copied verbatim.
//!
//! ## Core Features
//!
//! - **Single pass rewrite**: the container is walked once, chunk by chunk, into an append-only output buffer.
//! - **Exact output**: odd-sized chunks keep their zero padding byte and the RIFF size always equals the output length less 8.
//! - **Safe replacement**: files are rewritten in memory and replaced atomically, only when something was removed.
//! - **Skips, not failures**: files that are not RIFF/WAVE are reported and left untouched.
//!
//! - **Optional Features**:
//!   - `colored`: Coloured `Display` output
//!   - `logging`: Detailed operation logging through the `log` crate
//!   - `cli`: The `wavstrip` binary
//!
//! ## Quick Examples
//!
//! ### Rewriting a buffer
//!
//! ```no_run
//! use wavstrip::rewrite;
//!
//! let input = std::fs::read("click.wav")?;
//! let rewrite = rewrite(&input)?;
//! println!("Removed {} INFO list(s)", rewrite.removed());
//! ```
//!
//! ### Stripping a directory
//!
//! ```no_run
//! use wavstrip::{find_wav_files, strip_all, StripOptions};
//!
//! let options = StripOptions::new().recursive(true);
//! let files = find_wav_files("./data", options.recursive)?;
//! let report = strip_all(&files, &options)?;
//! println!("{} rewritten, {} unchanged", report.rewritten(), report.unchanged());
//! ```
//!
//! ## Error Handling
//!
//! WavStrip uses the `StripResult<T>` type alias for operations that can fail:
//!
//! ```no_run
//! pub type StripResult<T> = Result<T, StripError>;
//! ```
//!
//! Common error cases include:
//! - Input that is not RIFF/WAVE (``FormatError``), which callers treat as a skip
//! - Chunks declaring more data than the file holds (``StripError::TruncatedChunk``)
//! - I/O errors during reading/writing
//!
pub mod batch;
pub mod chunks;
pub mod discover;
pub mod error;
pub mod header;
pub mod io;
pub mod iter;
pub mod options;
pub mod outcome;
pub mod rewrite;

#[cfg(test)]
pub(crate) mod test_wav;

pub use crate::batch::{strip_all, BatchReport};
pub use crate::chunks::{ChunkHeader, ChunkIdentifier, ListChunk, DATA, FMT, INFO, LIST, RIFF, WAVE};
pub use crate::discover::{find_wav_files, is_wav};
pub use crate::error::{FormatError, StripError, StripResult};
pub use crate::header::{check_container, RiffHeader};
pub use crate::io::strip_file;
pub use crate::iter::{ChunkIter, RawChunk};
pub use crate::options::{ErrorPolicy, StripOptions};
pub use crate::outcome::Outcome;
pub use crate::rewrite::{rewrite, Rewrite};

/// A macro for logging messages if the logging feature is enabled.
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        #[cfg(feature = "logging")]
        log::log!($level, $($arg)+);
    };
}
