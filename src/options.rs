//! Options controlling how files are stripped.

/// What a batch does when a file fails with an error other than a format skip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Record the failure and move on to the next file.
    #[default]
    Continue,
    /// Stop the batch and return the error.
    Abort,
}

/// Options for ``strip_file`` and ``strip_all``.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StripOptions {
    /// Compute and report the rewrite without touching any file.
    pub dry_run: bool,
    /// Descend into sub-directories when discovering files.
    pub recursive: bool,
    pub error_policy: ErrorPolicy,
}

impl StripOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }
}
