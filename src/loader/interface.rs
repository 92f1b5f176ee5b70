use crate::error::Result;
use std::path::Path;

/// How a template is fetched into its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Clone every commit instead of only the checked-out tip.
    pub full_history: bool,
    /// Leave the template's `.git` directory in the new project.
    pub keep_git_dir: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { full_history: true, keep_git_dir: false }
    }
}

/// Trait for fetching a template into a destination directory.
///
/// One call is one outstanding download; nothing is retried.
pub trait Downloader {
    /// Fetches `reference` into `destination`, which must not exist yet.
    fn fetch(&self, reference: &str, destination: &Path, options: &FetchOptions) -> Result<()>;
}
