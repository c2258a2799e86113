use std::path::Path;

use crate::domain::AppError;

/// Capability for reading version-control history.
pub trait HistorySource {
    /// One-line summary of the most recent commit at `root`.
    fn latest_commit_summary(&self, root: &Path) -> Result<String, AppError>;
}
