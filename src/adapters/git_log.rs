//! History source backed by the git CLI.

use std::io;
use std::path::Path;
use std::process::Command;

use crate::domain::AppError;
use crate::ports::HistorySource;

#[derive(Debug, Clone, Copy, Default)]
pub struct GitLogHistorySource;

impl HistorySource for GitLogHistorySource {
    fn latest_commit_summary(&self, root: &Path) -> Result<String, AppError> {
        let output = Command::new("git")
            .args(["log", "-1", "--oneline"])
            .current_dir(root)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => AppError::GitNotInstalled,
                _ => AppError::GitError(e.to_string()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::GitError(if stderr.is_empty() {
                "Unknown error".to_string()
            } else {
                stderr
            }));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
