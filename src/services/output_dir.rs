//! Output directory lifecycle: confirm, delete, recreate.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::OverwritePrompt;

/// Prepare `{root}/debian`, replacing an existing directory only with consent.
///
/// A declined replacement aborts the whole run and leaves the directory
/// untouched.
pub fn prepare<P: OverwritePrompt>(root: &Path, prompt: &P) -> Result<PathBuf, AppError> {
    let output_dir = root.join("debian");

    if output_dir.exists() {
        if !prompt.confirm_replace(&output_dir)? {
            return Err(AppError::OverwriteDeclined);
        }
        fs::remove_dir_all(&output_dir)?;
    }

    fs::create_dir_all(&output_dir)?;
    Ok(output_dir)
}
