use std::path::Path;

use crate::domain::AppError;

/// Strategy for confirming replacement of an existing debian directory.
pub trait OverwritePrompt {
    /// Return true to replace the directory, false to keep it.
    fn confirm_replace(&self, dir: &Path) -> Result<bool, AppError>;
}

impl<T: OverwritePrompt + ?Sized> OverwritePrompt for Box<T> {
    fn confirm_replace(&self, dir: &Path) -> Result<bool, AppError> {
        (**self).confirm_replace(dir)
    }
}
