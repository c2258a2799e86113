use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for make-deb operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No setup.py at the project root.
    #[error("Failed to find setup.py in {}", .0.display())]
    DescriptorNotFound(PathBuf),

    /// setup.py invocation failed.
    #[error("Failed to query setup.py running '{command}': {details}")]
    DescriptorError { command: String, details: String },

    /// git is not on the PATH.
    #[error("Please install git")]
    GitNotInstalled,

    /// Git execution failed.
    #[error("Unknown error occurred when invoking git: {0}")]
    GitError(String),

    /// A required context field could not be resolved.
    #[error("The '{0}' parameter is not defined in setup.py and no value was supplied")]
    MissingField(String),

    /// Operator declined to replace an existing debian directory.
    #[error("Not removing debian directory")]
    OverwriteDeclined,

    /// Template rendering failed.
    #[error("Failed to render template {template}: {details}")]
    Render { template: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
