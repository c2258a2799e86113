//! Metadata source that shells out to the project's setup.py.

use std::io;
use std::path::Path;
use std::process::Command;

use crate::domain::{AppError, ProjectMetadata, entry_point_name};
use crate::ports::MetadataSource;

/// Helper program that stubs out `setup()` and prints the declared
/// executables, one per line: console entry points as `name = target`,
/// plain scripts as their declared paths.
const ENTRY_POINT_PROBE: &str = r#"
import sys

def _report(**kwargs):
    entry_points = kwargs.get("entry_points") or {}
    if isinstance(entry_points, dict):
        for entry in entry_points.get("console_scripts") or []:
            print(entry)
    for path in kwargs.get("scripts") or []:
        print(path)

try:
    import setuptools
    setuptools.setup = _report
except ImportError:
    pass
try:
    import distutils.core
    distutils.core.setup = _report
except ImportError:
    pass

source = open(sys.argv[1]).read()
exec(compile(source, sys.argv[1], "exec"), {"__name__": "__main__", "__file__": sys.argv[1]})
"#;

#[derive(Debug, Clone)]
pub struct SetupPyMetadataSource {
    interpreter: String,
}

impl Default for SetupPyMetadataSource {
    fn default() -> Self {
        Self { interpreter: "python".to_string() }
    }
}

impl SetupPyMetadataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific Python interpreter instead of `python` from the PATH.
    pub fn with_interpreter(interpreter: impl Into<String>) -> Self {
        Self { interpreter: interpreter.into() }
    }

    fn run(&self, root: &Path, args: &[&str]) -> Result<String, AppError> {
        let command_line = format!("{} {}", self.interpreter, args.join(" "));

        let output =
            Command::new(&self.interpreter).args(args).current_dir(root).output().map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    AppError::config_error(format!(
                        "Please install {} to read setup.py metadata",
                        self.interpreter
                    ))
                } else {
                    AppError::DescriptorError { command: command_line.clone(), details: e.to_string() }
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::DescriptorError {
                command: command_line,
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn declared_scripts(&self, root: &Path) -> Result<Vec<String>, AppError> {
        let stdout = self.run(root, &["-c", ENTRY_POINT_PROBE, "setup.py"])?;
        Ok(stdout.lines().filter_map(entry_point_name).collect())
    }
}

impl MetadataSource for SetupPyMetadataSource {
    fn project_metadata(&self, root: &Path) -> Result<ProjectMetadata, AppError> {
        if !root.join("setup.py").exists() {
            return Err(AppError::DescriptorNotFound(root.to_path_buf()));
        }

        // setup.py prints one value per queried field, in argument order
        let stdout = self.run(
            root,
            &["setup.py", "--name", "--version", "--maintainer", "--maintainer-email", "--description"],
        )?;
        let mut lines = stdout.lines();
        let mut next = || lines.next().unwrap_or_default().trim().to_string();

        let mut metadata = ProjectMetadata {
            name: next(),
            version: next(),
            maintainer: next(),
            maintainer_email: next(),
            description: next(),
            scripts: Vec::new(),
        };
        metadata.scripts = self.declared_scripts(root)?;

        Ok(metadata)
    }
}
