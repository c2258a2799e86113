//! Shared testing utilities for make-deb CLI tests.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stub `python` answering both the metadata query and the entry point
/// probe from fixture files next to the stub. Only shell builtins are used
/// so the stub works with PATH confined to the stub directory.
const FAKE_PYTHON: &str = r#"#!/bin/sh
here="${0%/*}"
if [ "$1" = "-c" ]; then
    file="$here/scripts.txt"
else
    file="$here/setup_output.txt"
fi
[ -f "$file" ] || exit 0
while IFS= read -r line; do
    printf '%s\n' "$line"
done < "$file"
"#;

const FAKE_GIT: &str = r#"#!/bin/sh
printf 'abc1234 Add debian packaging\n'
"#;

/// Testing harness providing an isolated project and a stub-only PATH.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    project_dir: PathBuf,
    bin_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project_dir = root.path().join("project");
        fs::create_dir_all(&project_dir).expect("Failed to create test project directory");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create test bin directory");

        Self { root, project_dir, bin_dir }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Path to the generated debian directory.
    pub fn debian_dir(&self) -> PathBuf {
        self.project_dir.join("debian")
    }

    /// Drop a placeholder setup.py into the project; the stub interpreter
    /// never reads it, but the tool checks for its presence.
    pub fn write_setup_py(&self) {
        fs::write(self.project_dir.join("setup.py"), "# test fixture\n")
            .expect("Failed to write setup.py fixture");
    }

    /// Install a stub `python` answering with the given metadata lines
    /// (name, version, maintainer, maintainer_email, description) and raw
    /// executable declarations.
    pub fn install_fake_python(&self, metadata_lines: &[&str], script_lines: &[&str]) {
        fs::write(self.bin_dir.join("setup_output.txt"), format!("{}\n", metadata_lines.join("\n")))
            .expect("Failed to write setup output fixture");
        if script_lines.is_empty() {
            let _ = fs::remove_file(self.bin_dir.join("scripts.txt"));
        } else {
            fs::write(self.bin_dir.join("scripts.txt"), format!("{}\n", script_lines.join("\n")))
                .expect("Failed to write scripts fixture");
        }
        self.install_stub("python", FAKE_PYTHON);
    }

    pub fn install_fake_git(&self) {
        self.install_stub("git", FAKE_GIT);
    }

    fn install_stub(&self, name: &str, body: &str) {
        let path = self.bin_dir.join(name);
        fs::write(&path, body).expect("Failed to write stub executable");
        let mut perms = fs::metadata(&path).expect("Failed to stat stub").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to mark stub executable");
    }

    /// Build a command invoking the compiled `make-deb` binary inside the
    /// project directory, with PATH confined to the stub directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("make-deb").expect("Failed to locate make-deb binary");
        cmd.current_dir(&self.project_dir).env("PATH", &self.bin_dir);
        cmd
    }

    /// Read a generated file from the debian directory.
    pub fn read_debian_file(&self, name: &str) -> String {
        fs::read_to_string(self.debian_dir().join(name))
            .unwrap_or_else(|e| panic!("Failed to read debian/{name}: {e}"))
    }
}
