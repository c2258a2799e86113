//! Project metadata read from the build descriptor.

/// Metadata fields a build descriptor provides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub name: String,
    pub version: String,
    pub maintainer: String,
    pub maintainer_email: String,
    pub description: String,
    /// Bare program names of declared executables, in declaration order.
    /// Duplicates are preserved as declared.
    pub scripts: Vec<String>,
}

/// Reduce a declared executable to a bare program name.
///
/// Handles both declaration styles: console entry points
/// (`make-deb = make_deb.cli:main`) and plain script paths (`bin/make-deb`).
pub fn entry_point_name(declaration: &str) -> Option<String> {
    let declaration = declaration.trim();
    if declaration.is_empty() {
        return None;
    }

    let name = match declaration.split_once('=') {
        Some((name, _target)) => name.trim(),
        None => declaration.rsplit(['/', '\\']).next().unwrap_or(declaration),
    };

    if name.is_empty() { None } else { Some(name.to_string()) }
}
