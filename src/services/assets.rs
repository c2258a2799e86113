//! Embedded debian template sources.

use include_dir::{Dir, include_dir};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates/debian");

/// Embedded source text for a named template file, if present.
pub fn template_source(file_name: &str) -> Option<&'static str> {
    TEMPLATES_DIR.get_file(file_name).and_then(|file| file.contents_utf8())
}
