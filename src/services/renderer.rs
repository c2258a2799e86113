//! Template rendering against the merged context.

use std::fs;
use std::path::{Path, PathBuf};

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::{AppError, RenderContext, TEMPLATES, TemplateSpec};
use crate::services::assets;

/// Render every applicable template into `output_dir`.
///
/// Returns the written file paths in render order. The first write failure
/// aborts the run; files written before it remain on disk.
pub fn render_all(context: &RenderContext, output_dir: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    let mut written = Vec::new();
    for spec in TEMPLATES.iter().filter(|spec| spec.applies(context)) {
        let rendered = render_one(&env, spec, context)?;
        let path = output_dir.join(spec.output_file_name(&context.name));
        fs::write(&path, rendered)?;
        written.push(path);
    }

    Ok(written)
}

fn render_one(
    env: &Environment,
    spec: &TemplateSpec,
    context: &RenderContext,
) -> Result<String, AppError> {
    let source = assets::template_source(spec.source).ok_or_else(|| AppError::Render {
        template: spec.id.to_string(),
        details: format!("missing embedded template {}", spec.source),
    })?;

    env.render_str(source, context).map_err(|err| AppError::Render {
        template: spec.id.to_string(),
        details: err.to_string(),
    })
}
