//! The generate command: gather metadata, complete the context, render.

use std::path::{Path, PathBuf};

use chrono::Local;

use crate::app::AppContext;
use crate::domain::{AppError, REQUIRED_FIELDS, RenderContext};
use crate::ports::{FieldResolver, HistorySource, MetadataSource, OverwritePrompt};
use crate::services::{output_dir, renderer};

/// Debian changelog timestamp format (RFC 2822 style).
const CHANGELOG_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Inputs carried from the CLI into the template context.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub python_version: Option<String>,
    pub dh_virtualenv_options: Option<String>,
    pub postinst_commands: Option<String>,
}

/// Outcome of a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    /// Written files in render order.
    pub files: Vec<PathBuf>,
}

/// Execute the generate command for the project at `root`.
pub fn execute<M, H, F, P>(
    ctx: &AppContext<M, H, F, P>,
    root: &Path,
    options: &GenerateOptions,
) -> Result<GenerateReport, AppError>
where
    M: MetadataSource,
    H: HistorySource,
    F: FieldResolver,
    P: OverwritePrompt,
{
    let context = build_context(ctx, root, options)?;
    let output_dir = output_dir::prepare(root, ctx.prompt())?;
    let files = renderer::render_all(&context, &output_dir)?;

    Ok(GenerateReport { output_dir, files })
}

fn build_context<M, H, F, P>(
    ctx: &AppContext<M, H, F, P>,
    root: &Path,
    options: &GenerateOptions,
) -> Result<RenderContext, AppError>
where
    M: MetadataSource,
    H: HistorySource,
    F: FieldResolver,
    P: OverwritePrompt,
{
    let metadata = ctx.metadata().project_metadata(root)?;
    let latest_git_commit = ctx.history().latest_commit_summary(root)?;

    let mut context = RenderContext {
        name: metadata.name,
        version: metadata.version,
        maintainer: metadata.maintainer,
        maintainer_email: metadata.maintainer_email,
        description: metadata.description,
        latest_git_commit,
        date: Local::now().format(CHANGELOG_DATE_FORMAT).to_string(),
        scripts: metadata.scripts,
        ..RenderContext::default()
    };

    if let Some(python_version) = &options.python_version {
        context.python_version = python_version.clone();
    }
    if let Some(dh_virtualenv_options) = &options.dh_virtualenv_options {
        context.dh_virtualenv_options = dh_virtualenv_options.clone();
    }
    if let Some(postinst_commands) = &options.postinst_commands {
        context.postinst_commands = postinst_commands.clone();
    }

    complete_required_fields(&mut context, ctx.resolver())?;
    Ok(context)
}

/// Ask the resolver for every required field still empty or UNKNOWN.
fn complete_required_fields<F: FieldResolver>(
    context: &mut RenderContext,
    resolver: &F,
) -> Result<(), AppError> {
    for field in REQUIRED_FIELDS {
        let unset = context.field(field).is_none_or(RenderContext::is_unset);
        if unset {
            let value = resolver.resolve_field(field)?;
            context.set_field(field, value);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    use crate::adapters::{FailFastFieldResolver, MapFieldResolver, StaticOverwrite};
    use crate::domain::ProjectMetadata;

    #[derive(Clone)]
    struct StaticMetadata(ProjectMetadata);

    impl MetadataSource for StaticMetadata {
        fn project_metadata(&self, _root: &Path) -> Result<ProjectMetadata, AppError> {
            Ok(self.0.clone())
        }
    }

    struct StaticHistory;

    impl HistorySource for StaticHistory {
        fn latest_commit_summary(&self, _root: &Path) -> Result<String, AppError> {
            Ok("abc1234 Add debian packaging".to_string())
        }
    }

    struct FailingHistory;

    impl HistorySource for FailingHistory {
        fn latest_commit_summary(&self, _root: &Path) -> Result<String, AppError> {
            Err(AppError::GitNotInstalled)
        }
    }

    fn full_metadata() -> ProjectMetadata {
        ProjectMetadata {
            name: "mypkg".to_string(),
            version: "1.2.3".to_string(),
            maintainer: "Nylas Team".to_string(),
            maintainer_email: "support@nylas.com".to_string(),
            description: "An example package".to_string(),
            scripts: Vec::new(),
        }
    }

    #[test]
    fn complete_metadata_never_consults_the_resolver() {
        let dir = tempfile::tempdir().unwrap();
        // Fail-fast resolver: any consultation would error the run.
        let ctx = AppContext::new(
            StaticMetadata(full_metadata()),
            StaticHistory,
            FailFastFieldResolver,
            StaticOverwrite(true),
        );

        let report = execute(&ctx, dir.path(), &GenerateOptions::default()).unwrap();
        assert_eq!(report.output_dir, dir.path().join("debian"));
        assert_eq!(report.files.len(), 5);
        assert!(dir.path().join("debian/control").exists());
        assert!(dir.path().join("debian/mypkg.triggers").exists());
    }

    #[test]
    fn missing_field_is_filled_from_the_resolver() {
        let dir = tempfile::tempdir().unwrap();
        let mut metadata = full_metadata();
        metadata.maintainer = "UNKNOWN".to_string();

        let mut resolver = MapFieldResolver::default();
        resolver.insert("maintainer", "Packaging Team");

        let ctx = AppContext::new(
            StaticMetadata(metadata),
            StaticHistory,
            resolver,
            StaticOverwrite(true),
        );

        execute(&ctx, dir.path(), &GenerateOptions::default()).unwrap();

        let control = fs::read_to_string(dir.path().join("debian/control")).unwrap();
        assert!(control.contains("Maintainer: Packaging Team"));
    }

    #[test]
    fn unresolvable_field_aborts_before_touching_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let mut metadata = full_metadata();
        metadata.version = String::new();

        let ctx = AppContext::new(
            StaticMetadata(metadata),
            StaticHistory,
            FailFastFieldResolver,
            StaticOverwrite(true),
        );

        let err = execute(&ctx, dir.path(), &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, AppError::MissingField(field) if field == "version"));
        assert!(!dir.path().join("debian").exists());
    }

    #[test]
    fn git_failure_aborts_before_touching_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = AppContext::new(
            StaticMetadata(full_metadata()),
            FailingHistory,
            FailFastFieldResolver,
            StaticOverwrite(true),
        );

        let err = execute(&ctx, dir.path(), &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, AppError::GitNotInstalled));
        assert!(!dir.path().join("debian").exists());
    }

    #[test]
    fn declined_overwrite_preserves_the_existing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let debian = dir.path().join("debian");
        fs::create_dir_all(&debian).unwrap();
        fs::write(debian.join("control"), "hand-written").unwrap();

        let ctx = AppContext::new(
            StaticMetadata(full_metadata()),
            StaticHistory,
            FailFastFieldResolver,
            StaticOverwrite(false),
        );

        let err = execute(&ctx, dir.path(), &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, AppError::OverwriteDeclined));
        assert_eq!(fs::read_to_string(debian.join("control")).unwrap(), "hand-written");
    }

    #[test]
    fn cli_options_reach_the_rendered_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut metadata = full_metadata();
        metadata.scripts = vec!["mycli".to_string()];

        let ctx = AppContext::new(
            StaticMetadata(metadata),
            StaticHistory,
            FailFastFieldResolver,
            StaticOverwrite(true),
        );

        let options = GenerateOptions {
            python_version: Some("3".to_string()),
            dh_virtualenv_options: Some("--preinstall wheel".to_string()),
            postinst_commands: Some("systemctl restart mypkg".to_string()),
        };
        let report = execute(&ctx, dir.path(), &options).unwrap();
        assert_eq!(report.files.len(), 7);

        let rules = fs::read_to_string(dir.path().join("debian/rules")).unwrap();
        assert!(rules.contains("--preinstall wheel"));
        let triggers = fs::read_to_string(dir.path().join("debian/mypkg.triggers")).unwrap();
        assert!(triggers.contains("python3"));
        assert!(dir.path().join("debian/mypkg.postinst").exists());
        assert!(dir.path().join("debian/mypkg.links").exists());
    }
}
