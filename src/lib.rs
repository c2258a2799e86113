//! make-deb: generate Debian packaging files from setup.py metadata and git history.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::collections::HashMap;
use std::path::Path;

use adapters::{
    ChainFieldResolver, ConsoleFieldResolver, ConsoleOverwritePrompt, FailFastFieldResolver,
    GitLogHistorySource, MapFieldResolver, SetupPyMetadataSource, StaticOverwrite,
};
use app::{AppContext, commands::generate};

pub use app::commands::generate::{GenerateOptions, GenerateReport};
pub use domain::AppError;
pub use ports::{FieldResolver, HistorySource, MetadataSource, OverwritePrompt};

/// Behaviour toggles for a CLI invocation.
#[derive(Debug, Clone, Default)]
pub struct RunSettings {
    /// Pre-supplied answers for missing required fields.
    pub fields: HashMap<String, String>,
    /// Never prompt; missing fields and existing output become hard errors.
    pub non_interactive: bool,
    /// Replace an existing debian directory without asking.
    pub assume_yes: bool,
}

/// Generate the `debian/` configuration directory for the project at `root`.
///
/// Wires the shell-out adapters (setup.py, git) together with the resolution
/// strategies selected by `settings` and runs the generate command.
pub fn generate(
    root: &Path,
    options: &GenerateOptions,
    settings: &RunSettings,
) -> Result<GenerateReport, AppError> {
    let fallback: Box<dyn FieldResolver> = if settings.non_interactive {
        Box::new(FailFastFieldResolver)
    } else {
        Box::new(ConsoleFieldResolver)
    };
    let resolver =
        ChainFieldResolver::new(MapFieldResolver::new(settings.fields.clone()), fallback);

    let prompt: Box<dyn OverwritePrompt> = if settings.assume_yes {
        Box::new(StaticOverwrite(true))
    } else if settings.non_interactive {
        Box::new(StaticOverwrite(false))
    } else {
        Box::new(ConsoleOverwritePrompt)
    };

    let ctx = AppContext::new(SetupPyMetadataSource::new(), GitLogHistorySource, resolver, prompt);
    generate::execute(&ctx, root, options)
}
