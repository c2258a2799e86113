mod console;
mod git_log;
mod resolvers;
mod setup_py;

pub use console::{ConsoleFieldResolver, ConsoleOverwritePrompt};
pub use git_log::GitLogHistorySource;
pub use resolvers::{ChainFieldResolver, FailFastFieldResolver, MapFieldResolver, StaticOverwrite};
pub use setup_py::SetupPyMetadataSource;
