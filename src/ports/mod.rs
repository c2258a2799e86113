mod field_resolver;
mod history_source;
mod metadata_source;
mod overwrite_prompt;

pub use field_resolver::FieldResolver;
pub use history_source::HistorySource;
pub use metadata_source::MetadataSource;
pub use overwrite_prompt::OverwritePrompt;
