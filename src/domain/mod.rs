mod context;
mod error;
mod metadata;
mod template_table;

pub use context::{DEFAULT_COMPAT, REQUIRED_FIELDS, RenderContext, UNKNOWN};
pub use error::AppError;
pub use metadata::{ProjectMetadata, entry_point_name};
pub use template_table::{Condition, OutputName, TEMPLATES, TemplateSpec};
