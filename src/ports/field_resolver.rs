use crate::domain::AppError;

/// Strategy for filling a required context field that is missing or UNKNOWN.
///
/// Implementations return a non-empty, non-sentinel value or an error. Any
/// retry loop (for interactive strategies) lives inside the implementation.
pub trait FieldResolver {
    fn resolve_field(&self, field: &str) -> Result<String, AppError>;
}

impl<T: FieldResolver + ?Sized> FieldResolver for Box<T> {
    fn resolve_field(&self, field: &str) -> Result<String, AppError> {
        (**self).resolve_field(field)
    }
}
