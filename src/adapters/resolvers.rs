//! Non-interactive field resolution and overwrite strategies.

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{AppError, RenderContext};
use crate::ports::{FieldResolver, OverwritePrompt};

/// Resolver answering from a pre-supplied name-to-value map.
#[derive(Debug, Clone, Default)]
pub struct MapFieldResolver {
    values: HashMap<String, String>,
}

impl MapFieldResolver {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }
}

impl FieldResolver for MapFieldResolver {
    fn resolve_field(&self, field: &str) -> Result<String, AppError> {
        match self.values.get(field) {
            Some(value) if !RenderContext::is_unset(value) => Ok(value.trim().to_string()),
            _ => Err(AppError::MissingField(field.to_string())),
        }
    }
}

/// Resolver that refuses to fill anything; used for non-interactive runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailFastFieldResolver;

impl FieldResolver for FailFastFieldResolver {
    fn resolve_field(&self, field: &str) -> Result<String, AppError> {
        Err(AppError::MissingField(field.to_string()))
    }
}

/// Tries a primary resolver, falling back to a second when the first has no
/// answer for the field.
#[derive(Debug, Clone)]
pub struct ChainFieldResolver<A, B> {
    first: A,
    second: B,
}

impl<A, B> ChainFieldResolver<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: FieldResolver, B: FieldResolver> FieldResolver for ChainFieldResolver<A, B> {
    fn resolve_field(&self, field: &str) -> Result<String, AppError> {
        match self.first.resolve_field(field) {
            Err(AppError::MissingField(_)) => self.second.resolve_field(field),
            result => result,
        }
    }
}

/// Fixed overwrite decision; used by `--yes` and in tests.
#[derive(Debug, Clone, Copy)]
pub struct StaticOverwrite(pub bool);

impl OverwritePrompt for StaticOverwrite {
    fn confirm_replace(&self, _dir: &Path) -> Result<bool, AppError> {
        Ok(self.0)
    }
}
