//! Interactive console strategies backed by dialoguer.

use std::path::Path;

use dialoguer::Input;

use crate::domain::{AppError, RenderContext};
use crate::ports::{FieldResolver, OverwritePrompt};

/// Prompts on the console until a usable value arrives. The loop has no
/// timeout and no cancellation; it ends only on valid input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleFieldResolver;

impl FieldResolver for ConsoleFieldResolver {
    fn resolve_field(&self, field: &str) -> Result<String, AppError> {
        loop {
            let value: String = Input::new()
                .with_prompt(format!(
                    "The '{field}' parameter is not defined in setup.py. \
                     Please define it for debian configuration"
                ))
                .allow_empty(true)
                .interact_text()
                .map_err(|e| AppError::config_error(format!("Prompt failed: {e}")))?;

            if RenderContext::is_unset(&value) {
                println!("Invalid value. Please try again");
                continue;
            }
            return Ok(value.trim().to_string());
        }
    }
}

/// Asks before replacing an existing debian directory. Only an explicit
/// `n`/`no` (case-insensitive) declines; any other answer confirms.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOverwritePrompt;

impl OverwritePrompt for ConsoleOverwritePrompt {
    fn confirm_replace(&self, _dir: &Path) -> Result<bool, AppError> {
        let answer: String = Input::new()
            .with_prompt("A debian directory exists. Replace it? [Y/n]")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AppError::config_error(format!("Prompt failed: {e}")))?;

        Ok(!matches!(answer.trim().to_lowercase().as_str(), "n" | "no"))
    }
}
