//! Flat key-value context fed into template rendering.

use serde::Serialize;

/// String setuptools emits for a field the project never defined.
pub const UNKNOWN: &str = "UNKNOWN";

/// Default Debian compatibility level.
pub const DEFAULT_COMPAT: u32 = 9;

/// Fields that must hold a real value before rendering begins.
pub const REQUIRED_FIELDS: [&str; 6] =
    ["name", "version", "maintainer", "maintainer_email", "description", "latest_git_commit"];

/// Merged template context for one generation run.
///
/// Built once per invocation and never persisted. Every field the templates
/// reference is present here so rendering can use strict undefined behavior.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    pub name: String,
    pub version: String,
    pub maintainer: String,
    pub maintainer_email: String,
    pub description: String,
    /// One-line summary of the most recent commit.
    pub latest_git_commit: String,
    pub compat: u32,
    /// Generation timestamp in Debian changelog format.
    pub date: String,
    /// Target interpreter version for generated dependency constraints.
    pub python_version: String,
    /// Extra options appended to the dh --with python-virtualenv invocation.
    pub dh_virtualenv_options: String,
    /// Commands embedded in the generated postinst maintainer script.
    pub postinst_commands: String,
    /// Bare program names of declared executables, in declaration order.
    pub scripts: Vec<String>,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: String::new(),
            maintainer: String::new(),
            maintainer_email: String::new(),
            description: String::new(),
            latest_git_commit: String::new(),
            compat: DEFAULT_COMPAT,
            date: String::new(),
            python_version: "2.7".to_string(),
            dh_virtualenv_options: String::new(),
            postinst_commands: String::new(),
            scripts: Vec::new(),
        }
    }
}

impl RenderContext {
    /// Whether a field value counts as missing.
    pub fn is_unset(value: &str) -> bool {
        let value = value.trim();
        value.is_empty() || value == UNKNOWN
    }

    /// Look up a required field by name.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => Some(&self.name),
            "version" => Some(&self.version),
            "maintainer" => Some(&self.maintainer),
            "maintainer_email" => Some(&self.maintainer_email),
            "description" => Some(&self.description),
            "latest_git_commit" => Some(&self.latest_git_commit),
            _ => None,
        }
    }

    /// Replace a required field by name. Returns false for unknown names.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "name" => &mut self.name,
            "version" => &mut self.version,
            "maintainer" => &mut self.maintainer,
            "maintainer_email" => &mut self.maintainer_email,
            "description" => &mut self.description,
            "latest_git_commit" => &mut self.latest_git_commit,
            _ => return false,
        };
        *slot = value;
        true
    }

    /// Names of required fields that are still empty or UNKNOWN.
    pub fn unset_required_fields(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .into_iter()
            .filter(|field| self.field(field).is_none_or(Self::is_unset))
            .collect()
    }
}
