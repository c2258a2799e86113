//! Data-driven table mapping debian templates to output naming rules.

use super::context::RenderContext;

/// How an output filename is derived from a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputName {
    /// Template name with the `.j2` suffix stripped.
    Fixed(&'static str),
    /// Composed as `{package_name}.{suffix}`.
    PackagePrefixed(&'static str),
}

/// When a template participates in a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Always,
    PostinstCommandsSet,
    ScriptsDeclared,
}

/// One row of the template table.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSpec {
    pub id: &'static str,
    pub source: &'static str,
    pub output: OutputName,
    pub condition: Condition,
}

/// Fixed, ordered set of debian configuration templates.
///
/// Package-prefixed rows come last: their output filenames depend on the
/// package name rather than the template name.
pub const TEMPLATES: [TemplateSpec; 7] = [
    TemplateSpec {
        id: "changelog",
        source: "changelog.j2",
        output: OutputName::Fixed("changelog"),
        condition: Condition::Always,
    },
    TemplateSpec {
        id: "compat",
        source: "compat.j2",
        output: OutputName::Fixed("compat"),
        condition: Condition::Always,
    },
    TemplateSpec {
        id: "control",
        source: "control.j2",
        output: OutputName::Fixed("control"),
        condition: Condition::Always,
    },
    TemplateSpec {
        id: "rules",
        source: "rules.j2",
        output: OutputName::Fixed("rules"),
        condition: Condition::Always,
    },
    TemplateSpec {
        id: "triggers",
        source: "triggers.j2",
        output: OutputName::PackagePrefixed("triggers"),
        condition: Condition::Always,
    },
    TemplateSpec {
        id: "postinst",
        source: "postinst.j2",
        output: OutputName::PackagePrefixed("postinst"),
        condition: Condition::PostinstCommandsSet,
    },
    TemplateSpec {
        id: "links",
        source: "links.j2",
        output: OutputName::PackagePrefixed("links"),
        condition: Condition::ScriptsDeclared,
    },
];

impl TemplateSpec {
    /// Output filename for this template under the debian directory.
    pub fn output_file_name(&self, package_name: &str) -> String {
        match self.output {
            OutputName::Fixed(name) => name.to_string(),
            OutputName::PackagePrefixed(suffix) => format!("{package_name}.{suffix}"),
        }
    }

    /// Whether this template should render for the given context.
    pub fn applies(&self, context: &RenderContext) -> bool {
        match self.condition {
            Condition::Always => true,
            Condition::PostinstCommandsSet => !context.postinst_commands.trim().is_empty(),
            Condition::ScriptsDeclared => !context.scripts.is_empty(),
        }
    }
}
