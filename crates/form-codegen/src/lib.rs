#![allow(missing_docs)]

//! Code emitters: each backend turns a [`FormSpec`] into standalone source
//! text that re-implements the visibility evaluator's semantics in its
//! target format. Output is a pure function of the spec; no live answers
//! are consumed here.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

use form_spec::spec::condition::{Condition, ConditionAction, ConditionOperator};
use form_spec::spec::form::FormSpec;

mod engine;
mod html;
mod jsx;
mod react;
mod typescript;

pub use engine::TemplateEngine;

/// Supported export stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    ReactTailwind,
    TypescriptTailwind,
    HtmlCss,
}

impl Target {
    pub const ALL: [Target; 3] = [
        Target::ReactTailwind,
        Target::TypescriptTailwind,
        Target::HtmlCss,
    ];

    /// Conventional file name for an exported artifact.
    pub fn file_name(&self) -> &'static str {
        match self {
            Target::ReactTailwind => "form.jsx",
            Target::TypescriptTailwind => "form.tsx",
            Target::HtmlCss => "form.html",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Target::ReactTailwind => "react-tailwind",
            Target::TypescriptTailwind => "typescript-tailwind",
            Target::HtmlCss => "html-css",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for Target {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "react-tailwind" | "react" | "jsx" => Ok(Target::ReactTailwind),
            "typescript-tailwind" | "typescript" | "tsx" => Ok(Target::TypescriptTailwind),
            "html-css" | "html" => Ok(Target::HtmlCss),
            _ => Err(format!("unknown target '{}'", value)),
        }
    }
}

/// Failures raised while preparing or rendering scaffold templates.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error("template registration failed: {0}")]
    Template(#[from] handlebars::TemplateError),
    #[error("template render failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Emit one artifact with a freshly prepared engine.
pub fn emit(target: Target, spec: &FormSpec) -> Result<String, EmitError> {
    let engine = TemplateEngine::new()?;
    emit_with(&engine, target, spec)
}

/// Emit one artifact, reusing an engine across calls.
pub fn emit_with(
    engine: &TemplateEngine,
    target: Target,
    spec: &FormSpec,
) -> Result<String, EmitError> {
    match target {
        Target::ReactTailwind => react::emit(engine, spec),
        Target::TypescriptTailwind => typescript::emit(engine, spec),
        Target::HtmlCss => html::emit(engine, spec),
    }
}

/// JSON-quote a string for embedding in emitted script, exactly as the
/// target language's own JSON serializer would.
pub(crate) fn js_string(text: &str) -> String {
    Value::String(text.to_owned()).to_string()
}

pub(crate) fn js_string_array<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    Value::Array(
        items
            .into_iter()
            .map(|item| Value::String(item.to_owned()))
            .collect(),
    )
    .to_string()
}

/// Predicate expression for one condition in the target script syntax.
///
/// Mirrors [`form_spec::condition_met`] exactly: strict equality, string-only
/// containment, and float comparisons that degrade to false instead of
/// failing on absent or malformed operands.
pub(crate) fn condition_guard(condition: &Condition) -> String {
    let source = format!("formData[{}]", js_string(&condition.field_id));
    let literal = js_string(&condition.value);
    match condition.operator {
        ConditionOperator::Equals => format!("{} === {}", source, literal),
        ConditionOperator::NotEquals => format!("{} !== {}", source, literal),
        ConditionOperator::Contains => format!(
            "typeof {} === \"string\" && {}.includes({})",
            source, source, literal
        ),
        ConditionOperator::GreaterThan => format!(
            "parseFloat(String({})) > parseFloat({})",
            source, literal
        ),
        ConditionOperator::LessThan => format!(
            "parseFloat(String({})) < parseFloat({})",
            source, literal
        ),
    }
}

/// The `if` block applying one condition to the working visibility list.
pub(crate) fn condition_block(condition: &Condition, list: &str, indent: &str) -> String {
    let apply = match condition.action {
        ConditionAction::Show => "showField",
        ConditionAction::Hide => "hideField",
    };
    format!(
        "{indent}if ({guard}) {{\n{indent}  {apply}({list}, {target});\n{indent}}}\n",
        indent = indent,
        guard = condition_guard(condition),
        apply = apply,
        list = list,
        target = js_string(&condition.target_field_id),
    )
}
