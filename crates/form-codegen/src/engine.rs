use handlebars::Handlebars;
use serde_json::Value;

use crate::EmitError;

/// Handlebars registry preloaded with the emitter scaffold templates.
///
/// Scaffolds carry only placeholders and plain target-format text; the
/// brace-heavy script bodies are assembled in Rust and injected through
/// triple-stash slots so handlebars never re-parses them.
pub struct TemplateEngine {
    registry: Handlebars<'static>,
}

impl TemplateEngine {
    pub fn new() -> Result<Self, EmitError> {
        let mut registry = Handlebars::new();
        registry.register_template_string(
            "react_component",
            include_str!("../templates/react_component.hbs"),
        )?;
        registry.register_template_string(
            "typescript_component",
            include_str!("../templates/typescript_component.hbs"),
        )?;
        registry.register_template_string(
            "html_document",
            include_str!("../templates/html_document.hbs"),
        )?;
        Ok(Self { registry })
    }

    pub fn render(&self, template: &str, data: &Value) -> Result<String, EmitError> {
        Ok(self.registry.render(template, data)?)
    }
}
