use serde_json::json;

use form_spec::spec::form::FormSpec;

use crate::engine::TemplateEngine;
use crate::jsx;
use crate::{EmitError, js_string_array};

/// React component with local state, styled with Tailwind classes.
pub(crate) fn emit(engine: &TemplateEngine, spec: &FormSpec) -> Result<String, EmitError> {
    let data = json!({
        "helpers": jsx::list_helpers(&spec.conditions, false),
        "all_field_ids": js_string_array(spec.field_ids()),
        "visibility_effect": jsx::visibility_effect(&spec.conditions),
        "form_classes": jsx::form_classes(spec.settings.theme),
        "title_jsx": jsx::jsx_text(&spec.settings.title),
        "description_jsx": jsx::description_block(&spec.settings),
        "form_fields": jsx::form_fields(&spec.fields),
        "submit_label_jsx": jsx::jsx_text(&spec.settings.submit_button_text),
        "success_message_jsx": jsx::jsx_text(&spec.settings.success_message),
    });
    engine.render("react_component", &data)
}
