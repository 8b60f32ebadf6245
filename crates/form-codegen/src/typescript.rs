use serde_json::json;

use form_spec::spec::field::{FieldType, FormField};
use form_spec::spec::form::FormSpec;

use crate::engine::TemplateEngine;
use crate::jsx;
use crate::{EmitError, js_string, js_string_array};

/// Statically-typed variant of the React backend: identical markup and
/// visibility logic, plus a generated value interface and annotated helpers.
pub(crate) fn emit(engine: &TemplateEngine, spec: &FormSpec) -> Result<String, EmitError> {
    let data = json!({
        "interfaces": value_interface(&spec.fields),
        "helpers": jsx::list_helpers(&spec.conditions, true),
        "all_field_ids": js_string_array(spec.field_ids()),
        "visibility_effect": jsx::visibility_effect(&spec.conditions),
        "form_classes": jsx::form_classes(spec.settings.theme),
        "title_jsx": jsx::jsx_text(&spec.settings.title),
        "description_jsx": jsx::description_block(&spec.settings),
        "form_fields": jsx::form_fields(&spec.fields),
        "submit_label_jsx": jsx::jsx_text(&spec.settings.submit_button_text),
        "success_message_jsx": jsx::jsx_text(&spec.settings.success_message),
    });
    engine.render("typescript_component", &data)
}

fn value_interface(fields: &[FormField]) -> String {
    let mut interface = String::from("interface FormValues {\n");
    for field in fields {
        interface.push_str(&format!(
            "  {}?: {};\n",
            js_string(&field.id),
            ts_type(field.kind)
        ));
    }
    interface.push('}');
    interface
}

/// Answer type each control produces in the emitted component. Number and
/// date inputs surface DOM string values; only ratings store numbers.
fn ts_type(kind: FieldType) -> &'static str {
    match kind {
        FieldType::Text
        | FieldType::TextArea
        | FieldType::Radio
        | FieldType::Select
        | FieldType::Integer
        | FieldType::Date => "string",
        FieldType::Checkbox => "boolean",
        FieldType::File => "File | null",
        FieldType::Rating => "number",
    }
}
