use serde_json::json;

use form_spec::spec::condition::Condition;
use form_spec::spec::field::{FieldType, FormField};
use form_spec::spec::form::{FormSpec, FormTheme};

use crate::engine::TemplateEngine;
use crate::{EmitError, condition_block, js_string_array};

/// Plain-markup backend: one HTML document with embedded CSS and a script
/// that re-runs the visibility fold on every input change.
pub(crate) fn emit(engine: &TemplateEngine, spec: &FormSpec) -> Result<String, EmitError> {
    let data = json!({
        "title": spec.settings.title,
        "styles": styles(spec.settings.theme),
        "description_html": description_block(&spec.settings.description),
        "fields_html": fields_html(&spec.fields),
        "submit_label": spec.settings.submit_button_text,
        "success_message": spec.settings.success_message,
        "script": script(spec),
    });
    engine.render("html_document", &data)
}

fn description_block(description: &str) -> String {
    if description.is_empty() {
        String::new()
    } else {
        format!(
            "    <p class=\"form-description\">{}</p>\n",
            escape_text(description)
        )
    }
}

fn fields_html(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|field| {
            format!(
                "    <div class=\"form-group\" id=\"{id}-container\">\n      <label for=\"{id}\">{label}</label>\n{control}    </div>\n",
                id = escape_attr(&field.id),
                label = escape_text(&field.label),
                control = control_html(field),
            )
        })
        .collect()
}

fn control_html(field: &FormField) -> String {
    let id = escape_attr(&field.id);
    let required = if field.required { " required" } else { "" };
    match field.kind {
        FieldType::Text => format!(
            "      <input type=\"text\" id=\"{id}\" name=\"{id}\"{required}>\n",
        ),
        FieldType::TextArea => format!(
            "      <textarea id=\"{id}\" name=\"{id}\"{required}></textarea>\n",
        ),
        FieldType::Checkbox => format!(
            "      <input type=\"checkbox\" id=\"{id}\" name=\"{id}\"{required}>\n",
        ),
        FieldType::Radio => {
            let mut block = String::new();
            for (index, option) in field.option_values().iter().enumerate() {
                block.push_str(&format!(
                    "      <label>\n        <input type=\"radio\" id=\"{id}-{index}\" name=\"{id}\" value=\"{value}\"{required}>\n        {text}\n      </label>\n",
                    value = escape_attr(option),
                    text = escape_text(option),
                ));
            }
            block
        }
        FieldType::Select => {
            let mut block = format!(
                "      <select id=\"{id}\" name=\"{id}\"{required}>\n        <option value=\"\">Select an option</option>\n",
            );
            for option in field.option_values() {
                block.push_str(&format!(
                    "        <option value=\"{value}\">{text}</option>\n",
                    value = escape_attr(option),
                    text = escape_text(option),
                ));
            }
            block.push_str("      </select>\n");
            block
        }
        FieldType::File => format!(
            "      <input type=\"file\" id=\"{id}\" name=\"{id}\"{required}>\n",
        ),
        FieldType::Rating => {
            let mut block = String::from("      <div class=\"rating\">\n");
            for step in 1..=field.rating_scale() {
                block.push_str(&format!(
                    "        <input type=\"radio\" id=\"{id}-{step}\" name=\"{id}\" value=\"{step}\"{required}>\n        <label for=\"{id}-{step}\">★</label>\n",
                ));
            }
            block.push_str("      </div>\n");
            block
        }
        FieldType::Integer => {
            let min = field
                .min
                .map(|min| format!(" min=\"{}\"", min))
                .unwrap_or_default();
            let max = field
                .max
                .map(|max| format!(" max=\"{}\"", max))
                .unwrap_or_default();
            format!(
                "      <input type=\"number\" id=\"{id}\" name=\"{id}\"{min}{max}{required}>\n",
            )
        }
        FieldType::Date => format!(
            "      <input type=\"date\" id=\"{id}\" name=\"{id}\"{required}>\n",
        ),
    }
}

fn script(spec: &FormSpec) -> String {
    let mut body = String::from("  <script>\n    const formData = {};\n");
    body.push_str(&format!(
        "    const allFieldIds = {};\n",
        js_string_array(spec.field_ids())
    ));

    if !spec.conditions.is_empty() {
        body.push_str(&visibility_functions(&spec.conditions));
    }

    body.push_str("\n    function handleInputChange(event) {\n      const { name, value, type, checked } = event.target;\n      formData[name] = type === \"checkbox\" ? checked : value;\n");
    if !spec.conditions.is_empty() {
        body.push_str("      applyVisibility();\n");
    }
    body.push_str("    }\n");

    body.push_str(
        "\n    document.querySelectorAll(\"input, textarea, select\").forEach((element) => {\n      element.addEventListener(\"input\", handleInputChange);\n      element.addEventListener(\"change\", handleInputChange);\n    });\n",
    );
    body.push_str(
        "\n    document.getElementById(\"generated-form\").addEventListener(\"submit\", (event) => {\n      event.preventDefault();\n      document.getElementById(\"generated-form\").hidden = true;\n      document.getElementById(\"success-message\").hidden = false;\n    });\n",
    );
    if !spec.conditions.is_empty() {
        body.push_str("\n    applyVisibility();\n");
    }
    body.push_str("  </script>");
    body
}

fn visibility_functions(conditions: &[Condition]) -> String {
    let mut block = String::from(
        "\n    function showField(list, id) {\n      if (!list.includes(id)) {\n        list.push(id);\n      }\n    }\n\n    function hideField(list, id) {\n      const index = list.indexOf(id);\n      if (index > -1) {\n        list.splice(index, 1);\n      }\n    }\n",
    );

    block.push_str("\n    function computeVisibleFields() {\n      const visible = allFieldIds.slice();\n");
    for condition in conditions {
        block.push_str(&condition_block(condition, "visible", "      "));
    }
    block.push_str("      return visible;\n    }\n");

    block.push_str(
        "\n    function applyVisibility() {\n      const visible = computeVisibleFields();\n      for (const id of allFieldIds) {\n        const container = document.getElementById(id + \"-container\");\n        if (container) {\n          container.style.display = visible.includes(id) ? \"\" : \"none\";\n        }\n      }\n    }\n",
    );
    block
}

fn styles(theme: FormTheme) -> String {
    let (page_background, form_background, text_color, border_color) = match theme {
        FormTheme::Light => ("#f4f4f4", "#ffffff", "#111827", "#d1d5db"),
        FormTheme::Dark => ("#111827", "#1f2937", "#f9fafb", "#4b5563"),
    };
    format!(
        r#"    body {{
      font-family: Arial, sans-serif;
      line-height: 1.6;
      margin: 0;
      padding: 20px;
      background-color: {page_background};
      color: {text_color};
    }}
    form {{
      max-width: 500px;
      margin: 0 auto;
      background-color: {form_background};
      padding: 20px;
      border-radius: 5px;
      box-shadow: 0 0 10px rgba(0, 0, 0, 0.1);
    }}
    .form-group {{
      margin-bottom: 20px;
    }}
    .form-description {{
      margin-top: 0;
    }}
    label {{
      display: block;
      margin-bottom: 5px;
    }}
    input[type="text"], input[type="number"], input[type="date"], textarea, select {{
      width: 100%;
      padding: 8px;
      border: 1px solid {border_color};
      border-radius: 4px;
      box-sizing: border-box;
    }}
    .rating {{
      display: flex;
      gap: 4px;
    }}
    .rating label {{
      display: inline;
    }}
    #success-message {{
      max-width: 500px;
      margin: 0 auto;
      font-size: 1.25rem;
    }}
    button {{
      background-color: #4CAF50;
      color: white;
      padding: 10px 15px;
      border: none;
      border-radius: 4px;
      cursor: pointer;
    }}
    button:hover {{
      background-color: #45a049;
    }}"#,
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}
