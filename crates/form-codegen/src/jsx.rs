//! JSX fragments shared by the React and TypeScript backends. The two
//! emitters differ only in type annotations; every rendered control and the
//! visibility effect are identical text.

use form_spec::spec::condition::Condition;
use form_spec::spec::field::{FieldType, FormField};
use form_spec::spec::form::{FormSettings, FormTheme};

use crate::{condition_block, js_string};

/// Literal JSX text expression: `{"label text"}`. Keeps arbitrary labels,
/// options, and messages verbatim without breaking the surrounding markup.
pub(crate) fn jsx_text(text: &str) -> String {
    format!("{{{}}}", js_string(text))
}

pub(crate) fn form_classes(theme: FormTheme) -> &'static str {
    match theme {
        FormTheme::Light => "space-y-6 bg-white text-gray-900 p-6 rounded-lg",
        FormTheme::Dark => "space-y-6 bg-gray-900 text-white p-6 rounded-lg",
    }
}

pub(crate) fn description_block(settings: &FormSettings) -> String {
    if settings.description.is_empty() {
        String::new()
    } else {
        format!(
            "      <p className=\"text-sm text-gray-500\">{}</p>\n",
            jsx_text(&settings.description)
        )
    }
}

/// The recompute effect: reset to every field id, apply each condition in
/// authored order, publish the result. Empty when the form has no
/// conditions, leaving the all-visible initial state in place.
pub(crate) fn visibility_effect(conditions: &[Condition]) -> String {
    if conditions.is_empty() {
        return String::new();
    }
    let mut effect = String::from("\n  useEffect(() => {\n    const next = [...ALL_FIELD_IDS];\n");
    for condition in conditions {
        effect.push_str(&condition_block(condition, "next", "    "));
    }
    effect.push_str("    setVisibleFields(next);\n  }, [formData]);");
    effect
}

pub(crate) fn list_helpers(conditions: &[Condition], typed: bool) -> String {
    if conditions.is_empty() {
        return String::new();
    }
    let (list_param, id_param) = if typed {
        ("list: string[]", "id: string")
    } else {
        ("list", "id")
    };
    format!(
        "\nfunction showField({list}, {id}) {{\n  if (!list.includes(id)) {{\n    list.push(id);\n  }}\n}}\n\nfunction hideField({list}, {id}) {{\n  const index = list.indexOf(id);\n  if (index > -1) {{\n    list.splice(index, 1);\n  }}\n}}\n",
        list = list_param,
        id = id_param,
    )
}

pub(crate) fn form_fields(fields: &[FormField]) -> String {
    fields.iter().map(field_block).collect()
}

fn field_block(field: &FormField) -> String {
    let id = js_string(&field.id);
    let required_mark = if field.required {
        "<span className=\"text-red-500 ml-1\">*</span>"
    } else {
        ""
    };
    format!(
        "      {{visibleFields.includes({id}) && (\n        <div className=\"mb-4\">\n          <label className=\"block text-sm font-medium\">{label}{mark}</label>\n{control}        </div>\n      )}}\n",
        id = id,
        label = jsx_text(&field.label),
        mark = required_mark,
        control = control_jsx(field),
    )
}

fn control_jsx(field: &FormField) -> String {
    let id = js_string(&field.id);
    let required = if field.required { " required" } else { "" };
    match field.kind {
        FieldType::Text => format!(
            "          <input type=\"text\" value={{formData[{id}] || ''}} onChange={{(e) => handleInputChange({id}, e.target.value)}}{required} className=\"mt-1 block w-full rounded-md border-gray-300 shadow-sm\" />\n",
        ),
        FieldType::TextArea => format!(
            "          <textarea value={{formData[{id}] || ''}} onChange={{(e) => handleInputChange({id}, e.target.value)}}{required} className=\"mt-1 block w-full rounded-md border-gray-300 shadow-sm\"></textarea>\n",
        ),
        FieldType::Checkbox => format!(
            "          <input type=\"checkbox\" checked={{formData[{id}] || false}} onChange={{(e) => handleInputChange({id}, e.target.checked)}}{required} className=\"rounded border-gray-300\" />\n",
        ),
        FieldType::Radio => {
            let mut block = String::from("          <div className=\"mt-1 space-y-2\">\n");
            for option in field.option_values() {
                let option = js_string(option);
                block.push_str(&format!(
                    "            <label className=\"inline-flex items-center\">\n              <input type=\"radio\" name={{{id}}} value={{{option}}} checked={{formData[{id}] === {option}}} onChange={{(e) => handleInputChange({id}, e.target.value)}}{required} className=\"mr-2\" />\n              <span className=\"ml-2\">{{{option}}}</span>\n            </label>\n",
                ));
            }
            block.push_str("          </div>\n");
            block
        }
        FieldType::Select => {
            let mut block = format!(
                "          <select value={{formData[{id}] || ''}} onChange={{(e) => handleInputChange({id}, e.target.value)}}{required} className=\"mt-1 block w-full rounded-md border-gray-300 shadow-sm\">\n            <option value=\"\">Select an option</option>\n",
            );
            for option in field.option_values() {
                let option = js_string(option);
                block.push_str(&format!(
                    "            <option value={{{option}}}>{{{option}}}</option>\n",
                ));
            }
            block.push_str("          </select>\n");
            block
        }
        FieldType::File => format!(
            "          <input type=\"file\" onChange={{(e) => handleInputChange({id}, e.target.files ? e.target.files[0] : null)}}{required} className=\"mt-1 block w-full text-sm\" />\n",
        ),
        FieldType::Rating => format!(
            "          <div className=\"flex items-center mt-1\">\n            {{[...Array({max})].map((_, index) => (\n              <button key={{index}} type=\"button\" onClick={{() => handleInputChange({id}, index + 1)}} className={{(formData[{id}] || 0) > index ? 'text-2xl text-yellow-400' : 'text-2xl text-gray-300'}}>\n                ★\n              </button>\n            ))}}\n          </div>\n",
            max = field.rating_scale(),
        ),
        FieldType::Integer => {
            let min = field
                .min
                .map(|min| format!(" min={{{}}}", min))
                .unwrap_or_default();
            let max = field
                .max
                .map(|max| format!(" max={{{}}}", max))
                .unwrap_or_default();
            format!(
                "          <input type=\"number\"{min}{max} value={{formData[{id}] || ''}} onChange={{(e) => handleInputChange({id}, e.target.value)}}{required} className=\"mt-1 block w-full rounded-md border-gray-300 shadow-sm\" />\n",
            )
        }
        FieldType::Date => format!(
            "          <input type=\"date\" value={{formData[{id}] || ''}} onChange={{(e) => handleInputChange({id}, e.target.value)}}{required} className=\"mt-1 block w-full rounded-md border-gray-300 shadow-sm\" />\n",
        ),
    }
}
