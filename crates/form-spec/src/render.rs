use serde_json::{Map, Value, json};

use crate::answers::AnswerSet;
use crate::spec::field::{FieldType, FormField};
use crate::spec::form::FormSpec;
use crate::visibility::resolve_visibility;

/// Status labels returned by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStatus {
    /// More input is required.
    NeedInput,
    /// All visible fields are filled.
    Complete,
}

impl RenderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderStatus::NeedInput => "need_input",
            RenderStatus::Complete => "complete",
        }
    }
}

/// Progress counters exposed to renderers.
#[derive(Debug, Clone)]
pub struct RenderProgress {
    pub answered: usize,
    pub total: usize,
}

/// Presentation-level description of one input control, dispatched from the
/// field type tag.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderControl {
    TextBox,
    MultilineText,
    Toggle,
    RadioGroup { options: Vec<String> },
    Dropdown { options: Vec<String> },
    FilePicker,
    RatingRow { max: u32 },
    NumberBox { min: Option<i64>, max: Option<i64> },
    DatePicker,
}

impl RenderControl {
    pub fn for_field(field: &FormField) -> Self {
        match field.kind {
            FieldType::Text => RenderControl::TextBox,
            FieldType::TextArea => RenderControl::MultilineText,
            FieldType::Checkbox => RenderControl::Toggle,
            FieldType::Radio => RenderControl::RadioGroup {
                options: field.option_values().to_vec(),
            },
            FieldType::Select => RenderControl::Dropdown {
                options: field.option_values().to_vec(),
            },
            FieldType::File => RenderControl::FilePicker,
            FieldType::Rating => RenderControl::RatingRow {
                max: field.rating_scale(),
            },
            FieldType::Integer => RenderControl::NumberBox {
                min: field.min,
                max: field.max,
            },
            FieldType::Date => RenderControl::DatePicker,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RenderControl::TextBox => "text_box",
            RenderControl::MultilineText => "multiline_text",
            RenderControl::Toggle => "toggle",
            RenderControl::RadioGroup { .. } => "radio_group",
            RenderControl::Dropdown { .. } => "dropdown",
            RenderControl::FilePicker => "file_picker",
            RenderControl::RatingRow { .. } => "rating_row",
            RenderControl::NumberBox { .. } => "number_box",
            RenderControl::DatePicker => "date_picker",
        }
    }
}

/// Describes a single field for render outputs.
#[derive(Debug, Clone)]
pub struct RenderField {
    pub id: String,
    pub label: String,
    pub kind: FieldType,
    pub required: bool,
    pub visible: bool,
    pub control: RenderControl,
    pub current_value: Option<Value>,
}

/// Collected payload used by both text and JSON renderers.
#[derive(Debug, Clone)]
pub struct RenderPayload {
    pub form_title: String,
    pub form_description: String,
    pub submit_button_text: String,
    pub success_message: String,
    pub status: RenderStatus,
    pub next_field_id: Option<String>,
    pub progress: RenderProgress,
    pub fields: Vec<RenderField>,
}

/// Build the renderer payload from the specification and current answers.
pub fn build_render_payload(spec: &FormSpec, answers: &AnswerSet) -> RenderPayload {
    let visibility = resolve_visibility(spec, answers);

    let fields = spec
        .fields
        .iter()
        .map(|field| RenderField {
            id: field.id.clone(),
            label: field.label.clone(),
            kind: field.kind,
            required: field.required,
            visible: visibility.contains(&field.id),
            control: RenderControl::for_field(field),
            current_value: answers.get(&field.id).cloned(),
        })
        .collect::<Vec<_>>();

    let total = fields.iter().filter(|field| field.visible).count();
    let answered = fields
        .iter()
        .filter(|field| field.visible && field.current_value.is_some())
        .count();
    let next_field_id = fields
        .iter()
        .find(|field| field.visible && field.current_value.is_none())
        .map(|field| field.id.clone());

    let status = if next_field_id.is_some() {
        RenderStatus::NeedInput
    } else {
        RenderStatus::Complete
    };

    RenderPayload {
        form_title: spec.settings.title.clone(),
        form_description: spec.settings.description.clone(),
        submit_button_text: spec.settings.submit_button_text.clone(),
        success_message: spec.settings.success_message.clone(),
        status,
        next_field_id,
        progress: RenderProgress { answered, total },
        fields,
    }
}

/// Render the payload as a structured JSON-friendly value.
pub fn render_json_ui(payload: &RenderPayload) -> Value {
    let fields = payload
        .fields
        .iter()
        .map(|field| {
            let mut map = Map::new();
            map.insert("id".into(), Value::String(field.id.clone()));
            map.insert("label".into(), Value::String(field.label.clone()));
            map.insert("control".into(), Value::String(field.control.label().into()));
            map.insert("required".into(), Value::Bool(field.required));
            map.insert("visible".into(), Value::Bool(field.visible));
            match &field.control {
                RenderControl::RadioGroup { options } | RenderControl::Dropdown { options } => {
                    map.insert(
                        "options".into(),
                        Value::Array(
                            options
                                .iter()
                                .map(|option| Value::String(option.clone()))
                                .collect(),
                        ),
                    );
                }
                RenderControl::RatingRow { max } => {
                    map.insert("maxRating".into(), json!(max));
                }
                RenderControl::NumberBox { min, max } => {
                    if let Some(min) = min {
                        map.insert("min".into(), json!(min));
                    }
                    if let Some(max) = max {
                        map.insert("max".into(), json!(max));
                    }
                }
                _ => {}
            }
            if let Some(current_value) = &field.current_value {
                map.insert("currentValue".into(), current_value.clone());
            }
            Value::Object(map)
        })
        .collect::<Vec<_>>();

    json!({
        "form_title": payload.form_title,
        "form_description": payload.form_description,
        "submit_button_text": payload.submit_button_text,
        "status": payload.status.as_str(),
        "next_field_id": payload.next_field_id,
        "progress": {
            "answered": payload.progress.answered,
            "total": payload.progress.total,
        },
        "fields": fields,
    })
}

/// Render the payload as human-friendly text.
pub fn render_text(payload: &RenderPayload) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Form: {}", payload.form_title));
    if !payload.form_description.is_empty() {
        lines.push(format!("Description: {}", payload.form_description));
    }
    lines.push(format!(
        "Status: {} ({}/{})",
        payload.status.as_str(),
        payload.progress.answered,
        payload.progress.total
    ));

    if let Some(next_field) = &payload.next_field_id {
        lines.push(format!("Next field: {}", next_field));
    } else {
        lines.push("All visible fields are answered.".to_string());
    }

    lines.push("Visible fields:".to_string());
    for field in payload.fields.iter().filter(|field| field.visible) {
        let mut entry = format!(" - {} ({}, {})", field.id, field.label, field.kind);
        if field.required {
            entry.push_str(" [required]");
        }
        if let Some(current_value) = &field.current_value {
            entry.push_str(&format!(" = {}", value_to_display(current_value)));
        }
        lines.push(entry);
    }

    lines.join("\n")
}

fn value_to_display(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(num) => num.to_string(),
        other => other.to_string(),
    }
}
