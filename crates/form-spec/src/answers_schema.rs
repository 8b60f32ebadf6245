use serde_json::{Map, Value, json};

use crate::spec::field::{FieldType, FormField};
use crate::spec::form::FormSpec;
use crate::visibility::VisibilitySet;

/// Generate a JSON Schema describing a valid answers object for the form,
/// scoped to the given visibility. Hidden fields keep their property schema
/// but are never required.
pub fn generate(spec: &FormSpec, visibility: &VisibilitySet) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();

    for field in &spec.fields {
        properties.insert(field.id.clone(), field_schema(field));
        if field.required && visibility.contains(&field.id) {
            required.push(Value::String(field.id.clone()));
        }
    }

    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": spec.settings.title,
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false,
    })
}

fn field_schema(field: &FormField) -> Value {
    let mut schema = Map::new();
    schema.insert("description".into(), Value::String(field.label.clone()));

    match field.kind {
        FieldType::Text | FieldType::TextArea | FieldType::File => {
            schema.insert("type".into(), Value::String("string".into()));
        }
        FieldType::Checkbox => {
            schema.insert("type".into(), Value::String("boolean".into()));
        }
        FieldType::Radio | FieldType::Select => {
            schema.insert("type".into(), Value::String("string".into()));
            let options = field.option_values();
            if !options.is_empty() {
                schema.insert(
                    "enum".into(),
                    Value::Array(
                        options
                            .iter()
                            .map(|option| Value::String(option.clone()))
                            .collect(),
                    ),
                );
            }
        }
        FieldType::Rating => {
            schema.insert("type".into(), Value::String("integer".into()));
            schema.insert("minimum".into(), json!(1));
            schema.insert("maximum".into(), json!(field.rating_scale()));
        }
        FieldType::Integer => {
            schema.insert("type".into(), Value::String("integer".into()));
            if let Some(min) = field.min {
                schema.insert("minimum".into(), json!(min));
            }
            if let Some(max) = field.max {
                schema.insert("maximum".into(), json!(max));
            }
        }
        FieldType::Date => {
            schema.insert("type".into(), Value::String("string".into()));
            schema.insert("format".into(), Value::String("date".into()));
        }
    }

    Value::Object(schema)
}
