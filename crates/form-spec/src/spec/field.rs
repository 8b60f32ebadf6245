use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Closed set of input kinds a form can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub enum FieldType {
    #[default]
    Text,
    TextArea,
    Checkbox,
    Radio,
    Select,
    File,
    Rating,
    Integer,
    Date,
}

impl FieldType {
    /// Every variant, in presentation order.
    pub const ALL: [FieldType; 9] = [
        FieldType::Text,
        FieldType::TextArea,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::Select,
        FieldType::File,
        FieldType::Rating,
        FieldType::Integer,
        FieldType::Date,
    ];

    /// True for kinds rendered as one control per option.
    pub fn uses_options(&self) -> bool {
        matches!(self, FieldType::Radio | FieldType::Select)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldType::Text => "text",
            FieldType::TextArea => "textarea",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Select => "select",
            FieldType::File => "file",
            FieldType::Rating => "rating",
            FieldType::Integer => "integer",
            FieldType::Date => "date",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for FieldType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "text" | "string" => Ok(FieldType::Text),
            "textarea" | "multiline" => Ok(FieldType::TextArea),
            "checkbox" | "bool" | "boolean" => Ok(FieldType::Checkbox),
            "radio" => Ok(FieldType::Radio),
            "select" | "dropdown" => Ok(FieldType::Select),
            "file" => Ok(FieldType::File),
            "rating" => Ok(FieldType::Rating),
            "integer" | "int" | "number" => Ok(FieldType::Integer),
            "date" => Ok(FieldType::Date),
            _ => Err(format!("unknown field type '{}'", value)),
        }
    }
}

/// One logical input in the authored form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldType,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    /// Ordered option list; meaningful only for Radio and Select.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Lower bound for Integer inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    /// Upper bound for Integer inputs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    /// Number of rating steps; Rating only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rating: Option<u32>,
}

impl FormField {
    pub fn new(id: impl Into<String>, kind: FieldType, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            required: false,
            options: None,
            min: None,
            max: None,
            max_rating: None,
        }
    }

    /// Option list with an empty fallback for option-less fields.
    pub fn option_values(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }

    /// Effective rating scale. Unset ratings render five steps.
    pub fn rating_scale(&self) -> u32 {
        self.max_rating.unwrap_or(5)
    }
}
