use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::spec::condition::Condition;
use crate::spec::field::FormField;

/// Presentation theme for rendered and emitted forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormTheme {
    #[default]
    Light,
    Dark,
}

impl std::str::FromStr for FormTheme {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "light" => Ok(FormTheme::Light),
            "dark" => Ok(FormTheme::Dark),
            _ => Err(format!("unknown theme '{}'", value)),
        }
    }
}

/// Form-level presentation settings. No interaction with visibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormSettings {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_submit_button_text")]
    pub submit_button_text: String,
    #[serde(default = "default_success_message")]
    pub success_message: String,
    #[serde(default)]
    pub theme: FormTheme,
}

fn default_title() -> String {
    "Untitled Form".into()
}

fn default_submit_button_text() -> String {
    "Submit".into()
}

fn default_success_message() -> String {
    "Thank you for your submission!".into()
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: String::new(),
            submit_button_text: default_submit_button_text(),
            success_message: default_success_message(),
            theme: FormTheme::default(),
        }
    }
}

/// Top-level form definition: settings plus ordered field and condition
/// sequences. Condition order is evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct FormSpec {
    #[serde(default)]
    pub settings: FormSettings,
    #[serde(default)]
    pub fields: Vec<FormField>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
}

impl FormSpec {
    pub fn field(&self, id: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.id == id)
    }

    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.id.as_str())
    }

    pub fn has_field(&self, id: &str) -> bool {
        self.fields.iter().any(|field| field.id == id)
    }
}
