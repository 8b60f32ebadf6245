use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ephemeral mapping from field id to the currently entered value.
///
/// Values are stored as JSON: strings for text, radio, select, date, and
/// file names, booleans for checkboxes, numbers for ratings and integers.
/// Never persisted by the library; the CLI wizard owns one per session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: Map<String, Value>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt an existing JSON object; non-objects yield an empty set.
    pub fn from_value(value: Value) -> Self {
        Self {
            values: value.as_object().cloned().unwrap_or_default(),
        }
    }

    pub fn set(&mut self, id: impl Into<String>, value: Value) {
        self.values.insert(id.into(), value);
    }

    pub fn clear(&mut self, id: &str) {
        self.values.remove(id);
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.values.get(id)
    }

    /// A field counts as answered once any value is present, even an empty
    /// string; the evaluator decides what the value means.
    pub fn is_answered(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.values.clone())
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.values)
    }
}

impl From<Map<String, Value>> for AnswerSet {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}
