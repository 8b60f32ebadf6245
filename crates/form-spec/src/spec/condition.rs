use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Comparison applied to the source field's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub enum ConditionOperator {
    #[default]
    Equals,
    NotEquals,
    Contains,
    GreaterThan,
    LessThan,
}

impl ConditionOperator {
    pub const ALL: [ConditionOperator; 5] = [
        ConditionOperator::Equals,
        ConditionOperator::NotEquals,
        ConditionOperator::Contains,
        ConditionOperator::GreaterThan,
        ConditionOperator::LessThan,
    ];

    /// True when both operands are compared numerically.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ConditionOperator::GreaterThan | ConditionOperator::LessThan
        )
    }
}

impl fmt::Display for ConditionOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConditionOperator::Equals => "equals",
            ConditionOperator::NotEquals => "not equals",
            ConditionOperator::Contains => "contains",
            ConditionOperator::GreaterThan => "greater than",
            ConditionOperator::LessThan => "less than",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for ConditionOperator {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "equals" | "eq" | "==" => Ok(ConditionOperator::Equals),
            "not_equals" | "notequals" | "ne" | "!=" => Ok(ConditionOperator::NotEquals),
            "contains" => Ok(ConditionOperator::Contains),
            "greater_than" | "greaterthan" | "gt" | ">" => Ok(ConditionOperator::GreaterThan),
            "less_than" | "lessthan" | "lt" | "<" => Ok(ConditionOperator::LessThan),
            _ => Err(format!("unknown operator '{}'", value)),
        }
    }
}

/// Effect on the target field when the predicate holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConditionAction {
    #[default]
    Show,
    Hide,
}

impl fmt::Display for ConditionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionAction::Show => write!(f, "show"),
            ConditionAction::Hide => write!(f, "hide"),
        }
    }
}

impl std::str::FromStr for ConditionAction {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "show" => Ok(ConditionAction::Show),
            "hide" => Ok(ConditionAction::Hide),
            _ => Err(format!("unknown action '{}'", value)),
        }
    }
}

/// One visibility rule: if the source field's answer satisfies the operator
/// against the literal, show or hide the target field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub field_id: String,
    pub operator: ConditionOperator,
    /// Comparison literal, always stored as text.
    #[serde(default)]
    pub value: String,
    pub action: ConditionAction,
    pub target_field_id: String,
}

impl Condition {
    pub fn new(
        field_id: impl Into<String>,
        operator: ConditionOperator,
        value: impl Into<String>,
        action: ConditionAction,
        target_field_id: impl Into<String>,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            operator,
            value: value.into(),
            action,
            target_field_id: target_field_id.into(),
        }
    }
}
