use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::spec::field::FieldType;
use crate::spec::form::FormSpec;
use crate::visibility::parse_number;

static ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z][A-Za-z0-9_-]*$").expect("static pattern compiles"));

/// Advisory finding. Lint never blocks authoring, evaluation, or emission;
/// degenerate specs simply render degenerate output downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintWarning {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl LintWarning {
    fn new(code: &str, message: impl Into<String>, subject: Option<&str>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            subject: subject.map(str::to_owned),
        }
    }
}

/// Scan a form for modeling gaps the data model tolerates.
pub fn lint(spec: &FormSpec) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    let mut seen_ids = BTreeSet::new();

    for field in &spec.fields {
        if field.id.trim().is_empty() {
            warnings.push(LintWarning::new("empty_field_id", "field has an empty id", None));
        } else if !ID_PATTERN.is_match(&field.id) {
            warnings.push(LintWarning::new(
                "malformed_field_id",
                format!("field id '{}' contains unusual characters", field.id),
                Some(&field.id),
            ));
        }
        if !seen_ids.insert(field.id.clone()) {
            warnings.push(LintWarning::new(
                "duplicate_field_id",
                format!("field id '{}' is used more than once", field.id),
                Some(&field.id),
            ));
        }

        if field.kind.uses_options() && field.option_values().is_empty() {
            warnings.push(LintWarning::new(
                "missing_options",
                format!("{} field '{}' has no options to render", field.kind, field.id),
                Some(&field.id),
            ));
        }

        if matches!(field.kind, FieldType::Integer)
            && let (Some(min), Some(max)) = (field.min, field.max)
            && min > max
        {
            warnings.push(LintWarning::new(
                "inverted_bounds",
                format!("integer field '{}' has min {} above max {}", field.id, min, max),
                Some(&field.id),
            ));
        }

        if matches!(field.kind, FieldType::Rating) && field.max_rating == Some(0) {
            warnings.push(LintWarning::new(
                "zero_rating_scale",
                format!("rating field '{}' has a zero-step scale", field.id),
                Some(&field.id),
            ));
        }
    }

    for (index, condition) in spec.conditions.iter().enumerate() {
        let subject = format!("condition #{}", index);

        if !spec.has_field(&condition.field_id) {
            warnings.push(LintWarning::new(
                "unknown_source_field",
                format!("{} reads unknown field '{}'", subject, condition.field_id),
                Some(&subject),
            ));
        }
        if !spec.has_field(&condition.target_field_id) {
            warnings.push(LintWarning::new(
                "unknown_target_field",
                format!("{} targets unknown field '{}'", subject, condition.target_field_id),
                Some(&subject),
            ));
        }
        if !condition.field_id.is_empty() && condition.field_id == condition.target_field_id {
            warnings.push(LintWarning::new(
                "self_targeting_condition",
                format!("{} shows or hides its own source field '{}'", subject, condition.field_id),
                Some(&subject),
            ));
        }
        if condition.operator.is_numeric() && parse_number(&condition.value).is_none() {
            warnings.push(LintWarning::new(
                "non_numeric_literal",
                format!(
                    "{} compares '{}' numerically; the predicate will never hold",
                    subject, condition.value
                ),
                Some(&subject),
            ));
        }
    }

    warnings
}
