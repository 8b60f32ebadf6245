use std::collections::BTreeSet;

use serde_json::Value;

use crate::answers::AnswerSet;
use crate::spec::condition::{Condition, ConditionAction, ConditionOperator};
use crate::spec::form::FormSpec;

/// Field ids currently eligible for display.
pub type VisibilitySet = BTreeSet<String>;

/// Recompute the visible set from scratch.
///
/// Every field starts visible, then conditions are applied once each, in
/// authored order: a condition whose predicate holds inserts or removes its
/// target; a false predicate changes nothing. When two conditions target the
/// same field with conflicting actions, the later one wins among those whose
/// predicates hold.
pub fn resolve_visibility(spec: &FormSpec, answers: &AnswerSet) -> VisibilitySet {
    let mut visible: VisibilitySet = spec.field_ids().map(str::to_owned).collect();

    for condition in &spec.conditions {
        if !condition_met(condition, answers) {
            continue;
        }
        match condition.action {
            ConditionAction::Show => {
                visible.insert(condition.target_field_id.clone());
            }
            ConditionAction::Hide => {
                visible.remove(&condition.target_field_id);
            }
        }
    }

    visible
}

/// Evaluate one condition's predicate against the current answers.
///
/// Comparisons are strict: `equals` and `contains` only ever hold for string
/// answers, `not_equals` is the exact negation of `equals` (so it holds for
/// absent answers), and the numeric operators silently evaluate false when
/// either operand has no numeric prefix. Nothing here can fail.
pub fn condition_met(condition: &Condition, answers: &AnswerSet) -> bool {
    let answer = answers.get(&condition.field_id);
    let literal = condition.value.as_str();

    match condition.operator {
        ConditionOperator::Equals => answer.and_then(Value::as_str) == Some(literal),
        ConditionOperator::NotEquals => answer.and_then(Value::as_str) != Some(literal),
        ConditionOperator::Contains => answer
            .and_then(Value::as_str)
            .is_some_and(|text| text.contains(literal)),
        ConditionOperator::GreaterThan => match (answer_number(answer), parse_number(literal)) {
            (Some(left), Some(right)) => left > right,
            _ => false,
        },
        ConditionOperator::LessThan => match (answer_number(answer), parse_number(literal)) {
            (Some(left), Some(right)) => left < right,
            _ => false,
        },
    }
}

fn answer_number(answer: Option<&Value>) -> Option<f64> {
    match answer? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => parse_number(text),
        _ => None,
    }
}

/// Longest-numeric-prefix parse, matching what `parseFloat` does in the
/// emitted scripts: leading whitespace skipped, optional sign, digits with
/// at most one decimal point, an optional exponent, and the `Infinity`
/// keyword. Trailing garbage is ignored; `None` stands in for `NaN`, which
/// compares false under every operator.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if rest.starts_with("Infinity") {
        return Some(sign * f64::INFINITY);
    }

    let bytes = rest.as_bytes();
    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let int_digits = end;
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    // A bare sign or dot carries no digits at all.
    if end == 0 || (int_digits == 0 && end == 1) {
        return None;
    }

    // The exponent only counts when digits follow it.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut cursor = end + 1;
        if cursor < bytes.len() && (bytes[cursor] == b'+' || bytes[cursor] == b'-') {
            cursor += 1;
        }
        let exponent_digits = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exponent_digits {
            end = cursor;
        }
    }

    rest[..end].parse::<f64>().ok().map(|value| sign * value)
}

#[cfg(test)]
mod tests {
    use super::parse_number;

    #[test]
    fn parse_number_takes_the_longest_numeric_prefix() {
        assert_eq!(parse_number("10 years"), Some(10.0));
        assert_eq!(parse_number("  -3.5kg"), Some(-3.5));
        assert_eq!(parse_number(".5x"), Some(0.5));
        assert_eq!(parse_number("6."), Some(6.0));
        assert_eq!(parse_number("1e2rpm"), Some(100.0));
        // An exponent marker without digits stays out of the prefix.
        assert_eq!(parse_number("1e"), Some(1.0));
        assert_eq!(parse_number("2e+bad"), Some(2.0));
    }

    #[test]
    fn parse_number_handles_signs_and_infinity() {
        assert_eq!(parse_number("+4"), Some(4.0));
        assert_eq!(parse_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
        // Only the exact keyword counts.
        assert_eq!(parse_number("infinity"), None);
    }

    #[test]
    fn parse_number_rejects_text_without_a_numeric_prefix() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("many"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("-.x"), None);
        assert_eq!(parse_number("years 10"), None);
    }
}
