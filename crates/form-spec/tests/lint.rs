use form_spec::{
    Condition, ConditionAction, ConditionOperator, FieldType, FormField, FormSpec, lint,
};

fn codes(spec: &FormSpec) -> Vec<String> {
    lint(spec).into_iter().map(|warning| warning.code).collect()
}

#[test]
fn clean_spec_has_no_warnings() {
    let spec: FormSpec =
        serde_json::from_str(include_str!("fixtures/simple_form.json")).expect("deserialize");
    assert!(lint(&spec).is_empty(), "unexpected warnings: {:?}", lint(&spec));
}

#[test]
fn flags_option_less_choice_fields() {
    let spec = FormSpec {
        fields: vec![FormField::new("pick", FieldType::Select, "Pick one")],
        ..FormSpec::default()
    };
    assert_eq!(codes(&spec), vec!["missing_options"]);
}

#[test]
fn flags_duplicate_and_malformed_ids() {
    let spec = FormSpec {
        fields: vec![
            FormField::new("a", FieldType::Text, "A"),
            FormField::new("a", FieldType::Text, "A again"),
            FormField::new("1 bad id", FieldType::Text, "Bad"),
        ],
        ..FormSpec::default()
    };
    let codes = codes(&spec);
    assert!(codes.contains(&"duplicate_field_id".to_string()));
    assert!(codes.contains(&"malformed_field_id".to_string()));
}

#[test]
fn flags_dangling_and_self_targeting_conditions() {
    let spec = FormSpec {
        fields: vec![FormField::new("a", FieldType::Text, "A")],
        conditions: vec![
            Condition::new("missing", ConditionOperator::Equals, "x", ConditionAction::Show, "a"),
            Condition::new("a", ConditionOperator::Equals, "x", ConditionAction::Hide, "ghost"),
            Condition::new("a", ConditionOperator::Equals, "x", ConditionAction::Hide, "a"),
        ],
        ..FormSpec::default()
    };
    let codes = codes(&spec);
    assert!(codes.contains(&"unknown_source_field".to_string()));
    assert!(codes.contains(&"unknown_target_field".to_string()));
    assert!(codes.contains(&"self_targeting_condition".to_string()));
}

#[test]
fn flags_non_numeric_literals_for_numeric_operators() {
    let spec = FormSpec {
        fields: vec![
            FormField::new("a", FieldType::Integer, "A"),
            FormField::new("b", FieldType::Text, "B"),
        ],
        conditions: vec![Condition::new(
            "a",
            ConditionOperator::GreaterThan,
            "lots",
            ConditionAction::Show,
            "b",
        )],
        ..FormSpec::default()
    };
    assert_eq!(codes(&spec), vec!["non_numeric_literal"]);
}

#[test]
fn flags_inverted_integer_bounds() {
    let mut field = FormField::new("n", FieldType::Integer, "N");
    field.min = Some(10);
    field.max = Some(2);
    let spec = FormSpec {
        fields: vec![field],
        ..FormSpec::default()
    };
    assert_eq!(codes(&spec), vec!["inverted_bounds"]);
}
