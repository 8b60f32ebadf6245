use form_codegen::{Target, emit};
use form_spec::{
    Condition, ConditionAction, ConditionOperator, FieldType, FormField, FormSettings, FormSpec,
    FormTheme,
};

fn single_text_field() -> FormSpec {
    let mut field = FormField::new("f1", FieldType::Text, "Name");
    field.required = true;
    FormSpec {
        fields: vec![field],
        ..FormSpec::default()
    }
}

fn color_gate_spec() -> FormSpec {
    let mut color = FormField::new("color", FieldType::Select, "Favourite color");
    color.options = Some(vec!["red".into(), "blue".into()]);
    FormSpec {
        fields: vec![color, FormField::new("why", FieldType::Text, "Why red?")],
        conditions: vec![
            Condition::new("color", ConditionOperator::NotEquals, "red", ConditionAction::Hide, "why"),
            Condition::new("color", ConditionOperator::Equals, "red", ConditionAction::Show, "why"),
        ],
        ..FormSpec::default()
    }
}

#[test]
fn react_round_trip_without_conditions_has_no_visibility_logic() {
    let code = emit(Target::ReactTailwind, &single_text_field()).unwrap();

    assert!(code.contains("formData[\"f1\"]"));
    assert!(code.contains("{\"Name\"}"));
    assert!(code.contains("type=\"text\""));
    // Empty condition set: the all-visible initial state stands alone.
    assert!(!code.contains("useEffect(() =>"));
    assert!(!code.contains("showField"));
    assert!(!code.contains("hideField"));
}

#[test]
fn react_embeds_conditions_in_authored_order() {
    let code = emit(Target::ReactTailwind, &color_gate_spec()).unwrap();

    assert!(code.contains("const next = [...ALL_FIELD_IDS];"));
    let hide = code
        .find("formData[\"color\"] !== \"red\"")
        .expect("hide guard present");
    let show = code
        .find("formData[\"color\"] === \"red\"")
        .expect("show guard present");
    assert!(hide < show, "conditions must appear in authored order");
    assert!(code.contains("hideField(next, \"why\");"));
    assert!(code.contains("showField(next, \"why\");"));
    assert!(code.contains("}, [formData]);"));
}

#[test]
fn react_renders_one_control_per_option() {
    let code = emit(Target::ReactTailwind, &color_gate_spec()).unwrap();
    assert!(code.contains("<option value={\"red\"}>{\"red\"}</option>"));
    assert!(code.contains("<option value={\"blue\"}>{\"blue\"}</option>"));
    assert!(code.contains("<option value=\"\">Select an option</option>"));
}

#[test]
fn typescript_declares_value_types() {
    let mut spec = color_gate_spec();
    let mut score = FormField::new("score", FieldType::Rating, "Score");
    score.max_rating = Some(3);
    spec.fields.push(score);
    let mut agree = FormField::new("agree", FieldType::Checkbox, "Agree?");
    agree.required = true;
    spec.fields.push(agree);

    let code = emit(Target::TypescriptTailwind, &spec).unwrap();
    assert!(code.contains("interface FormValues {"));
    assert!(code.contains("\"color\"?: string;"));
    assert!(code.contains("\"score\"?: number;"));
    assert!(code.contains("\"agree\"?: boolean;"));
    assert!(code.contains("useState<FormValues>({})"));
    assert!(code.contains("[...Array(3)]"));
    assert!(code.contains("showField(list: string[], id: string)"));
}

#[test]
fn html_document_is_complete_and_gated() {
    let code = emit(Target::HtmlCss, &color_gate_spec()).unwrap();

    assert!(code.starts_with("<!DOCTYPE html>"));
    assert!(code.contains("id=\"color-container\""));
    assert!(code.contains("id=\"why-container\""));
    assert!(code.contains("<option value=\"red\">red</option>"));
    assert!(code.contains("const visible = allFieldIds.slice();"));
    assert!(code.contains("hideField(visible, \"why\");"));
    assert!(code.contains("container.style.display = visible.includes(id) ? \"\" : \"none\";"));
    // Recompute runs once at load and after every change.
    assert!(code.contains("applyVisibility();"));
}

#[test]
fn html_without_conditions_skips_the_script_fold() {
    let code = emit(Target::HtmlCss, &single_text_field()).unwrap();
    assert!(!code.contains("computeVisibleFields"));
    assert!(!code.contains("applyVisibility"));
    assert!(code.contains("name=\"f1\""));
}

#[test]
fn settings_flow_into_every_backend() {
    let mut spec = single_text_field();
    spec.settings = FormSettings {
        title: "Contact us".into(),
        description: "We read everything.".into(),
        submit_button_text: "Send".into(),
        success_message: "Got it!".into(),
        theme: FormTheme::Dark,
    };

    let react = emit(Target::ReactTailwind, &spec).unwrap();
    assert!(react.contains("{\"Contact us\"}"));
    assert!(react.contains("{\"Send\"}"));
    assert!(react.contains("{\"Got it!\"}"));
    assert!(react.contains("bg-gray-900"));

    let html = emit(Target::HtmlCss, &spec).unwrap();
    assert!(html.contains("<title>Contact us</title>"));
    assert!(html.contains("<p class=\"form-description\">We read everything.</p>"));
    assert!(html.contains(">Send</button>"));
    assert!(html.contains("Got it!"));
    assert!(html.contains("background-color: #111827;"));
}

#[test]
fn operator_symbols_map_to_native_syntax() {
    let fields = vec![
        FormField::new("a", FieldType::Text, "A"),
        FormField::new("b", FieldType::Text, "B"),
    ];
    let spec = FormSpec {
        fields,
        conditions: vec![
            Condition::new("a", ConditionOperator::Contains, "red", ConditionAction::Show, "b"),
            Condition::new("a", ConditionOperator::GreaterThan, "5", ConditionAction::Hide, "b"),
            Condition::new("a", ConditionOperator::LessThan, "2", ConditionAction::Show, "b"),
        ],
        ..FormSpec::default()
    };

    for target in Target::ALL {
        let code = emit(target, &spec).unwrap();
        assert!(code.contains(".includes(\"red\")"), "{target}: contains");
        assert!(
            code.contains("parseFloat(String(formData[\"a\"])) > parseFloat(\"5\")"),
            "{target}: greater than"
        );
        assert!(
            code.contains("parseFloat(String(formData[\"a\"])) < parseFloat(\"2\")"),
            "{target}: less than"
        );
    }
}

#[test]
fn integer_bounds_and_date_controls_are_emitted() {
    let mut count = FormField::new("count", FieldType::Integer, "How many?");
    count.min = Some(1);
    count.max = Some(10);
    let day = FormField::new("day", FieldType::Date, "Which day?");
    let spec = FormSpec {
        fields: vec![count, day],
        ..FormSpec::default()
    };

    let react = emit(Target::ReactTailwind, &spec).unwrap();
    assert!(react.contains("type=\"number\" min={1} max={10}"));
    assert!(react.contains("type=\"date\""));

    let html = emit(Target::HtmlCss, &spec).unwrap();
    assert!(html.contains("type=\"number\" id=\"count\" name=\"count\" min=\"1\" max=\"10\""));
    assert!(html.contains("type=\"date\" id=\"day\" name=\"day\""));
}

#[test]
fn emission_is_deterministic() {
    let spec = color_gate_spec();
    for target in Target::ALL {
        assert_eq!(emit(target, &spec).unwrap(), emit(target, &spec).unwrap());
    }
}

#[test]
fn target_labels_round_trip() {
    for target in Target::ALL {
        let label = target.to_string();
        assert_eq!(label.parse::<Target>().unwrap(), target);
    }
    assert!("cobol".parse::<Target>().is_err());
}
