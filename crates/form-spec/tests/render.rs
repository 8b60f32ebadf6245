use serde_json::json;

use form_spec::{
    AnswerSet, FormSpec, RenderControl, RenderStatus, build_render_payload, render_json_ui,
    render_text,
};

fn fixture() -> FormSpec {
    serde_json::from_str(include_str!("fixtures/simple_form.json")).expect("deserialize")
}

#[test]
fn payload_tracks_visibility_and_progress() {
    let spec = fixture();
    let answers = AnswerSet::new();
    let payload = build_render_payload(&spec, &answers);

    assert_eq!(payload.status, RenderStatus::NeedInput);
    assert_eq!(payload.next_field_id.as_deref(), Some("color"));
    // "why" is hidden until color is red, so only two fields count.
    assert_eq!(payload.progress.total, 2);
    assert_eq!(payload.progress.answered, 0);

    let why = payload.fields.iter().find(|field| field.id == "why").unwrap();
    assert!(!why.visible);
}

#[test]
fn payload_completes_once_visible_fields_are_answered() {
    let spec = fixture();
    let mut answers = AnswerSet::new();
    answers.set("color", json!("blue"));
    answers.set("score", json!(4));
    let payload = build_render_payload(&spec, &answers);

    assert_eq!(payload.status, RenderStatus::Complete);
    assert_eq!(payload.next_field_id, None);
    assert_eq!(payload.progress.answered, 2);
}

#[test]
fn answering_red_reveals_the_follow_up() {
    let spec = fixture();
    let mut answers = AnswerSet::new();
    answers.set("color", json!("red"));
    let payload = build_render_payload(&spec, &answers);

    let why = payload.fields.iter().find(|field| field.id == "why").unwrap();
    assert!(why.visible);
    assert_eq!(payload.progress.total, 3);
    assert_eq!(payload.next_field_id.as_deref(), Some("why"));
}

#[test]
fn controls_dispatch_on_field_type() {
    let spec = fixture();
    let payload = build_render_payload(&spec, &AnswerSet::new());

    let color = payload.fields.iter().find(|field| field.id == "color").unwrap();
    assert_eq!(
        color.control,
        RenderControl::Dropdown {
            options: vec!["red".into(), "blue".into()]
        }
    );

    let score = payload.fields.iter().find(|field| field.id == "score").unwrap();
    assert_eq!(score.control, RenderControl::RatingRow { max: 5 });
}

#[test]
fn render_text_lists_only_visible_fields() {
    let spec = fixture();
    let text = render_text(&build_render_payload(&spec, &AnswerSet::new()));

    assert!(text.contains("Form: Feedback"));
    assert!(text.contains("Next field: color"));
    assert!(text.contains("Favourite color"));
    assert!(!text.contains("Why red?"));
}

#[test]
fn render_json_ui_exposes_structure() {
    let spec = fixture();
    let mut answers = AnswerSet::new();
    answers.set("color", json!("red"));
    let ui = render_json_ui(&build_render_payload(&spec, &answers));

    assert_eq!(ui["form_title"], "Feedback");
    assert_eq!(ui["progress"]["total"], 3);
    let fields = ui["fields"].as_array().expect("fields array");
    let why = fields.iter().find(|field| field["id"] == "why").unwrap();
    assert_eq!(why["visible"], json!(true));
    assert_eq!(why["control"], "text_box");
    let color = fields.iter().find(|field| field["id"] == "color").unwrap();
    assert_eq!(color["options"], json!(["red", "blue"]));
    assert_eq!(color["currentValue"], json!("red"));
}
