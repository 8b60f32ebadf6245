#![allow(missing_docs)]

pub mod answers;
pub mod answers_schema;
pub mod document;
pub mod lint;
pub mod render;
pub mod spec;
pub mod visibility;

pub use answers::AnswerSet;
pub use answers_schema::generate as answers_schema;
pub use document::{DocumentError, FormDocument};
pub use lint::{LintWarning, lint};
pub use render::{
    RenderControl, RenderField, RenderPayload, RenderProgress, RenderStatus,
    build_render_payload, render_json_ui, render_text,
};
pub use spec::{
    Condition, ConditionAction, ConditionOperator, FieldType, FormField, FormSettings, FormSpec,
    FormTheme,
};
pub use visibility::{VisibilitySet, condition_met, resolve_visibility};
