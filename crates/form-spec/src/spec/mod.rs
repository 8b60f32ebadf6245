pub mod condition;
pub mod field;
pub mod form;

pub use condition::{Condition, ConditionAction, ConditionOperator};
pub use field::{FieldType, FormField};
pub use form::{FormSettings, FormSpec, FormTheme};
