use thiserror::Error;

use crate::spec::condition::Condition;
use crate::spec::field::FormField;
use crate::spec::form::{FormSettings, FormSpec};

/// Errors raised by document mutations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("field id '{0}' is already in use")]
    DuplicateFieldId(String),
    #[error("index {0} is out of range")]
    IndexOutOfRange(usize),
}

/// Mutable owner of a [`FormSpec`] during authoring.
///
/// Fields and conditions live in ordered sequences; every operation is a
/// positional edit. The only invariant enforced here is field id uniqueness.
/// Degenerate content (option-less selects, dangling condition references)
/// is stored as-is and reported by [`crate::lint`] instead.
#[derive(Debug, Clone, Default)]
pub struct FormDocument {
    spec: FormSpec,
}

impl FormDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: FormSettings) -> Self {
        Self {
            spec: FormSpec {
                settings,
                ..FormSpec::default()
            },
        }
    }

    pub fn from_spec(spec: FormSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &FormSpec {
        &self.spec
    }

    pub fn into_spec(self) -> FormSpec {
        self.spec
    }

    pub fn settings(&self) -> &FormSettings {
        &self.spec.settings
    }

    pub fn settings_mut(&mut self) -> &mut FormSettings {
        &mut self.spec.settings
    }

    /// Next free `field_N` identifier.
    pub fn allocate_field_id(&self) -> String {
        let mut seq = self.spec.fields.len() + 1;
        loop {
            let candidate = format!("field_{}", seq);
            if !self.spec.has_field(&candidate) {
                return candidate;
            }
            seq += 1;
        }
    }

    pub fn add_field(&mut self, field: FormField) -> Result<(), DocumentError> {
        if self.spec.has_field(&field.id) {
            return Err(DocumentError::DuplicateFieldId(field.id));
        }
        self.spec.fields.push(field);
        Ok(())
    }

    /// Replace the field at `index`. The incoming id may keep the old one or
    /// move to any id not used elsewhere.
    pub fn update_field(&mut self, index: usize, field: FormField) -> Result<(), DocumentError> {
        if index >= self.spec.fields.len() {
            return Err(DocumentError::IndexOutOfRange(index));
        }
        let taken = self
            .spec
            .fields
            .iter()
            .enumerate()
            .any(|(position, existing)| position != index && existing.id == field.id);
        if taken {
            return Err(DocumentError::DuplicateFieldId(field.id));
        }
        self.spec.fields[index] = field;
        Ok(())
    }

    pub fn remove_field(&mut self, index: usize) -> Option<FormField> {
        if index < self.spec.fields.len() {
            Some(self.spec.fields.remove(index))
        } else {
            None
        }
    }

    /// Positional splice: remove at `from`, insert at `to` (clamped to the
    /// end). No other side effects; condition references are untouched.
    pub fn move_field(&mut self, from: usize, to: usize) {
        if from >= self.spec.fields.len() {
            return;
        }
        let field = self.spec.fields.remove(from);
        let to = to.min(self.spec.fields.len());
        self.spec.fields.insert(to, field);
    }

    /// Appends unconditionally; duplicate, self-referential, or
    /// contradictory conditions are legal.
    pub fn add_condition(&mut self, condition: Condition) {
        self.spec.conditions.push(condition);
    }

    pub fn remove_condition(&mut self, index: usize) -> Option<Condition> {
        if index < self.spec.conditions.len() {
            Some(self.spec.conditions.remove(index))
        } else {
            None
        }
    }
}
