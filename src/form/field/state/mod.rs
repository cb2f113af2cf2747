mod builder;
mod input;
mod value_ops;

use std::sync::Arc;

use serde::Serialize;

use crate::domain::{FieldDescriptor, InputKind};
use crate::form::error::ValidationError;

use super::components::{ChoiceOption, FieldComponent};
use super::rules::ValidationRules;
use super::value::FieldValue;

pub const PHONE_HELP_TEXT: &str = "Enter with country code (e.g., +971501234567)";
pub const ERROR_CLASS: &str = "field-error";

/// Field Controller: one descriptor, its live value and its validation error.
#[derive(Debug, Clone)]
pub struct FieldState {
    pub descriptor: FieldDescriptor,
    pub(crate) component: Box<dyn FieldComponent>,
    pub(crate) rules: Arc<ValidationRules>,
    pub(crate) error: Option<ValidationError>,
}

/// Read-only projection of a field for aggregation by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSnapshot {
    pub name: String,
    pub value: FieldValue,
    pub is_valid: bool,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: String,
}

impl FieldState {
    pub fn name(&self) -> &str {
        &self.descriptor.name
    }

    pub fn label(&self) -> &str {
        &self.descriptor.label
    }

    pub fn display_label(&self) -> String {
        self.descriptor.display_label()
    }

    pub fn is_required(&self) -> bool {
        self.descriptor.required
    }

    pub fn input_kind(&self) -> InputKind {
        self.component.kind()
    }

    pub fn value(&self) -> FieldValue {
        self.component.value()
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Rendered error message; empty when the field is valid.
    pub fn error_message(&self) -> String {
        self.error
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot {
            name: self.name().to_string(),
            value: self.value(),
            is_valid: self.is_valid(),
            error: self.error_message(),
        }
    }

    pub fn help_text(&self) -> Option<&'static str> {
        (self.input_kind() == InputKind::Telephone).then_some(PHONE_HELP_TEXT)
    }

    pub fn css_class(&self) -> &'static str {
        if self.error.is_some() { ERROR_CLASS } else { "" }
    }

    /// Options of a choice list field, in display order.
    pub fn choice_options(&self) -> Option<&[ChoiceOption]> {
        self.component.choice_options()
    }
}
