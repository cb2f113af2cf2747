use crate::domain::InputKind;
use crate::form::events::FieldChange;
use crate::form::field::value::FieldValue;

use super::FieldState;

impl FieldState {
    /// Store a raw input and re-validate. Returns the `fieldchange`
    /// notification when the input was accepted, `None` when it was rejected
    /// or left the value unchanged.
    pub fn set_value(&mut self, raw: impl Into<FieldValue>) -> Option<FieldChange> {
        let raw = raw.into();
        if !self.component.set_input(&raw) {
            return None;
        }
        let result = self.validate();
        Some(self.change_event(result.is_valid))
    }

    /// Validation pass triggered by the control losing focus. Email fields use
    /// `service` as business-rule context when one is given.
    pub fn blur(&mut self, service: Option<&str>) -> FieldChange {
        let is_valid = match service {
            Some(service) if self.input_kind() == InputKind::Email => {
                self.validate_with_context(service)
            }
            _ => self.validate().is_valid,
        };
        self.change_event(is_valid)
    }

    fn change_event(&self, is_valid: bool) -> FieldChange {
        FieldChange {
            name: self.name().to_string(),
            value: self.value(),
            is_valid,
        }
    }
}
