use crate::form::error::ValidationError;

use super::{FieldState, ValidationResult};

impl FieldState {
    /// Run the format and required rules against the stored value.
    pub fn validate(&mut self) -> ValidationResult {
        self.run_rules(None);
        ValidationResult {
            is_valid: self.is_valid(),
            error: self.error_message(),
        }
    }

    /// Validate with the sibling service selection as context. Email fields
    /// additionally apply the business email rule; every other kind behaves
    /// as [`FieldState::validate`].
    pub fn validate_with_context(&mut self, service: &str) -> bool {
        self.run_rules(Some(service));
        self.is_valid()
    }

    pub fn set_error(&mut self, error: ValidationError) {
        self.error = Some(error);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    fn run_rules(&mut self, service: Option<&str>) {
        let value = self.component.value();
        let descriptor = &self.descriptor;
        self.error = self
            .rules
            .check(
                descriptor.field_type,
                &descriptor.label,
                descriptor.required,
                &value,
                service,
            )
            .err();
        tracing::debug!(
            field = %descriptor.name,
            kind = %self.component.kind(),
            valid = self.error.is_none(),
            "field validated"
        );
    }
}
