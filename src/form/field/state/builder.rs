use std::sync::Arc;

use crate::domain::FieldDescriptor;
use crate::form::field::components::component_for;
use crate::form::field::rules::ValidationRules;

use super::FieldState;

impl FieldState {
    pub fn from_descriptor(descriptor: FieldDescriptor) -> Self {
        Self::from_descriptor_with_rules(descriptor, Arc::new(ValidationRules::default()))
    }

    pub fn from_descriptor_with_rules(
        descriptor: FieldDescriptor,
        rules: Arc<ValidationRules>,
    ) -> Self {
        let component = component_for(&descriptor);
        Self {
            descriptor,
            component,
            rules,
            error: None,
        }
    }
}
