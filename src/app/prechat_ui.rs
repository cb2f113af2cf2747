use anyhow::Result;
use serde_json::Value;

use crate::domain::{descriptors_from_configuration, fallback_descriptors, parse_field_list};
use crate::form::FormController;

use super::options::FormOptions;

/// Entry point for hosts: a deployment configuration in, a ready form
/// controller out.
#[derive(Debug, Clone)]
pub struct PreChatUI {
    configuration: Value,
    options: FormOptions,
}

impl PreChatUI {
    pub fn new(configuration: Value) -> Self {
        Self {
            configuration,
            options: FormOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FormOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the controller from the configuration, falling back to the
    /// static descriptors when it yields no fields.
    pub fn build(self) -> FormController {
        let descriptors = descriptors_from_configuration(&self.configuration);
        FormController::new(descriptors, self.options)
    }

    /// Build the controller from a bare field list instead of a full
    /// configuration. An empty list falls back like [`PreChatUI::build`].
    pub fn build_from_fields(self, fields: &Value) -> Result<FormController> {
        let mut descriptors = parse_field_list(fields)?;
        if descriptors.is_empty() {
            tracing::warn!("empty field list, using fallback descriptors");
            descriptors = fallback_descriptors();
        }
        Ok(FormController::new(descriptors, self.options))
    }
}
