use indexmap::IndexMap;

use super::field::FieldValue;
use super::journey::JourneyBranch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Submitted,
}

/// Mutable state owned by the form controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub values: IndexMap<String, FieldValue>,
    pub has_errors: bool,
    pub journey_branch: JourneyBranch,
    pub submission: SubmissionState,
}

impl FormState {
    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text of a value, empty for unknown or boolean fields.
    pub fn text(&self, name: &str) -> &str {
        self.values
            .get(name)
            .and_then(FieldValue::as_text)
            .unwrap_or_default()
    }

    pub fn has_value(&self, name: &str) -> bool {
        self.values.get(name).is_some_and(|value| !value.is_blank())
    }
}
