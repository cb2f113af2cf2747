use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::field::FieldValue;

/// `fieldchange` notification raised by a field after an accepted change or
/// a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChange {
    pub name: String,
    pub value: FieldValue,
    pub is_valid: bool,
}

impl FieldChange {
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>, is_valid: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            is_valid,
        }
    }
}

/// `prechatsubmit` payload: a flat map from field name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrechatPayload(IndexMap<String, FieldValue>);

impl PrechatPayload {
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn into_inner(self) -> IndexMap<String, FieldValue> {
        self.0
    }
}

impl From<IndexMap<String, FieldValue>> for PrechatPayload {
    fn from(values: IndexMap<String, FieldValue>) -> Self {
        Self(values)
    }
}

impl FromIterator<(String, FieldValue)> for PrechatPayload {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Receiver of the `prechatsubmit` handoff, typically the chat transport.
#[cfg_attr(test, mockall::automock)]
pub trait EventSink {
    fn prechat_submit(&mut self, payload: &PrechatPayload);
}

/// Collects every submitted payload in order.
impl EventSink for Vec<PrechatPayload> {
    fn prechat_submit(&mut self, payload: &PrechatPayload) {
        self.push(payload.clone());
    }
}
