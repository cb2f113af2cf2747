use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Declarative field type as supplied by the host configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldType {
    #[default]
    Text,
    Email,
    Phone,
    Number,
    Checkbox,
    ChoiceList,
    /// Any type name the engine does not recognise. Rendered as plain text.
    Other,
}

impl FieldType {
    /// Normalise a raw type name. Matching ignores ASCII case, so `"EMAIL"`,
    /// `"Email"` and `"email"` are the same type.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "text" => FieldType::Text,
            "email" => FieldType::Email,
            "phone" => FieldType::Phone,
            "number" => FieldType::Number,
            "checkbox" => FieldType::Checkbox,
            "choicelist" | "picklist" => FieldType::ChoiceList,
            _ => FieldType::Other,
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            FieldType::Phone => InputKind::Telephone,
            FieldType::Text => InputKind::Text,
            FieldType::Email => InputKind::Email,
            FieldType::Number => InputKind::Number,
            FieldType::Checkbox => InputKind::Checkbox,
            FieldType::ChoiceList => InputKind::ChoiceList,
            FieldType::Other => InputKind::Text,
        }
    }
}

/// Input control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Text,
    Email,
    Telephone,
    Number,
    Checkbox,
    ChoiceList,
}

impl InputKind {
    /// HTML-style input type name (`"tel"` for telephone inputs).
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Telephone => "tel",
            InputKind::Number => "number",
            InputKind::Checkbox => "checkbox",
            InputKind::ChoiceList => "choicelist",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceListValue {
    pub choice_list_value_name: String,
    pub label: String,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub is_default_value: bool,
}

impl ChoiceListValue {
    pub fn new(name: impl Into<String>, label: impl Into<String>, order: i64) -> Self {
        Self {
            choice_list_value_name: name.into(),
            label: label.into(),
            order,
            is_default_value: false,
        }
    }

    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default_value = is_default;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    pub order: i64,
    pub choice_list_values: Vec<ChoiceListValue>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            required: false,
            order: 0,
            choice_list_values: Vec::new(),
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    pub fn with_choices(mut self, choices: Vec<ChoiceListValue>) -> Self {
        self.choice_list_values = choices;
        self
    }

    pub fn input_kind(&self) -> InputKind {
        self.field_type.input_kind()
    }

    /// Label shown next to the control; required fields carry a trailing `*`.
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }

    /// Choice list entries in ascending `order`, ties kept in source order.
    pub fn sorted_choices(&self) -> Vec<&ChoiceListValue> {
        let mut choices: Vec<&ChoiceListValue> = self.choice_list_values.iter().collect();
        choices.sort_by_key(|choice| choice.order);
        choices
    }
}

/// Sort descriptors into rendering order. The sort is stable, so equal
/// `order` values keep their source sequence.
pub fn sort_descriptors(descriptors: &mut [FieldDescriptor]) {
    descriptors.sort_by_key(|descriptor| descriptor.order);
}

/// Drop descriptors whose `name` repeats an earlier one. Field names key the
/// form values, so only the first occurrence is mounted.
pub fn dedup_descriptors(descriptors: &mut Vec<FieldDescriptor>) {
    let mut seen = HashSet::new();
    descriptors.retain(|descriptor| {
        let first = seen.insert(descriptor.name.clone());
        if !first {
            tracing::warn!(field = %descriptor.name, "duplicate field name dropped");
        }
        first
    });
}
