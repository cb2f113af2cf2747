use crate::domain::InputKind;
use crate::form::field::value::FieldValue;

use super::FieldComponent;

/// Free-text style input: text, email, telephone and number controls.
#[derive(Debug, Clone)]
pub struct TextComponent {
    kind: InputKind,
    buffer: String,
}

impl TextComponent {
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            buffer: String::new(),
        }
    }
}

impl FieldComponent for TextComponent {
    fn kind(&self) -> InputKind {
        self.kind
    }

    fn value(&self) -> FieldValue {
        FieldValue::Text(self.buffer.clone())
    }

    fn set_input(&mut self, raw: &FieldValue) -> bool {
        let FieldValue::Text(text) = raw else {
            return false;
        };
        if self.buffer == *text {
            return false;
        }
        self.buffer.clone_from(text);
        true
    }
}
