use crate::domain::InputKind;
use crate::form::field::value::FieldValue;

use super::FieldComponent;

#[derive(Debug, Clone, Default)]
pub struct CheckboxComponent {
    checked: bool,
}

impl CheckboxComponent {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldComponent for CheckboxComponent {
    fn kind(&self) -> InputKind {
        InputKind::Checkbox
    }

    fn value(&self) -> FieldValue {
        FieldValue::Bool(self.checked)
    }

    fn set_input(&mut self, raw: &FieldValue) -> bool {
        let next = match raw {
            FieldValue::Bool(flag) => *flag,
            FieldValue::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "on" | "yes" | "1" => true,
                "false" | "off" | "no" | "0" | "" => false,
                _ => return false,
            },
        };
        if self.checked == next {
            return false;
        }
        self.checked = next;
        true
    }
}
