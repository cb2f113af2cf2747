use serde::Serialize;

use crate::domain::InputKind;
use crate::form::field::value::FieldValue;

/// Behaviour shared by every input control a field can render as.
pub(crate) trait FieldComponent: FieldComponentClone + std::fmt::Debug {
    fn kind(&self) -> InputKind;

    fn value(&self) -> FieldValue;

    /// Store a raw input. Returns `true` when the input was accepted and the
    /// stored value changed.
    fn set_input(&mut self, raw: &FieldValue) -> bool;

    fn choice_options(&self) -> Option<&[ChoiceOption]> {
        None
    }
}

pub(crate) trait FieldComponentClone {
    fn clone_box(&self) -> Box<dyn FieldComponent>;
}

impl<T> FieldComponentClone for T
where
    T: 'static + FieldComponent + Clone,
{
    fn clone_box(&self) -> Box<dyn FieldComponent> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn FieldComponent> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// One entry of a single-select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceOption {
    pub label: String,
    pub value: String,
}
