mod base;
mod bool;
mod choice_list;
mod text;

pub use base::ChoiceOption;
pub(crate) use base::FieldComponent;
pub use bool::CheckboxComponent;
pub use choice_list::ChoiceListComponent;
pub use text::TextComponent;

use crate::domain::{FieldDescriptor, InputKind};

pub(crate) fn component_for(descriptor: &FieldDescriptor) -> Box<dyn FieldComponent> {
    match descriptor.input_kind() {
        InputKind::Checkbox => Box::new(CheckboxComponent::new()),
        InputKind::ChoiceList => Box::new(ChoiceListComponent::new(descriptor)),
        kind => Box::new(TextComponent::new(kind)),
    }
}
