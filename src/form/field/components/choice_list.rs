use crate::domain::{FieldDescriptor, InputKind};
use crate::form::field::value::FieldValue;

use super::{ChoiceOption, FieldComponent};

/// Single-select control populated from a descriptor's choice list.
#[derive(Debug, Clone)]
pub struct ChoiceListComponent {
    options: Vec<ChoiceOption>,
    selected: Option<usize>,
}

impl ChoiceListComponent {
    pub fn new(descriptor: &FieldDescriptor) -> Self {
        let sorted = descriptor.sorted_choices();
        let selected = sorted.iter().position(|choice| choice.is_default_value);
        let options = sorted
            .into_iter()
            .map(|choice| ChoiceOption {
                label: choice.label.clone(),
                value: choice.choice_list_value_name.clone(),
            })
            .collect();
        Self { options, selected }
    }
}

impl FieldComponent for ChoiceListComponent {
    fn kind(&self) -> InputKind {
        InputKind::ChoiceList
    }

    fn value(&self) -> FieldValue {
        let value = self
            .selected
            .and_then(|idx| self.options.get(idx))
            .map(|option| option.value.clone())
            .unwrap_or_default();
        FieldValue::Text(value)
    }

    fn set_input(&mut self, raw: &FieldValue) -> bool {
        let FieldValue::Text(text) = raw else {
            return false;
        };
        let next = if text.is_empty() {
            None
        } else {
            match self.options.iter().position(|option| option.value == *text) {
                Some(idx) => Some(idx),
                None => return false,
            }
        };
        if self.selected == next {
            return false;
        }
        self.selected = next;
        true
    }

    fn choice_options(&self) -> Option<&[ChoiceOption]> {
        Some(&self.options)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{ChoiceListValue, FieldType};

    use super::*;

    fn descriptor() -> FieldDescriptor {
        FieldDescriptor::new("Topic", "Topic", FieldType::ChoiceList).with_choices(vec![
            ChoiceListValue::new("c", "Third", 3).with_default(true),
            ChoiceListValue::new("a", "First", 1),
            ChoiceListValue::new("b", "Second", 2).with_default(true),
        ])
    }

    #[test]
    fn orders_options_and_picks_first_default() {
        let component = ChoiceListComponent::new(&descriptor());
        let values: Vec<&str> = component
            .choice_options()
            .unwrap()
            .iter()
            .map(|option| option.value.as_str())
            .collect();
        assert_eq!(values, ["a", "b", "c"]);
        assert_eq!(component.value(), FieldValue::from("b"));
    }

    #[test]
    fn no_default_means_empty_selection() {
        let descriptor = FieldDescriptor::new("Topic", "Topic", FieldType::ChoiceList)
            .with_choices(vec![ChoiceListValue::new("a", "A", 1)]);
        let component = ChoiceListComponent::new(&descriptor);
        assert_eq!(component.value(), FieldValue::from(""));
    }

    #[test]
    fn rejects_values_outside_the_list() {
        let mut component = ChoiceListComponent::new(&descriptor());
        assert!(!component.set_input(&FieldValue::from("z")));
        assert!(component.set_input(&FieldValue::from("c")));
        assert_eq!(component.value(), FieldValue::from("c"));
        assert!(component.set_input(&FieldValue::from("")));
        assert_eq!(component.value(), FieldValue::from(""));
    }
}
