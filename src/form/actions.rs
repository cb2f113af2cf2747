use super::field::FieldValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Input { name: String, value: FieldValue },
    Blur { name: String },
    Submit,
}

impl FormCommand {
    pub fn input(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        FormCommand::Input {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn blur(name: impl Into<String>) -> Self {
        FormCommand::Blur { name: name.into() }
    }
}
