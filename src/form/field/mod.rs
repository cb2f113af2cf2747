mod components;
mod rules;
mod state;
mod value;

pub use components::ChoiceOption;
pub use rules::{
    DEFAULT_PERSONAL_DOMAINS, ValidationRules, check_email_format, check_number_format,
    check_phone_format,
};
pub use state::{ERROR_CLASS, FieldSnapshot, FieldState, PHONE_HELP_TEXT, ValidationResult};
pub use value::FieldValue;
