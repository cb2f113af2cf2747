mod actions;
mod controller;
mod error;
mod events;
mod field;
mod journey;
mod reducers;
mod state;

pub use actions::FormCommand;
pub use controller::{FormController, SubmitEvent, SubmitOutcome};
pub use error::ValidationError;
pub use events::{EventSink, FieldChange, PrechatPayload};
pub use field::{
    ChoiceOption, DEFAULT_PERSONAL_DOMAINS, ERROR_CLASS, FieldSnapshot, FieldState, FieldValue,
    PHONE_HELP_TEXT, ValidationResult, ValidationRules, check_email_format, check_number_format,
    check_phone_format,
};
pub use journey::{JourneyBranch, JourneyPolicy};
pub use reducers::apply_command;
pub use state::{FormState, SubmissionState};
