#![deny(rust_2018_idioms)]
//! Pre-chat intake form engine for embedded chat widgets.
//!
//! Field descriptors come from a host deployment configuration (or a static
//! fallback list). Each descriptor becomes a [`FieldState`] that maps its type
//! to an input control and validates it; the [`FormController`] aggregates
//! validity, applies the journey branching rules and hands a flat
//! `prechatsubmit` payload to an [`EventSink`].

mod app;
mod domain;
mod form;
mod io;

pub use app::{
    FormOptions, HEADER_MESSAGE, JOB_SEEKER_MESSAGE, PARTNERSHIP_MESSAGE, PreChatUI,
    SUBMIT_LABEL, SUBMITTING_LABEL,
};
pub use domain::{
    CONTRACT_STAFFING, ChoiceListValue, FieldDescriptor, FieldType, InputKind, JOB_SEEKER,
    PARTNERSHIP_ENQUIRY, PRECHAT_FORM_TYPE, SERVICE_FIELD, dedup_descriptors,
    descriptors_from_configuration, fallback_descriptors, parse_configuration, parse_field_list,
    sort_descriptors,
};
pub use form::{
    ChoiceOption, DEFAULT_PERSONAL_DOMAINS, ERROR_CLASS, EventSink, FieldChange, FieldSnapshot,
    FieldState, FieldValue, FormCommand, FormController, FormState, JourneyBranch, JourneyPolicy,
    PHONE_HELP_TEXT, PrechatPayload, SubmissionState, SubmitEvent, SubmitOutcome,
    ValidationError, ValidationResult, ValidationRules, apply_command, check_email_format,
    check_number_format, check_phone_format,
};
pub use io::{
    DocumentFormat, OutputDestination, OutputOptions, emit, parse_document_any,
    parse_document_str, render_payload,
};

pub mod prelude {
    pub use super::{
        EventSink, FieldChange, FieldValue, FormCommand, FormController, FormOptions,
        JourneyBranch, PreChatUI, PrechatPayload, SubmissionState, SubmitEvent, SubmitOutcome,
    };
}
