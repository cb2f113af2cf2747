use thiserror::Error;

/// Field-scoped validation failures. The `Display` text is the message shown
/// under the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    MissingRequiredValue { label: String },
    #[error("Please enter a valid email address")]
    InvalidEmailFormat,
    #[error("Please use your business email address")]
    NonBusinessEmailDomain,
    #[error("Please enter a valid international phone number (e.g., +971501234567)")]
    InvalidPhoneFormat,
    #[error("Please enter a valid number")]
    InvalidNumberFormat,
}
