use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{FieldType, JOB_SEEKER, PARTNERSHIP_ENQUIRY};
use crate::form::error::ValidationError;

use super::value::FieldValue;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,}$").expect("email pattern compiles")
});

// "+", a country code that never starts with 0, then digits only.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[1-9][0-9]{7,14}$").expect("phone pattern compiles"));

static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$")
        .expect("number pattern compiles")
});

pub const DEFAULT_PERSONAL_DOMAINS: &[&str] = &[
    "gmail.com",
    "googlemail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "live.com",
    "aol.com",
    "icloud.com",
];

/// Settings for the context-dependent business email rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    /// Webmail domains rejected where a business address is expected.
    pub personal_domains: Vec<String>,
    /// Service selections for which personal addresses are accepted.
    pub exempt_services: Vec<String>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            personal_domains: DEFAULT_PERSONAL_DOMAINS
                .iter()
                .map(|domain| domain.to_string())
                .collect(),
            exempt_services: vec![JOB_SEEKER.to_string(), PARTNERSHIP_ENQUIRY.to_string()],
        }
    }
}

impl ValidationRules {
    pub fn with_personal_domain(mut self, domain: impl Into<String>) -> Self {
        let domain = domain.into().to_ascii_lowercase();
        if !self.personal_domains.contains(&domain) {
            self.personal_domains.push(domain);
        }
        self
    }

    pub fn with_exempt_services(mut self, services: Vec<String>) -> Self {
        self.exempt_services = services;
        self
    }

    pub fn is_personal_domain(&self, email: &str) -> bool {
        let Some((_, domain)) = email.trim().rsplit_once('@') else {
            return false;
        };
        let domain = domain.to_ascii_lowercase();
        self.personal_domains.iter().any(|blocked| *blocked == domain)
    }

    pub fn is_exempt(&self, service: &str) -> bool {
        self.exempt_services.iter().any(|exempt| exempt == service)
    }

    /// Run the rule chain for one value. The first failing rule wins.
    ///
    /// `service` is the sibling service selection; the business email rule
    /// only runs when it is supplied.
    pub fn check(
        &self,
        field_type: FieldType,
        label: &str,
        required: bool,
        value: &FieldValue,
        service: Option<&str>,
    ) -> Result<(), ValidationError> {
        if value.is_blank() {
            if required {
                return Err(ValidationError::MissingRequiredValue {
                    label: label.to_string(),
                });
            }
            return Ok(());
        }
        let Some(text) = value.as_text() else {
            return Ok(());
        };
        match field_type {
            FieldType::Email => {
                check_email_format(text)?;
                if let Some(service) = service {
                    self.check_business_email(text, service)?;
                }
                Ok(())
            }
            FieldType::Phone => check_phone_format(text),
            FieldType::Number => check_number_format(text),
            _ => Ok(()),
        }
    }

    pub fn check_business_email(&self, email: &str, service: &str) -> Result<(), ValidationError> {
        if self.is_exempt(service) || !self.is_personal_domain(email) {
            Ok(())
        } else {
            Err(ValidationError::NonBusinessEmailDomain)
        }
    }
}

pub fn check_email_format(email: &str) -> Result<(), ValidationError> {
    if EMAIL_PATTERN.is_match(email.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmailFormat)
    }
}

pub fn check_phone_format(phone: &str) -> Result<(), ValidationError> {
    if PHONE_PATTERN.is_match(phone.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhoneFormat)
    }
}

pub fn check_number_format(number: &str) -> Result<(), ValidationError> {
    if NUMBER_PATTERN.is_match(number.trim()) {
        Ok(())
    } else {
        Err(ValidationError::InvalidNumberFormat)
    }
}
