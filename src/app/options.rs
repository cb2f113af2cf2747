use std::{borrow::Cow, sync::Arc};

use crate::domain::{JOB_SEEKER, PARTNERSHIP_ENQUIRY, SERVICE_FIELD};
use crate::form::{JourneyBranch, JourneyPolicy, ValidationRules};

pub const SUBMIT_LABEL: &str = "Start Conversation";
pub const SUBMITTING_LABEL: &str = "Starting Chat...";
pub const HEADER_MESSAGE: &str = "Please fill the form to interact with our agent.";
pub const JOB_SEEKER_MESSAGE: &str = "Thank you for your interest in joining us. Please visit our careers page to explore open positions and apply.";
pub const PARTNERSHIP_MESSAGE: &str = "Thank you for your interest in partnering with us. Please email our partnerships team and we will get back to you.";

#[derive(Debug, Clone)]
pub struct FormOptions {
    pub service_field: String,
    pub submit_label: Cow<'static, str>,
    pub submitting_label: Cow<'static, str>,
    pub header_message: Cow<'static, str>,
    pub job_seeker_message: Cow<'static, str>,
    pub partnership_message: Cow<'static, str>,
    pub validate_on_blur: bool,
    pub(crate) journey: JourneyPolicy,
    pub(crate) rules: Arc<ValidationRules>,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            service_field: SERVICE_FIELD.to_string(),
            submit_label: Cow::Borrowed(SUBMIT_LABEL),
            submitting_label: Cow::Borrowed(SUBMITTING_LABEL),
            header_message: Cow::Borrowed(HEADER_MESSAGE),
            job_seeker_message: Cow::Borrowed(JOB_SEEKER_MESSAGE),
            partnership_message: Cow::Borrowed(PARTNERSHIP_MESSAGE),
            validate_on_blur: true,
            journey: JourneyPolicy::new(JOB_SEEKER, PARTNERSHIP_ENQUIRY),
            rules: Arc::new(ValidationRules::default()),
        }
    }
}

impl FormOptions {
    pub fn with_service_field(mut self, name: impl Into<String>) -> Self {
        self.service_field = name.into();
        self
    }

    /// Service values that branch to the job seeker and partnership messages.
    /// Both also become exempt from the business email rule.
    pub fn with_journey_values(
        mut self,
        job_seeker: impl Into<String>,
        partnership: impl Into<String>,
    ) -> Self {
        self.journey = JourneyPolicy::new(job_seeker, partnership);
        let exempt = self.journey.redirect_values();
        self.map_rules(|rules| rules.with_exempt_services(exempt))
    }

    pub fn with_personal_domain(self, domain: impl Into<String>) -> Self {
        let domain = domain.into();
        self.map_rules(|rules| rules.with_personal_domain(domain))
    }

    pub fn with_personal_domains<I, S>(self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let domains: Vec<String> = domains
            .into_iter()
            .map(|domain| domain.into().to_ascii_lowercase())
            .collect();
        self.map_rules(|mut rules| {
            rules.personal_domains = domains;
            rules
        })
    }

    pub fn with_submit_labels(
        mut self,
        idle: impl Into<Cow<'static, str>>,
        working: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.submit_label = idle.into();
        self.submitting_label = working.into();
        self
    }

    pub fn with_header_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.header_message = message.into();
        self
    }

    pub fn with_redirect_messages(
        mut self,
        job_seeker: impl Into<Cow<'static, str>>,
        partnership: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.job_seeker_message = job_seeker.into();
        self.partnership_message = partnership.into();
        self
    }

    pub fn with_validate_on_blur(mut self, enabled: bool) -> Self {
        self.validate_on_blur = enabled;
        self
    }

    pub fn journey(&self) -> &JourneyPolicy {
        &self.journey
    }

    pub fn validation_rules(&self) -> Arc<ValidationRules> {
        Arc::clone(&self.rules)
    }

    pub fn redirect_message(&self, branch: JourneyBranch) -> Option<&str> {
        match branch {
            JourneyBranch::None => None,
            JourneyBranch::JobSeeker => Some(&self.job_seeker_message),
            JourneyBranch::Partnership => Some(&self.partnership_message),
        }
    }

    fn map_rules(mut self, map: impl FnOnce(ValidationRules) -> ValidationRules) -> Self {
        let updated = map((*self.rules).clone());
        self.rules = Arc::new(updated);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journey_values_update_exemptions() {
        let options = FormOptions::default().with_journey_values("Careers", "Partners");
        let rules = options.validation_rules();
        assert!(rules.is_exempt("Careers"));
        assert!(!rules.is_exempt("I'm looking for a job"));
        assert_eq!(options.journey().branch_for("Partners"), JourneyBranch::Partnership);
    }

    #[test]
    fn replaces_denylist() {
        let options = FormOptions::default().with_personal_domains(["Example.org"]);
        let rules = options.validation_rules();
        assert!(rules.is_personal_domain("me@example.org"));
        assert!(!rules.is_personal_domain("me@gmail.com"));
    }

    #[test]
    fn redirect_message_per_branch() {
        let options = FormOptions::default().with_redirect_messages("jobs", "partners");
        assert_eq!(options.redirect_message(JourneyBranch::None), None);
        assert_eq!(options.redirect_message(JourneyBranch::JobSeeker), Some("jobs"));
        assert_eq!(options.redirect_message(JourneyBranch::Partnership), Some("partners"));
    }
}
