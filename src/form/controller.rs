use std::collections::HashMap;

use crate::app::FormOptions;
use crate::domain::{FieldDescriptor, InputKind, dedup_descriptors, sort_descriptors};

use super::events::{EventSink, FieldChange, PrechatPayload};
use super::field::{FieldState, FieldValue};
use super::journey::JourneyBranch;
use super::state::{FormState, SubmissionState};

/// Stand-in for the browser submit event: the form always marks it handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// `prechatsubmit` was emitted.
    Submitted,
    /// A redirect message is showing; nothing was validated or emitted.
    Redirected,
    /// A previous submission is still loading.
    InFlight,
    /// At least one field failed validation or a required value is missing.
    Invalid,
}

/// Form Controller: owns the fields, the aggregate state and the submit path.
#[derive(Debug, Clone)]
pub struct FormController {
    fields: Vec<FieldState>,
    validity: HashMap<String, bool>,
    state: FormState,
    options: FormOptions,
    submit_label: String,
}

impl FormController {
    pub fn new(descriptors: Vec<FieldDescriptor>, options: FormOptions) -> Self {
        let submit_label = options.submit_label.to_string();
        let mut controller = Self {
            fields: Vec::new(),
            validity: HashMap::new(),
            state: FormState::default(),
            options,
            submit_label,
        };
        controller.set_descriptors(descriptors);
        controller
    }

    /// Unmount every field and mount one per descriptor, in rendering order.
    pub fn set_descriptors(&mut self, mut descriptors: Vec<FieldDescriptor>) {
        dedup_descriptors(&mut descriptors);
        sort_descriptors(&mut descriptors);
        let rules = self.options.validation_rules();
        self.fields = descriptors
            .into_iter()
            .map(|descriptor| FieldState::from_descriptor_with_rules(descriptor, rules.clone()))
            .collect();
        self.validity.clear();
        self.state.values.clear();
        for field in &self.fields {
            self.state
                .values
                .insert(field.name().to_string(), field.value());
            self.validity
                .insert(field.name().to_string(), field.is_valid());
        }
        let service = self.service_value().to_string();
        self.state.journey_branch = self.options.journey().branch_for(&service);
        self.recompute_errors();
        tracing::debug!(fields = self.fields.len(), "pre-chat fields mounted");
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|field| field.name() == name)
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    pub fn values(&self) -> &indexmap::IndexMap<String, FieldValue> {
        &self.state.values
    }

    pub fn has_errors(&self) -> bool {
        self.state.has_errors
    }

    pub fn journey_branch(&self) -> JourneyBranch {
        self.state.journey_branch
    }

    pub fn submission(&self) -> SubmissionState {
        self.state.submission
    }

    pub fn submit_label(&self) -> &str {
        &self.submit_label
    }

    pub fn header_message(&self) -> &str {
        &self.options.header_message
    }

    /// Current value of the service selection field, empty when unset.
    pub fn service_value(&self) -> &str {
        self.state.text(&self.options.service_field)
    }

    pub fn redirect_message(&self) -> Option<&str> {
        self.options.redirect_message(self.state.journey_branch)
    }

    pub fn show_job_seeker_message(&self) -> bool {
        self.state.journey_branch == JourneyBranch::JobSeeker
    }

    pub fn show_partnership_message(&self) -> bool {
        self.state.journey_branch == JourneyBranch::Partnership
    }

    /// Feed a user input to the named field. Returns `true` when the field
    /// accepted it and raised a `fieldchange`.
    pub fn input(&mut self, name: &str, raw: impl Into<FieldValue>) -> bool {
        let Some(field) = self.fields.iter_mut().find(|field| field.name() == name) else {
            tracing::debug!(field = name, "input for unknown field ignored");
            return false;
        };
        match field.set_value(raw) {
            Some(change) => {
                self.handle_field_change(change);
                true
            }
            None => false,
        }
    }

    /// Focus left the named field.
    pub fn blur(&mut self, name: &str) {
        if !self.options.validate_on_blur {
            return;
        }
        let service = self.service_value().to_string();
        let Some(field) = self.fields.iter_mut().find(|field| field.name() == name) else {
            return;
        };
        let change = field.blur(Some(&service));
        self.handle_field_change(change);
    }

    pub fn handle_field_change(&mut self, change: FieldChange) {
        let FieldChange {
            name,
            value,
            is_valid,
        } = change;
        if !self.validity.contains_key(&name) {
            tracing::debug!(field = %name, "change for unknown field ignored");
            return;
        }
        tracing::debug!(field = %name, valid = is_valid, "field changed");

        let is_service = name == self.options.service_field;
        self.state.values.insert(name.clone(), value);
        self.validity.insert(name, is_valid);

        if is_service {
            let service = self.service_value().to_string();
            let branch = self.options.journey().branch_for(&service);
            if branch != self.state.journey_branch {
                tracing::debug!(%branch, "journey branch changed");
            }
            self.state.journey_branch = branch;
            if branch.is_redirected() {
                self.revalidate_emails(&service);
            }
        }
        self.recompute_errors();
    }

    /// Validate every field, Email fields against the current service
    /// selection. Returns `true` when no field reports an error.
    pub fn validate_all_fields(&mut self) -> bool {
        let service = self.service_value().to_string();
        for field in &mut self.fields {
            let is_valid = if field.input_kind() == InputKind::Email {
                field.validate_with_context(&service)
            } else {
                field.validate().is_valid
            };
            self.validity.insert(field.name().to_string(), is_valid);
        }
        self.recompute_errors();
        tracing::debug!(has_errors = self.state.has_errors, "all fields validated");
        !self.state.has_errors
    }

    pub fn is_form_valid(&self) -> bool {
        !self.fields.is_empty()
            && !self.state.has_errors
            && self
                .fields
                .iter()
                .filter(|field| field.is_required())
                .all(|field| self.state.has_value(field.name()))
    }

    pub fn is_submit_disabled(&self) -> bool {
        !self.is_form_valid()
            || self.state.submission == SubmissionState::Loading
            || self.state.journey_branch.is_redirected()
    }

    /// Hand the collected values to `sink`. Does nothing unless the form is
    /// valid.
    pub fn submit_form(&mut self, sink: &mut impl EventSink) -> bool {
        if !self.is_form_valid() {
            tracing::debug!("submit skipped, form invalid");
            return false;
        }
        self.state.submission = SubmissionState::Loading;
        self.submit_label = self.options.submitting_label.to_string();
        let payload = self.payload();
        tracing::info!(fields = payload.len(), "emitting prechatsubmit");
        sink.prechat_submit(&payload);
        true
    }

    /// User-facing submit entry point.
    pub fn handle_submit(
        &mut self,
        event: &mut SubmitEvent,
        sink: &mut impl EventSink,
    ) -> SubmitOutcome {
        event.prevent_default();
        if self.state.journey_branch.is_redirected() {
            tracing::debug!(branch = %self.state.journey_branch, "submit blocked by redirect");
            return SubmitOutcome::Redirected;
        }
        if self.state.submission == SubmissionState::Loading {
            return SubmitOutcome::InFlight;
        }
        self.validate_all_fields();
        if self.submit_form(sink) {
            SubmitOutcome::Submitted
        } else {
            SubmitOutcome::Invalid
        }
    }

    /// The chat transport accepted the submission.
    pub fn submission_succeeded(&mut self) {
        self.state.submission = SubmissionState::Submitted;
    }

    /// The chat transport rejected the submission; the form may be sent again.
    pub fn submission_failed(&mut self) {
        self.state.submission = SubmissionState::Idle;
        self.submit_label = self.options.submit_label.to_string();
    }

    /// Flat name → value map in rendering order.
    pub fn payload(&self) -> PrechatPayload {
        self.state
            .values
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    fn revalidate_emails(&mut self, service: &str) {
        for field in &mut self.fields {
            if field.input_kind() == InputKind::Email {
                let is_valid = field.validate_with_context(service);
                self.validity.insert(field.name().to_string(), is_valid);
            }
        }
    }

    fn recompute_errors(&mut self) {
        self.state.has_errors = self.validity.values().any(|is_valid| !is_valid);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::domain::fallback_descriptors;
    use crate::form::events::MockEventSink;

    use super::*;

    fn form() -> FormController {
        FormController::new(fallback_descriptors(), FormOptions::default())
    }

    fn fill_valid(form: &mut FormController) {
        assert!(form.input("Service_Selection", "Contract Staffing"));
        assert!(form.input("Name", "John Doe"));
        assert!(form.input("Email_Address", "john.doe@company.com"));
        assert!(form.input("Phone_Number", "+971501234567"));
    }

    #[test]
    fn starts_invalid_with_submit_disabled() {
        let form = form();
        assert!(!form.is_form_valid());
        assert!(form.is_submit_disabled());
        assert!(!form.has_errors());
        assert_eq!(form.journey_branch(), JourneyBranch::None);
        assert_eq!(form.submit_label(), "Start Conversation");
    }

    #[test]
    fn records_field_changes() {
        let mut form = form();
        form.handle_field_change(FieldChange::new("Name", "John Doe", true));
        assert_eq!(form.values().get("Name"), Some(&FieldValue::from("John Doe")));
        form.handle_field_change(FieldChange::new("Name", "", false));
        assert!(form.has_errors());
    }

    #[test]
    fn service_change_drives_journey() {
        let mut form = form();
        form.handle_field_change(FieldChange::new("Service_Selection", "I'm looking for a job", true));
        assert!(form.show_job_seeker_message());
        assert!(!form.show_partnership_message());
        assert!(form.is_submit_disabled());
        form.handle_field_change(FieldChange::new("Service_Selection", "Partnership enquiry", true));
        assert_eq!(form.journey_branch(), JourneyBranch::Partnership);
        assert!(form.redirect_message().is_some());
        form.handle_field_change(FieldChange::new("Service_Selection", "Contract Staffing", true));
        assert_eq!(form.journey_branch(), JourneyBranch::None);
        assert_eq!(form.redirect_message(), None);
    }

    #[test]
    fn redirect_branch_clears_business_email_error() {
        let mut form = form();
        form.input("Email_Address", "user@gmail.com");
        form.input("Service_Selection", "Contract Staffing");
        assert!(!form.validate_all_fields());
        assert_eq!(
            form.field("Email_Address").unwrap().error_message(),
            "Please use your business email address"
        );
        form.input("Service_Selection", "I'm looking for a job");
        assert_eq!(form.field("Email_Address").unwrap().error_message(), "");
        assert!(form.field("Email_Address").unwrap().is_valid());
    }

    #[test]
    fn submit_emits_flat_payload() {
        let mut form = form();
        fill_valid(&mut form);
        assert!(form.is_form_valid());
        assert!(!form.is_submit_disabled());

        let mut sink = MockEventSink::new();
        sink.expect_prechat_submit()
            .withf(|payload| {
                payload.len() == 4
                    && payload.get("Service_Selection") == Some(&FieldValue::from("Contract Staffing"))
                    && payload.get("Name") == Some(&FieldValue::from("John Doe"))
                    && payload.get("Email_Address") == Some(&FieldValue::from("john.doe@company.com"))
                    && payload.get("Phone_Number") == Some(&FieldValue::from("+971501234567"))
            })
            .times(1)
            .return_const(());

        let mut event = SubmitEvent::new();
        assert_eq!(form.handle_submit(&mut event, &mut sink), SubmitOutcome::Submitted);
        assert!(event.default_prevented());
        assert_eq!(form.submission(), SubmissionState::Loading);
        assert_eq!(form.submit_label(), "Starting Chat...");
        assert!(form.is_submit_disabled());
    }

    #[test]
    fn redirected_submit_emits_nothing() {
        let mut form = form();
        fill_valid(&mut form);
        form.input("Service_Selection", "I'm looking for a job");

        let mut sink = MockEventSink::new();
        sink.expect_prechat_submit().times(0);
        let mut event = SubmitEvent::new();
        assert_eq!(form.handle_submit(&mut event, &mut sink), SubmitOutcome::Redirected);
        assert!(event.default_prevented());
        assert_eq!(form.submission(), SubmissionState::Idle);
        assert!(form.field("Name").unwrap().is_valid());
    }

    #[test]
    fn invalid_submit_surfaces_field_errors() {
        let mut form = form();
        let mut sink = MockEventSink::new();
        sink.expect_prechat_submit().times(0);
        let mut event = SubmitEvent::new();
        assert_eq!(form.handle_submit(&mut event, &mut sink), SubmitOutcome::Invalid);
        assert!(form.has_errors());
        assert_eq!(form.field("Name").unwrap().error_message(), "Name is required");
        assert_eq!(form.field("Service_Selection").unwrap().error_message(), "Service is required");
    }

    #[test]
    fn second_submit_while_loading_is_ignored() {
        let mut form = form();
        fill_valid(&mut form);
        let mut sink = MockEventSink::new();
        sink.expect_prechat_submit().times(1).return_const(());
        let mut event = SubmitEvent::new();
        form.handle_submit(&mut event, &mut sink);
        assert_eq!(form.handle_submit(&mut event, &mut sink), SubmitOutcome::InFlight);
    }

    #[test]
    fn failed_submission_restores_button() {
        let mut form = form();
        fill_valid(&mut form);
        let mut sent: Vec<PrechatPayload> = Vec::new();
        assert!(form.submit_form(&mut sent));
        form.submission_failed();
        assert_eq!(form.submission(), SubmissionState::Idle);
        assert_eq!(form.submit_label(), "Start Conversation");
        assert!(!form.is_submit_disabled());
        form.submit_form(&mut sent);
        form.submission_succeeded();
        assert_eq!(form.submission(), SubmissionState::Submitted);
        assert_eq!(sent.len(), 2);
    }

    #[test]
    fn empty_descriptor_list_is_never_valid() {
        let mut form = FormController::new(Vec::new(), FormOptions::default());
        form.handle_field_change(FieldChange::new("Name", "John Doe", true));
        assert!(!form.is_form_valid());
        assert!(form.is_submit_disabled());
        let mut sent: Vec<PrechatPayload> = Vec::new();
        assert!(!form.submit_form(&mut sent));
        assert!(sent.is_empty());
    }

    #[test]
    fn choice_default_seeds_values_and_journey() {
        let mut descriptors = fallback_descriptors();
        for choice in &mut descriptors[0].choice_list_values {
            choice.is_default_value = choice.choice_list_value_name == "Partnership enquiry";
        }
        let form = FormController::new(descriptors, FormOptions::default());
        assert_eq!(form.service_value(), "Partnership enquiry");
        assert_eq!(form.journey_branch(), JourneyBranch::Partnership);
    }

    #[test]
    fn blur_marks_untouched_field_invalid() {
        let mut form = form();
        form.blur("Name");
        assert!(form.has_errors());
        assert_eq!(form.field("Name").unwrap().css_class(), "field-error");

        let mut quiet = FormController::new(
            fallback_descriptors(),
            FormOptions::default().with_validate_on_blur(false),
        );
        quiet.blur("Name");
        assert!(!quiet.has_errors());
    }

    #[test]
    fn replacing_descriptors_remounts_fields() {
        let mut form = form();
        fill_valid(&mut form);
        form.set_descriptors(vec![FieldDescriptor::new(
            "Custom_Field",
            "Custom Field",
            crate::domain::FieldType::Text,
        )]);
        assert_eq!(form.fields().len(), 1);
        assert_eq!(form.values().len(), 1);
        assert!(form.is_form_valid());
    }

    #[test]
    fn changes_for_unmounted_names_are_ignored() {
        let mut form = form();
        fill_valid(&mut form);
        form.handle_field_change(FieldChange::new("Bogus", "x", false));
        assert!(!form.has_errors());
        assert!(form.values().get("Bogus").is_none());

        let mut sink = MockEventSink::new();
        sink.expect_prechat_submit()
            .withf(|payload| payload.len() == 4)
            .times(1)
            .return_const(());
        let mut event = SubmitEvent::new();
        assert_eq!(form.handle_submit(&mut event, &mut sink), SubmitOutcome::Submitted);
    }

    #[test]
    fn duplicate_field_names_mount_once() {
        let descriptors = vec![
            FieldDescriptor::new("Name", "First", crate::domain::FieldType::Text).required(true),
            FieldDescriptor::new("Name", "Second", crate::domain::FieldType::Text).required(true),
        ];
        let mut form = FormController::new(descriptors, FormOptions::default());
        assert_eq!(form.fields().len(), 1);
        assert!(form.input("Name", "John"));
        assert!(form.is_form_valid());

        let mut sent: Vec<PrechatPayload> = Vec::new();
        let mut event = SubmitEvent::new();
        assert_eq!(form.handle_submit(&mut event, &mut sent), SubmitOutcome::Submitted);
        assert_eq!(sent[0].get("Name"), Some(&FieldValue::from("John")));
    }
}
