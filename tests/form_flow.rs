use pretty_assertions::assert_eq;
use prechat_form::prelude::*;
use prechat_form::{FieldDescriptor, FieldType, InputKind, fallback_descriptors};

fn fallback_form() -> FormController {
    FormController::new(fallback_descriptors(), FormOptions::default())
}

#[test]
fn valid_fallback_submission_emits_exact_payload() {
    let mut form = fallback_form();
    form.input("Service_Selection", "Contract Staffing");
    form.input("Name", "John Doe");
    form.input("Email_Address", "john.doe@company.com");
    form.input("Phone_Number", "+971501234567");

    assert!(!form.has_errors());
    assert!(form.is_form_valid());
    assert!(!form.is_submit_disabled());

    let mut sent: Vec<PrechatPayload> = Vec::new();
    let mut event = SubmitEvent::new();
    assert_eq!(form.handle_submit(&mut event, &mut sent), SubmitOutcome::Submitted);
    assert!(event.default_prevented());
    assert_eq!(form.submission(), SubmissionState::Loading);
    assert_eq!(form.submit_label(), "Starting Chat...");

    let pairs: Vec<(&str, FieldValue)> = sent[0]
        .iter()
        .map(|(name, value)| (name, value.clone()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Service_Selection", FieldValue::from("Contract Staffing")),
            ("Name", FieldValue::from("John Doe")),
            ("Email_Address", FieldValue::from("john.doe@company.com")),
            ("Phone_Number", FieldValue::from("+971501234567")),
        ]
    );
}

#[test]
fn payload_serializes_as_flat_object() {
    let mut form = fallback_form();
    form.input("Name", "John Doe");
    let json = serde_json::to_value(form.payload()).unwrap();
    assert_eq!(json["Name"], serde_json::json!("John Doe"));
    assert_eq!(json["Service_Selection"], serde_json::json!(""));
}

#[test]
fn job_seeker_branch_blocks_submission() {
    let mut form = fallback_form();
    form.input("Service_Selection", "I'm looking for a job");
    assert_eq!(form.journey_branch(), JourneyBranch::JobSeeker);
    assert!(form.is_submit_disabled());
    assert_eq!(form.redirect_message(), Some(prechat_form::JOB_SEEKER_MESSAGE));

    form.input("Name", "John Doe");
    form.input("Email_Address", "john.doe@gmail.com");
    form.input("Phone_Number", "+971501234567");
    assert!(form.is_form_valid());
    assert!(form.is_submit_disabled());

    let mut sent: Vec<PrechatPayload> = Vec::new();
    let mut event = SubmitEvent::new();
    assert_eq!(form.handle_submit(&mut event, &mut sent), SubmitOutcome::Redirected);
    assert!(sent.is_empty());
    assert_eq!(form.values().get("Name"), Some(&FieldValue::from("John Doe")));
}

#[test]
fn leaving_redirect_branch_keeps_values() {
    let mut form = fallback_form();
    form.input("Name", "John Doe");
    form.input("Service_Selection", "Partnership enquiry");
    assert_eq!(form.journey_branch(), JourneyBranch::Partnership);
    form.input("Service_Selection", "Contract Staffing");
    assert_eq!(form.journey_branch(), JourneyBranch::None);
    assert_eq!(form.values().get("Name"), Some(&FieldValue::from("John Doe")));
}

#[test]
fn personal_email_rejected_for_business_services_on_submit() {
    let mut form = fallback_form();
    form.input("Service_Selection", "Contract Staffing");
    form.input("Name", "John Doe");
    form.input("Email_Address", "john@gmail.com");
    form.input("Phone_Number", "+971501234567");

    let mut sent: Vec<PrechatPayload> = Vec::new();
    let mut event = SubmitEvent::new();
    assert_eq!(form.handle_submit(&mut event, &mut sent), SubmitOutcome::Invalid);
    assert!(sent.is_empty());
    let email = form.field("Email_Address").unwrap();
    assert_eq!(email.error_message(), "Please use your business email address");
    assert_eq!(email.input_kind(), InputKind::Email);
    assert!(form.is_submit_disabled());
}

#[test]
fn custom_denylist_and_journey_values() {
    let options = FormOptions::default()
        .with_service_field("Reason")
        .with_journey_values("Careers", "Partners")
        .with_personal_domain("example.net");
    let descriptors = vec![
        FieldDescriptor::new("Reason", "Reason", FieldType::ChoiceList).with_choices(vec![
            prechat_form::ChoiceListValue::new("Sales", "Sales", 1),
            prechat_form::ChoiceListValue::new("Careers", "Careers", 2),
        ]),
        FieldDescriptor::new("Email", "Email", FieldType::Email).required(true),
    ];
    let mut form = FormController::new(descriptors, options);
    form.input("Reason", "Sales");
    form.input("Email", "me@example.net");
    assert!(!form.validate_all_fields());

    form.input("Reason", "Careers");
    assert_eq!(form.journey_branch(), JourneyBranch::JobSeeker);
    assert!(form.field("Email").unwrap().is_valid());
}

#[test]
fn field_presentation_helpers() {
    let form = fallback_form();
    let phone = form.field("Phone_Number").unwrap();
    assert_eq!(phone.input_kind().as_str(), "tel");
    assert_eq!(phone.help_text(), Some("Enter with country code (e.g., +971501234567)"));
    assert_eq!(phone.display_label(), "Phone *");
    assert_eq!(phone.css_class(), "");

    let service = form.field("Service_Selection").unwrap();
    let labels: Vec<&str> = service
        .choice_options()
        .unwrap()
        .iter()
        .map(|option| option.label.as_str())
        .collect();
    assert_eq!(
        labels,
        ["Contract Staffing", "Partnership enquiry", "I'm looking for a job"]
    );
    assert_eq!(form.header_message(), "Please fill the form to interact with our agent.");
}

#[test]
fn empty_descriptor_list_is_never_valid() {
    let mut form = FormController::new(Vec::new(), FormOptions::default());
    form.handle_field_change(FieldChange::new("Name", "John Doe", true));
    assert!(!form.is_form_valid());
    assert!(form.is_submit_disabled());

    let form = PreChatUI::new(serde_json::Value::Null)
        .build_from_fields(&serde_json::json!([]))
        .unwrap();
    assert_eq!(form.fields().len(), 4);
}
