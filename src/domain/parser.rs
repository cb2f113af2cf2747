use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use super::schema::{
    ChoiceListValue, FieldDescriptor, FieldType, dedup_descriptors, sort_descriptors,
};

pub const PRECHAT_FORM_TYPE: &str = "PreChat";

pub const SERVICE_FIELD: &str = "Service_Selection";
pub const CONTRACT_STAFFING: &str = "Contract Staffing";
pub const PARTNERSHIP_ENQUIRY: &str = "Partnership enquiry";
pub const JOB_SEEKER: &str = "I'm looking for a job";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfiguration {
    #[serde(default)]
    forms: Vec<RawForm>,
    #[serde(default)]
    choice_list_config: Option<RawChoiceListConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawForm {
    #[serde(default)]
    form_type: String,
    #[serde(default)]
    form_fields: Vec<RawField>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChoiceListConfig {
    #[serde(default)]
    choice_list: Vec<RawChoiceList>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChoiceList {
    choice_list_id: String,
    #[serde(default)]
    choice_list_values: Vec<ChoiceListValue>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawField {
    name: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    labels: Option<RawLabels>,
    #[serde(default, rename = "type")]
    field_type: Option<String>,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    order: i64,
    #[serde(default)]
    choice_list_id: Option<String>,
    #[serde(default)]
    choice_list_values: Option<Vec<ChoiceListValue>>,
    /// Older descriptor shape: `[{label, value}]` without ordering or defaults.
    #[serde(default)]
    choice_list: Option<Vec<LegacyChoice>>,
}

#[derive(Debug, Deserialize)]
struct RawLabels {
    #[serde(default)]
    display: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LegacyChoice {
    label: String,
    value: String,
}

/// Resolve the ordered descriptor list for a host configuration.
///
/// Malformed configuration and configurations without pre-chat fields both
/// degrade to [`fallback_descriptors`].
pub fn descriptors_from_configuration(config: &Value) -> Vec<FieldDescriptor> {
    match parse_configuration(config) {
        Ok(fields) if !fields.is_empty() => fields,
        Ok(_) => {
            tracing::warn!("configuration has no pre-chat fields, using fallback descriptors");
            fallback_descriptors()
        }
        Err(err) => {
            tracing::warn!(error = %format!("{err:#}"), "malformed configuration, using fallback descriptors");
            fallback_descriptors()
        }
    }
}

/// Strictly parse a host configuration into sorted descriptors.
pub fn parse_configuration(config: &Value) -> Result<Vec<FieldDescriptor>> {
    if config.is_null() {
        return Ok(Vec::new());
    }
    let raw = RawConfiguration::deserialize(config).context("invalid pre-chat configuration")?;
    let choice_lists = raw.choice_list_config.unwrap_or_default().choice_list;
    let Some(form) = raw
        .forms
        .into_iter()
        .find(|form| form.form_type == PRECHAT_FORM_TYPE)
    else {
        return Ok(Vec::new());
    };

    let mut fields: Vec<FieldDescriptor> = form
        .form_fields
        .into_iter()
        .map(|field| convert_field(field, &choice_lists))
        .collect();
    dedup_descriptors(&mut fields);
    sort_descriptors(&mut fields);
    Ok(fields)
}

/// Parse a bare array of field descriptors, as handed over by hosts that
/// pass the field list directly instead of a full configuration.
pub fn parse_field_list(fields: &Value) -> Result<Vec<FieldDescriptor>> {
    if fields.is_null() {
        return Ok(Vec::new());
    }
    let raw = Vec::<RawField>::deserialize(fields).context("invalid pre-chat field list")?;
    let mut fields: Vec<FieldDescriptor> = raw
        .into_iter()
        .map(|field| convert_field(field, &[]))
        .collect();
    dedup_descriptors(&mut fields);
    sort_descriptors(&mut fields);
    Ok(fields)
}

/// Static descriptor list used when configuration yields no fields.
pub fn fallback_descriptors() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new(SERVICE_FIELD, "Service", FieldType::ChoiceList)
            .required(true)
            .with_order(1)
            .with_choices(vec![
                ChoiceListValue::new(CONTRACT_STAFFING, CONTRACT_STAFFING, 1),
                ChoiceListValue::new(PARTNERSHIP_ENQUIRY, PARTNERSHIP_ENQUIRY, 2),
                ChoiceListValue::new(JOB_SEEKER, JOB_SEEKER, 3),
            ]),
        FieldDescriptor::new("Name", "Name", FieldType::Text)
            .required(true)
            .with_order(2),
        FieldDescriptor::new("Email_Address", "Email", FieldType::Email)
            .required(true)
            .with_order(3),
        FieldDescriptor::new("Phone_Number", "Phone", FieldType::Phone)
            .required(true)
            .with_order(4),
    ]
}

fn convert_field(field: RawField, choice_lists: &[RawChoiceList]) -> FieldDescriptor {
    let RawField {
        name,
        label,
        labels,
        field_type,
        required,
        order,
        choice_list_id,
        choice_list_values,
        choice_list,
    } = field;

    let legacy = choice_list.map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| ChoiceListValue::new(item.value, item.label, idx as i64))
            .collect::<Vec<_>>()
    });

    let field_type = match field_type.as_deref() {
        Some(raw) => FieldType::parse(raw),
        None if legacy.as_ref().is_some_and(|items| !items.is_empty()) => FieldType::ChoiceList,
        None => FieldType::Text,
    };

    let label = label
        .or_else(|| labels.and_then(|labels| labels.display))
        .unwrap_or_else(|| name.clone());

    let choices = if field_type == FieldType::ChoiceList {
        match (choice_list_values, legacy, choice_list_id) {
            (Some(values), _, _) if !values.is_empty() => values,
            (_, Some(values), _) if !values.is_empty() => values,
            (_, _, Some(id)) => choice_lists
                .iter()
                .find(|list| list.choice_list_id == id)
                .map(|list| list.choice_list_values.clone())
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    } else {
        Vec::new()
    };

    FieldDescriptor {
        name,
        label,
        field_type,
        required,
        order,
        choice_list_values: choices,
    }
}
