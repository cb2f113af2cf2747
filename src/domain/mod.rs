mod parser;
mod schema;

pub use parser::{
    CONTRACT_STAFFING, JOB_SEEKER, PARTNERSHIP_ENQUIRY, PRECHAT_FORM_TYPE, SERVICE_FIELD,
    descriptors_from_configuration, fallback_descriptors, parse_configuration, parse_field_list,
};
pub use schema::{
    ChoiceListValue, FieldDescriptor, FieldType, InputKind, dedup_descriptors, sort_descriptors,
};
