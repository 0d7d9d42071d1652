//! Normalization of request validation messages into sub-errors

use http::StatusCode;
use serde_json::Value;

use crate::SubError;

/// Status every validation failure is normalized to
pub const SCHEMA_FIELDS_CODE: StatusCode = StatusCode::BAD_REQUEST;
/// Error type every validation failure is normalized to
pub const SCHEMA_FIELDS_ERROR_TYPE: &str = "SchemaFieldsException";
/// Message every validation failure is normalized to
pub const SCHEMA_FIELDS_MESSAGE: &str = "Request input schema is invalid";

/// Envelope fragment built from request validation messages
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    pub code: StatusCode,
    pub error_type: &'static str,
    pub message: &'static str,
    pub errors: Vec<SubError>,
}

/// Flatten `{location_type: {field: messages}}` into ordered sub-errors
///
/// Locations are visited in input order, then fields within each location.
/// Each field yields exactly one sub-error whose messages are passed through
/// verbatim. Locations (or a top-level value) that are not objects are
/// skipped.
pub fn convert_validation_messages(messages: &Value) -> ValidationFailure {
    let errors = messages
        .as_object()
        .map(|locations| {
            locations
                .iter()
                .filter_map(|(location_type, fields)| fields.as_object().map(|fields| (location_type, fields)))
                .flat_map(|(location_type, fields)| {
                    fields
                        .iter()
                        .map(move |(field, messages)| SubError::new(field, location_type, messages.clone()))
                })
                .collect()
        })
        .unwrap_or_default();

    ValidationFailure {
        code: SCHEMA_FIELDS_CODE,
        error_type: SCHEMA_FIELDS_ERROR_TYPE,
        message: SCHEMA_FIELDS_MESSAGE,
        errors,
    }
}
