//! Extractors whose rejections render as error envelopes

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use axum::response::{IntoResponse, Response};
use errata_core::HttpException;
use http::StatusCode;
use serde_json::{Map, Value};

/// Field name used for failures that apply to a whole request part
pub const SCHEMA_FIELD: &str = "_schema";

const MALFORMED_JSON: &str = "Invalid JSON body.";

/// JSON body extractor that rejects with an error envelope
///
/// Bodies that parse but do not match `T` become a validation failure under
/// the `json` location; other rejections keep their own status.
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(InputRejection))]
pub struct ValidJson<T>(pub T);

/// Query string extractor that rejects with an error envelope
#[derive(Debug, Clone, Copy, Default, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(InputRejection))]
pub struct ValidQuery<T>(pub T);

/// Rejection produced by [`ValidJson`] and [`ValidQuery`]
#[derive(Debug)]
pub struct InputRejection(HttpException);

impl InputRejection {
    pub fn into_exception(self) -> HttpException {
        self.0
    }
}

impl From<JsonRejection> for InputRejection {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(error) => Self(invalid_input("json", error.body_text())),
            JsonRejection::JsonSyntaxError(error) => {
                tracing::debug!(error = %error.body_text(), "malformed JSON body");
                Self(malformed_input("json", MALFORMED_JSON))
            }
            other => Self(HttpException::new(other.status()).with_message(other.body_text())),
        }
    }
}

impl From<QueryRejection> for InputRejection {
    fn from(rejection: QueryRejection) -> Self {
        Self(invalid_input("query", rejection.body_text()))
    }
}

impl IntoResponse for InputRejection {
    fn into_response(self) -> Response {
        self.0.into_response()
    }
}

/// Validation failure for a whole request part, raised as 422
fn invalid_input(location_type: &str, message: String) -> HttpException {
    let mut fields = Map::new();
    fields.insert(SCHEMA_FIELD.to_owned(), Value::Array(vec![Value::String(message)]));

    let mut locations = Map::new();
    locations.insert(location_type.to_owned(), Value::Object(fields));

    HttpException::new(StatusCode::UNPROCESSABLE_ENTITY).with_messages(Value::Object(locations))
}

/// Request part that could not be parsed at all, raised as 400
///
/// The location maps to a list rather than fields, so it normalizes to a
/// `SchemaFieldsException` without sub-errors and parser details stay out
/// of the response.
fn malformed_input(location_type: &str, message: &str) -> HttpException {
    let mut locations = Map::new();
    locations.insert(
        location_type.to_owned(),
        Value::Array(vec![Value::String(message.to_owned())]),
    );

    HttpException::new(StatusCode::BAD_REQUEST).with_messages(Value::Object(locations))
}
