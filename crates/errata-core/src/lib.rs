//! Error normalization for JSON HTTP APIs
//!
//! Converts application errors, framework HTTP exceptions and request
//! validation failures into one stable [`ErrorEnvelope`]. The hosting
//! framework calls [`handle_application_error`] or [`handle_http_exception`]
//! and writes the returned [`ErrorResponse`].

#![allow(clippy::must_use_candidate)]

mod application;
mod class;
mod dispatch;
mod envelope;
mod error;
mod exception;
#[cfg(feature = "http")]
mod response;
mod validation;

pub use application::ApplicationError;
pub use class::{API_EXCEPTION, DEFAULT_CODE, DEFAULT_ERROR_TYPE, DEFAULT_MESSAGE, ErrorClass};
pub use dispatch::{ErrorResponse, handle_application_error, handle_http_exception};
pub use envelope::{ErrorBody, ErrorEnvelope, SubError, error_schema};
pub use error::HttpError;
pub use exception::{ErrorMetadata, HttpException};
pub use validation::{
    SCHEMA_FIELDS_CODE, SCHEMA_FIELDS_ERROR_TYPE, SCHEMA_FIELDS_MESSAGE, ValidationFailure, convert_validation_messages,
};
