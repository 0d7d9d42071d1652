use http::StatusCode;
use thiserror::Error;

use crate::{API_EXCEPTION, ErrorBody, ErrorClass, ErrorEnvelope, HttpError, SubError};

/// Error raised by application code with full control over the envelope
///
/// Built from an [`ErrorClass`] (the base [`API_EXCEPTION`] family by
/// default). Empty overrides are ignored so code, message and error type
/// are always populated.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ApplicationError {
    status_code: StatusCode,
    message: String,
    error_type: String,
    reason: String,
    errors: Vec<SubError>,
}

impl ApplicationError {
    /// Error with the base defaults: 400, "Something went wrong", `ApiException`
    pub fn new() -> Self {
        API_EXCEPTION.error()
    }

    pub(crate) fn of_class(class: &ErrorClass) -> Self {
        Self {
            status_code: class.code,
            message: class.message.to_owned(),
            error_type: class.error_type.to_owned(),
            reason: class.reason.to_owned(),
            errors: Vec::new(),
        }
    }

    /// Convert any domain error into an application error
    pub fn from_http_error<E: HttpError + ?Sized>(error: &E) -> Self {
        Self::new()
            .with_code(error.status_code())
            .with_message(error.client_message())
            .with_error_type(error.error_type())
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        if !message.is_empty() {
            self.message = message;
        }
        self
    }

    #[must_use]
    pub const fn with_code(mut self, code: StatusCode) -> Self {
        self.status_code = code;
        self
    }

    #[must_use]
    pub fn with_error_type(mut self, error_type: impl Into<String>) -> Self {
        let error_type = error_type.into();
        if !error_type.is_empty() {
            self.error_type = error_type;
        }
        self
    }

    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        if !reason.is_empty() {
            self.reason = reason;
        }
        self
    }

    #[must_use]
    pub fn with_errors(mut self, errors: impl IntoIterator<Item = SubError>) -> Self {
        self.errors = errors.into_iter().collect();
        self
    }

    pub const fn status_code(&self) -> StatusCode {
        self.status_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    /// Reason, if one was set
    pub fn reason(&self) -> Option<&str> {
        Some(self.reason.as_str()).filter(|reason| !reason.is_empty())
    }

    pub fn errors(&self) -> &[SubError] {
        &self.errors
    }

    /// Build the wire envelope
    ///
    /// `reason` and `errors` are only present when non-empty.
    pub fn render(&self) -> ErrorEnvelope {
        ErrorEnvelope {
            error: ErrorBody {
                code: self.status_code.as_u16(),
                message: self.message.clone(),
                error_type: self.error_type.clone(),
                reason: self.reason().map(str::to_owned),
                errors: self.errors.clone(),
            },
        }
    }
}

impl Default for ApplicationError {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpError for ApplicationError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    fn error_type(&self) -> &str {
        &self.error_type
    }

    fn client_message(&self) -> String {
        self.message.clone()
    }
}
