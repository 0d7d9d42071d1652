use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use serde_json::Value;
use thiserror::Error;

use crate::{HttpError, SubError};

/// Name used when a status code has no canonical reason phrase
const UNKNOWN_NAME: &str = "Unknown Error";

/// HTTP exception raised by the hosting framework or an abort in a handler
///
/// Unmatched routes, disallowed methods and panics all surface as one of
/// these. Handlers may attach [`ErrorMetadata`] to enrich the rendered
/// envelope.
#[derive(Debug, Clone, Error)]
#[error("{status}")]
pub struct HttpException {
    status: StatusCode,
    data: Option<ErrorMetadata>,
}

impl HttpException {
    pub const fn new(status: StatusCode) -> Self {
        Self { status, data: None }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Default name of the exception, the status' canonical reason phrase
    pub fn name(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or(UNKNOWN_NAME)
    }

    pub const fn metadata(&self) -> Option<&ErrorMetadata> {
        self.data.as_ref()
    }

    pub fn into_metadata(self) -> Option<ErrorMetadata> {
        self.data
    }

    #[must_use]
    pub fn with_metadata(mut self, data: ErrorMetadata) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.data_mut().message = Some(message.into());
        self
    }

    /// Attach already-structured sub-errors
    #[must_use]
    pub fn with_errors(mut self, errors: impl IntoIterator<Item = SubError>) -> Self {
        self.data_mut().errors = Some(errors.into_iter().collect());
        self
    }

    /// Attach raw validation messages keyed by location, then field
    #[must_use]
    pub fn with_messages(mut self, messages: Value) -> Self {
        self.data_mut().messages = Some(messages);
        self
    }

    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.data_mut().headers.get_or_insert_with(HeaderMap::new).append(name, value);
        self
    }

    fn data_mut(&mut self) -> &mut ErrorMetadata {
        self.data.get_or_insert_with(ErrorMetadata::default)
    }
}

impl HttpError for HttpException {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_type(&self) -> &str {
        self.name()
    }

    fn client_message(&self) -> String {
        self.data
            .as_ref()
            .and_then(|data| data.message.clone())
            .unwrap_or_else(|| self.name().to_owned())
    }
}

/// Side-channel data attached to an [`HttpException`]
///
/// Every key is optional; unset keys leave the rendered envelope untouched.
#[derive(Debug, Clone, Default)]
pub struct ErrorMetadata {
    /// Explicit message for the envelope
    pub message: Option<String>,
    /// Structured sub-errors, used verbatim; takes precedence over `messages`
    pub errors: Option<Vec<SubError>>,
    /// Raw validation structure: location type, then field, then messages
    pub messages: Option<Value>,
    /// Extra response headers
    pub headers: Option<HeaderMap>,
}

impl ErrorMetadata {
    pub const fn is_empty(&self) -> bool {
        self.message.is_none() && self.errors.is_none() && self.messages.is_none() && self.headers.is_none()
    }
}
