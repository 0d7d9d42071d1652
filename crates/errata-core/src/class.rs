use http::StatusCode;

use crate::ApplicationError;

/// Status code used when an application error does not override it
pub const DEFAULT_CODE: StatusCode = StatusCode::BAD_REQUEST;
/// Message used when an application error does not override it
pub const DEFAULT_MESSAGE: &str = "Something went wrong";
/// Error type used when an application error does not override it
pub const DEFAULT_ERROR_TYPE: &str = "ApiException";

/// Base family every [`ApplicationError`] falls back to
pub const API_EXCEPTION: ErrorClass = ErrorClass::new(DEFAULT_CODE, DEFAULT_MESSAGE, DEFAULT_ERROR_TYPE);

/// Defaults shared by a family of application errors
///
/// Declare one per error family and build errors from it; overrides that
/// are not supplied keep the family's value.
///
/// ```
/// use errata_core::ErrorClass;
/// use http::StatusCode;
///
/// const NOT_FOUND: ErrorClass = ErrorClass::new(StatusCode::NOT_FOUND, "Resource not found", "NotFoundException");
///
/// let error = NOT_FOUND.error().with_message("no pet with id 7");
/// assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
/// assert_eq!(error.error_type(), "NotFoundException");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorClass {
    pub code: StatusCode,
    pub message: &'static str,
    pub error_type: &'static str,
    pub reason: &'static str,
}

impl ErrorClass {
    pub const fn new(code: StatusCode, message: &'static str, error_type: &'static str) -> Self {
        Self {
            code,
            message,
            error_type,
            reason: "",
        }
    }

    /// Attach a default reason to every error of this family
    #[must_use]
    pub const fn with_reason(mut self, reason: &'static str) -> Self {
        self.reason = reason;
        self
    }

    /// Build an error carrying this family's defaults
    pub fn error(&self) -> ApplicationError {
        ApplicationError::of_class(self)
    }
}

impl Default for ErrorClass {
    fn default() -> Self {
        API_EXCEPTION
    }
}
