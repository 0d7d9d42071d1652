use http::StatusCode;

/// Trait for domain errors that can be rendered as an error envelope
///
/// Implemented by [`ApplicationError`](crate::ApplicationError) and
/// [`HttpException`](crate::HttpException), and by any feature crate error
/// that wants to reach clients through
/// [`ApplicationError::from_http_error`](crate::ApplicationError::from_http_error).
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Categorical tag placed in `error_type` (e.g. `ApiException`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}
