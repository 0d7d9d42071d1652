use http::{HeaderMap, StatusCode};

use crate::{ApplicationError, ErrorEnvelope, HttpException, SubError, convert_validation_messages};

/// Rendered error ready to be written by the hosting framework
#[derive(Debug, Clone)]
pub struct ErrorResponse {
    pub envelope: ErrorEnvelope,
    pub status: StatusCode,
    pub headers: HeaderMap,
}

/// Fields gathered from an exception before the envelope is built
///
/// Unset fields fall back to the [`ApplicationError`] defaults.
struct ErrorPayload {
    code: StatusCode,
    error_type: String,
    message: Option<String>,
    errors: Option<Vec<SubError>>,
}

impl From<ErrorPayload> for ApplicationError {
    fn from(payload: ErrorPayload) -> Self {
        let error = Self::new().with_code(payload.code).with_error_type(payload.error_type);
        let error = match payload.message {
            Some(message) => error.with_message(message),
            None => error,
        };
        match payload.errors {
            Some(errors) => error.with_errors(errors),
            None => error,
        }
    }
}

/// Render an application error with its own status and no extra headers
pub fn handle_application_error(error: ApplicationError) -> ErrorResponse {
    let status = error.status_code();
    let envelope = error.render();

    tracing::debug!(
        status = status.as_u16(),
        error_type = %envelope.error.error_type,
        "rendering application error"
    );

    ErrorResponse {
        envelope,
        status,
        headers: HeaderMap::new(),
    }
}

/// Render a framework HTTP exception, applying any attached metadata
///
/// Explicit `errors` win over raw validation `messages`. Validation
/// `messages` always normalize the response to 400 `SchemaFieldsException`,
/// replacing the exception's own status and any explicit message.
pub fn handle_http_exception(exception: HttpException) -> ErrorResponse {
    let mut headers = HeaderMap::new();
    let mut payload = ErrorPayload {
        code: exception.status(),
        error_type: exception.name().to_owned(),
        message: None,
        errors: None,
    };

    if let Some(data) = exception.into_metadata().filter(|data| !data.is_empty()) {
        if let Some(message) = data.message {
            payload.message = Some(message);
        }

        if let Some(errors) = data.errors {
            payload.errors = Some(errors);
        } else if let Some(messages) = data.messages {
            let failure = convert_validation_messages(&messages);
            payload.code = failure.code;
            payload.error_type = failure.error_type.to_owned();
            payload.message = Some(failure.message.to_owned());
            payload.errors = Some(failure.errors);
        }

        if let Some(extra) = data.headers {
            headers = extra;
        }
    }

    let status = payload.code;
    let envelope = ApplicationError::from(payload).render();

    tracing::debug!(
        status = status.as_u16(),
        error_type = %envelope.error.error_type,
        "rendering http exception"
    );

    ErrorResponse {
        envelope,
        status,
        headers,
    }
}
