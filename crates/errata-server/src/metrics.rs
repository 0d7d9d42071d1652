use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use errata_telemetry::KeyValue;
use errata_telemetry::metrics::{ATTR_ERROR_CLASS, ATTR_STATUS_CODE, error_counter};
use http::StatusCode;

/// Count every response that leaves the error layer with a 4xx or 5xx status
pub async fn error_metrics_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;
    let status = response.status();

    let Some(class) = error_class(status) else {
        return response;
    };

    if class == ErrorClass::Server {
        tracing::error!(%method, %path, status = status.as_u16(), "request failed");
    }

    error_counter().add(1, &error_attributes(status, class));

    response
}

/// Status class recorded under `error.class`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorClass {
    Client,
    Server,
}

impl ErrorClass {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "4xx",
            Self::Server => "5xx",
        }
    }
}

/// Class of an error status, `None` for everything that is not counted
fn error_class(status: StatusCode) -> Option<ErrorClass> {
    if status.is_server_error() {
        Some(ErrorClass::Server)
    } else if status.is_client_error() {
        Some(ErrorClass::Client)
    } else {
        None
    }
}

fn error_attributes(status: StatusCode, class: ErrorClass) -> [KeyValue; 2] {
    [
        KeyValue::new(ATTR_STATUS_CODE, i64::from(status.as_u16())),
        KeyValue::new(ATTR_ERROR_CLASS, class.as_str()),
    ]
}
