use axum::extract::Request;
use errata_core::HttpException;
use http::StatusCode;

/// Fallback for requests that match no route
pub async fn not_found(request: Request) -> HttpException {
    tracing::debug!(method = %request.method(), path = %request.uri().path(), "no route matched");
    HttpException::new(StatusCode::NOT_FOUND)
}

/// Fallback for routes that exist but do not accept the request method
pub async fn method_not_allowed(request: Request) -> HttpException {
    tracing::debug!(method = %request.method(), path = %request.uri().path(), "method not allowed");
    HttpException::new(StatusCode::METHOD_NOT_ALLOWED)
}
