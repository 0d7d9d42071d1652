use axum::Json;
use axum::response::IntoResponse;

/// Serve the JSON schema of the error envelope
pub async fn schema_handler() -> impl IntoResponse {
    Json(errata_core::error_schema())
}
