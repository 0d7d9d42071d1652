use axum::Json;
use axum::response::{IntoResponse, Response};

use crate::{ApplicationError, ErrorResponse, HttpException, handle_application_error, handle_http_exception};

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let mut response = (self.status, Json(self.envelope)).into_response();
        response.headers_mut().extend(self.headers);
        response
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        handle_application_error(self).into_response()
    }
}

impl IntoResponse for HttpException {
    fn into_response(self) -> Response {
        handle_http_exception(self).into_response()
    }
}
