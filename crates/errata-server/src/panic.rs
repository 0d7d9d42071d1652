use std::any::Any;

use axum::body::Body;
use axum::response::IntoResponse;
use errata_core::{HttpException, handle_http_exception};
use http::{Response, StatusCode};
use tower_http::catch_panic::ResponseForPanic;

/// Renders a panic inside a handler as a 500 error envelope
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicResponder {
    expose_message: bool,
}

impl PanicResponder {
    pub const fn new(expose_message: bool) -> Self {
        Self { expose_message }
    }
}

impl ResponseForPanic for PanicResponder {
    type ResponseBody = Body;

    fn response_for_panic(&mut self, err: Box<dyn Any + Send + 'static>) -> Response<Self::ResponseBody> {
        let message = panic_message(err.as_ref());
        tracing::error!(panic = message, "handler panicked");

        let mut response = handle_http_exception(HttpException::new(StatusCode::INTERNAL_SERVER_ERROR));
        if self.expose_message {
            response.envelope.error.reason = Some(message.to_owned());
        }

        response.into_response()
    }
}

fn panic_message(err: &(dyn Any + Send)) -> &str {
    err.downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic")
}
