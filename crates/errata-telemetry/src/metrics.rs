//! Metric names and instruments recorded by the error layer

use std::sync::OnceLock;

use opentelemetry::global;
use opentelemetry::metrics::Counter;

/// Number of responses rendered with a 4xx or 5xx status
pub const HTTP_ERROR_COUNT: &str = "http.server.error.count";

/// Attribute carrying the numeric response status
pub const ATTR_STATUS_CODE: &str = "http.response.status_code";
/// Attribute carrying the status class (`4xx` or `5xx`)
pub const ATTR_ERROR_CLASS: &str = "error.class";

/// Counter for rendered error responses
///
/// Created on first use from the global meter provider, so [`crate::init`]
/// must run before the first error is recorded.
pub fn error_counter() -> &'static Counter<u64> {
    static COUNTER: OnceLock<Counter<u64>> = OnceLock::new();
    COUNTER.get_or_init(|| {
        global::meter("errata")
            .u64_counter(HTTP_ERROR_COUNT)
            .with_description("HTTP responses rendered as error envelopes")
            .build()
    })
}
