mod extract;
mod fallback;
mod health;
mod metrics;
mod panic;
mod schema;

use std::net::SocketAddr;

use axum::Router;
use errata_config::{Config, ErrorsConfig};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use extract::{InputRejection, SCHEMA_FIELD, ValidJson, ValidQuery};
pub use panic::PanicResponder;

/// Route every failure of `router` through the error envelope
///
/// Unmatched paths become 404 and disallowed methods 405 envelopes, handler
/// panics become 500 envelopes, and every 4xx/5xx response is counted.
/// Call after all routes are registered.
pub fn error_handling(router: Router, config: &ErrorsConfig) -> Router {
    router
        .fallback(fallback::not_found)
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .layer(CatchPanicLayer::custom(PanicResponder::new(config.expose_panic_message)))
        .layer(axum::middleware::from_fn(metrics::error_metrics_middleware))
}

/// Assembled server with built-in routes and error handling
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration and the application's routes
    pub fn new(config: &Config, routes: Router) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let mut app = Router::new();

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        if config.server.schema.enabled {
            app = app.route(&config.server.schema.path, axum::routing::get(schema::schema_handler));
        }

        app = app.merge(routes);
        app = error_handling(app, &config.errors);
        app = app.layer(TraceLayer::new_for_http());

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::routing::get;
    use errata_core::{ErrorClass, HttpException};
    use http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    const PET_NOT_FOUND: ErrorClass = ErrorClass::new(StatusCode::NOT_FOUND, "Pet not found", "NotFoundException");

    #[derive(Debug, Deserialize)]
    struct NewPet {
        name: String,
    }

    #[derive(Debug, Deserialize)]
    struct Page {
        page: u32,
    }

    fn routes() -> Router {
        Router::new()
            .route(
                "/pets/{id}",
                get(|| async { Err::<(), _>(PET_NOT_FOUND.error().with_reason("deleted")) }),
            )
            .route(
                "/pets",
                get(|ValidQuery(query): ValidQuery<Page>| async move { format!("page {}", query.page) })
                    .post(|ValidJson(pet): ValidJson<NewPet>| async move { (StatusCode::CREATED, pet.name) }),
            )
            .route(
                "/abort",
                get(|| async { Err::<(), _>(HttpException::new(StatusCode::CONFLICT).with_message("locked")) }),
            )
            .route("/panic", get(explode))
    }

    async fn explode() -> StatusCode {
        panic!("database handle poisoned")
    }

    fn app(expose_panic_message: bool) -> Router {
        error_handling(routes(), &ErrorsConfig { expose_panic_message })
    }

    async fn call(router: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    #[tokio::test]
    async fn application_error_from_handler() {
        let (status, body) = call(app(false), get_request("/pets/7")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({
                "error": {
                    "code": 404,
                    "message": "Pet not found",
                    "error_type": "NotFoundException",
                    "reason": "deleted"
                }
            })
        );
    }

    #[tokio::test]
    async fn unmatched_route_is_not_found_envelope() {
        let (status, body) = call(app(false), get_request("/owners")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({"error": {"code": 404, "message": "Something went wrong", "error_type": "Not Found"}})
        );
    }

    #[tokio::test]
    async fn wrong_method_is_method_not_allowed_envelope() {
        let request = Request::delete("/pets").body(Body::empty()).unwrap();
        let (status, body) = call(app(false), request).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"]["code"], 405);
        assert_eq!(body["error"]["error_type"], "Method Not Allowed");
    }

    #[tokio::test]
    async fn abort_with_message() {
        let (status, body) = call(app(false), get_request("/abort")).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body,
            json!({"error": {"code": 409, "message": "locked", "error_type": "Conflict"}})
        );
    }

    #[tokio::test]
    async fn panic_becomes_internal_server_error() {
        let (status, body) = call(app(false), get_request("/panic")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"error": {"code": 500, "message": "Something went wrong", "error_type": "Internal Server Error"}})
        );
    }

    #[tokio::test]
    async fn panic_message_exposed_when_configured() {
        let (_, body) = call(app(true), get_request("/panic")).await;
        assert_eq!(body["error"]["reason"], "database handle poisoned");
    }

    #[tokio::test]
    async fn json_body_mismatch_is_schema_fields_error() {
        let (status, body) = call(app(false), json_post("/pets", r#"{"species": "cat"}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], 400);
        assert_eq!(body["error"]["error_type"], "SchemaFieldsException");
        assert_eq!(body["error"]["message"], "Request input schema is invalid");
        assert_eq!(body["error"]["errors"][0]["location"], "_schema");
        assert_eq!(body["error"]["errors"][0]["location_type"], "json");
    }

    #[tokio::test]
    async fn malformed_json_is_schema_fields_error() {
        let (status, body) = call(app(false), json_post("/pets", "{oops")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "error": {
                    "code": 400,
                    "message": "Request input schema is invalid",
                    "error_type": "SchemaFieldsException"
                }
            })
        );
    }

    #[tokio::test]
    async fn missing_content_type_is_unsupported_media_type() {
        let request = Request::post("/pets").body(Body::from(r#"{"name": "Rex"}"#)).unwrap();
        let (status, body) = call(app(false), request).await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(body["error"]["error_type"], "Unsupported Media Type");
    }

    #[tokio::test]
    async fn bad_query_is_schema_fields_error() {
        let (status, body) = call(app(false), get_request("/pets?page=first")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["error_type"], "SchemaFieldsException");
        assert_eq!(body["error"]["errors"][0]["location_type"], "query");
    }

    #[tokio::test]
    async fn server_routes_health_and_schema() {
        let server = Server::new(&Config::default(), routes());
        let router = server.into_router();

        let response = router.clone().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let (status, schema) = call(router, get_request("/errors/schema")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(schema["$defs"].get("ErrorBody").is_some());
    }

    #[test]
    fn default_listen_address() {
        let server = Server::new(&Config::default(), Router::new());
        assert_eq!(server.listen_address(), SocketAddr::from(([0, 0, 0, 0], 3000)));
    }
}
