//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use errata_config::{Config, ErrorsConfig, HealthConfig, SchemaConfig, ServerConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    schema: SchemaConfig::default(),
                },
                errors: ErrorsConfig::default(),
                telemetry: None,
            },
        }
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Serve the error schema under a custom path
    pub fn with_schema_path(mut self, path: &str) -> Self {
        self.config.server.schema.path = path.to_owned();
        self
    }

    /// Include panic messages in 500 responses
    pub fn exposing_panics(mut self) -> Self {
        self.config.errors.expose_panic_message = true;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
