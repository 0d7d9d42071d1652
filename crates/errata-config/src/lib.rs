#![allow(clippy::must_use_candidate)]

pub mod errors;
pub mod health;
mod loader;
pub mod schema;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use errors::*;
pub use health::*;
pub use schema::*;
pub use server::*;
pub use telemetry::TelemetryConfig;

/// Top-level Errata configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Error rendering configuration
    #[serde(default)]
    pub errors: ErrorsConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
