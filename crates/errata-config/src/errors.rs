use serde::Deserialize;

/// Error rendering configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorsConfig {
    /// Put the panic message in the `reason` of 500 responses caused by a panic
    ///
    /// Leaks internals to clients; keep disabled outside development.
    #[serde(default)]
    pub expose_panic_message: bool,
}
