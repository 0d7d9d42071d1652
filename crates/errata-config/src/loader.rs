use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, TOML parsing fails,
    /// or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config = Self::parse(&raw)?;
        tracing::debug!(config_path = %path.display(), "configuration loaded");

        Ok(config)
    }

    /// Parse and validate configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if TOML parsing or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if endpoint paths are malformed or collide, or
    /// telemetry settings are out of range
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_paths()?;
        self.validate_telemetry()?;
        Ok(())
    }

    /// Ensure enabled built-in endpoints have distinct absolute paths
    fn validate_paths(&self) -> anyhow::Result<()> {
        let health = &self.server.health;
        let schema = &self.server.schema;

        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/': {}", health.path);
        }

        if schema.enabled && !schema.path.starts_with('/') {
            anyhow::bail!("server.schema.path must start with '/': {}", schema.path);
        }

        if health.enabled && schema.enabled && health.path == schema.path {
            anyhow::bail!("server.health.path and server.schema.path must differ: {}", health.path);
        }

        Ok(())
    }

    fn validate_telemetry(&self) -> anyhow::Result<()> {
        let Some(ref telemetry) = self.telemetry else {
            return Ok(());
        };

        if let Some(ref tracing) = telemetry.tracing
            && !(0.0..=1.0).contains(&tracing.sampling_rate)
        {
            anyhow::bail!(
                "telemetry.tracing.sampling_rate must be between 0.0 and 1.0, got {}",
                tracing.sampling_rate
            );
        }

        if let Some(ref metrics) = telemetry.metrics
            && metrics.interval_seconds == 0
        {
            anyhow::bail!("telemetry.metrics.interval_seconds must be greater than 0");
        }

        Ok(())
    }
}
