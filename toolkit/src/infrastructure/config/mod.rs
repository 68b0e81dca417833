//! Configuration management for devtoolkit.
//!
//! Settings are built from defaults overridden by environment variables with
//! the `DEVTOOLKIT` prefix and `__` as the nesting separator, for example
//! `DEVTOOLKIT__SERVER__PORT=9000` or `DEVTOOLKIT__DIFF__MAX_LINES=500`.
//!
//! # Example
//!
//! ```
//! use devtoolkit::infrastructure::config::Settings;
//!
//! let settings = Settings::new().expect("Failed to load configuration");
//! ```

pub mod diff;
pub mod server;
pub mod telemetry;

pub use diff::DiffSettings;
pub use server::ServerSettings;
pub use telemetry::TelemetrySettings;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Server settings.
    pub server: ServerSettings,
    /// Telemetry settings.
    pub telemetry: TelemetrySettings,
    /// Diff checker limits.
    #[serde(default)]
    pub diff: DiffSettings,
}

impl Settings {
    /// Creates a new settings instance from environment variables and defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built or deserialized.
    pub fn new() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(Environment::with_prefix("DEVTOOLKIT").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Settings made of the defaults alone, ignoring the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the defaults cannot be deserialized.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("telemetry.service_name", "devtoolkit")?
            .set_default("telemetry.log_level", "info")?
            .set_default("telemetry.json", true)?
            .set_default("diff.max_lines", 10_000)?
            .set_default("diff.max_cells", 4_000_000)
    }
}
