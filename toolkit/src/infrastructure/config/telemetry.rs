//! Telemetry configuration.

use serde::Deserialize;

/// Logging settings.
#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    /// Service name attached to startup logs.
    pub service_name: String,
    /// Default filter directive, overridden by `RUST_LOG`.
    pub log_level: String,
    /// Emit JSON log lines instead of human readable ones.
    pub json: bool,
}
