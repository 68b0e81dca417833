use anyhow::{Context, Result};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Builder for setting up logging.
///
/// Logs always go to stderr so that command output on stdout stays clean.
pub struct TelemetryBuilder {
    service_name: String,
    service_version: String,
    log_level: String,
    json: bool,
}

impl TelemetryBuilder {
    /// Creates a builder logging at `info` in JSON.
    pub fn new(service_name: impl Into<String>, service_version: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: service_version.into(),
            log_level: "info".to_string(),
            json: true,
        }
    }

    /// Sets the default filter directive used when `RUST_LOG` is unset.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Chooses between JSON and human readable log lines.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Installs the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(self) -> Result<()> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let fmt_layer = if self.json {
            fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_span_events(FmtSpan::CLOSE)
                .boxed()
        } else {
            fmt::layer().with_writer(std::io::stderr).boxed()
        };

        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("Failed to init subscriber")?;

        tracing::debug!(
            service = %self.service_name,
            version = %self.service_version,
            "telemetry initialized"
        );
        Ok(())
    }
}
