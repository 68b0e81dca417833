/// Configuration management for the toolkit.
pub mod config;
/// HTTP API server.
pub mod server;
/// Telemetry setup for logging and metrics.
pub mod telemetry;
