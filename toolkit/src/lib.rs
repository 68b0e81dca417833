//! devtoolkit - diff checker service and CLI.
//!
//! This crate wraps the line diff engine with the state of the Diff Checker
//! tool, and exposes it through a command line interface and an HTTP API.

#![warn(clippy::pedantic)]

/// Diff checker session and reports.
pub mod checker;
/// Command line interface.
pub mod cli;
/// Infrastructure components (config, server, telemetry).
pub mod infrastructure;
