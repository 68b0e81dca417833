//! devtoolkit command line entry point.

use anyhow::Context;
use clap::Parser;
use devtoolkit::cli::{Cli, Commands, diff_files, render_report};
use devtoolkit::infrastructure::{config::Settings, server, telemetry::TelemetryBuilder};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Settings::new().context("Failed to load configuration")?;

    TelemetryBuilder::new(&config.telemetry.service_name, env!("CARGO_PKG_VERSION"))
        .with_log_level(&config.telemetry.log_level)
        .with_json(config.telemetry.json)
        .init()
        .context("Failed to initialize telemetry")?;

    match cli.command {
        Commands::Diff {
            old,
            new,
            format,
            swap,
        } => {
            let report = diff_files(&old, &new, swap, &config.diff)?;
            let (old_label, new_label) = if swap { (&new, &old) } else { (&old, &new) };
            let output = render_report(
                &report,
                format,
                &old_label.display().to_string(),
                &new_label.display().to_string(),
            )?;
            print!("{output}");
        }
        Commands::Serve => {
            info!("devtoolkit API starting...");
            tokio::select! {
                result = server::run_server(&config) => result?,
                _ = shutdown_signal() => info!("Shutdown signal received"),
            }
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl+C handler: {e}");
        std::future::pending::<()>().await;
    }
}
