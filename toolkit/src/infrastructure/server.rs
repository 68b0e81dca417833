use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use diff_engine::LcsDiff;
use metrics_exporter_prometheus::PrometheusBuilder;
use serde::Deserialize;
use tokio::net::TcpListener;

use crate::checker::{CheckerError, DiffReport, check_texts};
use crate::infrastructure::config::{DiffSettings, Settings};

/// Body of `POST /api/diff`. Missing texts count as empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRequest {
    /// The original text.
    #[serde(default)]
    pub old_text: String,
    /// The modified text.
    #[serde(default)]
    pub new_text: String,
}

struct AppState {
    limits: DiffSettings,
}

/// Errors returned by the diff API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request was rejected before diffing.
    #[error(transparent)]
    Checker(#[from] CheckerError),
    /// The body is not a JSON `DiffRequest`.
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
    /// The diff task did not complete.
    #[error("Diff task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidBody(rejection) => rejection.status(),
            Self::Checker(CheckerError::NothingToCompare) => StatusCode::BAD_REQUEST,
            Self::Checker(
                CheckerError::TooManyLines { .. } | CheckerError::TableTooLarge { .. },
            ) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        metrics::counter!("diff_rejected_total", "status" => status.as_str().to_owned()).increment(1);
        tracing::warn!(status = %status, error = %self, "diff request failed");
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

async fn health_check() -> &'static str {
    "OK"
}

async fn diff_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<DiffRequest>, JsonRejection>,
) -> Result<Json<DiffReport>, ApiError> {
    metrics::counter!("diff_requests_total").increment(1);
    let Json(request) = payload?;

    // Quadratic work, kept off the async workers.
    let limits = state.limits.clone();
    let report = tokio::task::spawn_blocking(move || {
        check_texts(&LcsDiff::new(), &limits, &request.old_text, &request.new_text)
    })
    .await??;

    #[allow(clippy::cast_precision_loss)]
    let records = report.lines().len() as f64;
    metrics::histogram!("diff_lines").record(records);
    Ok(Json(report))
}

/// Builds the API routes: health checks and `POST /api/diff`.
pub fn router(limits: DiffSettings) -> Router {
    Router::new()
        .route("/health/live", get(health_check))
        .route("/health/ready", get(health_check))
        .route("/api/diff", post(diff_handler))
        .with_state(Arc::new(AppState { limits }))
}

/// Serves `app` on an already bound listener until the task is cancelled.
///
/// # Errors
///
/// Returns an error if the server stops with an I/O error.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    tracing::info!("API listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

/// Runs the HTTP API with a Prometheus `/metrics` endpoint.
///
/// # Errors
///
/// Returns an error if the metrics recorder cannot be installed or the
/// server fails to bind or run.
pub async fn run_server(config: &Settings) -> anyhow::Result<()> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {e}"))?;

    let app = router(config.diff.clone())
        .route("/metrics", get(move || std::future::ready(handle.render())));

    let addr = config.server.bind_address()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    serve(listener, app).await
}
