//! HTTP surface: every path and method answers with the current report as HTML.

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Router;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::github::{IssueSearch, RepoId};
use crate::output::format_html;
use crate::report::{build_report, ReportWindow};

/// Shared state for the report handler
pub struct ReportState<S> {
    pub client: S,
    pub repositories: Vec<RepoId>,
    pub window_days: u32,
    /// Date the window ends on, asked once per request
    pub today: fn() -> NaiveDate,
}

/// Build the router: a single fallback handler serves every request
pub fn router<S>(state: ReportState<S>) -> Router
where
    S: IssueSearch + Send + Sync + 'static,
{
    Router::new()
        .fallback(report_handler::<S>)
        .with_state(Arc::new(state))
}

/// Build a fresh report for this request and render it as HTML.
///
/// Search failures are logged and answered with a bare 500.
async fn report_handler<S>(
    State(state): State<Arc<ReportState<S>>>,
) -> Result<Html<String>, StatusCode>
where
    S: IssueSearch + Send + Sync + 'static,
{
    let window = ReportWindow::ending_at((state.today)(), state.window_days);

    match build_report(&state.client, &state.repositories, window).await {
        Ok(report) => Ok(Html(format_html(&report))),
        Err(e) if e.is_transient() => {
            tracing::warn!("Report failed, GitHub asked us to slow down: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
        Err(e) => {
            tracing::error!("Report failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Serve reports on 0.0.0.0:`port` until the process is stopped
pub async fn serve<S>(state: ReportState<S>, port: u16) -> Result<()>
where
    S: IssueSearch + Send + Sync + 'static,
{
    let app = router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to port {}", port))?;

    tracing::info!("Serving reports on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")
}
