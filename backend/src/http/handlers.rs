//! HTTP handlers for the dashboard and REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the actual computation.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    response::Html,
    Json,
};
use futures::stream::Stream;
use std::convert::Infallible;
use std::time::Duration;
use tracing::info;

use super::dto::{CreateJobResponse, HealthResponse, JobStatusResponse};
use super::error::AppError;
use super::page::render_dashboard;
use super::state::AppState;
use crate::api::{Path3d, PathQuery, ShrubRequest, ShrubResponse, TurtleConfig};
use crate::models::params::{DEFAULT_LEFT_DEG, DEFAULT_RIGHT_DEG, DEFAULT_Z_STEP};
use crate::models::Scheme;
use crate::services::job_tracker::JobStatus;
use crate::services::{build_shrub, collatz_path_3d, shrub_processor};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Run CPU-bound work on the blocking pool.
///
/// A request timeout drops the returned future but not the blocking task: the
/// render still runs to completion and its result is discarded. Long renders
/// belong on `/v1/jobs`.
async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, crate::error::ShrubError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
        .map_err(AppError::from)
}

// =============================================================================
// Dashboard
// =============================================================================

/// GET /
pub async fn dashboard(State(state): State<AppState>) -> Html<String> {
    Html(render_dashboard(&state.limits))
}

/// GET /health
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        build: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

// =============================================================================
// Figures
// =============================================================================

async fn shrub_for(state: AppState, request: ShrubRequest) -> HandlerResult<ShrubResponse> {
    let params = request.resolve(&state.limits)?;
    info!(
        n_starts = params.n_starts,
        max_start = params.max_start,
        scheme = %params.scheme,
        "Rendering shrub"
    );
    let options = state.build_options;
    let data = run_blocking(move || build_shrub(&params, &options)).await?;
    Ok(Json(data))
}

/// GET /v1/shrub
///
/// Build a figure from query-string controls. Missing controls use the dashboard defaults.
pub async fn get_shrub(
    State(state): State<AppState>,
    Query(request): Query<ShrubRequest>,
) -> HandlerResult<ShrubResponse> {
    shrub_for(state, request).await
}

/// POST /v1/shrub
pub async fn post_shrub(
    State(state): State<AppState>,
    Json(request): Json<ShrubRequest>,
) -> HandlerResult<ShrubResponse> {
    shrub_for(state, request).await
}

/// GET /v1/path/{start}
///
/// A single trajectory with its orbit values.
pub async fn get_path(
    State(state): State<AppState>,
    Path(start): Path<u64>,
    Query(query): Query<PathQuery>,
) -> HandlerResult<Path3d> {
    let scheme = match query.scheme.as_deref() {
        None | Some("") => Scheme::Binary,
        Some(s) => s.parse()?,
    };
    let pick = |v: Option<f64>, default: f64| match v {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => default,
    };
    let turtle = TurtleConfig {
        left_deg: pick(query.left_deg, DEFAULT_LEFT_DEG),
        right_deg: pick(query.right_deg, DEFAULT_RIGHT_DEG),
        z_step: pick(query.z_step, DEFAULT_Z_STEP),
        ..TurtleConfig::default()
    };
    let max_steps = state.build_options.max_steps;

    let data = run_blocking(move || collatz_path_3d(start, &turtle, scheme, max_steps)).await?;
    Ok(Json(data))
}

// =============================================================================
// Async Job Management
// =============================================================================

/// POST /v1/jobs
///
/// Start a background render. Returns a job ID for tracking progress.
pub async fn create_job(
    State(state): State<AppState>,
    Json(request): Json<ShrubRequest>,
) -> Result<(StatusCode, Json<CreateJobResponse>), AppError> {
    let params = request.resolve(&state.limits)?;

    let retention = chrono::Duration::from_std(state.job_retention)
        .map_err(|e| AppError::Internal(format!("Invalid job retention: {}", e)))?;
    let pruned = state.job_tracker.prune_finished(chrono::Utc::now() - retention);
    if pruned > 0 {
        info!(pruned, "Pruned finished jobs");
    }

    let job_id = state.job_tracker.create_job();
    let response_job_id = job_id.clone();

    let tracker = state.job_tracker.clone();
    let options = state.build_options;
    tokio::spawn(async move {
        let _ = shrub_processor::process_shrub_async(job_id, tracker, params, options).await;
    });

    Ok((
        StatusCode::ACCEPTED,
        Json(CreateJobResponse {
            job_id: response_job_id.clone(),
            message: format!(
                "Render started. Track progress at /v1/jobs/{}/logs",
                response_job_id
            ),
        }),
    ))
}

/// GET /v1/jobs/{job_id}
pub async fn get_job_status(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> HandlerResult<JobStatusResponse> {
    let job = state
        .job_tracker
        .get_job(&job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {} not found", job_id)))?;

    Ok(Json(JobStatusResponse {
        job_id: job.job_id,
        status: format!("{:?}", job.status).to_lowercase(),
        progress: job.progress,
        logs: job.logs,
        result: job.result,
    }))
}

/// GET /v1/jobs/{job_id}/logs
///
/// Stream job logs via Server-Sent Events (SSE), ending with a `complete` event.
pub async fn stream_job_logs(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    if state.job_tracker.get_job(&job_id).is_none() {
        return Err(AppError::NotFound(format!("Job {} not found", job_id)));
    }

    let tracker = state.job_tracker.clone();
    let stream = async_stream::stream! {
        let mut last_log_count = 0;
        loop {
            // Status before logs, so the final log lines are never skipped.
            let job = tracker.get_job(&job_id);
            let logs = tracker.get_logs(&job_id);

            for log in logs.iter().skip(last_log_count) {
                let event_data = serde_json::to_string(log).unwrap_or_default();
                yield Ok(Event::default().data(event_data));
            }
            last_log_count = logs.len();

            match job {
                Some(job) if job.status != JobStatus::Running => {
                    // The figure itself is fetched from /v1/jobs/{id}; keep the event small.
                    let final_event = serde_json::json!({
                        "status": job.status,
                        "progress": job.progress,
                    });
                    yield Ok(Event::default()
                        .event("complete")
                        .data(serde_json::to_string(&final_event).unwrap_or_default()));
                    break;
                }
                Some(_) => {}
                None => break,
            }

            tokio::time::sleep(Duration::from_millis(200)).await;
        }
    };

    Ok(Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(1))
            .text("keep-alive"),
    ))
}
