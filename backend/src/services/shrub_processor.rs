//! Background shrub rendering.
//!
//! Runs the figure builder on the blocking pool and mirrors its progress into
//! the [`JobTracker`] so the dashboard can follow it via SSE.

use tracing::{info, warn};

use crate::models::ShrubParams;
use crate::routes::shrub::ShrubResponse;
use crate::services::job_tracker::{JobTracker, LogLevel};
use crate::services::shrub::{build_shrub_with_progress, BuildOptions};

/// Progress is logged at most this many times per job.
const LOG_CHECKPOINTS: usize = 10;

/// Render a shrub for `job_id`, storing the serialised [`ShrubResponse`] as the job result.
///
/// Designed to be spawned as a background task.
pub async fn process_shrub_async(
    job_id: String,
    tracker: JobTracker,
    params: ShrubParams,
    options: BuildOptions,
) -> Result<(), String> {
    tracker.log(
        &job_id,
        LogLevel::Info,
        format!(
            "Rendering {} trajectories below {} ({} rule)...",
            params.n_starts, params.max_start, params.scheme
        ),
    );

    let build = tokio::task::spawn_blocking({
        let job_id = job_id.clone();
        let tracker = tracker.clone();
        move || {
            build_shrub_with_progress(&params, &options, |done, total| {
                tracker.set_progress(&job_id, done, total);
                let every = (total / LOG_CHECKPOINTS).max(1);
                if done % every == 0 || done == total {
                    tracker.log(
                        &job_id,
                        LogLevel::Info,
                        format!("Computed {}/{} trajectories", done, total),
                    );
                }
            })
        }
    })
    .await;

    let response: ShrubResponse = match build {
        Ok(Ok(response)) => response,
        Ok(Err(e)) => {
            let msg = format!("Failed to build shrub: {}", e);
            warn!(job_id = %job_id, "{}", msg);
            tracker.fail_job(&job_id, &msg);
            return Err(msg);
        }
        Err(e) => {
            let msg = format!("Render task panic: {}", e);
            warn!(job_id = %job_id, "{}", msg);
            tracker.fail_job(&job_id, &msg);
            return Err(msg);
        }
    };

    if response.summary.truncated_count > 0 {
        tracker.log(
            &job_id,
            LogLevel::Warning,
            format!(
                "{} orbits hit the step cap before reaching 1",
                response.summary.truncated_count
            ),
        );
    }

    let result = match serde_json::to_value(&response) {
        Ok(value) => value,
        Err(e) => {
            let msg = format!("Failed to serialise figure: {}", e);
            tracker.fail_job(&job_id, &msg);
            return Err(msg);
        }
    };

    tracker.log(
        &job_id,
        LogLevel::Success,
        format!(
            "✓ Rendered {} traces ({} points)",
            response.figure.data.len(),
            response.summary.total_points
        ),
    );
    tracker.complete_job(&job_id, Some(result));
    info!(job_id = %job_id, "Shrub job completed");

    Ok(())
}
