//! Application state for the HTTP server.

use std::time::Duration;

use crate::config::ServerConfig;
use crate::models::ParamLimits;
use crate::services::job_tracker::JobTracker;
use crate::services::BuildOptions;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Background render jobs
    pub job_tracker: JobTracker,
    /// Ceilings applied to user controls
    pub limits: ParamLimits,
    pub build_options: BuildOptions,
    /// How long finished jobs stay queryable
    pub job_retention: Duration,
}

impl AppState {
    pub fn new(limits: ParamLimits) -> Self {
        Self {
            job_tracker: JobTracker::new(),
            limits,
            build_options: BuildOptions::default(),
            job_retention: Duration::from_secs(crate::config::DEFAULT_JOB_RETENTION_SECS),
        }
    }

    /// Create state from the server configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            job_retention: config.job_retention,
            ..Self::new(config.limits)
        }
    }
}
