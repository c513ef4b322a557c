//! Data Transfer Objects for the HTTP API.
//!
//! Figure and path DTOs live in the routes module; this file holds the
//! request/response shapes that only exist at the HTTP boundary.

use serde::{Deserialize, Serialize};

pub use crate::api::{Figure, Path3d, ShrubRequest, ShrubResponse, ShrubSummary};
use crate::services::job_tracker::{JobProgress, LogEntry};

/// Response for job creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobResponse {
    /// Job ID for tracking the async render
    pub job_id: String,
    pub message: String,
}

/// Job status response for async renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStatusResponse {
    pub job_id: String,
    pub status: String,
    pub progress: JobProgress,
    pub logs: Vec<LogEntry>,
    /// Serialised `ShrubResponse` once completed
    pub result: Option<serde_json::Value>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Crate version
    pub build: String,
}
