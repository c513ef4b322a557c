use serde::{Deserialize, Serialize};

use super::figure::Figure;
use crate::models::ShrubParams;

/// Aggregate numbers about the rendered trajectories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShrubSummary {
    /// Sampled trajectories (hero excluded).
    pub trajectory_count: usize,
    pub hero_included: bool,
    pub longest_start: Option<u64>,
    pub longest_steps: usize,
    pub mean_steps: f64,
    pub truncated_count: usize,
    pub total_points: usize,
}

/// Shrub figure together with the explanation panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShrubResponse {
    pub figure: Figure,
    /// Markdown with MathJax (`$...$`) blocks.
    pub explanation: String,
    pub summary: ShrubSummary,
    pub params: ShrubParams,
}

/// Route path for figure generation.
pub const SHRUB: &str = "/shrub";
