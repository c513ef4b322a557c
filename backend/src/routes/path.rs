use serde::{Deserialize, Serialize};

use crate::models::Scheme;

/// A single orbit drawn as a turtle polyline.
///
/// `values[k]` is the orbit value at point `k`; `xs/ys/zs` have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path3d {
    pub start: u64,
    pub scheme: Scheme,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub zs: Vec<f64>,
    pub values: Vec<u64>,
    /// Iterations performed (stopping time unless truncated).
    pub steps: usize,
    /// The orbit hit the step cap before reaching 1.
    pub truncated: bool,
}

impl Path3d {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Final height, `steps * z_step`.
    pub fn height(&self) -> f64 {
        self.zs.last().copied().unwrap_or(0.0)
    }
}

/// Planar turtle path (no time axis).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path2d {
    pub start: u64,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

/// Query parameters for the single-trajectory endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathQuery {
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(default)]
    pub left_deg: Option<f64>,
    #[serde(default)]
    pub right_deg: Option<f64>,
    #[serde(default)]
    pub z_step: Option<f64>,
}

/// Route path for a single trajectory.
pub const GET_PATH: &str = "/path/{start}";
