//! Dashboard controls and their defaults.
//!
//! [`ShrubRequest`] is what arrives from the browser (every field optional);
//! [`ShrubRequest::resolve`] turns it into concrete [`ShrubParams`].

use serde::{Deserialize, Serialize};

use super::rule::{Scheme, MAX_SAFE_START};
use crate::error::{ShrubError, ShrubResult};

pub const DEFAULT_LEFT_DEG: f64 = 8.65;
pub const DEFAULT_RIGHT_DEG: f64 = 16.0;
pub const DEFAULT_Z_STEP: f64 = 0.2;
pub const DEFAULT_INITIAL_HEADING_DEG: f64 = -75.0;
/// Value pre-filled in the dashboard form.
pub const FORM_N_STARTS: u64 = 500;
/// Value used when the request carries no trajectory count at all.
pub const DEFAULT_N_STARTS: u64 = 1000;
pub const DEFAULT_MAX_START: u64 = 1_000_000;
pub const MIN_MAX_START: u64 = 10;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// Turtle geometry shared by every trajectory of a figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurtleConfig {
    pub left_deg: f64,
    pub right_deg: f64,
    pub z_step: f64,
    pub initial_heading_deg: f64,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            left_deg: DEFAULT_LEFT_DEG,
            right_deg: DEFAULT_RIGHT_DEG,
            z_step: DEFAULT_Z_STEP,
            initial_heading_deg: DEFAULT_INITIAL_HEADING_DEG,
        }
    }
}

/// Upper bounds enforced on user controls.
///
/// `max_start_limit` must not exceed [`MAX_SAFE_START`], otherwise a sampled
/// orbit can overflow and fail the whole render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamLimits {
    pub max_trajectories: u64,
    pub max_start_limit: u64,
}

impl Default for ParamLimits {
    fn default() -> Self {
        Self {
            max_trajectories: 20_000,
            max_start_limit: MAX_SAFE_START,
        }
    }
}

/// Raw controls as sent by the dashboard form, query string or JSON body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShrubRequest {
    #[serde(default)]
    pub left_deg: Option<f64>,
    #[serde(default)]
    pub right_deg: Option<f64>,
    #[serde(default)]
    pub z_step: Option<f64>,
    #[serde(default)]
    pub n_starts: Option<i64>,
    #[serde(default)]
    pub max_start: Option<i64>,
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Fully resolved controls used to build a figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShrubParams {
    pub turtle: TurtleConfig,
    pub n_starts: u64,
    /// Exclusive upper bound of the sampled population `[2, max_start)`.
    pub max_start: u64,
    pub scheme: Scheme,
    pub seed: u64,
}

impl Default for ShrubParams {
    fn default() -> Self {
        Self {
            turtle: TurtleConfig::default(),
            n_starts: DEFAULT_N_STARTS,
            max_start: DEFAULT_MAX_START,
            scheme: Scheme::Binary,
            seed: DEFAULT_SEED,
        }
    }
}

/// Zero, missing and non-finite floats count as "not provided".
fn float_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v != 0.0 => v,
        _ => default,
    }
}

/// Zero and missing integers count as "not provided".
fn int_or(value: Option<i64>, default: u64) -> i64 {
    match value {
        Some(v) if v != 0 => v,
        _ => default as i64,
    }
}

impl ShrubRequest {
    /// Apply defaults and floors, then check the result against `limits`.
    pub fn resolve(&self, limits: &ParamLimits) -> ShrubResult<ShrubParams> {
        let scheme = match self.scheme.as_deref() {
            None | Some("") => Scheme::Binary,
            Some(s) => s.parse()?,
        };

        let n_starts = int_or(self.n_starts, DEFAULT_N_STARTS).max(1) as u64;
        let max_start = int_or(self.max_start, DEFAULT_MAX_START).max(MIN_MAX_START as i64) as u64;

        if n_starts > limits.max_trajectories {
            return Err(ShrubError::invalid_parameter(
                "n_starts",
                format!("{} exceeds limit of {}", n_starts, limits.max_trajectories),
            ));
        }
        if max_start > limits.max_start_limit {
            return Err(ShrubError::invalid_parameter(
                "max_start",
                format!("{} exceeds limit of {}", max_start, limits.max_start_limit),
            ));
        }

        Ok(ShrubParams {
            turtle: TurtleConfig {
                left_deg: float_or(self.left_deg, DEFAULT_LEFT_DEG),
                right_deg: float_or(self.right_deg, DEFAULT_RIGHT_DEG),
                z_step: float_or(self.z_step, DEFAULT_Z_STEP),
                initial_heading_deg: DEFAULT_INITIAL_HEADING_DEG,
            },
            n_starts,
            max_start,
            scheme,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
        })
    }
}
