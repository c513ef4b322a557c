//! Domain models: iteration rules and dashboard controls.

pub mod params;
pub mod rule;

pub use params::{ParamLimits, ShrubParams, ShrubRequest, TurtleConfig};
pub use rule::{stopping_time, Scheme, MAX_SAFE_START};
