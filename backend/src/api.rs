//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types served over HTTP and written by the
//! CLI. All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::{ParamLimits, Scheme, ShrubParams, ShrubRequest, TurtleConfig};
pub use crate::routes::figure::{
    AxisStyle, Figure, FigureLayout, LineStyle, Margin, SceneLayout, Scatter3dTrace, TextFont,
};
pub use crate::routes::path::{Path2d, Path3d, PathQuery};
pub use crate::routes::shrub::{ShrubResponse, ShrubSummary};
