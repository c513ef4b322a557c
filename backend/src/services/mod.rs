//! Service layer: orbit geometry, sampling and figure construction.
//!
//! Everything here is synchronous and CPU bound except
//! [`shrub_processor`], which drives the builder from a background task.

pub mod explanation;

pub mod job_tracker;

pub mod palette;

pub mod sampling;

pub mod shrub;
pub mod shrub_processor;

pub mod turtle;

#[cfg(test)]
mod shrub_tests;

pub use explanation::explanation_markdown;
pub use palette::colour_for;
pub use sampling::sample_starts;
pub use shrub::{build_shrub, build_shrub_with_progress, BuildOptions};
pub use turtle::{collatz_path_2d, collatz_path_3d};
