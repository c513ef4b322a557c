//! Shrub figure builder.
//!
//! Samples starting integers, turns each orbit into a labelled `scatter3d`
//! trace and optionally overlays the hero trajectory. Pure CPU work; HTTP
//! handlers run it on the blocking pool.

use tracing::debug;

use super::explanation::explanation_markdown;
use super::palette::{colour_for, HERO_COLOUR};
use super::sampling::sample_starts;
use super::turtle::collatz_path_3d;
use crate::error::ShrubResult;
use crate::models::params::DEFAULT_MAX_STEPS;
use crate::models::ShrubParams;
use crate::routes::figure::{Figure, FigureLayout, LineStyle, Scatter3dTrace, TextFont};
use crate::routes::path::Path3d;
use crate::routes::shrub::{ShrubResponse, ShrubSummary};

/// Tunables that are not exposed in the dashboard form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildOptions {
    pub max_steps: usize,
    /// Label every `label_stride`-th point (plus the last one).
    pub label_stride: usize,
    pub trajectory_width: f64,
    pub trajectory_opacity: f64,
    pub hero_width: f64,
    pub label_size: u32,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            label_stride: 10,
            trajectory_width: 1.0,
            trajectory_opacity: 0.3,
            hero_width: 4.0,
            label_size: 8,
        }
    }
}

/// `"n=<value>"` on every `stride`-th point and on the last point, empty elsewhere.
pub fn point_labels(values: &[u64], stride: usize) -> Vec<String> {
    let stride = stride.max(1);
    let last = values.len().saturating_sub(1);
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            if i % stride == 0 || i == last {
                format!("n={}", v)
            } else {
                String::new()
            }
        })
        .collect()
}

fn trajectory_trace(path: Path3d, max_start: u64, options: &BuildOptions) -> Scatter3dTrace {
    let colour = colour_for(path.start, max_start);
    let labels = point_labels(&path.values, options.label_stride);

    let mut trace = Scatter3dTrace::lines(
        path.xs,
        path.ys,
        path.zs,
        LineStyle {
            width: options.trajectory_width,
            color: colour.clone(),
        },
    );
    trace.mode = "lines+text".to_string();
    trace.text = Some(labels);
    trace.textposition = Some("top center".to_string());
    trace.textfont = Some(TextFont {
        size: options.label_size,
        color: colour,
    });
    trace.opacity = Some(options.trajectory_opacity);
    trace.hoverinfo = Some("skip".to_string());
    trace
}

fn hero_trace(path: Path3d, options: &BuildOptions) -> Scatter3dTrace {
    let name = format!("Hero {}", path.start);
    let mut trace = Scatter3dTrace::lines(
        path.xs,
        path.ys,
        path.zs,
        LineStyle {
            width: options.hero_width,
            color: HERO_COLOUR.to_string(),
        },
    );
    trace.name = Some(name);
    trace
}

#[derive(Default)]
struct SummaryAccumulator {
    count: usize,
    longest_start: Option<u64>,
    longest_steps: usize,
    total_steps: usize,
    truncated: usize,
    points: usize,
}

impl SummaryAccumulator {
    fn record(&mut self, path: &Path3d) {
        self.count += 1;
        self.total_steps += path.steps;
        self.points += path.len();
        if path.truncated {
            self.truncated += 1;
        }
        if self.longest_start.is_none() || path.steps > self.longest_steps {
            self.longest_start = Some(path.start);
            self.longest_steps = path.steps;
        }
    }

    fn finish(self, hero_included: bool, hero_points: usize) -> ShrubSummary {
        let mean_steps = if self.count == 0 {
            0.0
        } else {
            self.total_steps as f64 / self.count as f64
        };
        ShrubSummary {
            trajectory_count: self.count,
            hero_included,
            longest_start: self.longest_start,
            longest_steps: self.longest_steps,
            mean_steps,
            truncated_count: self.truncated,
            total_points: self.points + hero_points,
        }
    }
}

/// Build the figure, reporting `(done, total)` after every trajectory.
pub fn build_shrub_with_progress<F>(
    params: &ShrubParams,
    options: &BuildOptions,
    mut on_progress: F,
) -> ShrubResult<ShrubResponse>
where
    F: FnMut(usize, usize),
{
    let starts = sample_starts(params.n_starts, params.max_start, params.seed);
    let total = starts.len();
    debug!(
        trajectories = total,
        max_start = params.max_start,
        scheme = %params.scheme,
        "Building shrub"
    );

    let mut figure = Figure {
        data: Vec::with_capacity(total + 1),
        layout: FigureLayout::default(),
    };
    let mut summary = SummaryAccumulator::default();

    for (i, start) in starts.into_iter().enumerate() {
        let path = collatz_path_3d(start, &params.turtle, params.scheme, options.max_steps)?;
        summary.record(&path);
        figure
            .data
            .push(trajectory_trace(path, params.max_start, options));
        on_progress(i + 1, total);
    }

    let hero = params.scheme.hero();
    let mut hero_points = 0;
    let hero_included = hero < params.max_start;
    if hero_included {
        let path = collatz_path_3d(hero, &params.turtle, params.scheme, options.max_steps)?;
        hero_points = path.len();
        figure.data.push(hero_trace(path, options));
    }

    Ok(ShrubResponse {
        figure,
        explanation: explanation_markdown(params.scheme),
        summary: summary.finish(hero_included, hero_points),
        params: params.clone(),
    })
}

/// Build the figure for `params`.
pub fn build_shrub(params: &ShrubParams, options: &BuildOptions) -> ShrubResult<ShrubResponse> {
    build_shrub_with_progress(params, options, |_, _| {})
}
