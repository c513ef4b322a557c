//! Turtle path generation for Collatz orbits.
//!
//! The turtle starts at the origin. For every iteration `n -> nxt` it turns
//! according to the residue class of `n`, walks `1 / ln(nxt + 1)` along its
//! heading in the x–y plane and rises one `z_step`, so the final height of a
//! path is its stopping time scaled by `z_step`.

use crate::error::{ShrubError, ShrubResult};
use crate::models::{Scheme, TurtleConfig};
use crate::routes::path::{Path2d, Path3d};

/// Turn angles of the planar variant.
pub const FLAT_LEFT_DEG: f64 = 5.65;
pub const FLAT_RIGHT_DEG: f64 = 8.0;

fn step_length(next: u64) -> f64 {
    1.0 / (next as f64 + 1.0).ln()
}

/// Generate the 3-D path of `start`.
///
/// Iteration stops at 1 or after `max_steps` iterations, whichever comes
/// first; in the latter case the returned path is marked `truncated`.
pub fn collatz_path_3d(
    start: u64,
    turtle: &TurtleConfig,
    scheme: Scheme,
    max_steps: usize,
) -> ShrubResult<Path3d> {
    if start == 0 {
        return Err(ShrubError::InvalidStart(start));
    }

    let left_rad = turtle.left_deg.to_radians();
    let right_rad = turtle.right_deg.to_radians();
    let mut angle = turtle.initial_heading_deg.to_radians();

    let (mut x, mut y) = (0.0_f64, 0.0_f64);
    let mut xs = vec![x];
    let mut ys = vec![y];
    let mut zs = vec![0.0];
    let mut values = vec![start];

    let mut n = start;
    let mut step_no = 0;
    while n != 1 && step_no < max_steps {
        let nxt = scheme.checked_next(n).ok_or(ShrubError::Overflow {
            start,
            step: step_no,
            value: n,
        })?;

        angle += scheme.turn(n, left_rad, right_rad);

        let len = step_length(nxt);
        x += len * angle.cos();
        y += len * angle.sin();
        step_no += 1;

        xs.push(x);
        ys.push(y);
        zs.push(step_no as f64 * turtle.z_step);
        values.push(nxt);
        n = nxt;
    }

    Ok(Path3d {
        start,
        scheme,
        xs,
        ys,
        zs,
        values,
        steps: step_no,
        truncated: n != 1,
    })
}

/// Planar binary path: heading starts along +x and the turn is keyed on the
/// parity of the value being left, with the step length taken from the new value.
pub fn collatz_path_2d(
    start: u64,
    left_deg: f64,
    right_deg: f64,
    max_steps: usize,
) -> ShrubResult<Path2d> {
    if start == 0 {
        return Err(ShrubError::InvalidStart(start));
    }

    let left_rad = left_deg.to_radians();
    let right_rad = right_deg.to_radians();
    let mut angle = 0.0_f64;
    let (mut x, mut y) = (0.0_f64, 0.0_f64);
    let mut xs = vec![x];
    let mut ys = vec![y];

    let mut n = start;
    let mut step_no = 0;
    while n != 1 && step_no < max_steps {
        angle += Scheme::Binary.turn(n, left_rad, right_rad);
        n = Scheme::Binary.checked_next(n).ok_or(ShrubError::Overflow {
            start,
            step: step_no,
            value: n,
        })?;

        let len = step_length(n);
        x += len * angle.cos();
        y += len * angle.sin();
        xs.push(x);
        ys.push(y);
        step_no += 1;
    }

    Ok(Path2d { start, xs, ys })
}
