//! Dashboard page served at `/`.
//!
//! The template is static HTML with `{{NAME}}` placeholders for the form
//! defaults; plotting happens client-side with plotly.js.

use crate::models::params::{
    DEFAULT_LEFT_DEG, DEFAULT_MAX_START, DEFAULT_RIGHT_DEG, DEFAULT_Z_STEP, FORM_N_STARTS,
};
use crate::models::{ParamLimits, Scheme};

pub const PAGE_TITLE: &str = "Collatzin'";

const TEMPLATE: &str = include_str!("../../assets/dashboard.html");

fn scheme_options() -> String {
    [Scheme::Binary, Scheme::Ternary]
        .iter()
        .map(|scheme| {
            let selected = if *scheme == Scheme::default() {
                " selected"
            } else {
                ""
            };
            format!(
                "        <option value=\"{}\"{}>{}</option>",
                scheme.as_str(),
                selected,
                scheme.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the dashboard with the default controls and the server's trajectory ceiling.
pub fn render_dashboard(limits: &ParamLimits) -> String {
    TEMPLATE
        .replace("{{TITLE}}", PAGE_TITLE)
        .replace("{{LEFT_DEG}}", &DEFAULT_LEFT_DEG.to_string())
        .replace("{{RIGHT_DEG}}", &DEFAULT_RIGHT_DEG.to_string())
        .replace("{{Z_STEP}}", &DEFAULT_Z_STEP.to_string())
        .replace("{{N_STARTS}}", &FORM_N_STARTS.to_string())
        .replace("{{MAX_TRAJECTORIES}}", &limits.max_trajectories.to_string())
        .replace("{{MAX_START}}", &DEFAULT_MAX_START.to_string())
        .replace("{{SCHEME_OPTIONS}}", &scheme_options())
}
