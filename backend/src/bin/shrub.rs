//! Offline shrub renderer.
//!
//! Computes the same figure as the dashboard and writes it as plotly JSON,
//! ready for `Plotly.newPlot(el, fig.data, fig.layout)`.
//!
//! ```bash
//! collatz-shrub                        # 1000 starts below 1e6, binary rule
//! collatz-shrub 5000 2e5 ternary -o shrub.json
//! collatz-shrub 5000 --flat --pretty   # planar variant
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use collatz_dash::api::{ParamLimits, Path2d, ShrubParams, ShrubRequest};
use collatz_dash::models::params::DEFAULT_MAX_STEPS;
use collatz_dash::models::{Scheme, MAX_SAFE_START};
use collatz_dash::services::turtle::{FLAT_LEFT_DEG, FLAT_RIGHT_DEG};
use collatz_dash::services::{build_shrub, collatz_path_2d, sample_starts, BuildOptions};

const USAGE: &str = "Usage: collatz-shrub [N_STARTS] [MAX_START] [mode]";

#[derive(Debug, Parser)]
#[command(name = "collatz-shrub", version, about = "Render 3-D Collatz shrubs to plotly JSON")]
struct Cli {
    /// Number of random starting integers
    #[arg(default_value_t = 1000)]
    n_starts: u64,

    /// Exclusive upper bound for sampling (float notation such as 1e6 accepted)
    #[arg(default_value = "1000000")]
    max_start: String,

    /// "binary" or "ternary"
    #[arg(default_value = "binary")]
    mode: String,

    /// Left turn in degrees (even / 0 mod 3 step)
    #[arg(long)]
    left_deg: Option<f64>,

    /// Right turn in degrees (odd / 1 mod 3 step)
    #[arg(long)]
    right_deg: Option<f64>,

    /// Vertical rise per iteration
    #[arg(long)]
    z_step: Option<f64>,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Iteration cap per orbit
    #[arg(long, default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Planar binary variant (no time axis)
    #[arg(long)]
    flat: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Serialize)]
struct FlatShrub {
    paths: Vec<Path2d>,
    hero: Option<Path2d>,
}

fn parse_max_start(raw: &str) -> anyhow::Result<i64> {
    let value: f64 = raw
        .trim()
        .parse()
        .with_context(|| format!("invalid MAX_START '{}'\n{}", raw, USAGE))?;
    if !value.is_finite() {
        bail!("invalid MAX_START '{}'\n{}", raw, USAGE);
    }
    Ok(value as i64)
}

fn resolve(cli: &Cli) -> anyhow::Result<ShrubParams> {
    let request = ShrubRequest {
        left_deg: cli.left_deg,
        right_deg: cli.right_deg,
        z_step: cli.z_step,
        n_starts: Some(i64::try_from(cli.n_starts).context("N_STARTS too large")?),
        max_start: Some(parse_max_start(&cli.max_start)?),
        scheme: Some(cli.mode.clone()),
        seed: Some(cli.seed),
    };
    let limits = ParamLimits {
        max_trajectories: u64::MAX,
        max_start_limit: MAX_SAFE_START,
    };
    Ok(request.resolve(&limits)?)
}

fn render_flat(params: &ShrubParams, max_steps: usize) -> anyhow::Result<FlatShrub> {
    if params.scheme != Scheme::Binary {
        bail!("--flat only supports the binary rule");
    }
    let paths = sample_starts(params.n_starts, params.max_start, params.seed)
        .into_iter()
        .map(|start| collatz_path_2d(start, FLAT_LEFT_DEG, FLAT_RIGHT_DEG, max_steps))
        .collect::<Result<Vec<_>, _>>()?;
    let hero = collatz_path_2d(Scheme::Binary.hero(), FLAT_LEFT_DEG, FLAT_RIGHT_DEG, max_steps)?;
    Ok(FlatShrub {
        paths,
        hero: Some(hero),
    })
}

fn write_json<T: Serialize>(value: &T, output: Option<&PathBuf>, pretty: bool) -> anyhow::Result<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let params = resolve(&cli)?;
    info!(
        n_starts = params.n_starts,
        max_start = params.max_start,
        scheme = %params.scheme,
        "Rendering"
    );

    if cli.flat {
        let flat = render_flat(&params, cli.max_steps)?;
        write_json(&flat, cli.output.as_ref(), cli.pretty)?;
    } else {
        let options = BuildOptions {
            max_steps: cli.max_steps,
            ..BuildOptions::default()
        };
        let response = build_shrub(&params, &options)?;
        info!(
            traces = response.figure.data.len(),
            longest_steps = response.summary.longest_steps,
            "Rendered"
        );
        write_json(&response.figure, cli.output.as_ref(), cli.pretty)?;
    }

    if let Some(path) = &cli.output {
        info!("Wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["collatz-shrub"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let params = resolve(&cli(&[])).unwrap();
        assert_eq!(params.n_starts, 1000);
        assert_eq!(params.max_start, 1_000_000);
        assert_eq!(params.scheme, Scheme::Binary);
    }

    #[test]
    fn test_float_max_start() {
        let params = resolve(&cli(&["10", "2e5", "ternary"])).unwrap();
        assert_eq!(params.n_starts, 10);
        assert_eq!(params.max_start, 200_000);
        assert_eq!(params.scheme, Scheme::Ternary);
    }

    #[test]
    fn test_bad_mode() {
        let err = resolve(&cli(&["10", "100", "decimal"])).unwrap_err();
        assert!(err.to_string().contains("mode must be 'binary' or 'ternary'"));
    }

    #[test]
    fn test_bad_max_start() {
        assert!(resolve(&cli(&["10", "lots"])).is_err());
    }

    #[test]
    fn test_max_start_past_overflow_bound_rejected() {
        assert!(resolve(&cli(&["10", "12327829503"])).is_ok());
        let err = resolve(&cli(&["10", "1e12"])).unwrap_err();
        assert!(err.to_string().contains("max_start"));
    }

    #[test]
    fn test_flat_rejects_ternary() {
        let params = resolve(&cli(&["3", "100", "ternary"])).unwrap();
        assert!(render_flat(&params, 100).is_err());
    }

    #[test]
    fn test_flat_render() {
        let params = resolve(&cli(&["3", "100"])).unwrap();
        let flat = render_flat(&params, DEFAULT_MAX_STEPS).unwrap();
        assert_eq!(flat.paths.len(), 3);
        assert_eq!(flat.hero.unwrap().start, 837_799);
    }

    #[test]
    fn test_write_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fig.json");
        write_json(&serde_json::json!({"a": 1}), Some(&path), false).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.trim(), r#"{"a":1}"#);
    }
}
