#[cfg(test)]
mod tests {
    use crate::models::{Scheme, ShrubParams, TurtleConfig, MAX_SAFE_START};
    use crate::services::sampling::sample_starts;
    use crate::services::shrub::{build_shrub, build_shrub_with_progress, point_labels, BuildOptions};

    fn small_params(n_starts: u64, max_start: u64, scheme: Scheme) -> ShrubParams {
        ShrubParams {
            turtle: TurtleConfig::default(),
            n_starts,
            max_start,
            scheme,
            seed: 42,
        }
    }

    #[test]
    fn test_point_labels_stride_and_last() {
        let values: Vec<u64> = (1..=23).collect();
        let labels = point_labels(&values, 10);
        assert_eq!(labels.len(), 23);
        assert_eq!(labels[0], "n=1");
        assert_eq!(labels[10], "n=11");
        assert_eq!(labels[20], "n=21");
        assert_eq!(labels[22], "n=23");
        assert_eq!(labels[1], "");
        assert_eq!(labels[21], "");
    }

    #[test]
    fn test_point_labels_single_value() {
        assert_eq!(point_labels(&[1], 10), vec!["n=1".to_string()]);
    }

    #[test]
    fn test_point_labels_zero_stride_labels_everything() {
        let labels = point_labels(&[4, 2, 1], 0);
        assert_eq!(labels, vec!["n=4", "n=2", "n=1"]);
    }

    #[test]
    fn test_build_shrub_without_hero() {
        let params = small_params(3, 100, Scheme::Binary);
        let response = build_shrub(&params, &BuildOptions::default()).unwrap();

        assert_eq!(response.figure.data.len(), 3);
        assert_eq!(response.summary.trajectory_count, 3);
        assert!(!response.summary.hero_included);
        assert!(response.explanation.contains("Model sketch"));
        assert_eq!(response.params, params);
    }

    #[test]
    fn test_build_shrub_at_max_safe_start() {
        for seed in [1, 42, 7_777] {
            let params = ShrubParams {
                seed,
                ..small_params(25, MAX_SAFE_START, Scheme::Binary)
            };
            let response = build_shrub(&params, &BuildOptions::default()).unwrap();
            assert_eq!(response.summary.trajectory_count, 25);
            assert_eq!(response.summary.truncated_count, 0);
        }
    }

    #[test]
    fn test_trajectory_trace_style() {
        let params = small_params(1, 100, Scheme::Binary);
        let response = build_shrub(&params, &BuildOptions::default()).unwrap();
        let trace = &response.figure.data[0];

        assert_eq!(trace.trace_type, "scatter3d");
        assert_eq!(trace.mode, "lines+text");
        assert_eq!(trace.opacity, Some(0.3));
        assert_eq!(trace.hoverinfo.as_deref(), Some("skip"));
        assert_eq!(trace.textposition.as_deref(), Some("top center"));
        assert_eq!(trace.line.width, 1.0);
        assert!(trace.line.color.starts_with("hsl("));

        let font = trace.textfont.as_ref().unwrap();
        assert_eq!(font.size, 8);
        assert_eq!(font.color, trace.line.color);

        let text = trace.text.as_ref().unwrap();
        assert_eq!(text.len(), trace.x.len());
        assert_eq!(text.last().map(String::as_str), Some("n=1"));
    }

    #[test]
    fn test_traces_follow_sample_order() {
        let params = small_params(5, 1_000, Scheme::Binary);
        let starts = sample_starts(5, 1_000, 42);
        let response = build_shrub(&params, &BuildOptions::default()).unwrap();
        for (trace, start) in response.figure.data.iter().zip(starts) {
            let first = trace.text.as_ref().unwrap().first().cloned().unwrap();
            assert_eq!(first, format!("n={}", start));
        }
    }

    #[test]
    fn test_ternary_hero_included_above_91() {
        let params = small_params(2, 200, Scheme::Ternary);
        let response = build_shrub(&params, &BuildOptions::default()).unwrap();

        assert_eq!(response.figure.data.len(), 3);
        assert!(response.summary.hero_included);
        let hero = response.figure.data.last().unwrap();
        assert_eq!(hero.name.as_deref(), Some("Hero 91"));
        assert_eq!(hero.mode, "lines");
        assert_eq!(hero.line.color, "black");
        assert_eq!(hero.line.width, 4.0);
        assert!(hero.text.is_none());
        assert!(response.explanation.contains("Ternary variant"));
    }

    #[test]
    fn test_binary_hero_needs_large_max_start() {
        let below = small_params(1, 837_799, Scheme::Binary);
        let response = build_shrub(&below, &BuildOptions::default()).unwrap();
        assert!(!response.summary.hero_included);

        let above = small_params(1, 837_800, Scheme::Binary);
        let response = build_shrub(&above, &BuildOptions::default()).unwrap();
        assert!(response.summary.hero_included);
        assert_eq!(
            response.figure.data.last().unwrap().name.as_deref(),
            Some("Hero 837799")
        );
    }

    #[test]
    fn test_summary_tracks_longest() {
        // Population [2, 10) is sampled in full.
        let params = small_params(100, 10, Scheme::Binary);
        let response = build_shrub(&params, &BuildOptions::default()).unwrap();

        assert_eq!(response.summary.trajectory_count, 8);
        assert_eq!(response.summary.longest_start, Some(9));
        assert_eq!(response.summary.longest_steps, 19);
        assert_eq!(response.summary.truncated_count, 0);
        let points: usize = response.figure.data.iter().map(|t| t.x.len()).sum();
        assert_eq!(response.summary.total_points, points);
    }

    #[test]
    fn test_progress_reports_every_trajectory() {
        let params = small_params(4, 50, Scheme::Binary);
        let mut seen = Vec::new();
        build_shrub_with_progress(&params, &BuildOptions::default(), |done, total| {
            seen.push((done, total));
        })
        .unwrap();
        assert_eq!(seen, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
    }

    #[test]
    fn test_step_cap_counts_truncated() {
        let params = small_params(8, 10, Scheme::Binary);
        let options = BuildOptions {
            max_steps: 3,
            ..BuildOptions::default()
        };
        let response = build_shrub(&params, &options).unwrap();
        // Only 2 (1 step), 4 (2 steps) and 8 (3 steps) finish within 3 steps.
        assert_eq!(response.summary.truncated_count, 5);
    }
}
