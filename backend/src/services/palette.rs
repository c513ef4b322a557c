//! Constant hue per trajectory (HSL rainbow keyed on start magnitude).

use super::sampling::POPULATION_START;

pub const HERO_COLOUR: &str = "black";

/// Hue in degrees for `start` within `[2, max_start)`.
pub fn hue_for(start: u64, max_start: u64) -> u32 {
    let span = max_start.saturating_sub(POPULATION_START);
    if span == 0 {
        return 0;
    }
    let norm = start.saturating_sub(POPULATION_START) as f64 / span as f64;
    (360.0 * norm) as u32
}

/// CSS colour string for the trajectory of `start`.
pub fn colour_for(start: u64, max_start: u64) -> String {
    format!("hsl({},80%,50%)", hue_for(start, max_start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_for_smallest_start() {
        assert_eq!(colour_for(2, 1_000_000), "hsl(0,80%,50%)");
    }

    #[test]
    fn test_hue_midpoint() {
        // (52 - 2) / (102 - 2) = 0.5
        assert_eq!(hue_for(52, 102), 180);
    }

    #[test]
    fn test_hue_truncates() {
        let hue = hue_for(5, 11);
        assert_eq!(hue, (360.0 * (3.0 / 9.0)) as u32);
    }

    #[test]
    fn test_degenerate_span() {
        assert_eq!(hue_for(2, 2), 0);
    }
}
