//! Scoring module - line-clear points, level and gravity speed
//!
//! Points come from a fixed table keyed on how many rows one lock cleared.
//! The level is always recomputed from the running line total, and the
//! gravity interval decays exponentially with level down to a floor.

use crate::types::{BASE_FALL_MS, LINES_PER_LEVEL, LINE_SCORES, MIN_FALL_MS, SPEED_FACTOR};

/// Points for clearing `lines` rows with one lock (0 outside 1-4)
pub fn line_score(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Level for a running total of cleared lines (levels start at 1)
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval in milliseconds for `level`.
///
/// `max(MIN_FALL_MS, floor(BASE_FALL_MS * SPEED_FACTOR^(level - 1)))`.
/// Level 0 is treated as level 1.
pub fn fall_delay_ms(level: u32) -> u32 {
    let steps = level.saturating_sub(1).min(i32::MAX as u32) as i32;
    let scaled = (BASE_FALL_MS as f64 * SPEED_FACTOR.powi(steps)).floor();
    (scaled as u32).max(MIN_FALL_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_score_table() {
        assert_eq!(line_score(0), 0);
        assert_eq!(line_score(1), 100);
        assert_eq!(line_score(2), 300);
        assert_eq!(line_score(3), 500);
        assert_eq!(line_score(4), 800);
        assert_eq!(line_score(5), 0);
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(level_for_lines(0), 1);
        assert_eq!(level_for_lines(9), 1);
        assert_eq!(level_for_lines(10), 2);
        assert_eq!(level_for_lines(19), 2);
        assert_eq!(level_for_lines(20), 3);
    }

    #[test]
    fn test_fall_delay_curve() {
        assert_eq!(fall_delay_ms(0), 1000);
        assert_eq!(fall_delay_ms(1), 1000);
        assert_eq!(fall_delay_ms(2), 850);
        // 1000 * 0.85^2 = 722.5
        assert_eq!(fall_delay_ms(3), 722);
    }

    #[test]
    fn test_fall_delay_floor() {
        assert_eq!(fall_delay_ms(50), MIN_FALL_MS);
        assert_eq!(fall_delay_ms(u32::MAX), MIN_FALL_MS);
    }
}
