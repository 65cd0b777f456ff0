//! Scoring module - classic line-clear rewards, levels and descent speed

use crate::config::GameConfig;
use crate::types::{LINES_PER_LEVEL, LINE_SCORES};

/// Calculate line clear score (Classic rules)
/// rows: number of rows cleared by one lock (1-4)
/// level: current level (0-based)
///
/// Zero rows, or more than four, award nothing.
pub fn calculate_line_score(rows: usize, level: u32) -> u32 {
    if rows == 0 || rows >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[rows].saturating_mul(level.saturating_add(1))
}

/// Level increases every 10 lines cleared
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Automatic descent interval for a level, in milliseconds.
///
/// Shrinks linearly up to `max_speed_level`, never below `min_drop_ms`.
pub fn drop_interval_ms(level: u32, config: &GameConfig) -> u32 {
    let speed_level = level.min(config.max_speed_level);
    config
        .base_drop_ms
        .saturating_sub(speed_level.saturating_mul(config.drop_step_ms))
        .max(config.min_drop_ms)
        .max(1)
}
