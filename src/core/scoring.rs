//! Scoring rules and the speed-up schedule.
//!
//! All pure functions. Line clears pay a flat rate per row; soft and hard
//! drops pay per cell descended. The gravity interval shortens by a fixed
//! step each time the score lands on an exact positive multiple of
//! [`SPEED_UP_SCORE_STEP`], down to a floor. A score that jumps past a
//! multiple without landing on it does not trigger the speed-up.

use crate::types::{
    HARD_DROP_SCORE, LINE_SCORE, SOFT_DROP_SCORE, SPEED_UP_SCORE_STEP, TICK_FLOOR_MS, TICK_STEP_MS,
};

/// Points awarded for clearing `lines` rows at once.
pub fn line_clear_score(lines: usize) -> u32 {
    lines as u32 * LINE_SCORE
}

/// Points awarded for descending `cells` rows under player control.
pub fn drop_score(cells: u32, hard: bool) -> u32 {
    if hard {
        cells * HARD_DROP_SCORE
    } else {
        cells * SOFT_DROP_SCORE
    }
}

/// Whether the gravity interval should shorten at this score.
pub fn should_speed_up(score: u32, interval_ms: u64) -> bool {
    score > 0 && score % SPEED_UP_SCORE_STEP == 0 && interval_ms > TICK_FLOOR_MS
}

/// The interval after one speed-up step, clamped to the floor.
pub fn next_interval_ms(interval_ms: u64) -> u64 {
    interval_ms.saturating_sub(TICK_STEP_MS).max(TICK_FLOOR_MS)
}
