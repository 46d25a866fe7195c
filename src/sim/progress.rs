//! Level progression and countdown
//!
//! A 1-second timer independent of the simulation clock. No ordering is
//! guaranteed between the two within the same wall-clock second.

use super::state::GameState;
use crate::consts::*;

/// Countdown seconds granted at the given level, floored so deep levels
/// never start at zero or below.
pub fn level_time(level: u32) -> i32 {
    (LEVEL_TIME_BASE_SECS - level as i32 * LEVEL_TIME_STEP_SECS).max(LEVEL_TIME_FLOOR_SECS)
}

/// One countdown step. When the timer would reach zero: advance a level if
/// the player has a life to spare, otherwise the run is over.
pub fn countdown_tick(state: &mut GameState) {
    // Stale callback after pause/game over: mutate nothing
    if !state.is_active() {
        return;
    }

    state.time_left -= 1;
    if state.time_left <= 0 {
        if state.lives > 1 {
            state.level += 1;
            state.time_left = level_time(state.level);
            log::info!("Level up: level {} ({}s)", state.level, state.time_left);
        } else {
            state.end_session();
        }
    }
}
