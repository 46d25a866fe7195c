//! Pointer click resolution
//!
//! Runs synchronously on each canvas click, outside both 1-second clocks.
//! Monster and human checks are independent passes over disjoint
//! collections, so one click can score on a monster and be penalized by an
//! overlapping human at the same time.

use glam::Vec2;

use super::state::GameState;
use crate::consts::*;

/// Resolve one click at canvas-local pixel coordinates (origin top-left).
///
/// Distances are Euclidean, measured to each entity's stored anchor. The
/// first entity in collection order within range wins; at most one monster
/// and at most one human are removed per click.
pub fn resolve_click(state: &mut GameState, pointer: Vec2) {
    if !state.is_active() {
        return;
    }

    if let Some(idx) = state
        .monsters
        .iter()
        .position(|m| pointer.distance(m.pos) < MONSTER_SIZE)
    {
        let monster = state.monsters.remove(idx);
        state.score += monster.kind.score_value();
    }

    if let Some(idx) = state
        .humans
        .iter()
        .position(|h| pointer.distance(h.pos) < HUMAN_SIZE)
    {
        state.humans.remove(idx);
        state.lives = state.lives.saturating_sub(1);
        if state.lives == 0 {
            state.end_session();
        }
    }
}
