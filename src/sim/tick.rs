//! Fixed-interval simulation clock
//!
//! One tick per second while the session is active: moves every monster,
//! expires stale humans, tops up both collections, and ends the session when
//! time or lives have run out. Click resolution is a separate synchronous
//! path (`hit`) and never runs in here.

use glam::Vec2;
use rand::Rng;

use super::spawn;
use super::state::GameState;
use crate::consts::*;

/// Score-derived additive speed boost, capped
pub fn difficulty_factor(score: u32) -> u32 {
    (score / 100).min(DIFFICULTY_CAP)
}

/// Advance the simulation by one tick. `now_ms` is the caller's clock;
/// human ages are measured against it.
pub fn sim_tick(state: &mut GameState, now_ms: f64) {
    // Stale callback after pause/game over: mutate nothing
    if !state.is_active() {
        return;
    }

    let boost = difficulty_factor(state.score) as f32;

    // Each axis flips direction independently. Positions are deliberately
    // left unclamped; a monster that drifts off-screen keeps its spawn slot.
    let GameState { monsters, rng, .. } = state;
    for monster in monsters.iter_mut() {
        let step = monster.speed + boost;
        let dx = if rng.random_bool(0.5) { step } else { -step };
        let dy = if rng.random_bool(0.5) { step } else { -step };
        monster.pos += Vec2::new(dx, dy);
    }

    // TTL expiry only; clicked humans were already removed by the hit path
    state.humans.retain(|h| !h.expired(now_ms));

    spawn::replenish(state, now_ms);

    if state.time_left <= 0 || state.lives == 0 {
        state.end_session();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{GamePhase, Human, Monster, MonsterKind};

    fn active_state() -> GameState {
        let mut state = GameState::new(42);
        state.start(42, 0.0);
        state
    }

    #[test]
    fn test_difficulty_factor_caps_at_five() {
        assert_eq!(difficulty_factor(0), 0);
        assert_eq!(difficulty_factor(250), 2);
        assert_eq!(difficulty_factor(1000), 5);
        assert_eq!(difficulty_factor(5000), 5);
    }

    #[test]
    fn test_monsters_step_speed_plus_boost_per_axis() {
        let mut state = active_state();
        state.monsters.clear();
        state.monsters.push(Monster {
            pos: Vec2::new(100.0, 100.0),
            speed: 2.0,
            kind: MonsterKind::Slow,
        });
        state.score = 250; // boost 2

        let before = state.monsters[0].pos;
        sim_tick(&mut state, 0.0);
        let after = state.monsters[0].pos;

        assert!(((after.x - before.x).abs() - 4.0).abs() < 1e-5);
        assert!(((after.y - before.y).abs() - 4.0).abs() < 1e-5);
    }

    #[test]
    fn test_human_ttl_expiry_window() {
        let mut state = active_state();
        state.humans.clear();
        state.humans.push(Human {
            pos: Vec2::ZERO,
            spawned_at_ms: 0.0,
        });

        sim_tick(&mut state, 4999.0);
        assert!(
            state.humans.iter().any(|h| h.spawned_at_ms == 0.0),
            "human under TTL must survive the tick"
        );

        sim_tick(&mut state, 5000.0);
        assert!(
            state.humans.iter().all(|h| h.spawned_at_ms != 0.0),
            "human at TTL must be removed"
        );
    }

    #[test]
    fn test_tick_replenishes_toward_caps() {
        let mut state = active_state();
        for tick in 0..20u32 {
            sim_tick(&mut state, f64::from(tick) * 1000.0);
        }
        assert_eq!(state.monsters.len(), MONSTER_CAP);
        // Humans both expire and respawn, so only the cap bounds them
        assert!(state.humans.len() <= HUMAN_CAP);
        assert!(!state.humans.is_empty());
    }

    #[test]
    fn test_tick_ends_session_when_time_exhausted() {
        let mut state = active_state();
        state.time_left = 0;
        sim_tick(&mut state, 0.0);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_tick_ends_session_when_out_of_lives() {
        let mut state = active_state();
        state.lives = 0;
        sim_tick(&mut state, 0.0);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_stale_tick_mutates_nothing() {
        let mut state = active_state();
        state.pause();
        let monsters_before: Vec<Vec2> = state.monsters.iter().map(|m| m.pos).collect();
        let humans_before = state.humans.len();

        sim_tick(&mut state, 60_000.0);

        let monsters_after: Vec<Vec2> = state.monsters.iter().map(|m| m.pos).collect();
        assert_eq!(monsters_before, monsters_after);
        assert_eq!(state.humans.len(), humans_before);
        assert_eq!(state.phase, GamePhase::Paused);
    }
}
