//! Entity spawning
//!
//! Positions are uniform over the playfield with the entity's footprint kept
//! inside the right/bottom edges. Monster speed scales with the level it was
//! spawned at and never changes afterwards.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameState, Human, Monster, MonsterKind};
use crate::consts::*;

/// Create a monster for the given level. Kind is a coin flip, speed is
/// `uniform(1, 3) + level * 0.5`.
pub fn spawn_monster(rng: &mut Pcg32, level: u32) -> Monster {
    let pos = random_pos(rng, MONSTER_SIZE);
    let speed = rng.random_range(1.0..3.0) + level as f32 * 0.5;
    let kind = if rng.random_bool(0.5) {
        MonsterKind::Fast
    } else {
        MonsterKind::Slow
    };
    Monster { pos, speed, kind }
}

/// Create a human stamped with the spawn timestamp its TTL counts from.
pub fn spawn_human(rng: &mut Pcg32, now_ms: f64) -> Human {
    Human {
        pos: random_pos(rng, HUMAN_SIZE),
        spawned_at_ms: now_ms,
    }
}

/// Top-up pass run once per simulation tick: appends at most one entity per
/// kind while the respective collection is below its cap. Never removes.
/// Off-screen monsters still occupy their slot here.
pub fn replenish(state: &mut GameState, now_ms: f64) {
    if state.monsters.len() < MONSTER_CAP {
        let monster = spawn_monster(&mut state.rng, state.level);
        state.monsters.push(monster);
    }
    if state.humans.len() < HUMAN_CAP {
        let human = spawn_human(&mut state.rng, now_ms);
        state.humans.push(human);
    }
}

fn random_pos(rng: &mut Pcg32, size: f32) -> Vec2 {
    Vec2::new(
        rng.random_range(0.0..WIDTH - size),
        rng.random_range(0.0..HEIGHT - size),
    )
}
