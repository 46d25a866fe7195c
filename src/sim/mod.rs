//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed-period clocks only (the shell schedules them, nothing in here does)
//! - Seeded RNG only
//! - Timestamps passed in by the caller
//! - No rendering or platform dependencies

pub mod hit;
pub mod progress;
pub mod spawn;
pub mod state;
pub mod tick;

pub use hit::resolve_click;
pub use progress::{countdown_tick, level_time};
pub use spawn::{replenish, spawn_human, spawn_monster};
pub use state::{GamePhase, GameState, HudSnapshot, Human, Monster, MonsterKind};
pub use tick::{difficulty_factor, sim_tick};
