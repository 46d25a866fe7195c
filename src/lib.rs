//! Cazador - a monster-clicking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, clocks, hit-testing, progression)
//! - `render`: Canvas 2D painting for the render loop
//! - `highscores`: Best-score persistence (LocalStorage on web)

pub mod highscores;
pub mod render;
pub mod sim;

pub use highscores::HighScore;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (canvas-local pixels)
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 350.0;

    /// Entity footprint (square) and click radius for each kind
    pub const MONSTER_SIZE: f32 = 50.0;
    pub const HUMAN_SIZE: f32 = 50.0;

    /// Lives at session start
    pub const MAX_LIVES: u8 = 3;

    /// Period of the simulation clock and the countdown timer
    pub const TICK_PERIOD_MS: i32 = 1000;

    /// Humans expire after this age unless clicked first
    pub const HUMAN_TTL_MS: f64 = 5000.0;

    /// Replenishment caps - the spawner tops up below these, never removes
    pub const MONSTER_CAP: usize = 10;
    pub const HUMAN_CAP: usize = 3;

    /// Cap on the score-derived speed boost
    pub const DIFFICULTY_CAP: u32 = 5;

    /// Points per monster kind
    pub const FAST_SCORE: u32 = 20;
    pub const SLOW_SCORE: u32 = 10;

    /// Countdown seconds per level: `BASE - level * STEP`, floored
    pub const LEVEL_TIME_BASE_SECS: i32 = 30;
    pub const LEVEL_TIME_STEP_SECS: i32 = 3;
    /// Deep levels never start with a non-positive countdown
    pub const LEVEL_TIME_FLOOR_SECS: i32 = 3;
}
