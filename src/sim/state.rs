//! Session state and core simulation types
//!
//! Everything the clocks, the click handler and the render loop share lives
//! here. The shell owns exactly one `GameState` per page.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn;
use crate::consts::*;

/// Current phase of a play session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Page loaded, no session started yet
    Idle,
    /// Session accepts input and ticks
    Active,
    /// Clocks stopped, entity state frozen; only a start command leaves this
    Paused,
    /// Run ended; terminal until the next start command
    GameOver,
}

/// Monster variant, fixed at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonsterKind {
    Fast,
    Slow,
}

impl MonsterKind {
    /// Points awarded for a successful hit
    pub fn score_value(self) -> u32 {
        match self {
            MonsterKind::Fast => FAST_SCORE,
            MonsterKind::Slow => SLOW_SCORE,
        }
    }
}

/// A hostile entity. Moves every tick, dies only to a click.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Monster {
    /// Anchor position (top-left of the painted square)
    pub pos: Vec2,
    /// Per-axis step magnitude, fixed at spawn from the level
    pub speed: f32,
    pub kind: MonsterKind,
}

/// A neutral entity. Clicking it costs a life; surviving 5 seconds removes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Human {
    /// Anchor position (top-left of the painted square)
    pub pos: Vec2,
    /// Timestamp the spawner stamped on creation
    pub spawned_at_ms: f64,
}

impl Human {
    pub fn age_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.spawned_at_ms
    }

    /// TTL check used by the simulation clock; hits never go through here
    pub fn expired(&self, now_ms: f64) -> bool {
        self.age_ms(now_ms) >= HUMAN_TTL_MS
    }
}

/// Read-only view of the session for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HudSnapshot {
    pub score: u32,
    pub lives: u8,
    pub time_left: i32,
    pub high_score: u32,
    pub level: u32,
    pub active: bool,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    pub score: u32,
    pub lives: u8,
    pub level: u32,
    /// Seconds left on the current level countdown
    pub time_left: i32,
    pub phase: GamePhase,
    pub monsters: Vec<Monster>,
    pub humans: Vec<Human>,
    /// Session RNG; every spawn and movement draw goes through here
    pub rng: Pcg32,
}

impl GameState {
    /// Create a fresh, idle session
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            score: 0,
            lives: MAX_LIVES,
            level: 1,
            time_left: LEVEL_TIME_BASE_SECS,
            phase: GamePhase::Idle,
            monsters: Vec::new(),
            humans: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start command: full reset from any phase, then seed one entity of
    /// each kind. Pause and game over are both left via this, never resumed.
    pub fn start(&mut self, seed: u64, now_ms: f64) {
        *self = Self::new(seed);
        self.phase = GamePhase::Active;

        let monster = spawn::spawn_monster(&mut self.rng, self.level);
        self.monsters.push(monster);
        let human = spawn::spawn_human(&mut self.rng, now_ms);
        self.humans.push(human);
    }

    /// Pause command. Only meaningful while active; entity state is frozen
    /// in place and the shell stops all three recurring activities.
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Active {
            self.phase = GamePhase::Paused;
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Active
    }

    /// End the run. Idempotent: the countdown timer, the simulation clock
    /// and the click handler may each call this, all with the same effect.
    pub fn end_session(&mut self) {
        self.phase = GamePhase::GameOver;
    }

    /// Snapshot for the HUD; the stored best score lives with the shell
    pub fn hud(&self, high_score: u32) -> HudSnapshot {
        HudSnapshot {
            score: self.score,
            lives: self.lives,
            time_left: self.time_left,
            high_score,
            level: self.level,
            active: self.is_active(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, MAX_LIVES);
        assert_eq!(state.level, 1);
        assert_eq!(state.time_left, LEVEL_TIME_BASE_SECS);
        assert!(state.monsters.is_empty());
        assert!(state.humans.is_empty());
    }

    #[test]
    fn test_start_resets_and_seeds_entities() {
        let mut state = GameState::new(7);
        state.score = 440;
        state.lives = 1;
        state.level = 4;
        state.phase = GamePhase::GameOver;

        state.start(99, 1_000.0);
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, MAX_LIVES);
        assert_eq!(state.level, 1);
        assert_eq!(state.time_left, LEVEL_TIME_BASE_SECS);
        assert_eq!(state.monsters.len(), 1);
        assert_eq!(state.humans.len(), 1);
        assert_eq!(state.humans[0].spawned_at_ms, 1_000.0);
    }

    #[test]
    fn test_pause_only_from_active() {
        let mut state = GameState::new(7);
        state.pause();
        assert_eq!(state.phase, GamePhase::Idle);

        state.start(7, 0.0);
        state.pause();
        assert_eq!(state.phase, GamePhase::Paused);

        // Pause does not resume in place
        state.pause();
        assert_eq!(state.phase, GamePhase::Paused);
    }

    #[test]
    fn test_score_values() {
        assert_eq!(MonsterKind::Fast.score_value(), 20);
        assert_eq!(MonsterKind::Slow.score_value(), 10);
    }

    #[test]
    fn test_hud_snapshot() {
        let mut state = GameState::new(7);
        state.start(7, 0.0);
        state.score = 120;

        let hud = state.hud(250);
        assert_eq!(hud.score, 120);
        assert_eq!(hud.lives, 3);
        assert_eq!(hud.time_left, 30);
        assert_eq!(hud.high_score, 250);
        assert_eq!(hud.level, 1);
        assert!(hud.active);

        state.end_session();
        assert!(!state.hud(250).active);
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = GameState::new(0);
        let mut b = GameState::new(0);
        a.start(123, 0.0);
        b.start(123, 0.0);
        assert_eq!(a.monsters[0].pos, b.monsters[0].pos);
        assert_eq!(a.monsters[0].speed, b.monsters[0].speed);
        assert_eq!(a.monsters[0].kind, b.monsters[0].kind);
        assert_eq!(a.humans[0].pos, b.humans[0].pos);
    }
}
