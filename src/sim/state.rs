//! Game state and the level/game state machine
//!
//! All state that must survive a frame lives here. Terminal conditions
//! (game over, victory) are intentionally derived predicates over
//! `lives`/`level` rather than explicit phases.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entities::{Ball, BossBrick, Brick, Paddle, PowerUp, Projectile};
use super::level::build_level;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title/instructions; waiting for the start command
    StartScreen,
    /// Active gameplay (includes the derived game-over/victory conditions)
    Playing,
    /// Frozen; all frame timers implicitly pause with the simulation
    Paused,
}

fn skipped_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete game state (deterministic given the seed and input sequence)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Current level, 1-based; `level > MAX_LEVEL` means victory
    pub level: u32,
    pub score: u32,
    pub lives: u32,
    /// Frames simulated while playing
    pub frame: u64,
    pub paddle: Paddle,
    pub balls: Vec<Ball>,
    pub bricks: Vec<Brick>,
    pub boss: Option<BossBrick>,
    pub projectiles: Vec<Projectile>,
    pub powerups: Vec<PowerUp>,
    /// Drives power-up drop and kind decisions; not captured in snapshots
    #[serde(skip, default = "skipped_rng")]
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// New session on the start screen; level entities are built by
    /// [`GameState::start`]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::StartScreen,
            level: 1,
            score: 0,
            lives: STARTING_LIVES,
            frame: 0,
            paddle: Paddle::new(),
            balls: Vec::new(),
            bricks: Vec::new(),
            boss: None,
            projectiles: Vec::new(),
            powerups: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Enter gameplay with fresh counters and a freshly directed level 1
    pub fn start(&mut self) {
        log::info!("starting game (seed {})", self.seed);
        self.phase = GamePhase::Playing;
        self.level = 1;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.reset_level();
    }

    /// Restart is the same transition as start; gating is in
    /// [`GameState::can_restart`]
    pub fn restart(&mut self) {
        self.start();
    }

    /// Discard the current entity set and build the current level from
    /// scratch: centered paddle with cleared timers, one fresh ball, no
    /// leftover projectiles or power-ups.
    pub fn reset_level(&mut self) {
        self.paddle = Paddle::new();
        self.balls = vec![Ball::spawn_center(self.level_speed_scale())];
        self.projectiles.clear();
        self.powerups.clear();
        let layout = build_level(self.level);
        self.bricks = layout.bricks;
        self.boss = layout.boss;
    }

    /// Speed multiplier for balls spawned at the current level
    pub fn level_speed_scale(&self) -> f32 {
        LEVEL_SPEED_FACTOR.powi(self.level.saturating_sub(1) as i32)
    }

    /// All bricks destroyed and no live boss remaining. A level with a live
    /// boss and zero remaining bricks is NOT complete.
    pub fn level_cleared(&self) -> bool {
        self.bricks.iter().all(|b| b.destroyed())
            && self.boss.as_ref().is_none_or(|b| b.destroyed())
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.lives == 0
    }

    #[inline]
    pub fn is_victory(&self) -> bool {
        self.level > MAX_LEVEL
    }

    /// Restart gating: while playing only once a terminal condition holds
    /// (or the level is cleared but not yet advanced); while paused always.
    pub fn can_restart(&self) -> bool {
        match self.phase {
            GamePhase::Playing => self.is_game_over() || self.is_victory() || self.level_cleared(),
            GamePhase::Paused => true,
            GamePhase::StartScreen => false,
        }
    }
}
