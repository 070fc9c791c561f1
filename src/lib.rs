//! Brickstorm - an arcade brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, levels, game state)
//!
//! Rendering, audio and input polling are external collaborators: they feed a
//! paddle command into [`sim::tick`] once per fixed timestep, then read the
//! entity collections and the returned event list to drive presentation.

pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (frames per second)
    pub const FRAME_RATE: u32 = 60;

    /// Play field dimensions
    pub const SCREEN_WIDTH: f32 = 875.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Keyboard steering speed (px per frame)
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Pointer tracking dead zone (px) to prevent jittering
    pub const PADDLE_DEADZONE: f32 = 2.0;
    /// Pointer tracking: fraction of the remaining distance covered per frame
    pub const PADDLE_TRACK_RATE: f32 = 0.3;
    /// Width multipliers for the wide/narrow power-ups
    pub const PADDLE_WIDE_FACTOR: f32 = 1.5;
    pub const PADDLE_NARROW_FACTOR: f32 = 0.7;
    /// Width modifier duration (5 s at 60 Hz)
    pub const WIDTH_MOD_FRAMES: u32 = 300;
    /// Shield duration (10 s at 60 Hz)
    pub const SHIELD_FRAMES: u32 = 600;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED_X: f32 = 5.0;
    pub const BALL_SPEED_Y: f32 = -5.0;
    /// Live ball cap enforced by the multi-ball power-up
    pub const MAX_BALLS: usize = 4;
    /// Fresh balls at level N spawn with base speed scaled by this^(N-1)
    pub const LEVEL_SPEED_FACTOR: f32 = 1.1;

    /// Converted ball lifetimes (frames)
    pub const FIRE_BALL_FRAMES: u32 = 1800;
    pub const STEEL_BALL_FRAMES: u32 = 1200;
    pub const LIGHTNING_BALL_FRAMES: u32 = 900;
    /// Bricks a fresh fire ball can pass through
    pub const FIRE_PIERCE_CHARGES: u8 = 3;
    pub const STEEL_DAMAGE: u32 = 2;
    pub const LIGHTNING_SPEED_FACTOR: f32 = 1.5;

    /// Brick grid
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 30.0;

    /// Boss brick
    pub const BOSS_MAX_HEALTH: i32 = 50;
    pub const BOSS_SPEED: f32 = 1.0;
    /// Frames between boss shots (2 s at 60 Hz)
    pub const BOSS_SHOOT_FRAMES: u32 = 120;
    pub const BOSS_DEFEAT_SCORE: u32 = 500;

    /// Boss projectiles
    pub const PROJECTILE_SIZE: f32 = 8.0;
    pub const PROJECTILE_SPEED: f32 = 4.0;

    /// Power-ups
    pub const POWERUP_SIZE: f32 = 20.0;
    pub const POWERUP_FALL_SPEED: f32 = 3.0;
    /// Drop probability per destroyed brick
    pub const POWERUP_CHANCE: f64 = 0.2;

    /// Level progression
    pub const MAX_LEVEL: u32 = 7;
    pub const STARTING_LIVES: u32 = 3;
    /// Brick destruction awards this times the current level
    pub const BRICK_SCORE_PER_LEVEL: u32 = 10;
}
