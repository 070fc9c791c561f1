//! Entity types and their per-frame update hooks
//!
//! Each entity owns its rectangle, velocity and kind-specific state. The
//! engine in [`crate::sim::tick`] drives these hooks in a fixed order and
//! resolves collisions between them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Width modifier currently applied to the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WidthMod {
    #[default]
    Normal,
    Wide,
    Narrow,
}

impl WidthMod {
    fn factor(self) -> f32 {
        match self {
            WidthMod::Normal => 1.0,
            WidthMod::Wide => PADDLE_WIDE_FACTOR,
            WidthMod::Narrow => PADDLE_NARROW_FACTOR,
        }
    }
}

/// The player's paddle
///
/// The width modifier and the shield run on independent frame timers and may
/// overlap freely; width changes always preserve the paddle's center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
    pub normal_width: f32,
    pub width_mod: WidthMod,
    /// Frames remaining on the width modifier (0 = inactive)
    pub width_timer: u32,
    /// Frames remaining on the shield (0 = inactive)
    pub shield_timer: u32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new()
    }
}

impl Paddle {
    /// Centered near the bottom of the play field
    pub fn new() -> Self {
        Self {
            rect: Rect::new(
                SCREEN_WIDTH / 2.0 - PADDLE_WIDTH / 2.0,
                SCREEN_HEIGHT - 50.0,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            normal_width: PADDLE_WIDTH,
            width_mod: WidthMod::Normal,
            width_timer: 0,
            shield_timer: 0,
        }
    }

    /// Discrete keyboard steering: fixed step left or right, clamped on screen
    pub fn steer(&mut self, direction: f32) {
        self.rect.x += PADDLE_SPEED * direction.signum();
        self.clamp_to_screen();
    }

    /// Pointer tracking: ease toward the target center-x with a small dead
    /// zone so the paddle does not jitter around the pointer
    pub fn track(&mut self, target_center_x: f32) {
        let target_x = target_center_x - self.rect.width / 2.0;
        let diff = target_x - self.rect.x;
        if diff.abs() > PADDLE_DEADZONE {
            self.rect.x += diff * PADDLE_TRACK_RATE;
        }
        self.clamp_to_screen();
    }

    /// Apply a wide/narrow modifier, restarting the width timer
    pub fn apply_width_mod(&mut self, width_mod: WidthMod) {
        self.width_mod = width_mod;
        self.width_timer = WIDTH_MOD_FRAMES;
        self.rect
            .resize_width_centered(self.normal_width * width_mod.factor());
        self.clamp_to_screen();
    }

    pub fn activate_shield(&mut self) {
        self.shield_timer = SHIELD_FRAMES;
    }

    #[inline]
    pub fn shield_active(&self) -> bool {
        self.shield_timer > 0
    }

    /// Count down both timers; reverting the width when its timer expires
    pub fn step_timers(&mut self) {
        if self.width_timer > 0 {
            self.width_timer -= 1;
            if self.width_timer == 0 {
                self.width_mod = WidthMod::Normal;
                self.rect.resize_width_centered(self.normal_width);
                self.clamp_to_screen();
            }
        }
        self.shield_timer = self.shield_timer.saturating_sub(1);
    }

    fn clamp_to_screen(&mut self) {
        if self.rect.left() < 0.0 {
            self.rect.x = 0.0;
        } else if self.rect.right() > SCREEN_WIDTH {
            self.rect.x = SCREEN_WIDTH - self.rect.width;
        }
    }
}

/// Ball kind with kind-specific payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BallKind {
    #[default]
    Normal,
    /// Passes through bricks/boss without bouncing while charges remain
    Fire { pierce: u8 },
    /// Deals double damage
    Steel,
    /// Moves 1.5x faster
    Lightning,
}

impl BallKind {
    /// Damage applied per brick/boss contact
    #[inline]
    pub fn damage(self) -> u32 {
        match self {
            BallKind::Steel => STEEL_DAMAGE,
            _ => 1,
        }
    }

    /// Lifetime in frames; normal balls never expire by timer
    pub fn life_frames(self) -> Option<u32> {
        match self {
            BallKind::Normal => None,
            BallKind::Fire { .. } => Some(FIRE_BALL_FRAMES),
            BallKind::Steel => Some(STEEL_BALL_FRAMES),
            BallKind::Lightning => Some(LIGHTNING_BALL_FRAMES),
        }
    }

    /// Bounded trail length (cosmetic, rendered by presentation)
    pub fn trail_len(self) -> usize {
        match self {
            BallKind::Normal | BallKind::Steel => 5,
            BallKind::Fire { .. } | BallKind::Lightning => 8,
        }
    }
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
    pub kind: BallKind,
    /// Frames until a converted ball expires; `None` for normal balls
    pub life_timer: Option<u32>,
    /// Trail history for rendering (newest first)
    #[serde(skip)]
    pub trail: Vec<Vec2>,
}

impl Ball {
    /// Fresh normal ball at the center of the play field. `speed_scale`
    /// applies the per-level speed-up to the base velocity.
    pub fn spawn_center(speed_scale: f32) -> Self {
        Self {
            rect: Rect::centered_at(
                Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
                BALL_SIZE,
                BALL_SIZE,
            ),
            vel: Vec2::new(BALL_SPEED_X, BALL_SPEED_Y) * speed_scale,
            kind: BallKind::Normal,
            life_timer: None,
            trail: Vec::new(),
        }
    }

    /// Count down the expiry timer for converted balls.
    /// Returns true when the ball expired this frame.
    pub fn tick_life(&mut self) -> bool {
        match self.life_timer.as_mut() {
            Some(t) => {
                *t = t.saturating_sub(1);
                *t == 0
            }
            None => false,
        }
    }

    /// Record current center to the trail (call each frame before moving)
    pub fn record_trail(&mut self) {
        self.trail.insert(0, self.rect.center());
        self.trail.truncate(self.kind.trail_len());
    }

    pub fn advance(&mut self) {
        self.rect.translate(self.vel);
    }

    #[inline]
    pub fn bounce_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    #[inline]
    pub fn bounce_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    #[inline]
    pub fn damage(&self) -> u32 {
        self.kind.damage()
    }

    /// Fire balls pass through a brick/boss while charges remain, consuming
    /// one charge per pass. All other kinds never pierce.
    pub fn can_pierce(&mut self) -> bool {
        if let BallKind::Fire { pierce } = &mut self.kind {
            if *pierce > 0 {
                *pierce -= 1;
                return true;
            }
        }
        false
    }

    /// Convert this ball to a new kind, resetting the expiry timer.
    /// Lightning conversion also scales the current velocity.
    pub fn convert(&mut self, kind: BallKind) {
        if kind == BallKind::Lightning {
            self.vel *= LIGHTNING_SPEED_FACTOR;
        }
        self.kind = kind;
        self.life_timer = kind.life_frames();
    }

    /// Clone for the multi-ball power-up: same kind with a fresh payload,
    /// horizontally mirrored velocity, empty trail
    pub fn duplicate(&self) -> Self {
        let kind = match self.kind {
            BallKind::Fire { .. } => BallKind::Fire {
                pierce: FIRE_PIERCE_CHARGES,
            },
            other => other,
        };
        Self {
            rect: self.rect,
            vel: Vec2::new(-self.vel.x, self.vel.y),
            kind,
            life_timer: kind.life_frames(),
            trail: Vec::new(),
        }
    }
}

/// A static brick. Stays in the level's collection once destroyed so
/// completion checks and event indices remain stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    /// Base palette color; presentation darkens it by `damage_fraction`
    pub color: [u8; 3],
    pub hits_required: u32,
    pub hits_taken: u32,
}

impl Brick {
    pub fn new(rect: Rect, color: [u8; 3], hits_required: u32) -> Self {
        debug_assert!(hits_required >= 1);
        Self {
            rect,
            color,
            hits_required,
            hits_taken: 0,
        }
    }

    #[inline]
    pub fn destroyed(&self) -> bool {
        self.hits_taken >= self.hits_required
    }

    /// Apply damage; returns true when this hit destroys the brick
    pub fn hit(&mut self, damage: u32) -> bool {
        debug_assert!(!self.destroyed());
        self.hits_taken += damage;
        self.destroyed()
    }

    /// Accumulated damage in `[0, 1]`, for presentation darkening
    pub fn damage_fraction(&self) -> f32 {
        (self.hits_taken as f32 / self.hits_required as f32).min(1.0)
    }
}

/// The boss: a wide multi-hit brick that patrols horizontally and shoots
/// projectiles at the paddle. At most one exists per level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossBrick {
    pub rect: Rect,
    pub health: i32,
    pub max_health: i32,
    /// Horizontal patrol direction, -1 or +1
    pub direction: f32,
    pub speed: f32,
    /// Frames since the last shot
    pub shoot_timer: u32,
}

impl Default for BossBrick {
    fn default() -> Self {
        Self::new()
    }
}

impl BossBrick {
    /// Centered horizontally near the top of the play field
    pub fn new() -> Self {
        let width = BRICK_WIDTH * 3.0;
        Self {
            rect: Rect::new(SCREEN_WIDTH / 2.0 - width / 2.0, 100.0, width, BRICK_HEIGHT * 2.0),
            health: BOSS_MAX_HEALTH,
            max_health: BOSS_MAX_HEALTH,
            direction: 1.0,
            speed: BOSS_SPEED,
            shoot_timer: 0,
        }
    }

    #[inline]
    pub fn destroyed(&self) -> bool {
        self.health <= 0
    }

    /// Move one frame (bouncing at the screen edges) and advance the shot
    /// timer. Returns true when the boss is ready to fire.
    pub fn advance(&mut self) -> bool {
        self.rect.x += self.speed * self.direction;
        if self.rect.left() <= 0.0 || self.rect.right() >= SCREEN_WIDTH {
            self.direction = -self.direction;
        }
        self.shoot_timer += 1;
        self.shoot_timer >= BOSS_SHOOT_FRAMES
    }

    pub fn reset_shoot_timer(&mut self) {
        self.shoot_timer = 0;
    }

    /// Apply damage; returns true when this hit defeats the boss.
    /// Health may overshoot below zero.
    pub fn hit(&mut self, damage: u32) -> bool {
        self.health -= damage as i32;
        self.destroyed()
    }

    /// Remaining health in `[0, 1]`, for the health bar
    pub fn health_fraction(&self) -> f32 {
        (self.health.max(0) as f32) / self.max_health as f32
    }
}

/// A boss projectile, aimed at the paddle once at spawn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Projectile {
    /// Velocity is the unit vector from `origin` toward `target` at spawn
    /// time, scaled to the fixed projectile speed. A degenerate zero-length
    /// aim falls back to straight down.
    pub fn aimed(origin: Vec2, target: Vec2) -> Self {
        let delta = target - origin;
        let vel = if delta.length_squared() > 0.0 {
            delta.normalize() * PROJECTILE_SPEED
        } else {
            Vec2::new(0.0, PROJECTILE_SPEED)
        };
        Self {
            rect: Rect::new(origin.x, origin.y, PROJECTILE_SIZE, PROJECTILE_SIZE),
            vel,
        }
    }

    pub fn advance(&mut self) {
        self.rect.translate(self.vel);
    }

    pub fn on_screen(&self) -> bool {
        self.rect.right() >= 0.0
            && self.rect.left() <= SCREEN_WIDTH
            && self.rect.bottom() >= 0.0
            && self.rect.top() <= SCREEN_HEIGHT
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    WidePaddle,
    NarrowPaddle,
    MultiBall,
    ExtraLife,
    FireBall,
    SteelBall,
    LightningBall,
    Shield,
}

impl PowerUpKind {
    /// Uniform pool on normal levels
    pub const ALL: [PowerUpKind; 8] = [
        PowerUpKind::WidePaddle,
        PowerUpKind::NarrowPaddle,
        PowerUpKind::MultiBall,
        PowerUpKind::ExtraLife,
        PowerUpKind::FireBall,
        PowerUpKind::SteelBall,
        PowerUpKind::LightningBall,
        PowerUpKind::Shield,
    ];

    /// Restricted pool on boss levels
    pub const BOSS_POOL: [PowerUpKind; 5] = [
        PowerUpKind::FireBall,
        PowerUpKind::SteelBall,
        PowerUpKind::LightningBall,
        PowerUpKind::Shield,
        PowerUpKind::ExtraLife,
    ];
}

/// A falling power-up capsule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub rect: Rect,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn new(center: Vec2, kind: PowerUpKind) -> Self {
        Self {
            rect: Rect::centered_at(center, POWERUP_SIZE, POWERUP_SIZE),
            kind,
        }
    }

    pub fn fall(&mut self) {
        self.rect.y += POWERUP_FALL_SPEED;
    }

    pub fn below_screen(&self) -> bool {
        self.rect.top() > SCREEN_HEIGHT
    }
}
