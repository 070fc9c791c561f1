//! Discrete per-frame events
//!
//! [`crate::sim::tick`] returns one `Vec<GameEvent>` per frame. Presentation
//! consumes these for audio, particle and UI triggers; the sim itself never
//! renders or plays sound.

use serde::{Deserialize, Serialize};

use super::entities::PowerUpKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A ball bounced off the paddle
    PaddleHit,
    /// A brick took damage but survived; `brick` indexes the level's brick
    /// collection
    BrickDamaged { brick: usize },
    /// A brick was destroyed and `score` points were awarded
    BrickDestroyed { brick: usize, score: u32 },
    /// A destroyed brick dropped a power-up capsule
    PowerUpSpawned { kind: PowerUpKind },
    /// The paddle collected a falling power-up
    PowerUpCollected { kind: PowerUpKind },
    /// The boss took damage but survived
    BossHit,
    /// The boss was defeated and `score` points were awarded
    BossDefeated { score: u32 },
    /// The boss fired a projectile at the paddle
    ProjectileFired,
    /// The shield absorbed a projectile hit
    ProjectileDeflected,
    /// A life was lost (projectile hit or all balls gone)
    LifeLost,
    /// All bricks (and the boss, if any) cleared; `finished` is the level
    /// that was just completed
    LevelComplete { finished: u32 },
    /// The last life was lost
    GameOver,
}
