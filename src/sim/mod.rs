//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (all timers are frame counts, never wall clock)
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies
//!
//! Presentation reads a stable snapshot of the entity collections only after
//! [`tick`] returns.

pub mod entities;
pub mod events;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use entities::{Ball, BallKind, BossBrick, Brick, Paddle, PowerUp, PowerUpKind, Projectile, WidthMod};
pub use events::GameEvent;
pub use level::{LevelLayout, build_level, is_boss_level};
pub use rect::Rect;
pub use state::{GamePhase, GameState};
pub use tick::{PaddleCommand, Steer, TickInput, tick};
