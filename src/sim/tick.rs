//! Fixed timestep frame advance
//!
//! One call to [`tick`] advances the whole simulation by one frame. The
//! update order inside a frame is fixed: paddle, boss, projectiles, balls,
//! ball respawn, power-ups, level completion. Order matters both for the
//! emitted events and to avoid double-resolving collisions.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::entities::{Ball, BallKind, PowerUp, PowerUpKind, Projectile, WidthMod};
use super::events::GameEvent;
use super::level::is_boss_level;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Discrete steering intent for keyboard-style control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Steer {
    #[default]
    None,
    Left,
    Right,
}

/// Paddle control for one frame. Which variant arrives is decided by the
/// external control-mode toggle; the engine treats both uniformly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaddleCommand {
    /// Pointer-style: desired paddle center-x, eased toward with a dead zone
    Track(f32),
    /// Keyboard-style: fixed-step intent
    Steer(Steer),
}

impl Default for PaddleCommand {
    fn default() -> Self {
        PaddleCommand::Steer(Steer::None)
    }
}

/// Input commands for a single frame (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub paddle: PaddleCommand,
    /// Begin play from the start screen
    pub start: bool,
    /// Pause/resume toggle
    pub pause: bool,
    /// Restart the run (gated by `GameState::can_restart`)
    pub restart: bool,
}

/// Advance the game state by one fixed timestep, returning the frame's
/// discrete events for presentation.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // State machine commands are handled even when the sim is frozen
    if input.restart && state.can_restart() {
        state.restart();
        return events;
    }
    match state.phase {
        GamePhase::StartScreen => {
            if input.start {
                state.start();
            }
            return events;
        }
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
            }
            return events;
        }
        GamePhase::Playing => {
            if input.pause {
                state.phase = GamePhase::Paused;
                return events;
            }
        }
    }

    // Terminal conditions freeze the sim; only restart (above) acts on it
    if state.is_game_over() || state.is_victory() {
        return events;
    }

    state.frame += 1;

    // 1. Paddle command and timers
    match input.paddle {
        PaddleCommand::Track(center_x) => state.paddle.track(center_x),
        PaddleCommand::Steer(Steer::Left) => state.paddle.steer(-1.0),
        PaddleCommand::Steer(Steer::Right) => state.paddle.steer(1.0),
        PaddleCommand::Steer(Steer::None) => {}
    }
    state.paddle.step_timers();

    // 2. Boss patrol and shooting, aimed at the paddle's current center
    let paddle_center = state.paddle.rect.center();
    if let Some(boss) = state.boss.as_mut() {
        if !boss.destroyed() && boss.advance() {
            let muzzle = Vec2::new(boss.rect.center_x(), boss.rect.bottom());
            state.projectiles.push(Projectile::aimed(muzzle, paddle_center));
            boss.reset_shoot_timer();
            events.push(GameEvent::ProjectileFired);
        }
    }

    // 3. Projectiles: advance, cull off-screen, resolve paddle hits
    {
        let paddle_rect = state.paddle.rect;
        let shield_active = state.paddle.shield_active();
        let lives = &mut state.lives;
        let events = &mut events;
        state.projectiles.retain_mut(|p| {
            p.advance();
            if !p.on_screen() {
                return false;
            }
            if p.rect.intersects(&paddle_rect) {
                if shield_active {
                    events.push(GameEvent::ProjectileDeflected);
                } else {
                    *lives = lives.saturating_sub(1);
                    events.push(GameEvent::LifeLost);
                }
                return false;
            }
            true
        });
    }

    // 4. Balls: expiry, trail, movement, then collisions in priority order
    //    (walls, paddle, boss, bricks, bottom fall-off). Removal is deferred
    //    to a single compaction so no ball is skipped or processed twice.
    let mut dead = vec![false; state.balls.len()];
    for i in 0..state.balls.len() {
        let ball = &mut state.balls[i];

        // (a) converted balls expire by timer
        if ball.tick_life() {
            dead[i] = true;
            continue;
        }

        // (b) trail, (c) movement
        ball.record_trail();
        ball.advance();

        // (d) walls: sides flip x, top flips y, bottom is open
        if ball.rect.left() <= 0.0 || ball.rect.right() >= SCREEN_WIDTH {
            ball.bounce_x();
        }
        if ball.rect.top() <= 0.0 {
            ball.bounce_y();
        }

        // (e) paddle: only while moving downward; the contact point steers
        // the rebound angle
        if ball.vel.y > 0.0 && ball.rect.intersects(&state.paddle.rect) {
            ball.bounce_y();
            let half_width = state.paddle.rect.width / 2.0;
            let hit_offset = (ball.rect.center_x() - state.paddle.rect.center_x()) / half_width;
            ball.vel.x = BALL_SPEED_X * hit_offset * 0.5;
            events.push(GameEvent::PaddleHit);
        }

        // (f) boss
        if let Some(boss) = state.boss.as_mut() {
            if !boss.destroyed() && ball.rect.intersects(&boss.rect) {
                if boss.hit(ball.damage()) {
                    state.score += BOSS_DEFEAT_SCORE;
                    events.push(GameEvent::BossDefeated {
                        score: BOSS_DEFEAT_SCORE,
                    });
                } else {
                    events.push(GameEvent::BossHit);
                }
                if !ball.can_pierce() {
                    ball.bounce_y();
                }
            }
        }

        // (g) bricks: first live intersecting brick in creation order; one
        // brick per ball per frame
        for bi in 0..state.bricks.len() {
            if state.bricks[bi].destroyed() || !ball.rect.intersects(&state.bricks[bi].rect) {
                continue;
            }
            if state.bricks[bi].hit(ball.damage()) {
                let award = BRICK_SCORE_PER_LEVEL * state.level;
                state.score += award;
                events.push(GameEvent::BrickDestroyed { brick: bi, score: award });
                let center = state.bricks[bi].rect.center();
                if state.rng.random_bool(POWERUP_CHANCE) {
                    let kind = roll_powerup_kind(state.level, &mut state.rng);
                    state.powerups.push(PowerUp::new(center, kind));
                    events.push(GameEvent::PowerUpSpawned { kind });
                }
            } else {
                events.push(GameEvent::BrickDamaged { brick: bi });
            }
            if !ball.can_pierce() {
                ball.bounce_y();
            }
            break;
        }

        // (h) fell off the bottom
        if ball.rect.bottom() >= SCREEN_HEIGHT {
            dead[i] = true;
        }
    }
    let mut keep = dead.iter();
    state.balls.retain(|_| !keep.next().copied().unwrap_or(false));

    // 5. Ball drain: lose a life, respawn while lives remain
    if state.balls.is_empty() {
        state.lives = state.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost);
        if state.lives > 0 {
            state.balls.push(Ball::spawn_center(state.level_speed_scale()));
        } else {
            events.push(GameEvent::GameOver);
        }
    }

    // 6. Power-ups: fall, cull, collect
    {
        let paddle_rect = state.paddle.rect;
        let mut collected = Vec::new();
        state.powerups.retain_mut(|p| {
            p.fall();
            if p.below_screen() {
                return false;
            }
            if p.rect.intersects(&paddle_rect) {
                collected.push(p.kind);
                return false;
            }
            true
        });
        for kind in collected {
            apply_powerup(state, kind);
            events.push(GameEvent::PowerUpCollected { kind });
        }
    }

    // 7. Level completion and transition
    if state.level_cleared() {
        let finished = state.level;
        state.level += 1;
        events.push(GameEvent::LevelComplete { finished });
        log::info!("level {} complete, score {}", finished, state.score);
        if state.level <= MAX_LEVEL {
            state.reset_level();
        }
    }

    events
}

/// Uniform kind choice; boss levels restrict the pool to the stronger kinds
fn roll_powerup_kind(level: u32, rng: &mut Pcg32) -> PowerUpKind {
    let pool: &[PowerUpKind] = if is_boss_level(level) {
        &PowerUpKind::BOSS_POOL
    } else {
        &PowerUpKind::ALL
    };
    pool[rng.random_range(0..pool.len())]
}

/// Apply a collected power-up. All effects are immediate; wide/narrow/shield
/// route through the paddle's timers, the rest mutate ball or counter state.
fn apply_powerup(state: &mut GameState, kind: PowerUpKind) {
    match kind {
        PowerUpKind::WidePaddle => state.paddle.apply_width_mod(WidthMod::Wide),
        PowerUpKind::NarrowPaddle => state.paddle.apply_width_mod(WidthMod::Narrow),
        PowerUpKind::Shield => state.paddle.activate_shield(),
        PowerUpKind::ExtraLife => state.lives += 1,
        PowerUpKind::MultiBall => {
            if state.balls.len() < MAX_BALLS {
                if let Some(source) = state.balls.first() {
                    let dup = source.duplicate();
                    state.balls.push(dup);
                }
            }
        }
        PowerUpKind::FireBall => {
            convert_random_ball(
                state,
                BallKind::Fire {
                    pierce: FIRE_PIERCE_CHARGES,
                },
            );
        }
        PowerUpKind::SteelBall => convert_random_ball(state, BallKind::Steel),
        PowerUpKind::LightningBall => convert_random_ball(state, BallKind::Lightning),
    }
}

fn convert_random_ball(state: &mut GameState, kind: BallKind) {
    if state.balls.is_empty() {
        return;
    }
    let i = state.rng.random_range(0..state.balls.len());
    state.balls[i].convert(kind);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entities::Brick;
    use crate::sim::rect::Rect;

    /// Playing state with no entities; tests place exactly what they need.
    /// A far-away sentinel brick keeps the level from completing.
    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.phase = GamePhase::Playing;
        state.bricks.push(Brick::new(
            Rect::new(5.0, 5.0, BRICK_WIDTH, BRICK_HEIGHT),
            [128, 0, 128],
            1,
        ));
        state
    }

    fn ball_at(center: Vec2, vel: Vec2) -> Ball {
        let mut ball = Ball::spawn_center(1.0);
        ball.rect = Rect::centered_at(center, BALL_SIZE, BALL_SIZE);
        ball.vel = vel;
        ball
    }

    #[test]
    fn test_start_screen_waits_for_start() {
        let mut state = GameState::new(1);
        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.phase, GamePhase::StartScreen);

        tick(&mut state, &TickInput { start: true, ..Default::default() });
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.balls.len(), 1);
    }

    #[test]
    fn test_pause_freezes_everything() {
        let mut state = playing_state(1);
        state.balls.push(ball_at(Vec2::new(400.0, 300.0), Vec2::new(3.0, -3.0)));
        state.paddle.activate_shield();

        let pause = TickInput { pause: true, ..Default::default() };
        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);

        let pos = state.balls[0].rect;
        let shield = state.paddle.shield_timer;
        for _ in 0..100 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.balls[0].rect, pos);
        assert_eq!(state.paddle.shield_timer, shield);

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_restart_gating() {
        let mut state = playing_state(1);
        state.balls.push(ball_at(Vec2::new(400.0, 300.0), Vec2::new(3.0, -3.0)));
        // mid-level restart is refused
        tick(&mut state, &TickInput { restart: true, ..Default::default() });
        assert_eq!(state.score, 0);
        assert!(!state.bricks.is_empty());
        assert_eq!(state.bricks.len(), 1);

        // paused restart is unconditional
        tick(&mut state, &TickInput { pause: true, ..Default::default() });
        tick(&mut state, &TickInput { restart: true, ..Default::default() });
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.level, 1);
        assert_eq!(state.bricks.len(), 50);
    }

    #[test]
    fn test_restart_accepted_on_game_over() {
        let mut state = playing_state(1);
        state.lives = 0;
        tick(&mut state, &TickInput { restart: true, ..Default::default() });
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_head_on_brick_destruction() {
        let mut state = playing_state(1);
        // one-hit brick directly above an upward-moving ball
        state.bricks.push(Brick::new(
            Rect::new(400.0, 200.0, BRICK_WIDTH, BRICK_HEIGHT),
            [255, 0, 0],
            1,
        ));
        state
            .balls
            .push(ball_at(Vec2::new(437.0, 238.0), Vec2::new(0.0, -5.0)));

        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::BrickDestroyed { brick: 1, score: 10 }));
        assert_eq!(state.score, BRICK_SCORE_PER_LEVEL * 1);
        assert!(state.bricks[1].destroyed());
        // vertical velocity flips, ball survives
        assert_eq!(state.balls[0].vel.y, 5.0);
    }

    #[test]
    fn test_multi_hit_brick_darkens_then_dies() {
        let mut state = playing_state(1);
        state.bricks.push(Brick::new(
            Rect::new(400.0, 200.0, BRICK_WIDTH, BRICK_HEIGHT),
            [255, 165, 0],
            2,
        ));
        state
            .balls
            .push(ball_at(Vec2::new(437.0, 238.0), Vec2::new(0.0, -5.0)));

        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::BrickDamaged { brick: 1 }));
        assert_eq!(state.bricks[1].damage_fraction(), 0.5);
        assert_eq!(state.score, 0);
        // bounced away after the first hit
        assert_eq!(state.balls[0].vel.y, 5.0);
    }

    #[test]
    fn test_fire_ball_pierces_consecutive_bricks() {
        let mut state = playing_state(1);
        // two stacked one-hit bricks in the ball's path
        state.bricks.push(Brick::new(
            Rect::new(400.0, 200.0, BRICK_WIDTH, BRICK_HEIGHT),
            [255, 255, 0],
            1,
        ));
        state.bricks.push(Brick::new(
            Rect::new(400.0, 170.0, BRICK_WIDTH, BRICK_HEIGHT),
            [0, 255, 0],
            1,
        ));
        let mut ball = ball_at(Vec2::new(437.0, 240.0), Vec2::new(0.0, -5.0));
        ball.convert(BallKind::Fire { pierce: 2 });
        state.balls.push(ball);

        for _ in 0..20 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.bricks[1].destroyed());
        assert!(state.bricks[2].destroyed());
        // never bounced: still heading up, both charges consumed
        assert_eq!(state.balls[0].vel.y, -5.0);
        assert_eq!(state.balls[0].kind, BallKind::Fire { pierce: 0 });
    }

    #[test]
    fn test_paddle_rebound_angle_from_offset() {
        let mut state = playing_state(1);
        // ball striking the right quarter of the paddle while moving down
        let paddle_center = state.paddle.rect.center_x();
        let contact_x = paddle_center + state.paddle.rect.width / 4.0;
        state.balls.push(ball_at(
            Vec2::new(contact_x, state.paddle.rect.top() - 2.0),
            Vec2::new(0.0, 5.0),
        ));

        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::PaddleHit));
        let ball = &state.balls[0];
        assert_eq!(ball.vel.y, -5.0);
        // offset ~0.5 of the half-width -> vx ~ 5 * 0.5 * 0.5
        assert!((ball.vel.x - BALL_SPEED_X * 0.5 * 0.5).abs() < 0.1);
    }

    #[test]
    fn test_wall_bounces() {
        let mut state = playing_state(1);
        state
            .balls
            .push(ball_at(Vec2::new(6.0, 300.0), Vec2::new(-5.0, -2.0)));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.balls[0].vel.x, 5.0);

        state.balls[0] = ball_at(Vec2::new(400.0, 6.0), Vec2::new(2.0, -5.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.balls[0].vel.y, 5.0);
        assert_eq!(state.balls[0].vel.x, 2.0);
    }

    #[test]
    fn test_ball_drain_respawns_and_costs_a_life() {
        let mut state = playing_state(1);
        state
            .balls
            .push(ball_at(Vec2::new(400.0, SCREEN_HEIGHT - 2.0), Vec2::new(0.0, 5.0)));

        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::LifeLost));
        assert_eq!(state.lives, STARTING_LIVES - 1);
        // fresh normal ball at screen center
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls[0].kind, BallKind::Normal);
        assert_eq!(
            state.balls[0].rect.center(),
            Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)
        );
    }

    #[test]
    fn test_last_life_drain_is_game_over() {
        let mut state = playing_state(1);
        state.lives = 1;
        state
            .balls
            .push(ball_at(Vec2::new(400.0, SCREEN_HEIGHT - 2.0), Vec2::new(0.0, 5.0)));

        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::GameOver));
        assert_eq!(state.lives, 0);
        assert!(state.balls.is_empty());
        assert!(state.is_game_over());

        // frozen: further ticks change nothing
        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert!(state.balls.is_empty());
    }

    #[test]
    fn test_boss_fires_at_paddle() {
        let mut state = playing_state(1);
        state.level = 3;
        state.boss = Some(crate::sim::entities::BossBrick::new());
        state.boss.as_mut().unwrap().shoot_timer = BOSS_SHOOT_FRAMES - 1;
        state.balls.push(ball_at(Vec2::new(400.0, 400.0), Vec2::new(0.0, -1.0)));

        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::ProjectileFired));
        assert_eq!(state.projectiles.len(), 1);
        // aimed downward, toward the paddle
        assert!(state.projectiles[0].vel.y > 0.0);
        assert_eq!(state.boss.as_ref().unwrap().shoot_timer, 0);
    }

    #[test]
    fn test_projectile_hit_costs_life() {
        let mut state = playing_state(1);
        state.balls.push(ball_at(Vec2::new(100.0, 100.0), Vec2::new(0.0, -5.0)));
        let paddle_center = state.paddle.rect.center();
        state
            .projectiles
            .push(Projectile::aimed(paddle_center - Vec2::new(0.0, 3.0), paddle_center));

        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::LifeLost));
        assert_eq!(state.lives, STARTING_LIVES - 1);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_shield_deflects_projectile() {
        let mut state = playing_state(1);
        state.balls.push(ball_at(Vec2::new(100.0, 100.0), Vec2::new(0.0, -5.0)));
        state.paddle.activate_shield();
        let paddle_center = state.paddle.rect.center();
        state
            .projectiles
            .push(Projectile::aimed(paddle_center - Vec2::new(0.0, 3.0), paddle_center));

        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::ProjectileDeflected));
        assert!(!events.contains(&GameEvent::LifeLost));
        assert_eq!(state.lives, STARTING_LIVES);
        assert!(state.projectiles.is_empty());
        // the shield has no hit counter, only its timer
        assert!(state.paddle.shield_active());
    }

    #[test]
    fn test_steel_ball_overshoot_defeats_boss() {
        let mut state = playing_state(1);
        state.level = 6;
        let mut boss = crate::sim::entities::BossBrick::new();
        boss.health = 1;
        let boss_center = boss.rect.center();
        state.boss = Some(boss);
        let mut ball = ball_at(boss_center + Vec2::new(0.0, 20.0), Vec2::new(0.0, -5.0));
        ball.convert(BallKind::Steel);
        state.balls.push(ball);

        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::BossDefeated { score: BOSS_DEFEAT_SCORE }));
        assert_eq!(state.score, BOSS_DEFEAT_SCORE);
        let boss = state.boss.as_ref().unwrap();
        assert!(boss.destroyed());
        assert_eq!(boss.health, -1);
        // steel does not pierce: the ball bounced
        assert_eq!(state.balls[0].vel.y, 5.0);
    }

    #[test]
    fn test_defeated_boss_stops_moving_and_shooting() {
        let mut state = playing_state(1);
        state.level = 3;
        let mut boss = crate::sim::entities::BossBrick::new();
        boss.health = 0;
        boss.shoot_timer = BOSS_SHOOT_FRAMES - 1;
        let x = boss.rect.x;
        state.boss = Some(boss);
        state.balls.push(ball_at(Vec2::new(400.0, 500.0), Vec2::new(0.0, -1.0)));

        let events = tick(&mut state, &TickInput::default());
        assert!(!events.contains(&GameEvent::ProjectileFired));
        assert_eq!(state.boss.as_ref().unwrap().rect.x, x);
    }

    #[test]
    fn test_multi_ball_respects_cap() {
        let mut state = playing_state(1);
        for _ in 0..MAX_BALLS {
            state.balls.push(ball_at(Vec2::new(400.0, 300.0), Vec2::new(3.0, -3.0)));
        }
        apply_powerup(&mut state, PowerUpKind::MultiBall);
        assert_eq!(state.balls.len(), MAX_BALLS);

        state.balls.truncate(1);
        apply_powerup(&mut state, PowerUpKind::MultiBall);
        assert_eq!(state.balls.len(), 2);
        assert_eq!(state.balls[1].vel.x, -state.balls[0].vel.x);
    }

    #[test]
    fn test_powerup_collection_applies_effect() {
        let mut state = playing_state(1);
        state.balls.push(ball_at(Vec2::new(400.0, 300.0), Vec2::new(3.0, -3.0)));
        // capsule one fall-step above the paddle
        let mut capsule = PowerUp::new(state.paddle.rect.center(), PowerUpKind::ExtraLife);
        capsule.rect.y -= POWERUP_FALL_SPEED;
        state.powerups.push(capsule);

        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::PowerUpCollected { kind: PowerUpKind::ExtraLife }));
        assert_eq!(state.lives, STARTING_LIVES + 1);
        assert!(state.powerups.is_empty());
    }

    #[test]
    fn test_missed_powerup_falls_away() {
        let mut state = playing_state(1);
        state.balls.push(ball_at(Vec2::new(400.0, 300.0), Vec2::new(3.0, -3.0)));
        state
            .powerups
            .push(PowerUp::new(Vec2::new(100.0, SCREEN_HEIGHT + 30.0), PowerUpKind::Shield));
        let events = tick(&mut state, &TickInput::default());
        assert!(state.powerups.is_empty());
        assert!(!events.iter().any(|e| matches!(e, GameEvent::PowerUpCollected { .. })));
    }

    #[test]
    fn test_ball_conversion_powerups() {
        let mut state = playing_state(1);
        state.balls.push(ball_at(Vec2::new(400.0, 300.0), Vec2::new(3.0, -3.0)));
        apply_powerup(&mut state, PowerUpKind::FireBall);
        assert_eq!(
            state.balls[0].kind,
            BallKind::Fire {
                pierce: FIRE_PIERCE_CHARGES
            }
        );
        assert_eq!(state.balls[0].life_timer, Some(FIRE_BALL_FRAMES));

        apply_powerup(&mut state, PowerUpKind::SteelBall);
        assert_eq!(state.balls[0].kind, BallKind::Steel);
        assert_eq!(state.balls[0].life_timer, Some(STEEL_BALL_FRAMES));
    }

    #[test]
    fn test_expired_ball_removed_without_life_loss() {
        let mut state = playing_state(1);
        let mut special = ball_at(Vec2::new(200.0, 300.0), Vec2::new(3.0, -3.0));
        special.convert(BallKind::Lightning);
        special.life_timer = Some(1);
        state.balls.push(special);
        state.balls.push(ball_at(Vec2::new(500.0, 300.0), Vec2::new(-3.0, -3.0)));

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls[0].kind, BallKind::Normal);
        assert!(!events.contains(&GameEvent::LifeLost));
        assert_eq!(state.lives, STARTING_LIVES);
    }

    #[test]
    fn test_level_completion_advances_and_rebuilds() {
        let mut state = GameState::new(1);
        state.start();
        state.balls[0].vel = Vec2::new(0.0, -1.0);
        for brick in &mut state.bricks {
            brick.hits_taken = brick.hits_required;
        }

        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::LevelComplete { finished: 1 }));
        assert_eq!(state.level, 2);
        // fresh level 2 set, faster fresh ball
        assert_eq!(state.bricks.len(), 50);
        assert!(state.bricks.iter().all(|b| !b.destroyed()));
        assert_eq!(state.balls.len(), 1);
        assert!((state.balls[0].vel.x - BALL_SPEED_X * LEVEL_SPEED_FACTOR).abs() < 1e-3);
    }

    #[test]
    fn test_final_level_completion_is_victory() {
        let mut state = GameState::new(1);
        state.start();
        state.level = MAX_LEVEL;
        state.reset_level();
        state.balls[0].vel = Vec2::new(0.0, -1.0);
        for brick in &mut state.bricks {
            brick.hits_taken = brick.hits_required;
        }

        let events = tick(&mut state, &TickInput::default());
        assert!(events.contains(&GameEvent::LevelComplete { finished: MAX_LEVEL }));
        assert!(state.is_victory());
        assert!(state.can_restart());
        // frozen after victory
        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
    }

    #[test]
    fn test_determinism_same_seed_same_run() {
        let mut a = GameState::new(99999);
        let mut b = GameState::new(99999);
        a.start();
        b.start();

        for frame in 0..600 {
            let input = TickInput {
                paddle: PaddleCommand::Track(200.0 + (frame % 400) as f32),
                ..Default::default()
            };
            let ea = tick(&mut a, &input);
            let eb = tick(&mut b, &input);
            assert_eq!(ea, eb);
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.lives, b.lives);
        assert_eq!(a.balls.len(), b.balls.len());
        assert_eq!(a.paddle.rect, b.paddle.rect);
    }
}
