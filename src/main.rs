//! Headless demo run
//!
//! Drives the simulation with a simple ball-tracking paddle policy and logs
//! the events of each frame. Useful for soak-testing determinism and for
//! eyeballing event streams without a frontend. Pass a seed as the first
//! argument to reproduce a run.

use brickstorm::consts::*;
use brickstorm::sim::{GameEvent, GameState, PaddleCommand, TickInput, tick};

/// Ten minutes of simulated play
const MAX_FRAMES: u64 = 60 * 600;

fn main() {
    env_logger::init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("invalid seed {arg:?}: {err}");
                std::process::exit(2);
            }
        },
        None => 42,
    };

    let mut state = GameState::new(seed);
    tick(&mut state, &TickInput { start: true, ..Default::default() });

    for _ in 0..MAX_FRAMES {
        let input = TickInput {
            paddle: PaddleCommand::Track(target_x(&state)),
            ..Default::default()
        };
        let events = tick(&mut state, &input);
        for event in &events {
            log::debug!("frame {}: {:?}", state.frame, event);
        }
        if events.contains(&GameEvent::GameOver) || state.is_victory() {
            break;
        }
    }

    let outcome = if state.is_victory() {
        "victory"
    } else if state.is_game_over() {
        "game over"
    } else {
        "time up"
    };
    println!(
        "seed {}: {} after {} frames, level {}, score {}",
        seed, outcome, state.frame, state.level, state.score
    );

    match serde_json::to_string_pretty(&state) {
        Ok(snapshot) => log::info!("final state:\n{snapshot}"),
        Err(err) => log::error!("snapshot failed: {err}"),
    }
}

/// Track the most urgent threat: the lowest descending ball, otherwise the
/// lowest falling power-up, otherwise the screen center.
fn target_x(state: &GameState) -> f32 {
    state
        .balls
        .iter()
        .filter(|b| b.vel.y > 0.0)
        .max_by(|a, b| a.rect.y.total_cmp(&b.rect.y))
        .map(|b| b.rect.center_x())
        .or_else(|| {
            state
                .powerups
                .iter()
                .max_by(|a, b| a.rect.y.total_cmp(&b.rect.y))
                .map(|p| p.rect.center_x())
        })
        .unwrap_or(SCREEN_WIDTH / 2.0)
}
