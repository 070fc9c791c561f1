//! Level Director
//!
//! Pure, deterministic layout generation: `build_level(n)` produces the full
//! entity layout for level `n`. Power-up drop decisions are made later by the
//! engine's RNG and are not part of layout generation.

use super::entities::{BossBrick, Brick};
use super::rect::Rect;
use crate::consts::*;

/// Row palette for normal levels, cycled by `row % 5`
const PALETTE: [[u8; 3]; 5] = [
    [255, 0, 0],   // red
    [255, 165, 0], // orange
    [255, 255, 0], // yellow
    [0, 255, 0],   // green
    [128, 0, 128], // purple
];

/// Support-brick palette on boss levels, cycled by `row % 4`
const BOSS_PALETTE: [[u8; 3]; 4] = [
    [255, 0, 0],
    [255, 165, 0],
    [255, 255, 0],
    [0, 255, 0],
];

/// Initial entity layout for one level
#[derive(Debug, Clone)]
pub struct LevelLayout {
    pub bricks: Vec<Brick>,
    pub boss: Option<BossBrick>,
}

/// Boss levels are exactly 3 and 6 for the 7-level campaign
#[inline]
pub fn is_boss_level(level: u32) -> bool {
    level % 3 == 0 && level <= 6
}

/// Build the brick layout (and boss, on boss levels) for a level.
/// Deterministic pure function of the level number.
pub fn build_level(level: u32) -> LevelLayout {
    let layout = if is_boss_level(level) {
        boss_layout()
    } else {
        LevelLayout {
            bricks: brick_pattern(level),
            boss: None,
        }
    };
    log::info!(
        "level {} layout: {} bricks{}",
        level,
        layout.bricks.len(),
        if layout.boss.is_some() { ", boss" } else { "" }
    );
    layout
}

/// Grid cell position for normal levels
fn grid_rect(row: u32, col: u32) -> Rect {
    Rect::new(
        col as f32 * (BRICK_WIDTH + 5.0) + 35.0,
        row as f32 * (BRICK_HEIGHT + 5.0) + 50.0,
        BRICK_WIDTH,
        BRICK_HEIGHT,
    )
}

fn brick_pattern(level: u32) -> Vec<Brick> {
    let mut bricks = Vec::new();
    let mut push = |row: u32, col: u32, hits: u32| {
        let color = PALETTE[(row as usize) % PALETTE.len()];
        bricks.push(Brick::new(grid_rect(row, col), color, hits));
    };

    match level {
        1 => {
            // full grid, one hit each
            for row in 0..5 {
                for col in 0..10 {
                    push(row, col, 1);
                }
            }
        }
        2 => {
            // top two rows armored
            for row in 0..5 {
                for col in 0..10 {
                    push(row, col, if row < 2 { 2 } else { 1 });
                }
            }
        }
        4 => {
            // modulo gaps, hits grow with depth
            for row in 0..6 {
                for col in 0..10 {
                    if (row + col) % 3 != 0 {
                        push(row, col, (row + 1).min(4));
                    }
                }
            }
        }
        5 => {
            // diamond: Manhattan distance from (3,5), radius 4; tough core
            for row in 0..7u32 {
                for col in 0..10u32 {
                    let dist = row.abs_diff(3) + col.abs_diff(5);
                    if dist <= 4 {
                        push(row, col, if dist <= 1 { 5 } else { 3 });
                    }
                }
            }
        }
        _ => {
            // level 7 and beyond: dense wall
            for row in 0..8 {
                for col in 0..10 {
                    push(row, col, (row + 2).min(6));
                }
            }
        }
    }
    bricks
}

/// Boss plus two rows of support bricks in the outer columns, leaving the
/// middle open for the boss patrol
fn boss_layout() -> LevelLayout {
    let mut bricks = Vec::new();
    for row in 0..2u32 {
        for col in 0..8u32 {
            if col < 2 || col > 5 {
                let rect = Rect::new(
                    col as f32 * (BRICK_WIDTH + 10.0) + 50.0,
                    row as f32 * (BRICK_HEIGHT + 10.0) + 250.0,
                    BRICK_WIDTH,
                    BRICK_HEIGHT,
                );
                let color = BOSS_PALETTE[(row as usize) % BOSS_PALETTE.len()];
                bricks.push(Brick::new(rect, color, if row == 0 { 3 } else { 2 }));
            }
        }
    }
    LevelLayout {
        bricks,
        boss: Some(BossBrick::new()),
    }
}
