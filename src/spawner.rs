//! Enemy generation and difficulty scaling.

use rand::Rng;

use crate::config::{
    ENEMY_BASE_SPEED, ENEMY_SIZE, ENEMY_SPAWN_RATE, ENEMY_SPAWN_Y, KILLS_PER_SPEED_STEP,
    MAX_ENEMY_SPEED, WIDTH,
};
use crate::entities::Enemy;

/// Roll once for this frame.  One-in-`ENEMY_SPAWN_RATE` chance of a new enemy
/// just above the top edge at a uniformly random column.  No cooldown: every
/// frame is an independent draw.
pub fn maybe_spawn_enemy(rng: &mut impl Rng) -> Option<Enemy> {
    if rng.gen_range(1..=ENEMY_SPAWN_RATE) != 1 {
        return None;
    }
    let x = rng.gen_range(0..=WIDTH - ENEMY_SIZE as i32);
    Some(Enemy::at(x, ENEMY_SPAWN_Y))
}

/// Descent speed for a given score: one step faster every
/// `KILLS_PER_SPEED_STEP` kills, capped at `MAX_ENEMY_SPEED`.
pub fn current_enemy_speed(score: u32) -> i32 {
    let steps = (score / KILLS_PER_SPEED_STEP).min(MAX_ENEMY_SPEED as u32) as i32;
    (ENEMY_BASE_SPEED + steps).min(MAX_ENEMY_SPEED)
}
