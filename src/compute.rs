//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `PlayState` (and, where needed, an RNG handle) and returns a brand-new
//! `PlayState`.  `tick` pairs it with the `SoundCue`s the frame produced,
//! for the caller to play.  Side effects are limited to the injected RNG.

use rand::Rng;

use crate::audio::SoundCue;
use crate::config::{
    BULLET_EXIT_Y, BULLET_OFFSET_X, BULLET_OFFSET_Y, BULLET_SPEED, HEIGHT, PLAYER_SPEED,
    SHIELD_DAMAGE, WIDTH,
};
use crate::entities::{Bullet, GameStatus, PlayState, Player, Rect};
use crate::particles;
use crate::spawner::{current_enemy_speed, maybe_spawn_enemy};

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the start-of-round state.
pub fn init_state() -> PlayState {
    PlayState::new()
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

pub fn move_player_left(state: &PlayState) -> PlayState {
    let x = (state.player.rect.x - PLAYER_SPEED).max(0);
    with_player_x(state, x)
}

pub fn move_player_right(state: &PlayState) -> PlayState {
    let max_x = WIDTH - state.player.rect.w;
    let x = (state.player.rect.x + PLAYER_SPEED).min(max_x);
    with_player_x(state, x)
}

fn with_player_x(state: &PlayState, x: i32) -> PlayState {
    PlayState {
        player: Player {
            rect: Rect { x, ..state.player.rect },
        },
        ..state.clone()
    }
}

/// Fire a bullet from the ship's nose.  No cap on bullets in flight.
pub fn player_shoot(state: &PlayState) -> PlayState {
    let p = &state.player.rect;
    let mut next = state.clone();
    next.add_bullet(Bullet::at(p.x + BULLET_OFFSET_X, p.y + BULLET_OFFSET_Y));
    next
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one frame.  All randomness comes through `rng`
/// so callers control determinism (useful for tests with a seeded RNG).
///
/// Step order is observable and must not change: bullets, spawn, enemy
/// movement, per-enemy player hit then bullet hit, particles.
pub fn tick(state: &PlayState, rng: &mut impl Rng) -> (PlayState, Vec<SoundCue>) {
    let mut next = state.clone();
    let mut cues = Vec::new();
    next.frame += 1;

    // ── 1. Bullets: drop the ones already past the top, then move ────────────
    next.bullets.retain(|b| b.rect.y > BULLET_EXIT_Y);
    for b in next.bullets.iter_mut() {
        b.rect.y -= BULLET_SPEED;
    }

    // ── 2. Spawn ─────────────────────────────────────────────────────────────
    if let Some(enemy) = maybe_spawn_enemy(rng) {
        log::debug!("frame {}: enemy spawned at x={}", next.frame, enemy.rect.x);
        next.add_enemy(enemy);
    }

    // ── 3. Enemies: drop the ones already past the bottom, then move ─────────
    next.enemies.retain(|e| e.rect.y < HEIGHT);
    let speed = next.enemy_speed;
    for e in next.enemies.iter_mut() {
        e.rect.y += speed;
    }

    // ── 4. Collisions, one enemy at a time ───────────────────────────────────
    // A killed enemy is removed in place, so the one behind it slides into
    // slot `i` and is still checked this frame.
    let mut i = 0;
    while i < next.enemies.len() {
        let rect = next.enemies[i].rect;

        // Player contact first.  Game over takes effect immediately but the
        // rest of the frame still runs.
        if rect.overlaps(&next.player.rect) {
            next.shield = next.shield.saturating_sub(SHIELD_DAMAGE);
            if next.shield == 0 && next.status == GameStatus::Playing {
                log::info!("shield depleted at score {}", next.score);
                next.status = GameStatus::GameOver;
                cues.push(SoundCue::Explosion);
            }
        }

        // At most one bullet per enemy; the first in collection order wins.
        match next.bullets.iter().position(|b| rect.overlaps(&b.rect)) {
            Some(bi) => {
                next.remove_bullet(bi);
                let enemy = next.remove_enemy(i);
                next.score += 1;
                next.enemy_speed = current_enemy_speed(next.score);
                next.add_particles(particles::spawn_burst(enemy.rect.center(), rng));
                cues.push(SoundCue::Explosion);
                log::debug!(
                    "enemy destroyed, score {} speed {}",
                    next.score,
                    next.enemy_speed
                );
            }
            None => i += 1,
        }
    }

    // ── 5. Particles ─────────────────────────────────────────────────────────
    particles::advance(&mut next.particles);

    (next, cues)
}
