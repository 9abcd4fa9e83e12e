//! Game tuning.  All distances are logical pixels, all speeds and lifetimes
//! are per frame at `FPS`.

use std::time::Duration;

use crate::render::Rgb;

// ── Screen & timing ───────────────────────────────────────────────────────────

pub const WIDTH: i32 = 1024;
pub const HEIGHT: i32 = 768;
pub const FPS: u64 = 60;
pub const FRAME: Duration = Duration::from_micros(1_000_000 / FPS);

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: u32 = 40;
pub const PLAYER_SPEED: i32 = 8;
pub const PLAYER_START_X: i32 = WIDTH / 2 - 20;
pub const PLAYER_START_Y: i32 = HEIGHT - 100;
pub const SHIELD_MAX: u32 = 100;
/// Shield lost per frame of enemy contact.
pub const SHIELD_DAMAGE: u32 = 40;

// ── Bullets ───────────────────────────────────────────────────────────────────

pub const BULLET_WIDTH: u32 = 4;
pub const BULLET_HEIGHT: u32 = 12;
pub const BULLET_SPEED: i32 = 10;
/// Bullets are kept only while strictly below this line.
pub const BULLET_EXIT_Y: i32 = -20;
pub const BULLET_OFFSET_X: i32 = 18;
pub const BULLET_OFFSET_Y: i32 = -20;

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_SIZE: u32 = 40;
pub const ENEMY_SPAWN_Y: i32 = -40;
/// One-in-N chance per frame.
pub const ENEMY_SPAWN_RATE: u32 = 45;
pub const ENEMY_BASE_SPEED: i32 = 3;
pub const MAX_ENEMY_SPEED: i32 = 8;
pub const KILLS_PER_SPEED_STEP: u32 = 20;

// ── Particles ─────────────────────────────────────────────────────────────────

pub const PARTICLE_LIFETIME: u32 = 15;
pub const PARTICLE_BURST: usize = 20;
pub const PARTICLE_MAX_VELOCITY: f32 = 3.0;
pub const PARTICLE_RADIUS: u32 = 3;

// ── Colour palette ────────────────────────────────────────────────────────────

pub const C_BG: Rgb = Rgb(5, 5, 25);
pub const C_PLAYER: Rgb = Rgb(50, 200, 255);
pub const C_ENEMY: Rgb = Rgb(255, 50, 100);
pub const C_BULLET: Rgb = Rgb(255, 255, 200);
pub const C_UI: Rgb = Rgb(255, 255, 255);
pub const C_SHIELD: Rgb = Rgb(100, 200, 255);
pub const C_PARTICLE: Rgb = Rgb(255, 150, 50);

// ── Files ─────────────────────────────────────────────────────────────────────

pub const ASSETS_DIR: &str = "assets";
pub const HIGH_SCORE_FILE: &str = "highscore.json";
pub const LOG_FILE: &str = "galaxy_defender.log";
