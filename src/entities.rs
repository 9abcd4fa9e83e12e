//! All game entity types.  Pure data plus the bookkeeping the frame loop
//! needs (reset, add/remove); no game rules live here.

use crate::config::{
    BULLET_HEIGHT, BULLET_WIDTH, ENEMY_BASE_SPEED, ENEMY_SIZE, PARTICLE_LIFETIME, PLAYER_SIZE,
    PLAYER_START_X, PLAYER_START_Y, SHIELD_MAX,
};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in logical pixels.  `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// True when the two rectangles share a non-zero area.  Rectangles that
    /// only touch along an edge or a corner do not overlap, and neither does
    /// a rectangle with no width or height.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Half-open hit test: the left/top edges are inside, the right/bottom
    /// edges are not.
    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.x + self.w / 2) as f32,
            (self.y + self.h / 2) as f32,
        )
    }
}

// ── Status ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

// ── Player & projectiles ──────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
}

impl Player {
    pub fn new() -> Self {
        Player {
            rect: Rect::new(
                PLAYER_START_X,
                PLAYER_START_Y,
                PLAYER_SIZE as i32,
                PLAYER_SIZE as i32,
            ),
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub rect: Rect,
}

impl Bullet {
    pub fn at(x: i32, y: i32) -> Self {
        Bullet {
            rect: Rect::new(x, y, BULLET_WIDTH as i32, BULLET_HEIGHT as i32),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub rect: Rect,
}

impl Enemy {
    pub fn at(x: i32, y: i32) -> Self {
        Enemy {
            rect: Rect::new(x, y, ENEMY_SIZE as i32, ENEMY_SIZE as i32),
        }
    }
}

/// Decorative spark.  Positions are floats so slow velocities stay smooth.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Frames left before the particle is purged.
    pub lifetime: u32,
}

impl Particle {
    /// Render opacity, falling linearly from 255 to 0 over the lifetime.
    pub fn alpha(&self) -> u8 {
        (255 * self.lifetime.min(PARTICLE_LIFETIME) / PARTICLE_LIFETIME) as u8
    }
}

// ── Round state ───────────────────────────────────────────────────────────────

/// Everything that lives for exactly one round.
#[derive(Clone, Debug)]
pub struct PlayState {
    pub player: Player,
    /// Always within `0..=SHIELD_MAX`.
    pub shield: u32,
    pub score: u32,
    pub enemy_speed: i32,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    pub status: GameStatus,
    pub frame: u64,
}

impl PlayState {
    pub fn new() -> Self {
        PlayState {
            player: Player::new(),
            shield: SHIELD_MAX,
            score: 0,
            enemy_speed: ENEMY_BASE_SPEED,
            bullets: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            status: GameStatus::Playing,
            frame: 0,
        }
    }

    /// Back to the start-of-round conditions.
    pub fn reset(&mut self) {
        *self = PlayState::new();
    }

    pub fn add_bullet(&mut self, bullet: Bullet) {
        self.bullets.push(bullet);
    }

    pub fn remove_bullet(&mut self, index: usize) -> Bullet {
        self.bullets.remove(index)
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    pub fn remove_enemy(&mut self, index: usize) -> Enemy {
        self.enemies.remove(index)
    }

    pub fn add_particles(&mut self, burst: impl IntoIterator<Item = Particle>) {
        self.particles.extend(burst);
    }
}

impl Default for PlayState {
    fn default() -> Self {
        Self::new()
    }
}
