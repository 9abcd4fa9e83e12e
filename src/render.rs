//! Draw commands.  Game screens are described as a flat list of primitives in
//! logical pixel space; the front end decides how to put them on screen.

use crate::config::{
    C_BG, C_PARTICLE, C_SHIELD, C_UI, HEIGHT, PARTICLE_RADIUS, SHIELD_MAX, WIDTH,
};
use crate::entities::{PlayState, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Blend towards `bg` as if drawn with the given opacity.
    pub fn over(self, bg: Rgb, alpha: u8) -> Rgb {
        let mix = |fg: u8, bg: u8| -> u8 {
            let a = alpha as u32;
            ((fg as u32 * a + bg as u32 * (255 - a)) / 255) as u8
        };
        Rgb(mix(self.0, bg.0), mix(self.1, bg.1), mix(self.2, bg.2))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontSize {
    Large,
    Medium,
    Small,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpriteId {
    Player,
    Bullet,
    Enemy,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Rgb),
    FillRect { rect: Rect, color: Rgb },
    OutlineRect { rect: Rect, color: Rgb },
    Circle { center: (i32, i32), radius: u32, color: Rgb, alpha: u8 },
    Sprite { sprite: SpriteId, rect: Rect },
    /// Text centred on `center`.
    Text { text: String, center: (i32, i32), size: FontSize, color: Rgb },
}

fn text(s: impl Into<String>, x: i32, y: i32, size: FontSize) -> DrawCommand {
    DrawCommand::Text { text: s.into(), center: (x, y), size, color: C_UI }
}

// ── Menu ──────────────────────────────────────────────────────────────────────

pub fn menu_play_button() -> Rect {
    Rect::new(WIDTH / 2 - 100, HEIGHT / 2, 200, 50)
}

pub fn menu_quit_button() -> Rect {
    Rect::new(WIDTH / 2 - 100, HEIGHT / 2 + 80, 200, 50)
}

pub fn menu_commands(high_score: u32) -> Vec<DrawCommand> {
    vec![
        DrawCommand::Clear(C_BG),
        text("GALAXY DEFENDER", WIDTH / 2, HEIGHT / 3, FontSize::Large),
        DrawCommand::OutlineRect { rect: menu_play_button(), color: C_UI },
        DrawCommand::OutlineRect { rect: menu_quit_button(), color: C_UI },
        text("PLAY", WIDTH / 2, HEIGHT / 2 + 25, FontSize::Medium),
        text("QUIT", WIDTH / 2, HEIGHT / 2 + 105, FontSize::Medium),
        text(format!("HIGH SCORE: {}", high_score), WIDTH / 2, HEIGHT - 50, FontSize::Small),
    ]
}

// ── Playing ───────────────────────────────────────────────────────────────────

pub fn shield_bar(shield: u32) -> Rect {
    let width = 200 * shield.min(SHIELD_MAX) / SHIELD_MAX;
    Rect::new(10, 10, width as i32, 20)
}

pub fn playing_commands(state: &PlayState, high_score: u32) -> Vec<DrawCommand> {
    let mut cmds = Vec::with_capacity(
        6 + state.bullets.len() + state.enemies.len() + state.particles.len(),
    );
    cmds.push(DrawCommand::Clear(C_BG));
    cmds.push(DrawCommand::Sprite { sprite: SpriteId::Player, rect: state.player.rect });

    for b in &state.bullets {
        cmds.push(DrawCommand::Sprite { sprite: SpriteId::Bullet, rect: b.rect });
    }
    for e in &state.enemies {
        cmds.push(DrawCommand::Sprite { sprite: SpriteId::Enemy, rect: e.rect });
    }
    for p in &state.particles {
        cmds.push(DrawCommand::Circle {
            center: (p.x as i32, p.y as i32),
            radius: PARTICLE_RADIUS,
            color: C_PARTICLE,
            alpha: p.alpha(),
        });
    }

    // HUD
    cmds.push(DrawCommand::FillRect { rect: shield_bar(state.shield), color: C_SHIELD });
    cmds.push(DrawCommand::OutlineRect { rect: Rect::new(10, 10, 200, 20), color: C_UI });
    cmds.push(text(format!("SCORE: {}", state.score), WIDTH - 100, 20, FontSize::Small));
    cmds.push(text(format!("HIGH SCORE: {}", high_score), WIDTH / 2, 20, FontSize::Small));
    cmds
}

// ── Game over ─────────────────────────────────────────────────────────────────

pub fn game_over_commands(score: u32) -> Vec<DrawCommand> {
    vec![
        DrawCommand::Clear(C_BG),
        text("GAME OVER", WIDTH / 2, HEIGHT / 3, FontSize::Large),
        text(format!("FINAL SCORE: {}", score), WIDTH / 2, HEIGHT / 2, FontSize::Medium),
        text("CLICK TO RETURN TO MENU", WIDTH / 2, HEIGHT - 100, FontSize::Small),
    ]
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps the logical `WIDTH`x`HEIGHT` playfield onto a terminal grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Viewport { cols: cols.max(1), rows: rows.max(1) }
    }

    /// Cell containing the logical point.  May lie outside the grid.
    pub fn to_cell(&self, x: i32, y: i32) -> (i32, i32) {
        (
            (x as i64 * self.cols as i64).div_euclid(WIDTH as i64) as i32,
            (y as i64 * self.rows as i64).div_euclid(HEIGHT as i64) as i32,
        )
    }

    /// Logical point at the centre of a cell.
    pub fn to_logical(&self, col: u16, row: u16) -> (i32, i32) {
        (
            ((col as f32 + 0.5) * WIDTH as f32 / self.cols as f32) as i32,
            ((row as f32 + 0.5) * HEIGHT as f32 / self.rows as f32) as i32,
        )
    }
}
