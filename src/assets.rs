//! Sprite loading with procedural fallbacks.
//!
//! A sprite is a boolean mask stretched over whatever rectangle it is drawn
//! into, so collision geometry never depends on which art was loaded.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::{C_BULLET, C_ENEMY, C_PLAYER};
use crate::render::{Rgb, SpriteId};

/// Resolution of the rasterised fallback ship shapes.
const FALLBACK_GRID: usize = 8;

// Fallback outlines in the 40x40 ship box.
const PLAYER_OUTLINE: [(f32, f32); 4] = [(20.0, 0.0), (40.0, 40.0), (20.0, 30.0), (0.0, 40.0)];
const ENEMY_OUTLINE: [(f32, f32); 4] = [(20.0, 40.0), (40.0, 0.0), (20.0, 10.0), (0.0, 0.0)];

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    /// Row-major, `true` = opaque.
    pub mask: Vec<Vec<bool>>,
    pub color: Rgb,
}

impl Sprite {
    /// Parse ASCII art: one row per line, space is transparent, anything else
    /// is opaque.  Short lines are padded.
    pub fn from_ascii(text: &str, color: Rgb) -> Option<Sprite> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        let width = lines.iter().map(|l| l.chars().count()).max()?;
        let mask = lines
            .iter()
            .map(|l| {
                let mut row: Vec<bool> = l.chars().map(|c| c != ' ').collect();
                row.resize(width, false);
                row
            })
            .collect();
        Some(Sprite { mask, color })
    }

    /// Rasterise a polygon given in a `w`x`h` box into a `cols`x`rows` mask,
    /// sampling each cell at its centre.
    pub fn from_polygon(
        points: &[(f32, f32)],
        w: f32,
        h: f32,
        cols: usize,
        rows: usize,
        color: Rgb,
    ) -> Sprite {
        let mask = (0..rows)
            .map(|r| {
                (0..cols)
                    .map(|c| {
                        let px = (c as f32 + 0.5) * w / cols as f32;
                        let py = (r as f32 + 0.5) * h / rows as f32;
                        point_in_polygon(px, py, points)
                    })
                    .collect()
            })
            .collect();
        Sprite { mask, color }
    }

    pub fn solid(color: Rgb) -> Sprite {
        Sprite { mask: vec![vec![true]], color }
    }

    pub fn rows(&self) -> usize {
        self.mask.len()
    }

    pub fn cols(&self) -> usize {
        self.mask.first().map_or(0, Vec::len)
    }

    /// Opacity at fractional position (`u`, `v`) in `[0, 1)`.
    pub fn sample(&self, u: f32, v: f32) -> bool {
        let (rows, cols) = (self.rows(), self.cols());
        if rows == 0 || cols == 0 {
            return false;
        }
        let r = ((v.clamp(0.0, 1.0) * rows as f32) as usize).min(rows - 1);
        let c = ((u.clamp(0.0, 1.0) * cols as f32) as usize).min(cols - 1);
        self.mask[r][c]
    }
}

/// Even-odd rule.
fn point_in_polygon(x: f32, y: f32, points: &[(f32, f32)]) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

#[derive(Clone, Debug)]
pub struct Assets {
    pub player: Sprite,
    pub bullet: Sprite,
    pub enemy: Sprite,
    /// True when the placeholder shapes are in use.
    pub fallback: bool,
}

impl Assets {
    /// Load `player_ship.txt`, `bullet.txt` and `enemy_ship.txt` from `dir`.
    /// If any one of them is unusable, all three placeholders are used.
    pub fn load(dir: &Path) -> Assets {
        match Self::try_load(dir) {
            Ok(assets) => {
                log::info!("sprites loaded from {}", dir.display());
                assets
            }
            Err(e) => {
                log::warn!("using placeholder sprites ({}): {}", dir.display(), e);
                Self::placeholders()
            }
        }
    }

    fn try_load(dir: &Path) -> io::Result<Assets> {
        let read = |name: &str, color: Rgb| -> io::Result<Sprite> {
            let text = fs::read_to_string(dir.join(name))?;
            Sprite::from_ascii(&text, color).ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidData, format!("{} is empty", name))
            })
        };
        Ok(Assets {
            player: read("player_ship.txt", C_PLAYER)?,
            bullet: read("bullet.txt", C_BULLET)?,
            enemy: read("enemy_ship.txt", C_ENEMY)?,
            fallback: false,
        })
    }

    pub fn placeholders() -> Assets {
        let ship = |outline: &[(f32, f32)], color| {
            Sprite::from_polygon(outline, 40.0, 40.0, FALLBACK_GRID, FALLBACK_GRID, color)
        };
        Assets {
            player: ship(&PLAYER_OUTLINE, C_PLAYER),
            bullet: Sprite::solid(C_BULLET),
            enemy: ship(&ENEMY_OUTLINE, C_ENEMY),
            fallback: true,
        }
    }

    pub fn get(&self, id: SpriteId) -> &Sprite {
        match id {
            SpriteId::Player => &self.player,
            SpriteId::Bullet => &self.bullet,
            SpriteId::Enemy => &self.enemy,
        }
    }
}
