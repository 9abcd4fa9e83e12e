//! Rendering layer — all terminal output lives here.
//!
//! Draw commands are painted into an off-screen cell grid first, then the
//! whole grid is written in one pass, so a frame never shows half-drawn.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    QueueableCommand,
};
use galaxy_defender::assets::Assets;
use galaxy_defender::config::C_BG;
use galaxy_defender::entities::Rect;
use galaxy_defender::render::{DrawCommand, FontSize, Rgb, Viewport};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Cell {
    ch: char,
    fg: Rgb,
    bg: Rgb,
    bold: bool,
}

impl Cell {
    fn blank(bg: Rgb) -> Self {
        Cell { ch: ' ', fg: bg, bg, bold: false }
    }
}

fn term_color(c: Rgb) -> Color {
    Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

/// Off-screen frame in terminal cells.
pub struct Canvas {
    viewport: Viewport,
    cells: Vec<Vec<Cell>>,
}

impl Canvas {
    pub fn new(viewport: Viewport) -> Self {
        Canvas {
            viewport,
            cells: vec![vec![Cell::blank(C_BG); viewport.cols as usize]; viewport.rows as usize],
        }
    }

    pub fn resize(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            *self = Canvas::new(viewport);
        }
    }

    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        if col < 0 || row < 0 {
            return None;
        }
        self.cells.get_mut(row as usize)?.get_mut(col as usize)
    }

    /// Inclusive cell span covered by `rect`; `None` for empty rectangles.
    fn span(&self, rect: &Rect) -> Option<((i32, i32), (i32, i32))> {
        if rect.w <= 0 || rect.h <= 0 {
            return None;
        }
        let top_left = self.viewport.to_cell(rect.x, rect.y);
        let bottom_right = self.viewport.to_cell(rect.right() - 1, rect.bottom() - 1);
        Some((top_left, bottom_right))
    }

    fn put(&mut self, col: i32, row: i32, ch: char, fg: Rgb, bold: bool) {
        if let Some(cell) = self.cell_mut(col, row) {
            cell.ch = ch;
            cell.fg = fg;
            cell.bold = bold;
        }
    }

    pub fn draw(&mut self, cmd: &DrawCommand, assets: &Assets) {
        match cmd {
            DrawCommand::Clear(bg) => {
                for row in self.cells.iter_mut() {
                    row.fill(Cell::blank(*bg));
                }
            }
            DrawCommand::FillRect { rect, color } => {
                if let Some(((c0, r0), (c1, r1))) = self.span(rect) {
                    for row in r0..=r1 {
                        for col in c0..=c1 {
                            self.put(col, row, '█', *color, false);
                        }
                    }
                }
            }
            DrawCommand::OutlineRect { rect, color } => {
                if let Some(((c0, r0), (c1, r1))) = self.span(rect) {
                    for col in c0..=c1 {
                        self.put(col, r0, '─', *color, false);
                        self.put(col, r1, '─', *color, false);
                    }
                    for row in r0..=r1 {
                        self.put(c0, row, '│', *color, false);
                        self.put(c1, row, '│', *color, false);
                    }
                    if r0 != r1 && c0 != c1 {
                        self.put(c0, r0, '┌', *color, false);
                        self.put(c1, r0, '┐', *color, false);
                        self.put(c0, r1, '└', *color, false);
                        self.put(c1, r1, '┘', *color, false);
                    }
                }
            }
            DrawCommand::Circle { center, color, alpha, .. } => {
                let (col, row) = self.viewport.to_cell(center.0, center.1);
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.ch = '•';
                    cell.fg = color.over(cell.bg, *alpha);
                    cell.bold = false;
                }
            }
            DrawCommand::Sprite { sprite, rect } => {
                let sprite = assets.get(*sprite);
                if let Some(((c0, r0), (c1, r1))) = self.span(rect) {
                    let cols = (c1 - c0 + 1) as f32;
                    let rows = (r1 - r0 + 1) as f32;
                    for row in r0..=r1 {
                        for col in c0..=c1 {
                            let u = ((col - c0) as f32 + 0.5) / cols;
                            let v = ((row - r0) as f32 + 0.5) / rows;
                            if sprite.sample(u, v) {
                                self.put(col, row, '█', sprite.color, false);
                            }
                        }
                    }
                }
            }
            DrawCommand::Text { text, center, size, color } => {
                let (cx, row) = self.viewport.to_cell(center.0, center.1);
                let start = cx - text.chars().count() as i32 / 2;
                let bold = *size == FontSize::Large;
                for (i, ch) in text.chars().enumerate() {
                    self.put(start + i as i32, row, ch, *color, bold);
                }
            }
        }
    }

    /// Write the whole grid, changing colours only where they change.
    pub fn flush<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for (r, row) in self.cells.iter().enumerate() {
            out.queue(cursor::MoveTo(0, r as u16))?;
            let mut last: Option<(Rgb, Rgb, bool)> = None;
            for cell in row {
                let look = (cell.fg, cell.bg, cell.bold);
                if last != Some(look) {
                    out.queue(style::SetAttribute(if cell.bold {
                        Attribute::Bold
                    } else {
                        Attribute::NormalIntensity
                    }))?;
                    out.queue(style::SetForegroundColor(term_color(cell.fg)))?;
                    out.queue(style::SetBackgroundColor(term_color(cell.bg)))?;
                    last = Some(look);
                }
                out.queue(Print(cell.ch))?;
            }
        }
        out.queue(style::ResetColor)?;
        out.flush()
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    canvas: &mut Canvas,
    commands: &[DrawCommand],
    assets: &Assets,
) -> std::io::Result<()> {
    for cmd in commands {
        canvas.draw(cmd, assets);
    }
    canvas.flush(out)
}
