//! GameView: rasterizes world-space draw commands into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The world canvas is stretched over the whole viewport. Every non-empty
//! rectangle covers at least one cell, so 20px windows stay visible on small
//! terminals.

use crate::core::{DrawCommand, TextRole};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::Rect;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Glyph used for character markers.
pub const MARKER_GLYPH: char = '█';

/// Maps a `canvas_width` x `canvas_height` world onto the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    canvas_width: u32,
    canvas_height: u32,
}

impl GameView {
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            canvas_width: canvas_width.max(1),
            canvas_height: canvas_height.max(1),
        }
    }

    /// Render commands into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, commands: &[DrawCommand], viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        for cmd in commands {
            match cmd {
                DrawCommand::Clear(color) => {
                    fb.clear(Cell {
                        ch: ' ',
                        style: CellStyle::solid((*color).into()),
                    });
                }
                DrawCommand::FillRect { rect, color } => {
                    let (x, y, w, h) = self.cell_rect(*rect, viewport);
                    let color = *color;
                    fb.update_rect(x, y, w, h, |cell| {
                        let bg = cell.style.bg.blend(color);
                        *cell = Cell {
                            ch: ' ',
                            style: CellStyle::solid(bg),
                        };
                    });
                }
                DrawCommand::Marker { rect, player } => {
                    let (x, y, w, h) = self.cell_rect(*rect, viewport);
                    let fg = player_color(*player);
                    fb.update_rect(x, y, w, h, |cell| {
                        cell.ch = MARKER_GLYPH;
                        cell.style.fg = fg;
                        cell.style.bold = true;
                    });
                }
                DrawCommand::Text { x, y, text, role } => {
                    let cx = self.cell_x(*x, viewport);
                    let cy = self.cell_y(*y, viewport);
                    let bg = fb.get(cx, cy).map(|c| c.style.bg).unwrap_or_default();
                    fb.put_str(cx, cy, text, text_style(*role, bg));
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, commands: &[DrawCommand], viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(commands, viewport, &mut fb);
        fb
    }

    fn cell_x(&self, x: u32, viewport: Viewport) -> u16 {
        scale(x, viewport.width, self.canvas_width)
    }

    fn cell_y(&self, y: u32, viewport: Viewport) -> u16 {
        scale(y, viewport.height, self.canvas_height)
    }

    /// World rect -> (x, y, w, h) in cells; non-empty rects get at least 1x1.
    fn cell_rect(&self, rect: Rect, viewport: Viewport) -> (u16, u16, u16, u16) {
        if rect.is_empty() {
            return (0, 0, 0, 0);
        }
        let x0 = self.cell_x(rect.x, viewport);
        let y0 = self.cell_y(rect.y, viewport);
        let x1 = self.cell_x(rect.right(), viewport).max(x0 + 1);
        let y1 = self.cell_y(rect.bottom(), viewport).max(y0 + 1);
        (x0, y0, x1 - x0, y1 - y0)
    }
}

fn scale(v: u32, cells: u16, world: u32) -> u16 {
    ((v as u64 * cells as u64) / world as u64).min(u16::MAX as u64) as u16
}

fn player_color(player: u8) -> Rgb {
    match player {
        1 => Rgb::new(255, 215, 0),
        _ => Rgb::new(255, 99, 71),
    }
}

fn text_style(role: TextRole, bg: Rgb) -> CellStyle {
    let (fg, bold, dim) = match role {
        TextRole::Title => (Rgb::new(255, 255, 255), true, false),
        TextRole::Selected => (Rgb::new(255, 215, 0), true, false),
        TextRole::Item => (Rgb::new(200, 200, 200), false, false),
        TextRole::Hint => (Rgb::new(160, 160, 160), false, true),
    };
    CellStyle { fg, bg, bold, dim }
}
