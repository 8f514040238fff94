//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or [`TerminalRenderer::invalidate`])
//! is a full redraw; later frames only rewrite runs of changed cells.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};
use tracing::debug;

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Last frame flushed; `None` forces a full redraw.
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    active: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            active: false,
        }
    }

    /// Raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo [`TerminalRenderer::enter`]. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// Afterwards `fb` holds stale contents the caller is expected to overwrite;
    /// this avoids cloning a frame per draw.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            _ => {
                debug!(width = fb.width(), height = fb.height(), "full redraw");
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut painter = Painter::new(out);
    for y in 0..fb.height() {
        painter.paint_run(fb, y, 0, fb.width())?;
    }
    painter.finish()
}

/// Encode only the changed runs between `prev` and `next` into `out`.
///
/// Both frames must have the same size.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut painter = Painter::new(out);
    for (y, start, len) in changed_runs(prev, next) {
        painter.paint_run(next, y, start, len)?;
    }
    painter.finish()
}

/// Queues cells, emitting SGR changes only where the style differs from the
/// previous cell.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn paint_run(&mut self, fb: &FrameBuffer, y: u16, x: u16, len: u16) -> Result<()> {
        if len == 0 {
            return Ok(());
        }
        self.out.queue(cursor::MoveTo(x, y))?;
        for cx in x..x.saturating_add(len) {
            let cell = fb.get(cx, y).unwrap_or_default();
            self.restyle(cell.style)?;
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn restyle(&mut self, next: CellStyle) -> Result<()> {
        let prev = self.style.replace(next);
        let attrs_changed = prev.map_or(true, |p| p.bold != next.bold || p.dim != next.dim);
        if attrs_changed {
            // Reset clears colors too, so both get re-sent below.
            self.out.queue(SetAttribute(Attribute::Reset))?;
            if next.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if next.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        if attrs_changed || prev.map(|p| p.fg) != Some(next.fg) {
            self.out.queue(SetForegroundColor(rgb_to_color(next.fg)))?;
        }
        if attrs_changed || prev.map(|p| p.bg) != Some(next.bg) {
            self.out.queue(SetBackgroundColor(rgb_to_color(next.bg)))?;
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// `(y, x_start, len)` for each horizontal run of differing cells.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut run_start: Option<u16> = None;
        for x in 0..next.width() {
            let changed = prev.get(x, y) != next.get(x, y);
            match (changed, run_start) {
                (true, None) => run_start = Some(x),
                (false, Some(start)) => {
                    runs.push((y, start, x - start));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            runs.push((y, start, next.width() - start));
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn changed_runs_coalesce_adjacent_cells() {
        let a = FrameBuffer::new(6, 2);
        let mut b = FrameBuffer::new(6, 2);
        let x = Cell {
            ch: 'X',
            style: CellStyle::default(),
        };
        for cx in 1..=3 {
            b.set(cx, 0, x);
        }
        b.set(5, 1, x);
        assert_eq!(changed_runs(&a, &b), vec![(0, 1, 3), (1, 5, 1)]);
    }

    #[test]
    fn identical_frames_encode_no_cells() {
        let a = FrameBuffer::new(4, 4);
        let mut out = Vec::new();
        encode_diff_into(&a, &a.clone(), &mut out).unwrap();
        assert!(changed_runs(&a, &a).is_empty());
        assert!(!String::from_utf8_lossy(&out).contains(' '));
    }

    #[test]
    fn unchanged_style_is_not_resent() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "abcd", CellStyle::solid(Rgb::new(1, 2, 3)));
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let s = String::from_utf8_lossy(&out);
        assert_eq!(s.matches("48;2;1;2;3").count(), 1);
        assert!(s.contains("abcd"));
    }

    #[test]
    fn full_redraw_prints_every_glyph() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_str(0, 0, "AB", CellStyle::default());
        fb.put_str(0, 1, "CD", CellStyle::default());
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let s = String::from_utf8_lossy(&out);
        assert!(s.contains('A') && s.contains('D'));
    }
}
