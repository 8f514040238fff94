//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. The core emits world-space
//! [`DrawCommand`](crate::core::DrawCommand)s; this crate scales them onto a
//! character framebuffer and flushes that to the terminal.
//!
//! Goals:
//! - Keep `core` free of any terminal dependency
//! - Redraw only the cells that changed between frames
//! - Fit any terminal size by stretching the world canvas

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_gorillas_core as core;
pub use tui_gorillas_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport, MARKER_GLYPH};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
