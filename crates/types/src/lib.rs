//! Core types module - shared data structures and constants
//!
//! This module defines the plain data produced by the skyline generator and the
//! character placer, plus the small vocabulary of player actions. Nothing here
//! knows about terminals, randomness, or any rendering engine, so every type can
//! be handed to an external renderer as-is (they all serialize with serde).
//!
//! # World Coordinates
//!
//! All geometry is in integer pixels of a "world canvas":
//!
//! - origin at the top-left corner, `y` grows downwards
//! - buildings stand on the bottom edge, laid out left-to-right without gaps
//! - window rectangles are building-local (origin at the building's top-left)
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_CANVAS_WIDTH` | 1024 | World canvas width |
//! | `DEFAULT_CANVAS_HEIGHT` | 768 | World canvas height |
//! | `DEFAULT_BUILDING_COUNT` | 10 | Buildings per skyline |
//! | `WINDOW_HEIGHT` | 20 | Fixed window height |
//! | `CHARACTER_VERTICAL_OFFSET` | 35 | Gap between roof and character anchor |
//! | `MIN_CHARACTER_GAP` | 4 | Minimum index distance between characters |
//!
//! # Examples
//!
//! ```
//! use tui_gorillas_types::{Rect, Rgba, GameAction};
//!
//! let r = Rect::new(10, 20, 30, 40);
//! assert_eq!(r.right(), 40);
//! assert_eq!(r.bottom(), 60);
//! assert!(r.fits_within(40, 60));
//!
//! let c = Rgba::opaque(128, 128, 128);
//! assert_eq!(c.a, 255);
//!
//! assert_eq!(GameAction::from_str("back"), Some(GameAction::Back));
//! ```

use serde::{Deserialize, Serialize};

/// Default world canvas width in pixels.
pub const DEFAULT_CANVAS_WIDTH: u32 = 1024;

/// Default world canvas height in pixels.
pub const DEFAULT_CANVAS_HEIGHT: u32 = 768;

/// Default number of buildings in a skyline.
pub const DEFAULT_BUILDING_COUNT: usize = 10;

/// Fixed window height in pixels.
pub const WINDOW_HEIGHT: u32 = 20;

/// Distance between a rooftop and the character anchor above it.
pub const CHARACTER_VERTICAL_OFFSET: i32 = 35;

/// Minimum index distance between the two placed characters.
pub const MIN_CHARACTER_GAP: usize = 4;

/// Side length of a character marker in world pixels.
pub const CHARACTER_SIZE: u32 = 30;

/// Window fill: pale cyan at roughly 40% opacity.
pub const WINDOW_COLOR: Rgba = Rgba::new(200, 255, 255, 100);


/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Composite `self` over an opaque `below` (straight alpha), returning an opaque color.
    ///
    /// ```
    /// use tui_gorillas_types::Rgba;
    ///
    /// let black = Rgba::opaque(0, 0, 0);
    /// assert_eq!(Rgba::new(255, 255, 255, 255).over(black), Rgba::opaque(255, 255, 255));
    /// assert_eq!(Rgba::new(255, 255, 255, 0).over(black), black);
    /// ```
    pub fn over(self, below: Rgba) -> Rgba {
        let a = self.a as u32;
        let mix = |top: u8, bottom: u8| -> u8 {
            ((top as u32 * a + bottom as u32 * (255 - a) + 127) / 255) as u8
        };
        Rgba::opaque(mix(self.r, below.r), mix(self.g, below.g), mix(self.b, below.b))
    }
}

/// Axis-aligned rectangle in integer pixels.
///
/// Used for window rectangles (building-local) and for draw commands (world space).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True when the rectangle lies inside `[0, width] x [0, height]`.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right() <= width && self.bottom() <= height
    }

    pub fn translate(self, dx: u32, dy: u32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// One generated building.
///
/// Immutable once generated; a new skyline is produced instead of editing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub width: u32,
    pub height: u32,
    pub fill_color: Rgba,
    /// Window rectangles in building-local coordinates, bottom row first.
    pub windows: Vec<Rect>,
}

/// A character ("gorilla") standing on a rooftop.
///
/// `x` is the left edge of its building in world coordinates and `y` sits
/// [`CHARACTER_VERTICAL_OFFSET`] pixels above the roof. `y` may be negative on
/// very short canvases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Character {
    pub building_index: usize,
    pub x: i32,
    pub y: i32,
}

/// Game mode picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayMode {
    PlayerVsPlayer,
    PlayerVsComputer,
}

impl PlayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlayMode::PlayerVsPlayer => "Player vs Player",
            PlayMode::PlayerVsComputer => "Player vs Computer",
        }
    }
}

/// Player actions understood by the game-state machine.
///
/// - **MenuUp / MenuDown**: move the menu cursor (wraps around)
/// - **Select**: activate the highlighted menu entry
/// - **Back**: leave play and return to the menu
/// - **Regenerate**: build a fresh skyline while playing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    MenuUp,
    MenuDown,
    Select,
    Back,
    Regenerate,
}

impl GameAction {
    /// Parse an action name (case-sensitive, camelCase).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "menuUp" => Some(GameAction::MenuUp),
            "menuDown" => Some(GameAction::MenuDown),
            "select" => Some(GameAction::Select),
            "back" => Some(GameAction::Back),
            "regenerate" => Some(GameAction::Regenerate),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MenuUp => "menuUp",
            GameAction::MenuDown => "menuDown",
            GameAction::Select => "select",
            GameAction::Back => "back",
            GameAction::Regenerate => "regenerate",
        }
    }
}
