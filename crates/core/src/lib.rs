//! Core game logic module - pure, seedable, and testable
//!
//! This crate holds everything with actual rules in it: the skyline generator,
//! the window layout, the character placer, and the small menu/play state
//! machine around them. It has **no dependencies** on terminals or any other
//! rendering engine; its outputs are plain geometry and colors.
//!
//! - **Seedable**: the same seed produces the same skyline and placement
//! - **Pure calls**: `generate`, `place` and `layout` depend only on their
//!   inputs and the injected random source
//! - **Total**: window layout never fails, and color sampling is bounded
//!
//! # Module Structure
//!
//! - [`skyline`]: building heights, colors and widths
//! - [`windows`]: window grid inside one building
//! - [`placement`]: two rooftops at least four buildings apart
//! - [`menu`]: main menu cursor
//! - [`game_state`]: menu <-> play transitions
//! - [`draw`]: world-space draw commands for any renderer
//! - [`config`]: `GORILLAS_*` environment configuration
//! - [`rng`]: seeding helpers
//! - [`error`]: failure kinds
//!
//! # Example
//!
//! ```
//! use tui_gorillas_core::{CharacterPlacer, SkylineGenerator};
//!
//! let mut generator = SkylineGenerator::with_seed(12345);
//! let skyline = generator.generate(1000, 800, 10).unwrap();
//! assert_eq!(skyline.len(), 10);
//! assert!(skyline.buildings.iter().all(|b| b.width == 100));
//!
//! let mut placer = CharacterPlacer::with_seed(12345);
//! let (a, b) = placer.place(&skyline.heights(), 1000, 800).unwrap();
//! assert!(b.building_index >= a.building_index + 4);
//! ```

pub mod config;
pub mod draw;
pub mod error;
pub mod game_state;
pub mod menu;
pub mod placement;
pub mod rng;
pub mod skyline;
pub mod windows;

pub use tui_gorillas_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use draw::{render, DrawCommand, TextRole};
pub use error::SkylineError;
pub use game_state::{GameState, PlaySession, Screen, StateTransition};
pub use menu::{Menu, MenuEntry};
pub use placement::{
    place_characters, CharacterPlacer, OverflowPolicy, PlacementConfig, SpacingBasis,
};
pub use rng::GameRng;
pub use skyline::{
    generate_skyline, HeightRounding, Palette, Skyline, SkylineConfig, SkylineGenerator, Swatch,
    BUILDING_SWATCHES,
};
pub use windows::{layout_windows, RowSpacing, WindowLayout};
