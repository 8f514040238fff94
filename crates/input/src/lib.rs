//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The game only
//! reacts to discrete presses, so there is no repeat handling here.

pub mod map;

pub use tui_gorillas_types as types;

pub use map::{handle_key_event, should_quit};
