//! TUI Gorillas (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so binaries, benches and
//! integration tests can use `tui_gorillas::{core,input,term,types}`.

pub use tui_gorillas_core as core;
pub use tui_gorillas_input as input;
pub use tui_gorillas_term as term;
pub use tui_gorillas_types as types;
