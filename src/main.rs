//! Terminal Gorillas runner (default binary).
//!
//! Menu first; "Player vs Player" builds a skyline and puts the two gorillas on
//! it. Configuration comes from `GORILLAS_*` environment variables (see
//! `GameConfig::from_env`). Logs go to `GORILLAS_LOG_PATH` when set, since
//! stdout belongs to the renderer.

use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_gorillas::core::{render, GameConfig, GameState, StateTransition};
use tui_gorillas::input::{handle_key_event, should_quit};
use tui_gorillas::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Input poll interval; the scene is static between key presses.
const POLL_MS: u64 = 100;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;
    info!(
        canvas_width = config.canvas_width,
        canvas_height = config.canvas_height,
        buildings = config.building_count,
        seed = ?config.seed,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path))?;
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter {:?}", config.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let view = GameView::new(config.canvas_width, config.canvas_height);
    let mut state = GameState::new(config);
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let commands = render(&state);
            view.render_into(&commands, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(action) = handle_key_event(key) else {
                    continue;
                };
                if state.advance(action) == StateTransition::Quit {
                    return Ok(());
                }
                dirty = true;
            }
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}
