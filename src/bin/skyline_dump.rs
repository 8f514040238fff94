//! Print one generated skyline and its character placement as JSON.
//!
//! For external renderers (and for eyeballing the generator). Reads the same
//! `GORILLAS_*` environment as the game; `GORILLAS_SEED` makes the output
//! reproducible. Logs go to stderr.
//!
//! ```bash
//! GORILLAS_SEED=7 cargo run --bin skyline-dump
//! GORILLAS_SEED=7 cargo run --bin skyline-dump -- --commands
//! ```

use std::io::{self, Write};

use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_gorillas::core::{
    draw, rng, CharacterPlacer, DrawCommand, GameConfig, PlaySession, Skyline, SkylineGenerator,
};
use tui_gorillas::types::{Character, PlayMode};

#[derive(Debug, Serialize)]
struct Dump {
    seed: u64,
    skyline: Skyline,
    characters: [Character; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    commands: Option<Vec<DrawCommand>>,
}

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter {:?}", config.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut with_commands = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--commands" => with_commands = true,
            other => return Err(anyhow!("skyline-dump: unknown argument: {}", other)),
        }
    }

    let seed = config.seed.unwrap_or_else(rng::time_seed);
    info!(seed, "generating skyline");

    // Same derivation as the game, so a seed shows the skyline the game would build first.
    let (generator_rng, placer_rng) = rng::session_pair(seed);
    let skyline = SkylineGenerator::with_rng(generator_rng)
        .with_config(config.skyline.clone())
        .generate(config.canvas_width, config.canvas_height, config.building_count)
        .context("skyline generation failed")?;
    let (first, second) = CharacterPlacer::with_rng(placer_rng)
        .with_config(config.placement)
        .place(&skyline.heights(), skyline.canvas_width, skyline.canvas_height)
        .context("character placement failed")?;

    let commands = with_commands.then(|| {
        draw::render_session(&PlaySession {
            mode: PlayMode::PlayerVsPlayer,
            skyline: skyline.clone(),
            characters: (first, second),
        })
    });

    let dump = Dump {
        seed,
        skyline,
        characters: [first, second],
        commands,
    };

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &dump)?;
    writeln!(stdout)?;
    Ok(())
}
