//! Game-state machine: menu <-> play.
//!
//! The caller owns the loop. Each frame it feeds player actions into
//! [`GameState::advance`] and draws whatever [`crate::draw::render`] returns.
//! Entering play (or regenerating) builds a brand-new skyline and placement;
//! the previous ones are dropped.

use tracing::{info, warn};

use crate::config::GameConfig;
use crate::error::SkylineError;
use crate::menu::{Menu, MenuEntry};
use crate::placement::CharacterPlacer;
use crate::rng::{self, GameRng};
use crate::skyline::{Skyline, SkylineGenerator};
use crate::types::{Character, GameAction, PlayMode};

/// One play session: a skyline and the two characters standing on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaySession {
    pub mode: PlayMode,
    pub skyline: Skyline,
    pub characters: (Character, Character),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing(PlaySession),
}

/// Result of feeding one action into the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTransition {
    None,
    EnterPlay(PlayMode),
    ReturnToMenu,
    Regenerated,
    Quit,
    /// Generation or placement failed; the state is unchanged.
    Failed(SkylineError),
}

pub struct GameState {
    config: GameConfig,
    menu: Menu,
    screen: Screen,
    generator: SkylineGenerator<GameRng>,
    placer: CharacterPlacer<GameRng>,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rng::time_seed);
        let (generator_rng, placer_rng) = rng::session_pair(seed);
        let generator =
            SkylineGenerator::with_rng(generator_rng).with_config(config.skyline.clone());
        let placer = CharacterPlacer::with_rng(placer_rng).with_config(config.placement);
        Self {
            config,
            menu: Menu::default(),
            screen: Screen::Menu,
            generator,
            placer,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn session(&self) -> Option<&PlaySession> {
        match &self.screen {
            Screen::Playing(session) => Some(session),
            Screen::Menu => None,
        }
    }

    pub fn advance(&mut self, action: GameAction) -> StateTransition {
        let playing = self.session().map(|session| session.mode);
        let Some(mode) = playing else {
            return self.advance_menu(action);
        };

        match action {
            GameAction::Back => {
                self.screen = Screen::Menu;
                self.placer.clear();
                info!("returned to menu");
                StateTransition::ReturnToMenu
            }
            GameAction::Regenerate => match self.start_session(mode) {
                Ok(()) => StateTransition::Regenerated,
                Err(e) => StateTransition::Failed(e),
            },
            GameAction::MenuUp | GameAction::MenuDown | GameAction::Select => {
                StateTransition::None
            }
        }
    }

    fn advance_menu(&mut self, action: GameAction) -> StateTransition {
        match self.menu.apply(action) {
            Some(MenuEntry::Play(PlayMode::PlayerVsComputer)) => {
                info!("player vs computer is not available");
                StateTransition::None
            }
            Some(MenuEntry::Play(mode)) => match self.start_session(mode) {
                Ok(()) => StateTransition::EnterPlay(mode),
                Err(e) => StateTransition::Failed(e),
            },
            Some(MenuEntry::Exit) => {
                info!("exit selected");
                StateTransition::Quit
            }
            None => StateTransition::None,
        }
    }

    fn start_session(&mut self, mode: PlayMode) -> Result<(), SkylineError> {
        let session = match self.build_session(mode) {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, code = e.code(), "could not start play session");
                return Err(e);
            }
        };
        info!(
            mode = mode.as_str(),
            first = session.characters.0.building_index,
            second = session.characters.1.building_index,
            "entered play"
        );
        self.screen = Screen::Playing(session);
        Ok(())
    }

    fn build_session(&mut self, mode: PlayMode) -> Result<PlaySession, SkylineError> {
        let skyline = self.generator.generate(
            self.config.canvas_width,
            self.config.canvas_height,
            self.config.building_count,
        )?;
        let characters = self.placer.place(
            &skyline.heights(),
            skyline.canvas_width,
            skyline.canvas_height,
        )?;
        Ok(PlaySession {
            mode,
            skyline,
            characters,
        })
    }
}
