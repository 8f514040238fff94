//! Main menu: a wrapping cursor over a fixed list of entries.

use crate::types::{GameAction, PlayMode};

/// What a menu entry does when selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    Play(PlayMode),
    Exit,
}

impl MenuEntry {
    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Play(mode) => mode.as_str(),
            MenuEntry::Exit => "Exit",
        }
    }
}

/// Entries of the main menu, top to bottom.
pub const MENU_ENTRIES: [MenuEntry; 3] = [
    MenuEntry::Play(PlayMode::PlayerVsPlayer),
    MenuEntry::Play(PlayMode::PlayerVsComputer),
    MenuEntry::Exit,
];

pub const MENU_TITLE: &str = "Gorilla Go";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    entries: Vec<MenuEntry>,
    selected: usize,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new(MENU_ENTRIES.to_vec())
    }
}

impl Menu {
    pub fn new(entries: Vec<MenuEntry>) -> Self {
        Self {
            entries,
            selected: 0,
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<MenuEntry> {
        self.entries.get(self.selected).copied()
    }

    pub fn move_down(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.entries.len();
    }

    pub fn move_up(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.entries.len() - 1);
    }

    /// Apply a menu action; returns the entry on `Select`.
    pub fn apply(&mut self, action: GameAction) -> Option<MenuEntry> {
        match action {
            GameAction::MenuUp => {
                self.move_up();
                None
            }
            GameAction::MenuDown => {
                self.move_down();
                None
            }
            GameAction::Select => self.selected_entry(),
            GameAction::Back | GameAction::Regenerate => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_both_ways() {
        let mut menu = Menu::default();
        assert_eq!(menu.selected(), 0);
        menu.move_up();
        assert_eq!(menu.selected(), 2);
        menu.move_down();
        assert_eq!(menu.selected(), 0);
        menu.move_down();
        menu.move_down();
        menu.move_down();
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn select_returns_highlighted_entry() {
        let mut menu = Menu::default();
        assert_eq!(
            menu.apply(GameAction::Select),
            Some(MenuEntry::Play(PlayMode::PlayerVsPlayer))
        );
        menu.apply(GameAction::MenuDown);
        menu.apply(GameAction::MenuDown);
        assert_eq!(menu.apply(GameAction::Select), Some(MenuEntry::Exit));
        assert_eq!(menu.apply(GameAction::Back), None);
    }

    #[test]
    fn labels() {
        let labels: Vec<&str> = MENU_ENTRIES.iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["Player vs Player", "Player vs Computer", "Exit"]);
    }

    #[test]
    fn empty_menu_does_not_panic() {
        let mut menu = Menu::new(Vec::new());
        menu.move_up();
        menu.move_down();
        assert_eq!(menu.apply(GameAction::Select), None);
    }
}
