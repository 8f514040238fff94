//! Engine-independent draw commands.
//!
//! [`render`] turns the current [`GameState`] into a flat list of primitives in
//! world pixel coordinates. Any backend (the terminal view in `tui-gorillas-term`,
//! or an external renderer fed by `skyline-dump`) only has to rasterize them in
//! order.

use serde::{Deserialize, Serialize};

use crate::game_state::{GameState, PlaySession, Screen};
use crate::menu::{Menu, MENU_TITLE};
use crate::types::{Rect, Rgba, CHARACTER_SIZE, WINDOW_COLOR};

pub const BACKGROUND: Rgba = Rgba::opaque(0, 0, 0);

/// Nominal width of the menu block, used to center it.
const MENU_WIDTH: u32 = 324;
const MENU_TITLE_Y: u32 = 100;
const MENU_FIRST_ITEM_Y: u32 = 180;
const MENU_ITEM_SPACING: u32 = 60;

const PLAY_HINT: &str = "Esc: menu   N: new skyline   Q: quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextRole {
    Title,
    Item,
    Selected,
    Hint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole canvas.
    Clear(Rgba),
    FillRect { rect: Rect, color: Rgba },
    Text {
        x: u32,
        y: u32,
        text: String,
        role: TextRole,
    },
    /// Character marker; `player` is 1 or 2.
    Marker { rect: Rect, player: u8 },
}

/// Draw commands for the current frame.
pub fn render(state: &GameState) -> Vec<DrawCommand> {
    let canvas_width = state.config().canvas_width;
    match state.screen() {
        Screen::Menu => render_menu(state.menu(), canvas_width),
        Screen::Playing(session) => render_session(session),
    }
}

pub fn render_menu(menu: &Menu, canvas_width: u32) -> Vec<DrawCommand> {
    let x = canvas_width.saturating_sub(MENU_WIDTH) / 2;
    let mut out = Vec::with_capacity(menu.entries().len() + 2);
    out.push(DrawCommand::Clear(BACKGROUND));
    out.push(DrawCommand::Text {
        x,
        y: MENU_TITLE_Y,
        text: MENU_TITLE.to_string(),
        role: TextRole::Title,
    });
    for (i, entry) in menu.entries().iter().enumerate() {
        let selected = i == menu.selected();
        let (prefix, role) = if selected {
            ("> ", TextRole::Selected)
        } else {
            ("  ", TextRole::Item)
        };
        out.push(DrawCommand::Text {
            x,
            y: MENU_FIRST_ITEM_Y + i as u32 * MENU_ITEM_SPACING,
            text: format!("{}{}", prefix, entry.label()),
            role,
        });
    }
    out
}

pub fn render_session(session: &PlaySession) -> Vec<DrawCommand> {
    let skyline = &session.skyline;
    let mut out = Vec::new();
    out.push(DrawCommand::Clear(BACKGROUND));

    for (i, building) in skyline.buildings.iter().enumerate() {
        let x = skyline.building_x(i);
        let y = skyline.canvas_height.saturating_sub(building.height);
        out.push(DrawCommand::FillRect {
            rect: Rect::new(x, y, building.width, building.height),
            color: building.fill_color,
        });
        for window in &building.windows {
            out.push(DrawCommand::FillRect {
                rect: window.translate(x, y),
                color: WINDOW_COLOR,
            });
        }
    }

    let (first, second) = session.characters;
    for (player, c) in [(1u8, first), (2u8, second)] {
        out.push(DrawCommand::Marker {
            rect: Rect::new(
                c.x.max(0) as u32,
                c.y.max(0) as u32,
                CHARACTER_SIZE,
                CHARACTER_SIZE,
            ),
            player,
        });
    }

    out.push(DrawCommand::Text {
        x: 10,
        y: 10,
        text: PLAY_HINT.to_string(),
        role: TextRole::Hint,
    });
    out
}
