//! Window layout - the sparse grid of lit windows drawn on a building
//!
//! Three columns of windows, each window `building_width / 5` wide and
//! [`WINDOW_HEIGHT`] tall, centered in its column after a 5% side margin.
//! Rows start near the bottom of the building and step upwards until there is
//! no room left for another row. An optional extra row hugs the roof.
//!
//! Rows that would spill past the building's bottom edge are dropped, so every
//! returned rectangle lies inside `[0, width] x [0, height]`. Small buildings
//! simply get fewer (or zero) windows.

use serde::{Deserialize, Serialize};

use crate::types::{Rect, WINDOW_HEIGHT};

/// Vertical distance between consecutive window rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RowSpacing {
    /// Two window heights per row, first row at 87% of the building height.
    #[default]
    Double,
    /// One and a half window heights per row, first row at 88%. Rows continue
    /// down to ten pixels below the step, so this grid reaches closer to the roof.
    OneAndHalf,
}

impl RowSpacing {
    /// Row step in pixels for the given window height.
    pub fn step(self, window_height: u32) -> u32 {
        match self {
            RowSpacing::Double => window_height * 2,
            RowSpacing::OneAndHalf => window_height * 3 / 2,
        }
    }

    /// Rows are laid out while `y` stays above this value.
    pub fn floor(self, window_height: u32) -> u32 {
        match self {
            RowSpacing::Double => self.step(window_height),
            RowSpacing::OneAndHalf => self.step(window_height).saturating_sub(10),
        }
    }

    /// Where the bottom row starts, as a fraction of the building height.
    pub fn start_ratio(self) -> f64 {
        match self {
            RowSpacing::Double => 0.87,
            RowSpacing::OneAndHalf => 0.88,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "double" | "2" | "2x" => Some(RowSpacing::Double),
            "one-and-half" | "1.5" | "1.5x" => Some(RowSpacing::OneAndHalf),
            _ => None,
        }
    }
}

/// Parameters of the window grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowLayout {
    pub window_height: u32,
    pub columns: u32,
    /// Window width is `building_width / width_divisor`.
    pub width_divisor: u32,
    /// Side margin as a fraction of the building width.
    pub margin_ratio: f64,
    pub row_spacing: RowSpacing,
    /// Draw one more row near the roof when there is room for it.
    pub top_row: bool,
    /// Offset of the roof row as a fraction of the building height.
    pub top_ratio: f64,
}

impl Default for WindowLayout {
    fn default() -> Self {
        Self {
            window_height: WINDOW_HEIGHT,
            columns: 3,
            width_divisor: 5,
            margin_ratio: 0.05,
            row_spacing: RowSpacing::Double,
            top_row: true,
            top_ratio: 0.05,
        }
    }
}

impl WindowLayout {
    /// Compute window rectangles for a `width` x `height` building.
    ///
    /// Rectangles are building-local, bottom row first, left to right within a row.
    pub fn layout(&self, width: u32, height: u32) -> Vec<Rect> {
        let window_w = width / self.width_divisor.max(1);
        let window_h = self.window_height;
        if window_w == 0 || window_h == 0 || self.columns == 0 || height < window_h {
            return Vec::new();
        }

        let margin = (self.margin_ratio * width as f64) as u32;
        let column_w = width.saturating_sub(2 * margin) / self.columns;
        if column_w < window_w {
            return Vec::new();
        }
        let column_x: Vec<u32> = (0..self.columns)
            .map(|col| margin + col * column_w + (column_w - window_w) / 2)
            .collect();

        let step = self.row_spacing.step(window_h);
        let floor = self.row_spacing.floor(window_h);
        let start_y = (self.row_spacing.start_ratio() * height as f64) as u32;

        let mut out = Vec::new();
        let push_row = |y: u32, out: &mut Vec<Rect>| {
            if y + window_h > height {
                return;
            }
            out.extend(column_x.iter().map(|&x| Rect::new(x, y, window_w, window_h)));
        };

        let mut lowest_row = None;
        let mut y = start_y;
        while y > floor {
            push_row(y, &mut out);
            lowest_row = Some(y);
            match y.checked_sub(step) {
                Some(next) if step > 0 => y = next,
                _ => break,
            }
        }

        if self.top_row {
            let top_y = (self.top_ratio * height as f64) as u32;
            let clear_of_grid = lowest_row.map_or(true, |row| top_y + window_h <= row);
            if start_y > top_y + 2 * window_h && clear_of_grid {
                push_row(top_y, &mut out);
            }
        }

        debug_assert!(out.iter().all(|r| r.fits_within(width, height)));
        out
    }
}

/// Window rectangles for a building using the default layout.
pub fn layout_windows(width: u32, height: u32) -> Vec<Rect> {
    WindowLayout::default().layout(width, height)
}
