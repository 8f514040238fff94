//! Skyline generation
//!
//! A skyline is a fixed number of equally wide buildings covering the canvas
//! from the left edge. Each building gets:
//!
//! - a height sampled uniformly from `[0.3, 0.8] x canvas_height` (inclusive),
//!   optionally snapped to multiples of 10
//! - a palette color different from its left neighbour (rejection sampling,
//!   capped at [`MAX_COLOR_RETRIES`] draws)
//! - a window grid from [`WindowLayout`]
//!
//! Width is `canvas_width / building_count`; remainder pixels on the right stay
//! empty.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::SkylineError;
use crate::rng::{self, GameRng};
use crate::types::{Building, Rgba, DEFAULT_BUILDING_COUNT};
use crate::windows::WindowLayout;

/// Color draws allowed per building before a repeated color is accepted.
pub const MAX_COLOR_RETRIES: usize = 32;

/// A named palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Swatch {
    pub name: &'static str,
    pub color: Rgba,
}

impl Swatch {
    pub const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self {
            name,
            color: Rgba::opaque(r, g, b),
        }
    }
}

/// The twelve building tones: grays, beiges, browns, blues and greens.
pub const BUILDING_SWATCHES: [Swatch; 12] = [
    Swatch::new("medium gray", 128, 128, 128),
    Swatch::new("dark gray", 64, 64, 64),
    Swatch::new("medium beige", 222, 184, 135),
    Swatch::new("dark beige", 160, 82, 45),
    Swatch::new("dark brown", 102, 51, 0),
    Swatch::new("medium brown", 139, 69, 19),
    Swatch::new("reddish brown", 165, 42, 42),
    Swatch::new("classic blue", 0, 0, 255),
    Swatch::new("light blue", 135, 206, 235),
    Swatch::new("royal blue", 30, 144, 255),
    Swatch::new("dark green", 0, 128, 0),
    Swatch::new("olive green", 153, 204, 51),
];

/// Non-empty list of building colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    swatches: Vec<Swatch>,
}

impl Palette {
    /// Build a palette; `None` when `swatches` is empty.
    pub fn new(swatches: Vec<Swatch>) -> Option<Self> {
        if swatches.is_empty() {
            None
        } else {
            Some(Self { swatches })
        }
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgba {
        self.swatches[rng.gen_range(0..self.swatches.len())].color
    }

    /// Draw a color that differs from `previous`, giving up after
    /// [`MAX_COLOR_RETRIES`] draws (e.g. single-color palettes).
    fn pick_distinct<R: Rng + ?Sized>(&self, rng: &mut R, previous: Option<Rgba>) -> Rgba {
        let mut color = self.pick(rng);
        let Some(previous) = previous else {
            return color;
        };
        for _ in 1..MAX_COLOR_RETRIES {
            if color != previous {
                return color;
            }
            color = self.pick(rng);
        }
        if color == previous {
            warn!(?color, "color retries exhausted, repeating neighbour color");
        }
        color
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            swatches: BUILDING_SWATCHES.to_vec(),
        }
    }
}

/// How sampled heights are quantized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HeightRounding {
    /// Any integer in `[min, max]`.
    #[default]
    Exact,
    /// Bounds truncated to multiples of 10 and heights stepping by 10.
    NearestTen,
}

/// Generator parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SkylineConfig {
    /// Shortest building as a fraction of the canvas height.
    pub min_height_ratio: f64,
    /// Tallest building as a fraction of the canvas height.
    pub max_height_ratio: f64,
    pub rounding: HeightRounding,
    pub palette: Palette,
    pub windows: WindowLayout,
}

impl Default for SkylineConfig {
    fn default() -> Self {
        Self {
            min_height_ratio: 0.3,
            max_height_ratio: 0.8,
            rounding: HeightRounding::Exact,
            palette: Palette::default(),
            windows: WindowLayout::default(),
        }
    }
}

impl SkylineConfig {
    /// Inclusive height bounds for a canvas of the given height.
    pub fn height_bounds(&self, canvas_height: u32) -> (u32, u32) {
        let h = canvas_height as f64;
        let (min, max) = match self.rounding {
            HeightRounding::Exact => (
                (self.min_height_ratio * h) as u32,
                (self.max_height_ratio * h) as u32,
            ),
            HeightRounding::NearestTen => (
                (self.min_height_ratio * h / 10.0) as u32 * 10,
                (self.max_height_ratio * h / 10.0) as u32 * 10,
            ),
        };
        (min.min(max), max.max(min))
    }

    fn sample_height<R: Rng + ?Sized>(&self, rng: &mut R, min: u32, max: u32) -> u32 {
        match self.rounding {
            HeightRounding::Exact => rng.gen_range(min..=max),
            HeightRounding::NearestTen => min + rng.gen_range(0..=(max - min) / 10) * 10,
        }
    }
}

/// Generated buildings, left to right, plus the canvas they were made for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skyline {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub building_width: u32,
    pub buildings: Vec<Building>,
}

impl Skyline {
    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }

    pub fn heights(&self) -> Vec<u32> {
        self.buildings.iter().map(|b| b.height).collect()
    }

    /// World x of the left edge of building `index`.
    pub fn building_x(&self, index: usize) -> u32 {
        index as u32 * self.building_width
    }

    /// World y of the roof of building `index`, if it exists.
    pub fn roof_y(&self, index: usize) -> Option<u32> {
        self.buildings
            .get(index)
            .map(|b| self.canvas_height.saturating_sub(b.height))
    }

    /// Total width covered by buildings.
    pub fn covered_width(&self) -> u32 {
        self.building_width * self.buildings.len() as u32
    }
}

/// Generate a skyline from an explicit random source.
///
/// This is a pure function of its inputs and the state of `rng`.
pub fn generate_skyline<R: Rng + ?Sized>(
    rng: &mut R,
    config: &SkylineConfig,
    canvas_width: u32,
    canvas_height: u32,
    building_count: usize,
) -> Result<Skyline, SkylineError> {
    let invalid = SkylineError::InvalidDimensions {
        canvas_width,
        canvas_height,
        building_count,
    };
    if building_count == 0 || canvas_height == 0 || (canvas_width as usize) < building_count {
        return Err(invalid);
    }

    let building_width = canvas_width / building_count as u32;
    let (min_height, max_height) = config.height_bounds(canvas_height);

    let mut buildings: Vec<Building> = Vec::with_capacity(building_count);
    for _ in 0..building_count {
        let height = config.sample_height(rng, min_height, max_height);
        let previous = buildings.last().map(|b| b.fill_color);
        let fill_color = config.palette.pick_distinct(rng, previous);
        let windows = config.windows.layout(building_width, height);
        buildings.push(Building {
            width: building_width,
            height,
            fill_color,
            windows,
        });
    }

    debug!(
        canvas_width,
        canvas_height,
        building_count,
        building_width,
        min_height,
        max_height,
        "generated skyline"
    );

    Ok(Skyline {
        canvas_width,
        canvas_height,
        building_width,
        buildings,
    })
}

/// Owns a random source and produces a fresh [`Skyline`] on every call.
#[derive(Debug, Clone)]
pub struct SkylineGenerator<R = GameRng> {
    rng: R,
    config: SkylineConfig,
}

impl SkylineGenerator<GameRng> {
    /// Generator seeded from the wall clock.
    pub fn new() -> Self {
        Self::with_rng(rng::time_seeded())
    }

    /// Generator with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(rng::seeded(seed))
    }
}

impl Default for SkylineGenerator<GameRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> SkylineGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            config: SkylineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SkylineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SkylineConfig {
        &self.config
    }

    /// Generate a new skyline.
    pub fn generate(
        &mut self,
        canvas_width: u32,
        canvas_height: u32,
        building_count: usize,
    ) -> Result<Skyline, SkylineError> {
        generate_skyline(
            &mut self.rng,
            &self.config,
            canvas_width,
            canvas_height,
            building_count,
        )
    }

    /// Generate with [`DEFAULT_BUILDING_COUNT`] buildings.
    pub fn generate_default(
        &mut self,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Result<Skyline, SkylineError> {
        self.generate(canvas_width, canvas_height, DEFAULT_BUILDING_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_canvas_narrower_than_building_count() {
        let mut gen = SkylineGenerator::with_seed(1);
        assert_eq!(
            gen.generate(9, 800, 10),
            Err(SkylineError::InvalidDimensions {
                canvas_width: 9,
                canvas_height: 800,
                building_count: 10
            })
        );
        assert!(gen.generate(10, 800, 10).is_ok());
    }

    #[test]
    fn rejects_zero_height_and_zero_count() {
        let mut gen = SkylineGenerator::with_seed(1);
        assert!(matches!(
            gen.generate(1000, 0, 10),
            Err(SkylineError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            gen.generate(1000, 800, 0),
            Err(SkylineError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn width_is_integer_division_of_canvas() {
        let mut gen = SkylineGenerator::with_seed(7);
        let sky = gen.generate(1024, 768, 10).unwrap();
        assert_eq!(sky.building_width, 102);
        assert!(sky.buildings.iter().all(|b| b.width == 102));
        assert_eq!(sky.covered_width(), 1020);
        assert_eq!(sky.building_x(3), 306);
    }

    #[test]
    fn height_bounds_exact_and_rounded() {
        let exact = SkylineConfig::default();
        assert_eq!(exact.height_bounds(800), (240, 640));
        assert_eq!(exact.height_bounds(768), (230, 614));

        let rounded = SkylineConfig {
            rounding: HeightRounding::NearestTen,
            ..SkylineConfig::default()
        };
        assert_eq!(rounded.height_bounds(768), (230, 610));
    }

    #[test]
    fn rounded_heights_are_multiples_of_ten() {
        let config = SkylineConfig {
            rounding: HeightRounding::NearestTen,
            ..SkylineConfig::default()
        };
        let mut gen = SkylineGenerator::with_seed(99).with_config(config);
        for _ in 0..50 {
            let sky = gen.generate(1024, 768, 10).unwrap();
            for b in &sky.buildings {
                assert_eq!(b.height % 10, 0);
                assert!((230..=610).contains(&b.height));
            }
        }
    }

    #[test]
    fn single_color_palette_terminates_with_repeats() {
        let palette = Palette::new(vec![Swatch::new("only", 1, 2, 3)]).unwrap();
        let config = SkylineConfig {
            palette,
            ..SkylineConfig::default()
        };
        let mut gen = SkylineGenerator::with_seed(3).with_config(config);
        let sky = gen.generate(1000, 800, 10).unwrap();
        assert!(sky
            .buildings
            .iter()
            .all(|b| b.fill_color == Rgba::opaque(1, 2, 3)));
    }

    #[test]
    fn empty_palette_is_unrepresentable() {
        assert!(Palette::new(Vec::new()).is_none());
        assert_eq!(Palette::default().len(), 12);
    }

    #[test]
    fn roof_y_is_measured_from_the_bottom() {
        let mut gen = SkylineGenerator::with_seed(5);
        let sky = gen.generate(1000, 800, 10).unwrap();
        for i in 0..sky.len() {
            assert_eq!(sky.roof_y(i), Some(800 - sky.buildings[i].height));
        }
        assert_eq!(sky.roof_y(10), None);
    }

    #[test]
    fn windows_match_building_size() {
        let mut gen = SkylineGenerator::with_seed(11);
        let sky = gen.generate(1000, 800, 10).unwrap();
        for b in &sky.buildings {
            assert_eq!(b.windows, WindowLayout::default().layout(b.width, b.height));
        }
    }
}
