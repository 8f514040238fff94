//! Character placement - two rooftops, at least `min_gap` buildings apart
//!
//! With `N` buildings and gap `g`:
//!
//! 1. `first` is drawn uniformly from `[g, N - 1 - g]`
//! 2. `second` is drawn uniformly from `[first + g, first + g + (N - 2g - 1)]`
//! 3. a `second` past the last building is clamped to `N - 1`
//!    (or redrawn, see [`OverflowPolicy`])
//!
//! Because `first <= N - 1 - g`, clamping never brings `second` closer than
//! `g` to `first`; it only skews the distribution towards the last building.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SkylineError;
use crate::rng::{self, GameRng};
use crate::types::{Character, CHARACTER_VERTICAL_OFFSET, MIN_CHARACTER_GAP};

/// Redraws allowed under [`OverflowPolicy::Resample`] before falling back to clamping.
pub const MAX_RESAMPLES: usize = 16;

/// Which canvas dimension is divided among buildings to get character `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpacingBasis {
    /// `x = index * (canvas_width / N)`, aligned with the buildings.
    #[default]
    CanvasWidth,
    /// `x = index * (canvas_height / N)`. Reproduces a legacy layout where
    /// characters drift left of their buildings; only for visual compatibility.
    CanvasHeight,
}

impl SpacingBasis {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "width" => Some(SpacingBasis::CanvasWidth),
            "height" => Some(SpacingBasis::CanvasHeight),
            _ => None,
        }
    }
}

/// What to do when the second draw lands past the last building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OverflowPolicy {
    /// Clamp to the last building.
    #[default]
    Clamp,
    /// Draw again (up to [`MAX_RESAMPLES`] times), then clamp.
    Resample,
}

impl OverflowPolicy {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "clamp" => Some(OverflowPolicy::Clamp),
            "resample" => Some(OverflowPolicy::Resample),
            _ => None,
        }
    }
}

/// Placement parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Minimum index distance between the two characters; 0 is treated as 1.
    pub min_gap: usize,
    /// Pixels between the roof and the character anchor.
    pub vertical_offset: i32,
    pub spacing: SpacingBasis,
    pub overflow: OverflowPolicy,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            min_gap: MIN_CHARACTER_GAP,
            vertical_offset: CHARACTER_VERTICAL_OFFSET,
            spacing: SpacingBasis::CanvasWidth,
            overflow: OverflowPolicy::Clamp,
        }
    }
}

impl PlacementConfig {
    /// Index distance actually enforced; two characters never share a building.
    pub fn effective_gap(&self) -> usize {
        self.min_gap.max(1)
    }

    /// Fewest buildings that leave room for two placements.
    pub fn required_buildings(&self) -> usize {
        2 * self.effective_gap() + 1
    }
}

/// Pick two building indices from `heights` and anchor a character on each.
pub fn place_characters<R: Rng + ?Sized>(
    rng: &mut R,
    config: &PlacementConfig,
    heights: &[u32],
    canvas_width: u32,
    canvas_height: u32,
) -> Result<(Character, Character), SkylineError> {
    let n = heights.len();
    let required = config.required_buildings();
    if n < required {
        return Err(SkylineError::InsufficientBuildings { found: n, required });
    }

    let gap = config.effective_gap();
    let spread = n - 2 * gap;
    let first = gap + rng.gen_range(0..spread);

    let mut second = first + gap + rng.gen_range(0..spread);
    if config.overflow == OverflowPolicy::Resample {
        for _ in 0..MAX_RESAMPLES {
            if second < n {
                break;
            }
            second = first + gap + rng.gen_range(0..spread);
        }
    }
    let second = second.min(n - 1);

    let basis = match config.spacing {
        SpacingBasis::CanvasWidth => canvas_width,
        SpacingBasis::CanvasHeight => canvas_height,
    };
    let stride = (basis / n as u32) as i32;
    let anchor = |index: usize| Character {
        building_index: index,
        x: index as i32 * stride,
        y: canvas_height as i32 - heights[index] as i32 - config.vertical_offset,
    };

    let pair = (anchor(first), anchor(second));
    debug!(first, second, buildings = n, "placed characters");
    Ok(pair)
}

/// Places the two characters for a play session.
///
/// Every successful [`CharacterPlacer::place`] replaces the previous pair.
#[derive(Debug, Clone)]
pub struct CharacterPlacer<R = GameRng> {
    rng: R,
    config: PlacementConfig,
    current: Option<(Character, Character)>,
}

impl CharacterPlacer<GameRng> {
    pub fn new() -> Self {
        Self::with_rng(rng::time_seeded())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(rng::seeded(seed))
    }
}

impl Default for CharacterPlacer<GameRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CharacterPlacer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            config: PlacementConfig::default(),
            current: None,
        }
    }

    pub fn with_config(mut self, config: PlacementConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    pub fn place(
        &mut self,
        heights: &[u32],
        canvas_width: u32,
        canvas_height: u32,
    ) -> Result<(Character, Character), SkylineError> {
        let pair = place_characters(
            &mut self.rng,
            &self.config,
            heights,
            canvas_width,
            canvas_height,
        )?;
        self.current = Some(pair);
        Ok(pair)
    }

    /// Most recent placement, if any.
    pub fn characters(&self) -> Option<(Character, Character)> {
        self.current
    }

    /// Forget the current placement (e.g. when leaving play).
    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_nine_buildings_by_default() {
        let mut placer = CharacterPlacer::with_seed(1);
        assert_eq!(
            placer.place(&[300; 8], 1000, 800),
            Err(SkylineError::InsufficientBuildings {
                found: 8,
                required: 9
            })
        );
        assert!(placer.characters().is_none());
        assert!(placer.place(&[300; 9], 1000, 800).is_ok());
    }

    #[test]
    fn nine_buildings_forces_indices_four_and_eight() {
        let mut placer = CharacterPlacer::with_seed(2);
        for _ in 0..20 {
            let (a, b) = placer.place(&[100; 9], 900, 600).unwrap();
            assert_eq!((a.building_index, b.building_index), (4, 8));
        }
    }

    #[test]
    fn anchors_sit_above_the_roof() {
        let heights = [300, 310, 320, 330, 340, 350, 360, 370, 380, 390];
        let mut placer = CharacterPlacer::with_seed(3);
        let (a, b) = placer.place(&heights, 1000, 800).unwrap();
        for c in [a, b] {
            assert_eq!(c.x, c.building_index as i32 * 100);
            assert_eq!(c.y, 800 - heights[c.building_index] as i32 - 35);
        }
    }

    #[test]
    fn height_basis_reproduces_legacy_spacing() {
        let config = PlacementConfig {
            spacing: SpacingBasis::CanvasHeight,
            ..PlacementConfig::default()
        };
        let mut placer = CharacterPlacer::with_seed(4).with_config(config);
        let (a, b) = placer.place(&[300; 10], 1000, 800).unwrap();
        assert_eq!(a.x, a.building_index as i32 * 80);
        assert_eq!(b.x, b.building_index as i32 * 80);
    }

    #[test]
    fn gap_holds_for_both_policies() {
        for overflow in [OverflowPolicy::Clamp, OverflowPolicy::Resample] {
            let config = PlacementConfig {
                overflow,
                ..PlacementConfig::default()
            };
            for seed in 0..200 {
                let mut placer = CharacterPlacer::with_seed(seed).with_config(config);
                for n in 9..20 {
                    let heights = vec![200; n];
                    let (a, b) = placer.place(&heights, 1000, 800).unwrap();
                    assert!(b.building_index < n);
                    assert!(b.building_index >= a.building_index + 4);
                }
            }
        }
    }

    #[test]
    fn placement_is_replaced_not_mutated() {
        let mut placer = CharacterPlacer::with_seed(5);
        let first = placer.place(&[300; 12], 1200, 800).unwrap();
        assert_eq!(placer.characters(), Some(first));
        let second = placer.place(&[500; 12], 1200, 800).unwrap();
        assert_eq!(placer.characters(), Some(second));
        assert_eq!(second.0.y, 800 - 500 - 35);
        placer.clear();
        assert!(placer.characters().is_none());
    }

    #[test]
    fn custom_gap_changes_requirement() {
        let config = PlacementConfig {
            min_gap: 2,
            ..PlacementConfig::default()
        };
        assert_eq!(config.required_buildings(), 5);
        let mut placer = CharacterPlacer::with_seed(6).with_config(config);
        let (a, b) = placer.place(&[100; 5], 500, 400).unwrap();
        assert_eq!((a.building_index, b.building_index), (2, 4));
    }

    #[test]
    fn zero_gap_still_separates_characters() {
        let config = PlacementConfig {
            min_gap: 0,
            ..PlacementConfig::default()
        };
        assert_eq!(config.required_buildings(), 3);
        for overflow in [OverflowPolicy::Clamp, OverflowPolicy::Resample] {
            let config = PlacementConfig { overflow, ..config };
            for seed in 0..200 {
                let mut placer = CharacterPlacer::with_seed(seed).with_config(config);
                let (a, b) = placer.place(&[300; 10], 1000, 800).unwrap();
                assert!(b.building_index > a.building_index, "seed {}", seed);
                assert!(b.building_index < 10);
            }
        }
        let mut placer = CharacterPlacer::with_seed(0).with_config(config);
        let (a, b) = placer.place(&[300; 3], 300, 400).unwrap();
        assert_eq!((a.building_index, b.building_index), (1, 2));
    }

    #[test]
    fn policies_parse() {
        assert_eq!(OverflowPolicy::from_str("resample"), Some(OverflowPolicy::Resample));
        assert_eq!(SpacingBasis::from_str("HEIGHT"), Some(SpacingBasis::CanvasHeight));
        assert_eq!(SpacingBasis::from_str("depth"), None);
    }
}
