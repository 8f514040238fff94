//! Game configuration, read from `GORILLAS_*` environment variables.
//!
//! Unset or unparsable variables fall back to their defaults.

use std::env;
use std::str::FromStr;

use crate::placement::{OverflowPolicy, PlacementConfig, SpacingBasis};
use crate::skyline::{HeightRounding, SkylineConfig};
use crate::types::{DEFAULT_BUILDING_COUNT, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::windows::RowSpacing;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub building_count: usize,
    /// Fixed seed for both generator and placer; `None` seeds from the clock.
    pub seed: Option<u64>,
    pub skyline: SkylineConfig,
    pub placement: PlacementConfig,
    pub log_path: Option<String>,
    /// `tracing` env-filter directive.
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            building_count: DEFAULT_BUILDING_COUNT,
            seed: None,
            skyline: SkylineConfig::default(),
            placement: PlacementConfig::default(),
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (used by `from_env` and tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut skyline = defaults.skyline.clone();
        if lookup("GORILLAS_ROUND_HEIGHTS").is_some_and(|v| is_truthy(&v)) {
            skyline.rounding = HeightRounding::NearestTen;
        }
        if let Some(spacing) = lookup("GORILLAS_ROW_SPACING").and_then(|v| RowSpacing::from_str(&v)) {
            skyline.windows.row_spacing = spacing;
        }
        if let Some(v) = lookup("GORILLAS_TOP_ROW") {
            skyline.windows.top_row = is_truthy(&v);
        }

        let mut placement = defaults.placement;
        if let Some(basis) = lookup("GORILLAS_SPACING_BASIS").and_then(|v| SpacingBasis::from_str(&v)) {
            placement.spacing = basis;
        }
        if let Some(policy) = lookup("GORILLAS_OVERFLOW").and_then(|v| OverflowPolicy::from_str(&v)) {
            placement.overflow = policy;
        }

        Self {
            canvas_width: parse_var(&lookup, "GORILLAS_CANVAS_WIDTH").unwrap_or(defaults.canvas_width),
            canvas_height: parse_var(&lookup, "GORILLAS_CANVAS_HEIGHT").unwrap_or(defaults.canvas_height),
            building_count: parse_var(&lookup, "GORILLAS_BUILDINGS").unwrap_or(defaults.building_count),
            seed: parse_var(&lookup, "GORILLAS_SEED"),
            skyline,
            placement,
            log_path: non_empty("GORILLAS_LOG_PATH"),
            log_filter: non_empty("GORILLAS_LOG").unwrap_or(defaults.log_filter),
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

fn is_truthy(v: &str) -> bool {
    matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(GameConfig::from_lookup(|_| None), GameConfig::default());
    }

    #[test]
    fn reads_all_knobs() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("GORILLAS_CANVAS_WIDTH", "800"),
            ("GORILLAS_CANVAS_HEIGHT", " 600 "),
            ("GORILLAS_BUILDINGS", "12"),
            ("GORILLAS_SEED", "42"),
            ("GORILLAS_ROUND_HEIGHTS", "true"),
            ("GORILLAS_ROW_SPACING", "one-and-half"),
            ("GORILLAS_TOP_ROW", "0"),
            ("GORILLAS_SPACING_BASIS", "height"),
            ("GORILLAS_OVERFLOW", "resample"),
            ("GORILLAS_LOG_PATH", "/tmp/gorillas.log"),
            ("GORILLAS_LOG", "debug"),
        ]));
        assert_eq!(cfg.canvas_width, 800);
        assert_eq!(cfg.canvas_height, 600);
        assert_eq!(cfg.building_count, 12);
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.skyline.rounding, HeightRounding::NearestTen);
        assert_eq!(cfg.skyline.windows.row_spacing, RowSpacing::OneAndHalf);
        assert!(!cfg.skyline.windows.top_row);
        assert_eq!(cfg.placement.spacing, SpacingBasis::CanvasHeight);
        assert_eq!(cfg.placement.overflow, OverflowPolicy::Resample);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/gorillas.log"));
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn garbage_falls_back_to_defaults() {
        let cfg = GameConfig::from_lookup(lookup(&[
            ("GORILLAS_CANVAS_WIDTH", "wide"),
            ("GORILLAS_SEED", "-1"),
            ("GORILLAS_ROW_SPACING", "sideways"),
            ("GORILLAS_LOG_PATH", "   "),
        ]));
        assert_eq!(cfg.canvas_width, DEFAULT_CANVAS_WIDTH);
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.skyline.windows.row_spacing, RowSpacing::Double);
        assert_eq!(cfg.log_path, None);
    }
}
