//! Error kinds returned by the generator and the placer.

use thiserror::Error;

/// Failures of a single `generate` or `place` call.
///
/// Both are recoverable by the caller (retry with other inputs, or stay on the menu).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkylineError {
    /// Canvas cannot hold the requested buildings (zero-width buildings, zero height,
    /// or zero buildings).
    #[error(
        "invalid dimensions: canvas {canvas_width}x{canvas_height} cannot hold {building_count} buildings"
    )]
    InvalidDimensions {
        canvas_width: u32,
        canvas_height: u32,
        building_count: usize,
    },

    /// Too few buildings for two placements separated by the minimum gap.
    #[error("insufficient buildings: need at least {required}, got {found}")]
    InsufficientBuildings { found: usize, required: usize },
}

impl SkylineError {
    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            SkylineError::InvalidDimensions { .. } => "invalid_dimensions",
            SkylineError::InsufficientBuildings { .. } => "insufficient_buildings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let e = SkylineError::InvalidDimensions {
            canvas_width: 5,
            canvas_height: 100,
            building_count: 10,
        };
        assert_eq!(
            e.to_string(),
            "invalid dimensions: canvas 5x100 cannot hold 10 buildings"
        );
        assert_eq!(e.code(), "invalid_dimensions");

        let e = SkylineError::InsufficientBuildings {
            found: 8,
            required: 9,
        };
        assert_eq!(e.to_string(), "insufficient buildings: need at least 9, got 8");
        assert_eq!(e.code(), "insufficient_buildings");
    }
}
