//! Error types for cloth construction.

use core::fmt;

/// Errors reported when a cloth cannot be built from its configuration.
///
/// Simulation steps never fail; degenerate geometry during a step is handled
/// with neutral fallbacks instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ClothError {
    /// Each axis needs at least 2 points.
    InvalidGridDimensions { num_width_points: usize, num_height_points: usize },
    /// A pinned grid coordinate lies outside the grid.
    PinOutOfBounds { x: usize, y: usize },
    /// Width, height, and thickness must be finite and non-negative.
    InvalidExtent,
}

impl fmt::Display for ClothError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClothError::InvalidGridDimensions { num_width_points, num_height_points } => write!(
                f,
                "grid must be at least 2x2 points, got {}x{}",
                num_width_points, num_height_points
            ),
            ClothError::PinOutOfBounds { x, y } => {
                write!(f, "pinned point ({}, {}) is outside the grid", x, y)
            }
            ClothError::InvalidExtent => {
                write!(f, "width, height and thickness must be finite and non-negative")
            }
        }
    }
}

impl core::error::Error for ClothError {}
