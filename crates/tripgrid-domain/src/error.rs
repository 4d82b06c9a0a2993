use thiserror::Error;

use crate::grid::MAX_CELLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything that can go wrong between raw text and a rendered grid.
///
/// `group` is the zero-based index of the offending triplet.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Expected tokens in multiples of 3 (x, glyph, y), got {count}")]
    TokenCount { count: usize },

    #[error("Triplet {group}: {axis} coordinate {token:?} is not a base-10 integer")]
    InvalidInteger {
        group: usize,
        axis: Axis,
        token: String,
    },

    #[error("Triplet {group}: {axis} coordinate {value} is negative")]
    NegativeCoordinate { group: usize, axis: Axis, value: i64 },

    #[error("Cannot render an empty triplet sequence")]
    EmptyInput,

    #[error("Grid of {width}x{height} cells exceeds the limit of {max} cells", max = MAX_CELLS)]
    TooLarge { width: usize, height: usize },
}

impl GridError {
    /// Short machine-readable name of the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            GridError::TokenCount { .. } => "token_count",
            GridError::InvalidInteger { .. } => "invalid_integer",
            GridError::NegativeCoordinate { .. } => "negative_coordinate",
            GridError::EmptyInput => "empty_input",
            GridError::TooLarge { .. } => "too_large",
        }
    }

    pub fn suggestion(&self) -> String {
        match self {
            GridError::TokenCount { count } => format!(
                "Each triplet spans three non-blank lines: x, glyph, y. {} stray line(s) at the end or a missing line somewhere.",
                count % 3
            ),
            GridError::InvalidInteger { group, .. } => format!(
                "Check lines {} to {} of the non-blank input; the first and third line of every triplet must be integers.",
                group * 3 + 1,
                group * 3 + 3
            ),
            GridError::NegativeCoordinate { .. } => {
                "Grid coordinates start at 0; shift the drawing so every x and y is non-negative."
                    .to_string()
            }
            GridError::EmptyInput => {
                "The input has no non-blank lines. Add at least one x, glyph, y triplet.".to_string()
            }
            GridError::TooLarge { .. } => {
                "Coordinates are far apart; check for a stray oversized x or y value.".to_string()
            }
        }
    }
}
