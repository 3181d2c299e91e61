//! Error types for the grid model and the decision engine.

use std::fmt;

use crate::game::{Position, UnitId};

/// Invalid grid queries.
///
/// These are programming errors on the caller's side: a lookup outside the
/// map is rejected instead of being clamped or wrapped around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A tile lookup fell outside the map.
    OutOfBounds {
        /// The position that was looked up.
        position: Position,
        /// Map width.
        width: i32,
        /// Map height.
        height: i32,
    },
    /// Map dimensions are zero or do not fit the grid representation.
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// Tile columns do not all have the same length.
    RaggedColumns {
        /// Index of the first column with a differing length.
        column: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds {
                position,
                width,
                height,
            } => write!(f, "position {position} is outside the {width}x{height} map"),
            GridError::InvalidDimensions { width, height } => {
                write!(f, "invalid map dimensions {width}x{height}")
            }
            GridError::RaggedColumns { column } => {
                write!(f, "tile column {column} differs in length from column 0")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Faults raised while evaluating a single unit.
///
/// The engine never lets one of these escape a decision pass: the unit's
/// action is dropped for the turn and the remaining units are still decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionError {
    /// A grid lookup failed.
    Grid(GridError),
    /// A unit claims to carry a diamond that is not on the board.
    MissingDiamond {
        /// The carrying unit.
        unit: UnitId,
    },
    /// A unit claims to be on the battlefield but has no position.
    MissingPosition {
        /// The unit without a position.
        unit: UnitId,
    },
}

impl fmt::Display for DecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionError::Grid(e) => write!(f, "grid fault: {e}"),
            DecisionError::MissingDiamond { unit } => {
                write!(f, "unit {unit} holds a diamond that is not on the map")
            }
            DecisionError::MissingPosition { unit } => {
                write!(f, "unit {unit} is live but has no position")
            }
        }
    }
}

impl std::error::Error for DecisionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecisionError::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for DecisionError {
    fn from(e: GridError) -> Self {
        DecisionError::Grid(e)
    }
}

/// Result type for per-unit decisions.
pub type DecisionResult<T> = Result<T, DecisionError>;
