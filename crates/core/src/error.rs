//! Error types for the rules engine
//!
//! Every variant is a caller contract violation. Nothing in the core performs
//! I/O, so there are no retriable failures.

use thiserror::Error;

use crate::types::{Side, MAX_BOARD_SIZE, MAX_SPAWN_VALUE};

/// Errors surfaced by board and game-state operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Coordinate outside `[0, size)`
    #[error("cell ({col}, {row}) is outside the {size}x{size} board")]
    OutOfBounds { col: usize, row: usize, size: usize },

    /// Placement onto a cell that already holds a tile
    #[error("cell ({col}, {row}) is already occupied")]
    CellOccupied { col: usize, row: usize },

    /// Move from a cell that holds no tile
    #[error("cell ({col}, {row}) is empty")]
    CellEmpty { col: usize, row: usize },

    /// Move onto a tile of a different value
    #[error("cannot merge {from} into {into} at ({col}, {row})")]
    MergeMismatch {
        col: usize,
        row: usize,
        from: u32,
        into: u32,
    },

    /// Tile value that is not a power of two in the accepted range
    #[error("invalid tile value {0}: expected a power of two between 2 and {max}", max = MAX_SPAWN_VALUE)]
    InvalidTileValue(u32),

    /// Board side length outside `1..=MAX_BOARD_SIZE`
    #[error("invalid board size {0}: expected 1..={max}", max = MAX_BOARD_SIZE)]
    InvalidSize(usize),

    /// Unrecognized direction name
    #[error("invalid direction {0:?}: expected north, east, south or west")]
    InvalidDirection(String),

    /// Snapshot that does not describe a reachable game state
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Parse a direction name at the boundary.
pub fn parse_side(s: &str) -> CoreResult<Side> {
    Side::from_str(s).ok_or_else(|| CoreError::InvalidDirection(s.to_string()))
}

/// Check that `value` may be placed by a spawner.
pub fn validate_tile_value(value: u32) -> CoreResult<()> {
    if value >= 2 && value.is_power_of_two() && value <= MAX_SPAWN_VALUE {
        Ok(())
    } else {
        Err(CoreError::InvalidTileValue(value))
    }
}
