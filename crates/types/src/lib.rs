//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rules engine, spawn policies, front ends).
//!
//! # Coordinates
//!
//! Cells are addressed as `(col, row)` like `(x, y)` coordinates:
//!
//! - **Column 0** is the leftmost column
//! - **Row 0** is the bottom row
//! - **North** is the direction of increasing row
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_BOARD_SIZE` | 4 | Side length of a standard board |
//! | `MAX_BOARD_SIZE` | 16 | Largest supported side length |
//! | `MAX_PIECE` | 2048 | Default winning tile value |
//! | `MAX_SPAWN_VALUE` | 2^30 | Largest value a spawner may place |
//!
//! # Examples
//!
//! ```
//! use twenty48_types::{GameAction, Side, Tile};
//!
//! let side = Side::from_str("up").unwrap();
//! assert_eq!(side, Side::North);
//! assert_eq!(side.opposite(), Side::South);
//!
//! let a = Tile::new(4, 0, 3);
//! let b = Tile::new(4, 0, 2);
//! let merged = a.merge(b, 0, 3).unwrap();
//! assert_eq!(merged.value(), 8);
//!
//! assert_eq!(GameAction::from_str("west"), Some(GameAction::Tilt(Side::West)));
//! ```

/// Side length of a standard board.
pub const DEFAULT_BOARD_SIZE: usize = 4;

/// Largest supported board side length.
pub const MAX_BOARD_SIZE: usize = 16;

/// Default winning tile value.
pub const MAX_PIECE: u32 = 2048;

/// Largest tile value accepted from a spawner.
pub const MAX_SPAWN_VALUE: u32 = 1 << 30;

/// One of the four tilt directions.
///
/// Also used as a viewing perspective: a board viewed from `East` reads
/// east as "up".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    /// All sides in clockwise order starting at North.
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    /// Parse from string (case-insensitive). Accepts compass names,
    /// their initials, and arrow-style aliases.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "north" | "n" | "up" => Some(Side::North),
            "east" | "e" | "right" => Some(Side::East),
            "south" | "s" | "down" => Some(Side::South),
            "west" | "w" | "left" => Some(Side::West),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::North => "north",
            Side::East => "east",
            Side::South => "south",
            Side::West => "west",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Side::North => Side::South,
            Side::East => Side::West,
            Side::South => Side::North,
            Side::West => Side::East,
        }
    }

    /// Rotate clockwise
    pub fn rotate_cw(&self) -> Self {
        match self {
            Side::North => Side::East,
            Side::East => Side::South,
            Side::South => Side::West,
            Side::West => Side::North,
        }
    }
}

/// Driver-level actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Tilt(Side),
    Restart,
}

impl GameAction {
    /// Parse action from string. Any side name is a tilt.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "restart" | "new" => Some(GameAction::Restart),
            other => Side::from_str(other).map(GameAction::Tilt),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Tilt(side) => side.as_str(),
            GameAction::Restart => "restart",
        }
    }
}

/// A tile on the board.
///
/// Tiles are immutable: moving a tile yields a copy with new coordinates and
/// merging two tiles yields a new tile of double value. `col` and `row` are
/// canonical (north-perspective) coordinates kept for debugging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    value: u32,
    col: usize,
    row: usize,
}

impl Tile {
    pub fn new(value: u32, col: usize, row: usize) -> Self {
        Self { value, col, row }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn row(&self) -> usize {
        self.row
    }

    /// The same tile, relocated to `(col, row)`.
    pub fn at(self, col: usize, row: usize) -> Self {
        Self { col, row, ..self }
    }

    /// Whether `self` and `other` may combine into one tile.
    pub fn can_merge(&self, other: &Tile) -> bool {
        self.value == other.value && self.value.checked_mul(2).is_some()
    }

    /// Combine two equal tiles into a new tile at `(col, row)`.
    /// Returns None if the values differ or the result would overflow.
    pub fn merge(self, other: Tile, col: usize, row: usize) -> Option<Tile> {
        if !self.can_merge(&other) {
            return None;
        }
        Some(Tile::new(self.value * 2, col, row))
    }
}

/// Cell on the board (None = empty)
pub type Cell = Option<Tile>;
