//! Core rules module - pure, deterministic, and testable
//!
//! This crate contains the 2048 rules: the board, the tilt sweep, and the
//! game state that keeps score and detects the end of a game.
//! It has **no dependencies** on rendering, input, randomness or I/O, making it:
//!
//! - **Deterministic**: the same board and direction always give the same result
//! - **Testable**: every rule is reachable from plain constructors
//! - **Portable**: the caller owns the loop, the spawn policy and the display
//!
//! # Module Structure
//!
//! - [`board`]: NxN grid with a viewing perspective that remaps coordinates
//! - [`tilt`]: the column sweep that slides and merges tiles toward north
//! - [`game_state`]: score, max score, terminal detection and tile placement
//! - [`snapshot`]: the persisted-state layout
//! - [`error`]: contract violations reported by the operations above
//!
//! # Game Rules
//!
//! - **Tilt**: every tile slides as far as possible toward the chosen side
//! - **Merge**: two equal tiles meeting in the direction of motion become one
//!   tile of double value, and that value is added to the score
//! - **Merge once**: a tile produced by a merge does not merge again in the same tilt
//! - **Leading pair**: of three equal tiles in a line, the two nearest the
//!   destination side merge
//! - **Game over**: a tile reaches the winning value, or no tilt can change the board
//!
//! # Example
//!
//! ```
//! use twenty48_core::GameState;
//! use twenty48_types::{Side, Tile};
//!
//! let mut game = GameState::new(4).unwrap();
//! game.add_tile(Tile::new(2, 0, 0)).unwrap();
//! game.add_tile(Tile::new(2, 0, 2)).unwrap();
//!
//! let outcome = game.tilt(Side::North).unwrap();
//! assert!(outcome.changed);
//! assert_eq!(game.score(), 4);
//! assert_eq!(game.tile(0, 3).unwrap().unwrap().value(), 4);
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod snapshot;
pub mod tilt;

pub use twenty48_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::{parse_side, CoreError, CoreResult};
pub use game_state::{GameConfig, GameState};
pub use snapshot::GameSnapshot;
pub use tilt::{sweep_column, tilt_board, ColumnSweep, TiltOutcome};
