//! Game state module - manages the complete game state
//!
//! This module ties together the board, the tilt sweep and score keeping.
//! It owns the board exclusively and recomputes the terminal flag after
//! every structural change.

use crate::board::Board;
use crate::error::{validate_tile_value, CoreError, CoreResult};
use crate::snapshot::GameSnapshot;
use crate::tilt::{tilt_board, TiltOutcome};
use crate::types::*;

/// Rules that stay fixed for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    /// Reaching a tile of this value ends the game
    pub max_piece: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            max_piece: MAX_PIECE,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    max_piece: u32,
    score: u64,
    /// Highest score seen, recorded when a game ends.
    max_score: u64,
    game_over: bool,
}

impl GameState {
    /// Create an empty game on a `size` x `size` board
    pub fn new(size: usize) -> CoreResult<Self> {
        Self::with_config(GameConfig {
            size,
            ..GameConfig::default()
        })
    }

    pub fn with_config(config: GameConfig) -> CoreResult<Self> {
        validate_tile_value(config.max_piece)?;
        Ok(Self {
            board: Board::new(config.size)?,
            max_piece: config.max_piece,
            score: 0,
            max_score: 0,
            game_over: false,
        })
    }

    /// Create a game from tile values listed top row first (0 = empty).
    ///
    /// Useful for tests and replays. The terminal flag is derived from the board.
    pub fn from_grid<R: AsRef<[u32]>>(rows: &[R], score: u64, max_score: u64) -> CoreResult<Self> {
        Self::from_grid_with_max_piece(rows, score, max_score, MAX_PIECE)
    }

    pub fn from_grid_with_max_piece<R: AsRef<[u32]>>(
        rows: &[R],
        score: u64,
        max_score: u64,
        max_piece: u32,
    ) -> CoreResult<Self> {
        validate_tile_value(max_piece)?;
        let mut state = Self {
            board: Board::from_grid(rows)?,
            max_piece,
            score,
            max_score,
            game_over: false,
        };
        state.check_game_over();
        Ok(state)
    }

    /// Rebuild a game from its persisted layout.
    pub fn from_snapshot(snapshot: &GameSnapshot) -> CoreResult<Self> {
        Self::from_snapshot_with_max_piece(snapshot, MAX_PIECE)
    }

    pub fn from_snapshot_with_max_piece(snapshot: &GameSnapshot, max_piece: u32) -> CoreResult<Self> {
        validate_tile_value(max_piece)?;
        let size = snapshot.size;
        if snapshot.cells.len() != size {
            return Err(CoreError::InvalidSnapshot(format!(
                "expected {} rows, found {}",
                size,
                snapshot.cells.len()
            )));
        }

        let mut board = Board::new(size)?;
        for (row, cells) in snapshot.cells.iter().enumerate() {
            if cells.len() != size {
                return Err(CoreError::InvalidSnapshot(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    cells.len(),
                    size
                )));
            }
            for (col, value) in cells.iter().enumerate() {
                let Some(value) = *value else {
                    continue;
                };
                if value < 2 || !value.is_power_of_two() {
                    return Err(CoreError::InvalidTileValue(value));
                }
                board.place(Tile::new(value, col, row))?;
            }
        }

        let mut state = Self {
            board,
            max_piece,
            score: snapshot.score,
            max_score: snapshot.max_score,
            game_over: false,
        };
        state.game_over = state.compute_game_over();
        if state.game_over != snapshot.game_over {
            return Err(CoreError::InvalidSnapshot(format!(
                "gameOver is {} but the board says {}",
                snapshot.game_over, state.game_over
            )));
        }
        if state.game_over && state.max_score < state.score {
            return Err(CoreError::InvalidSnapshot(
                "maxScore is below score in a finished game".to_string(),
            ));
        }
        Ok(state)
    }

    /// Persisted layout of this game
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            size: self.board.size(),
            cells: self.board.values(),
            score: self.score,
            max_score: self.max_score,
            game_over: self.game_over,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Tile at (col, row), or None if the cell is empty
    pub fn tile(&self, col: usize, row: usize) -> CoreResult<Cell> {
        self.board.tile(col, row)
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn max_score(&self) -> u64 {
        self.max_score
    }

    pub fn max_piece(&self) -> u32 {
        self.max_piece
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Clear the board and reset the score. The max score is kept.
    pub fn clear(&mut self) {
        self.score = 0;
        self.game_over = false;
        self.board.clear();
    }

    /// Place a spawned tile on an empty cell.
    pub fn add_tile(&mut self, tile: Tile) -> CoreResult<()> {
        validate_tile_value(tile.value())?;
        self.board.place(tile)?;
        self.check_game_over();
        Ok(())
    }

    /// Tilt the board toward `side`.
    ///
    /// Slides and merges every tile, adds merge values to the score and
    /// re-evaluates the terminal flag. `changed` is true when any tile moved,
    /// including pure slides. A finished game is left untouched.
    pub fn tilt(&mut self, side: Side) -> CoreResult<TiltOutcome> {
        if self.game_over {
            return Ok(TiltOutcome::default());
        }

        let outcome = tilt_board(&mut self.board, side)?;
        self.score += outcome.score_delta;
        self.check_game_over();
        Ok(outcome)
    }

    /// Check whether tilting toward `side` would change the board, without
    /// touching this game.
    pub fn can_tilt(&self, side: Side) -> bool {
        if self.game_over {
            return false;
        }
        let mut board = self.board.clone();
        matches!(tilt_board(&mut board, side), Ok(outcome) if outcome.changed)
    }

    fn compute_game_over(&self) -> bool {
        self.board.max_tile_exists(self.max_piece) || !self.board.at_least_one_move_exists()
    }

    /// Recompute the terminal flag and record the max score on the way in.
    fn check_game_over(&mut self) {
        let was_over = self.game_over;
        self.game_over = self.compute_game_over();
        if self.game_over && !was_over {
            self.max_score = self.max_score.max(self.score);
            tracing::info!(
                score = self.score,
                max_score = self.max_score,
                max_tile = self.board.max_value().unwrap_or(0),
                "game over"
            );
        }
    }
}
