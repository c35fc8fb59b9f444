//! Tilt module - slide and merge
//!
//! One algorithm handles every direction: the caller sets the board's
//! perspective so the requested side reads as north, then each column is
//! swept toward its top row.
//!
//! Column rules:
//!
//! - Tiles are visited from the top row down; that order decides landing
//!   slots and merge partners.
//! - A tile merges with the next tile below it when the values match. Both
//!   are consumed, so the result never merges again during the same tilt.
//! - `[T, T, T]` becomes `[2T, T]`; `[T, T, T, T]` becomes `[2T, 2T]`.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::error::CoreResult;
use crate::types::{Side, MAX_BOARD_SIZE};

/// Result of sweeping one column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnSweep {
    /// Any tile moved or merged
    pub changed: bool,
    /// Sum of the values of tiles created by merges
    pub score: u64,
    pub merges: u32,
}

/// Result of tilting the whole board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TiltOutcome {
    pub changed: bool,
    pub score_delta: u64,
    pub merges: u32,
}

impl TiltOutcome {
    fn absorb(&mut self, column: ColumnSweep) {
        self.changed |= column.changed;
        self.score_delta += column.score;
        self.merges += column.merges;
    }
}

/// Slide and merge logical column `col` toward the top of the board.
pub fn sweep_column(board: &mut Board, col: usize) -> CoreResult<ColumnSweep> {
    let size = board.size();

    // Occupied rows and their tiles, top to bottom.
    let mut column: ArrayVec<(usize, u32), MAX_BOARD_SIZE> = ArrayVec::new();
    for row in (0..size).rev() {
        if let Some(tile) = board.tile(col, row)? {
            column.push((row, tile.value()));
        }
    }

    let mut sweep = ColumnSweep::default();
    let mut slot = size;
    let mut i = 0;
    while i < column.len() {
        slot -= 1;
        let (row, value) = column[i];
        board.move_tile(col, slot, col, row)?;
        if row != slot {
            sweep.changed = true;
        }

        if let Some(&(below_row, below_value)) = column.get(i + 1) {
            if below_value == value && value.checked_mul(2).is_some() {
                if let Some(merged) = board.move_tile(col, slot, col, below_row)? {
                    sweep.changed = true;
                    sweep.score += merged.value() as u64;
                    sweep.merges += 1;
                    i += 2;
                    continue;
                }
            }
        }
        i += 1;
    }

    Ok(sweep)
}

fn sweep_all(board: &mut Board) -> CoreResult<TiltOutcome> {
    let mut outcome = TiltOutcome::default();
    for col in 0..board.size() {
        outcome.absorb(sweep_column(board, col)?);
    }
    Ok(outcome)
}

/// Tilt every column of `board` toward `side`.
///
/// The perspective is restored to North before returning, including on error.
pub fn tilt_board(board: &mut Board, side: Side) -> CoreResult<TiltOutcome> {
    board.set_perspective(side);
    let result = sweep_all(board);
    board.set_perspective(Side::North);

    if let Ok(outcome) = &result {
        tracing::debug!(
            side = side.as_str(),
            changed = outcome.changed,
            merges = outcome.merges,
            score_delta = outcome.score_delta,
            "tilt"
        );
    }
    result
}
