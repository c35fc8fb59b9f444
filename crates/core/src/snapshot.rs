//! Persisted-state layout
//!
//! A plain data copy of a [`GameState`](crate::GameState) that is enough to
//! rebuild it exactly. The core never reads or writes files; callers pick the
//! format (the serde field names follow the documented layout).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub size: usize,
    /// Tile values, row-major with row 0 at the bottom (None = empty)
    pub cells: Vec<Vec<Option<u32>>>,
    pub score: u64,
    pub max_score: u64,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|v| v.is_some()).count())
            .sum()
    }
}
