//! Spawn policies - decide which tile appears after a move
//!
//! The rules engine never places tiles on its own. A driver asks a
//! [`SpawnPolicy`] for the next tile and hands it to
//! [`GameState::add_tile`](twenty48_core::GameState::add_tile).

use std::collections::VecDeque;

use twenty48_core::GameState;

use crate::rng::SimpleRng;
use crate::types::Tile;

/// Chooses the next tile to place, or None when no tile should be placed.
pub trait SpawnPolicy {
    fn next_tile(&mut self, state: &GameState) -> Option<Tile>;
}

/// Uniformly random empty cell; value 4 with probability `four_percent`, else 2.
#[derive(Debug, Clone)]
pub struct RandomSpawn {
    rng: SimpleRng,
    four_percent: u32,
}

impl RandomSpawn {
    /// Standard odds: 2 (90%) or 4 (10%)
    pub fn new(seed: u32) -> Self {
        Self::with_odds(seed, 10)
    }

    pub fn with_odds(seed: u32, four_percent: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            four_percent: four_percent.min(100),
        }
    }

    pub fn four_percent(&self) -> u32 {
        self.four_percent
    }
}

impl SpawnPolicy for RandomSpawn {
    fn next_tile(&mut self, state: &GameState) -> Option<Tile> {
        let board = state.board();
        let empty = board.empty_cells().count();
        if empty == 0 {
            return None;
        }
        let pick = self.rng.next_range(empty as u32) as usize;
        let (col, row) = board.empty_cells().nth(pick)?;
        let value = if self.rng.chance(self.four_percent) { 4 } else { 2 };
        Some(Tile::new(value, col, row))
    }
}

/// Replays a fixed list of tiles in order, then stops spawning.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSpawn {
    queue: VecDeque<Tile>,
}

impl ScriptedSpawn {
    pub fn new(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            queue: tiles.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl SpawnPolicy for ScriptedSpawn {
    fn next_tile(&mut self, _state: &GameState) -> Option<Tile> {
        self.queue.pop_front()
    }
}
