//! Session configuration

use twenty48_core::GameConfig;

use crate::types::{DEFAULT_BOARD_SIZE, MAX_PIECE};

/// Settings for a self-contained play session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub size: usize,
    pub max_piece: u32,
    pub seed: u32,
    /// Chance (0-100) that a spawned tile is a 4 instead of a 2
    pub four_percent: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            max_piece: MAX_PIECE,
            seed: 1,
            four_percent: 10,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    ///
    /// - `TWENTY48_SIZE`: board side length (default 4)
    /// - `TWENTY48_MAX_PIECE`: winning tile value (default 2048)
    /// - `TWENTY48_SEED`: spawn RNG seed (default 1)
    /// - `TWENTY48_FOUR_PERCENT`: chance of spawning a 4 (default 10)
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str| lookup(key).map(|s| s.trim().to_string());

        Self {
            size: read("TWENTY48_SIZE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.size),
            max_piece: read("TWENTY48_MAX_PIECE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_piece),
            seed: read("TWENTY48_SEED")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.seed),
            four_percent: read("TWENTY48_FOUR_PERCENT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.four_percent),
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            size: self.size,
            max_piece: self.max_piece,
        }
    }
}
