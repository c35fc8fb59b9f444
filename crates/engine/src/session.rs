//! Session - drives one game with a spawn policy and change observers
//!
//! The session is the single writer for its [`GameState`]. Every mutating call
//! that succeeds and changes something emits exactly one [`GameEvent`] to the
//! subscribed observers, in subscription order.

use twenty48_core::{CoreResult, GameConfig, GameState, TiltOutcome};

use crate::config::SessionConfig;
use crate::spawn::{RandomSpawn, SpawnPolicy};
use crate::types::{GameAction, Side, Tile};

/// Number of tiles placed at the start of a game
pub const OPENING_TILES: usize = 2;

/// Change notification delivered to observers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game began with these opening tiles
    Started { tiles: Vec<Tile> },
    /// A tilt changed the board; `spawned` is the tile placed afterwards
    Tilted {
        side: Side,
        outcome: TiltOutcome,
        spawned: Option<Tile>,
        game_over: bool,
    },
    /// A tile was placed directly by the caller
    TileAdded { tile: Tile, game_over: bool },
}

type Observer = Box<dyn FnMut(&GameEvent)>;

pub struct Session<P: SpawnPolicy> {
    state: GameState,
    spawner: P,
    observers: Vec<Observer>,
    /// Changed tilts in the current game
    moves: u32,
}

impl Session<RandomSpawn> {
    /// Session with random spawns configured from `config`
    pub fn from_config(config: &SessionConfig) -> CoreResult<Self> {
        Self::new(
            config.game_config(),
            RandomSpawn::with_odds(config.seed, config.four_percent),
        )
    }
}

impl<P: SpawnPolicy> Session<P> {
    /// Create a session with an empty board. Call [`Session::new_game`] to
    /// place the opening tiles.
    pub fn new(config: GameConfig, spawner: P) -> CoreResult<Self> {
        Ok(Self {
            state: GameState::with_config(config)?,
            spawner,
            observers: Vec::new(),
            moves: 0,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn spawner(&self) -> &P {
        &self.spawner
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn game_over(&self) -> bool {
        self.state.game_over()
    }

    /// Register a callback for change notifications
    pub fn subscribe(&mut self, observer: impl FnMut(&GameEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Clear the board and place the opening tiles.
    pub fn new_game(&mut self) -> CoreResult<()> {
        self.state.clear();
        self.moves = 0;

        // The board is already cleared, so a failed spawn still reports the
        // tiles placed before it.
        let mut tiles = Vec::with_capacity(OPENING_TILES);
        let mut result = Ok(());
        for _ in 0..OPENING_TILES {
            match self.spawn() {
                Ok(Some(tile)) => tiles.push(tile),
                Ok(None) => {}
                Err(err) => {
                    result = Err(err);
                    break;
                }
            }
        }
        tracing::debug!(opening = tiles.len(), "new game");
        self.emit(GameEvent::Started { tiles });
        result
    }

    /// Tilt toward `side`; if the board changed and the game goes on, place
    /// one spawned tile.
    ///
    /// A spawn error is returned after the completed tilt has been reported
    /// with `spawned: None`.
    pub fn tilt(&mut self, side: Side) -> CoreResult<TiltOutcome> {
        let outcome = self.state.tilt(side)?;
        if !outcome.changed {
            return Ok(outcome);
        }

        self.moves += 1;
        let spawn = if self.state.game_over() {
            Ok(None)
        } else {
            self.spawn()
        };
        let game_over = self.state.game_over();
        self.emit(GameEvent::Tilted {
            side,
            outcome,
            spawned: spawn.as_ref().ok().copied().flatten(),
            game_over,
        });
        spawn.map(|_| outcome)
    }

    /// Place a caller-chosen tile, bypassing the spawn policy.
    pub fn add_tile(&mut self, tile: Tile) -> CoreResult<()> {
        self.state.add_tile(tile)?;
        let game_over = self.state.game_over();
        self.emit(GameEvent::TileAdded { tile, game_over });
        Ok(())
    }

    /// Apply a driver action. Returns true if the game changed.
    pub fn apply_action(&mut self, action: GameAction) -> CoreResult<bool> {
        match action {
            GameAction::Tilt(side) => Ok(self.tilt(side)?.changed),
            GameAction::Restart => {
                self.new_game()?;
                Ok(true)
            }
        }
    }

    fn spawn(&mut self) -> CoreResult<Option<Tile>> {
        match self.spawner.next_tile(&self.state) {
            Some(tile) => {
                self.state.add_tile(tile)?;
                Ok(Some(tile))
            }
            None => Ok(None),
        }
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spawn::ScriptedSpawn;
    use twenty48_core::CoreError;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn scripted(tiles: &[(u32, usize, usize)]) -> Session<ScriptedSpawn> {
        let spawner = ScriptedSpawn::new(tiles.iter().map(|&(v, c, r)| Tile::new(v, c, r)));
        Session::new(GameConfig::default(), spawner).unwrap()
    }

    fn recorder<P: SpawnPolicy>(session: &mut Session<P>) -> Rc<RefCell<Vec<GameEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        session.subscribe(move |e| sink.borrow_mut().push(e.clone()));
        events
    }

    #[test]
    fn test_new_game_places_opening_tiles() {
        let mut session = scripted(&[(2, 0, 0), (2, 0, 1)]);
        let events = recorder(&mut session);

        session.new_game().unwrap();
        assert_eq!(session.state().board().tiles().count(), 2);
        assert_eq!(
            events.borrow().as_slice(),
            &[GameEvent::Started {
                tiles: vec![Tile::new(2, 0, 0), Tile::new(2, 0, 1)]
            }]
        );
    }

    #[test]
    fn test_changed_tilt_spawns_and_notifies_once() {
        let mut session = scripted(&[(2, 0, 0), (2, 0, 1), (4, 3, 0)]);
        session.new_game().unwrap();
        let events = recorder(&mut session);

        let outcome = session.tilt(Side::North).unwrap();
        assert!(outcome.changed);
        assert_eq!(session.state().score(), 4);
        assert_eq!(session.moves(), 1);
        assert_eq!(session.state().tile(3, 0).unwrap().unwrap().value(), 4);

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        match &events[0] {
            GameEvent::Tilted { side, spawned, .. } => {
                assert_eq!(*side, Side::North);
                assert_eq!(*spawned, Some(Tile::new(4, 3, 0)));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_unchanged_tilt_is_silent() {
        let mut session = scripted(&[(2, 0, 3), (4, 1, 3), (8, 3, 0)]);
        session.new_game().unwrap();
        let events = recorder(&mut session);

        let outcome = session.tilt(Side::North).unwrap();
        assert!(!outcome.changed);
        assert!(events.borrow().is_empty());
        assert_eq!(session.spawner().remaining(), 1);
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn test_add_tile_error_emits_nothing() {
        let mut session = scripted(&[(2, 0, 0), (2, 1, 0)]);
        session.new_game().unwrap();
        let events = recorder(&mut session);

        assert!(session.add_tile(Tile::new(2, 0, 0)).is_err());
        assert!(events.borrow().is_empty());

        session.add_tile(Tile::new(8, 2, 2)).unwrap();
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_restart_action_resets_score() {
        let mut session = scripted(&[(2, 0, 0), (2, 0, 1), (2, 3, 3), (2, 1, 1)]);
        session.new_game().unwrap();
        session.apply_action(GameAction::Tilt(Side::North)).unwrap();
        assert_eq!(session.state().score(), 4);

        assert!(session.apply_action(GameAction::Restart).unwrap());
        assert_eq!(session.state().score(), 0);
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn test_rejected_spawn_still_reports_tilt() {
        // The third tile targets the cell the tilt just filled.
        let mut session = scripted(&[(2, 0, 0), (2, 1, 0), (2, 0, 3)]);
        session.new_game().unwrap();
        let events = recorder(&mut session);

        assert_eq!(
            session.tilt(Side::North),
            Err(CoreError::CellOccupied { col: 0, row: 3 })
        );
        assert_eq!(session.moves(), 1);
        assert_eq!(session.state().tile(0, 3).unwrap().unwrap().value(), 2);

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            events[0],
            GameEvent::Tilted {
                side: Side::North,
                spawned: None,
                game_over: false,
                ..
            }
        ));
    }

    #[test]
    fn test_rejected_opening_spawn_still_reports_start() {
        let mut session = scripted(&[(2, 1, 1), (4, 1, 1)]);
        let events = recorder(&mut session);

        assert!(session.new_game().is_err());
        assert_eq!(
            events.borrow().as_slice(),
            &[GameEvent::Started {
                tiles: vec![Tile::new(2, 1, 1)]
            }]
        );
    }

    #[test]
    fn test_winning_tilt_does_not_spawn() {
        let mut session = scripted(&[(1024, 0, 0), (1024, 0, 1), (2, 3, 0)]);
        session.new_game().unwrap();
        let events = recorder(&mut session);

        assert!(session.tilt(Side::North).unwrap().changed);
        assert!(session.game_over());
        assert_eq!(session.state().board().tiles().count(), 1);
        assert_eq!(session.spawner().remaining(), 1);
        assert!(matches!(
            events.borrow()[0],
            GameEvent::Tilted {
                spawned: None,
                game_over: true,
                ..
            }
        ));
    }

    #[test]
    fn test_from_config_random_session_runs() {
        let config = SessionConfig {
            seed: 9,
            ..SessionConfig::default()
        };
        let mut session = Session::from_config(&config).unwrap();
        session.new_game().unwrap();
        assert_eq!(session.state().board().tiles().count(), OPENING_TILES);

        for side in Side::ALL.iter().cycle().take(200) {
            if session.game_over() {
                break;
            }
            session.tilt(*side).unwrap();
        }
        assert!(session.state().score() > 0);
    }
}
