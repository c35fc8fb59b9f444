//! Game state tests - terminal detection, score keeping and tile placement

use twenty48::core::{CoreError, GameConfig, GameState};
use twenty48::types::{Side, Tile};

#[test]
fn test_new_game() {
    let state = GameState::new(4).unwrap();
    assert_eq!(state.size(), 4);
    assert_eq!(state.score(), 0);
    assert_eq!(state.max_score(), 0);
    assert!(!state.game_over());
    assert_eq!(state.max_piece(), 2048);
    assert!(GameState::new(0).is_err());
}

#[test]
fn test_game_over_on_full_deadlock() {
    let state = GameState::from_grid(
        &[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]],
        0,
        0,
    )
    .unwrap();
    assert!(state.game_over());
    for side in Side::ALL {
        assert!(!state.can_tilt(side));
    }
}

#[test]
fn test_full_board_with_pair_is_not_over() {
    let state = GameState::from_grid(
        &[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]],
        0,
        0,
    )
    .unwrap();
    assert!(!state.game_over());
    assert!(state.can_tilt(Side::East));
    assert!(!state.can_tilt(Side::North));
}

#[test]
fn test_game_over_on_win_with_moves_left() {
    let state = GameState::from_grid(
        &[[2048, 0, 0, 0], [0, 0, 0, 0], [0, 2, 2, 0], [0, 0, 0, 0]],
        0,
        0,
    )
    .unwrap();
    assert!(state.board().at_least_one_move_exists());
    assert!(state.game_over());
}

#[test]
fn test_win_reached_by_merge() {
    let mut state = GameState::from_grid(
        &[[1024, 0, 0, 0], [1024, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        5000,
        0,
    )
    .unwrap();
    assert!(!state.game_over());

    state.tilt(Side::North).unwrap();
    assert_eq!(state.tile(0, 3).unwrap().unwrap().value(), 2048);
    assert_eq!(state.score(), 7048);
    assert!(state.game_over());
    assert_eq!(state.max_score(), 7048);
}

#[test]
fn test_configured_winning_value() {
    let mut state = GameState::with_config(GameConfig {
        size: 3,
        max_piece: 16,
    })
    .unwrap();
    state.add_tile(Tile::new(8, 0, 0)).unwrap();
    state.add_tile(Tile::new(8, 0, 1)).unwrap();
    assert!(!state.game_over());

    state.tilt(Side::South).unwrap();
    assert_eq!(state.tile(0, 0).unwrap().unwrap().value(), 16);
    assert!(state.game_over());
}

#[test]
fn test_max_score_monotonic_across_games() {
    // First game ends at 300.
    let mut state = GameState::from_grid(&[[2, 4], [4, 0]], 300, 0).unwrap();
    state.add_tile(Tile::new(2, 1, 0)).unwrap();
    assert!(state.game_over());
    assert_eq!(state.max_score(), 300);

    // Second game ends lower; the record stays.
    state.clear();
    assert_eq!(state.max_score(), 300);
    state.add_tile(Tile::new(2, 0, 1)).unwrap();
    state.add_tile(Tile::new(4, 1, 1)).unwrap();
    state.add_tile(Tile::new(4, 0, 0)).unwrap();
    state.add_tile(Tile::new(2, 1, 0)).unwrap();
    assert!(state.game_over());
    assert_eq!(state.score(), 0);
    assert_eq!(state.max_score(), 300);
}

#[test]
fn test_max_score_updates_only_when_game_ends() {
    let mut state = GameState::from_grid(
        &[[2, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
        0,
        0,
    )
    .unwrap();
    state.tilt(Side::North).unwrap();
    assert_eq!(state.score(), 4);
    assert_eq!(state.max_score(), 0);
}

#[test]
fn test_add_tile_contract() {
    let mut state = GameState::new(4).unwrap();
    assert_eq!(
        state.add_tile(Tile::new(2, 4, 0)),
        Err(CoreError::OutOfBounds {
            col: 4,
            row: 0,
            size: 4
        })
    );
    assert_eq!(
        state.add_tile(Tile::new(5, 0, 0)),
        Err(CoreError::InvalidTileValue(5))
    );
    state.add_tile(Tile::new(4, 2, 2)).unwrap();
    assert_eq!(
        state.add_tile(Tile::new(2, 2, 2)),
        Err(CoreError::CellOccupied { col: 2, row: 2 })
    );
}

#[test]
fn test_add_tile_rechecks_game_over() {
    let mut state = GameState::from_grid(&[[2, 4], [0, 2]], 0, 0).unwrap();
    assert!(!state.game_over());
    state.add_tile(Tile::new(8, 0, 0)).unwrap();
    assert!(state.game_over());
}

#[test]
fn test_clear_resets_game() {
    let mut state = GameState::from_grid(&[[2, 4], [4, 2]], 64, 0).unwrap();
    assert!(state.game_over());

    state.clear();
    assert_eq!(state.score(), 0);
    assert!(!state.game_over());
    assert_eq!(state.board().tiles().count(), 0);
    assert_eq!(state.max_score(), 64);
}

#[test]
fn test_tilt_deterministic() {
    let grid = [[2, 2, 4, 0], [0, 4, 4, 8], [2, 0, 2, 2], [16, 16, 0, 16]];
    for side in Side::ALL {
        let mut a = GameState::from_grid(&grid, 0, 0).unwrap();
        let mut b = GameState::from_grid(&grid, 0, 0).unwrap();
        assert_eq!(a.tilt(side).unwrap(), b.tilt(side).unwrap());
        assert_eq!(a, b);
    }
}
