//! Tests for the game engine lifecycle through the public API.

use tictactoe_core::{Cell, Coordinate, EngineError, GameEngine, GameState, Line, Player, Snapshot};

fn play(engine: &mut GameEngine, moves: &[(usize, usize)]) -> GameState {
    let mut state = engine.state();
    for &(row, col) in moves {
        state = engine.apply_move(row, col).expect("Valid move");
    }
    state
}

#[test]
fn test_top_row_win() {
    let mut engine = GameEngine::new();
    let moves = [(0, 0), (1, 1), (0, 1), (1, 0)];
    assert_eq!(play(&mut engine, &moves), GameState::InProgress);

    assert_eq!(engine.apply_move(0, 2), Ok(GameState::Won(Player::X)));
    assert_eq!(engine.winning_line(), Some(Line::TopRow));
    assert_eq!(engine.current_player(), None);
}

#[test]
fn test_full_board_draw() {
    let mut engine = GameEngine::new();
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
    ];
    assert_eq!(play(&mut engine, &moves), GameState::InProgress);
    assert_eq!(engine.apply_move(2, 2), Ok(GameState::Draw));

    use Cell::{O, X};
    let rows = engine.board().rows();
    assert_eq!(rows, [[X, O, X], [X, O, O], [O, X, X]]);
    assert_eq!(engine.winning_line(), None);
}

#[test]
fn test_diagonal_win() {
    let mut engine = GameEngine::new();
    let state = play(&mut engine, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    assert_eq!(state, GameState::Won(Player::X));
    assert_eq!(engine.winning_line(), Some(Line::MainDiagonal));
}

#[test]
fn test_o_can_win() {
    let mut engine = GameEngine::new();
    let state = play(&mut engine, &[(0, 0), (0, 2), (1, 0), (1, 1), (2, 2), (2, 0)]);
    assert_eq!(state, GameState::Won(Player::O));
    assert_eq!(engine.winning_line(), Some(Line::AntiDiagonal));
}

#[test]
fn test_win_on_last_cell_is_not_draw() {
    let mut engine = GameEngine::new();
    // X O X / O X O / O X _ then X completes the main diagonal
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (1, 2),
        (2, 1),
        (2, 0),
    ];
    assert_eq!(play(&mut engine, &moves), GameState::InProgress);
    assert_eq!(engine.apply_move(2, 2), Ok(GameState::Won(Player::X)));
}

#[test]
fn test_out_of_range_rejected() {
    let mut engine = GameEngine::new();
    engine.apply_move(1, 1).expect("Valid move");
    let before = engine.current_state();

    assert_eq!(
        engine.apply_move(3, 0),
        Err(EngineError::InvalidCoordinate { row: 3, col: 0 })
    );
    assert_eq!(
        engine.apply_move(0, usize::MAX),
        Err(EngineError::InvalidCoordinate {
            row: 0,
            col: usize::MAX
        })
    );
    assert_eq!(engine.current_state(), before);
}

#[test]
fn test_occupied_cell_rejected() {
    let mut engine = GameEngine::new();
    engine.apply_move(1, 1).expect("Valid move");
    let before = engine.current_state();

    let center = Coordinate::new(1, 1).expect("in range");
    assert_eq!(engine.apply_move(1, 1), Err(EngineError::CellOccupied(center)));
    assert_eq!(engine.apply(center), Err(EngineError::CellOccupied(center)));
    assert_eq!(engine.current_state(), before);
    assert_eq!(engine.current_player(), Some(Player::O));
}

#[test]
fn test_terminal_state_rejects_everything_until_reset() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    let frozen = engine.current_state();

    for (row, col) in [(2, 2), (0, 0), (9, 9)] {
        assert_eq!(
            engine.apply_move(row, col),
            Err(EngineError::GameAlreadyOver(GameState::Won(Player::X)))
        );
    }
    assert_eq!(engine.current_state(), frozen);

    engine.reset();
    assert_eq!(engine.apply_move(2, 2), Ok(GameState::InProgress));
}

#[test]
fn test_draw_rejects_moves() {
    let mut engine = GameEngine::new();
    play(
        &mut engine,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert!(matches!(
        engine.apply_move(0, 0),
        Err(EngineError::GameAlreadyOver(GameState::Draw))
    ));
}

#[test]
fn test_reset_is_idempotent() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(2, 0), (0, 2)]);

    let first = engine.reset();
    let second = engine.reset();
    assert_eq!(first, second);
    assert_eq!(*first.state(), GameState::InProgress);
    assert_eq!(*first.current_player(), Some(Player::X));
    assert!(first.board().cells().iter().all(|c| *c == Cell::Empty));
}

#[test]
fn test_snapshot_is_detached_from_engine() {
    let mut engine = GameEngine::new();
    let snapshot: Snapshot = engine.current_state();
    engine.apply_move(0, 0).expect("Valid move");

    let origin = Coordinate::new(0, 0).expect("in range");
    assert_eq!(snapshot.cell(origin), Cell::Empty);
    assert_eq!(engine.current_state().cell(origin), Cell::X);
}

#[test]
fn test_snapshot_status_string() {
    let mut engine = GameEngine::new();
    assert_eq!(
        engine.current_state().status_string(),
        "In progress. Player X to move."
    );
    play(&mut engine, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    assert_eq!(
        engine.current_state().status_string(),
        "Game over. Player X wins!"
    );
}

#[test]
fn test_snapshot_is_over_tracks_terminal_states() {
    let mut engine = GameEngine::new();
    assert!(!engine.current_state().is_over());
    play(&mut engine, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    assert!(engine.current_state().is_over());
    assert!(!engine.reset().is_over());
}

#[test]
fn test_snapshot_serializes() {
    let mut engine = GameEngine::new();
    engine.apply_move(1, 2).expect("Valid move");
    let snapshot = engine.current_state();

    let json = serde_json::to_value(snapshot).expect("serialize");
    assert_eq!(json["state"], "InProgress");
    assert_eq!(json["current_player"], "O");
    assert_eq!(json["board"]["cells"][5], "X");

    let back: Snapshot = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, snapshot);
}

#[test]
fn test_coordinate_rejects_out_of_range_json() {
    let result: Result<Coordinate, _> = serde_json::from_str("[1, 3]");
    assert!(result.is_err());
    let coord: Coordinate = serde_json::from_str("[2, 1]").expect("in range");
    assert_eq!(coord.index(), 7);
}

#[test]
fn test_valid_moves_shrink() {
    let mut engine = GameEngine::new();
    engine.apply_move(0, 0).expect("Valid move");
    engine.apply_move(2, 2).expect("Valid move");

    let valid = engine.valid_moves();
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Coordinate::new(0, 0).expect("in range")));
    assert!(!valid.contains(&Coordinate::new(2, 2).expect("in range")));
}
