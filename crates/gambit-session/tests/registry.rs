use gambit_core::{BoardError, Color, GameStatus, Move, MoveError, Position};
use gambit_session::{GameRegistry, RegistryConfig, SessionError};

#[test]
fn create_list_and_remove() {
    let mut registry = GameRegistry::new(RegistryConfig::default()).unwrap();
    let first = registry.create_game("first").unwrap();
    let second = registry.create_game("second").unwrap();

    let listing = registry.list_games();
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[0].id, first);
    assert_eq!(listing[0].name, "first");
    assert_eq!(listing[1].id, second);
    assert!(listing.iter().all(|summary| summary.active_color == Color::White));

    registry.remove_game(first).unwrap();
    assert_eq!(registry.len(), 1);
    assert!(matches!(
        registry.snapshot(first),
        Err(SessionError::UnknownGame { .. })
    ));

    registry.clear();
    assert!(registry.is_empty());
}

#[test]
fn game_limit_is_enforced() {
    let mut registry = GameRegistry::new(RegistryConfig::default().with_max_games(1)).unwrap();
    registry.create_game("only").unwrap();
    assert_eq!(
        registry.create_game("one too many"),
        Err(SessionError::TooManyGames { limit: 1 })
    );
}

#[test]
fn bad_starting_state_is_rejected() {
    let config = RegistryConfig::default().with_starting_state(&["K--", "--"]);
    assert_eq!(
        GameRegistry::new(config).err(),
        Some(SessionError::InvalidStartingState(BoardError::InvalidBoardState {
            row: 2,
            expected: 3,
            found: 2,
        }))
    );
}

#[test]
fn moves_flow_through_the_registry() {
    let mut registry = GameRegistry::default();
    let id = registry.create_game("demo").unwrap();

    let moves = registry.legal_moves(id, Position::new(1, 2)).unwrap();
    assert_eq!(moves.len(), 2);

    let applied = registry.apply_move_text(id, "e2e4").unwrap();
    assert_eq!(applied.mv, Move::new(Position::new(2, 5), Position::new(4, 5)));

    let snapshot = registry.snapshot(id).unwrap();
    assert_eq!(snapshot.active_color, Color::Black);
    assert_eq!(snapshot.status, GameStatus::InProgress);
    assert_eq!(snapshot.board[3], "----P---");
    assert_eq!(snapshot.board[1], "PPPP-PPP");
}

#[test]
fn rejected_moves_report_their_cause() {
    let mut registry = GameRegistry::default();
    let id = registry.create_game("demo").unwrap();

    assert_eq!(
        registry.apply_move_text(id, "e2"),
        Err(SessionError::InvalidMoveText { text: "e2".to_string() })
    );
    assert_eq!(
        registry.apply_move_text(id, "e7e5"),
        Err(SessionError::Move(MoveError::WrongTurn {
            expected: Color::White,
            found: Color::Black,
        }))
    );
    assert!(matches!(
        registry.apply_move_text(id, "e2e5"),
        Err(SessionError::Move(MoveError::IllegalMove { .. }))
    ));
    assert!(matches!(
        registry.apply_move_text(id, "e4e5"),
        Err(SessionError::Move(MoveError::NoPieceAtStart { .. }))
    ));
    assert_eq!(registry.snapshot(id).unwrap().active_color, Color::White);
}

#[test]
fn custom_start_reports_checkmate() {
    let config = RegistryConfig::default()
        .with_starting_state(&["K-------", "-q------", "--k-----"])
        .with_starting_color(Color::White);
    let mut registry = GameRegistry::new(config).unwrap();
    let id = registry.create_game("mated").unwrap();

    let snapshot = registry.snapshot(id).unwrap();
    assert_eq!(snapshot.status, GameStatus::Checkmate(Color::White));
    assert!(snapshot.status.is_over());
    assert!(registry.legal_moves(id, Position::new(1, 1)).unwrap().is_empty());
}
