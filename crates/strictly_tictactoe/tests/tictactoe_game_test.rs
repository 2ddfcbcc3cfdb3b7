//! Tests for the tic-tac-toe game engine.

use strictly_tictactoe::{Game, GameStatus, MoveError, Player, Position, Square};

#[test]
fn test_new_game_is_empty() {
    let game = Game::new();
    assert_eq!(game.check_winner(), None);
    assert!(!game.is_board_full());
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.valid_moves().len(), 9);
}

#[test]
fn test_alternating_players() {
    let mut game = Game::new();
    assert_eq!(game.current_player(), Player::X);

    game.make_move(1, 1).expect("Valid move");
    assert_eq!(game.current_player(), Player::O);

    game.make_move(0, 0).expect("Valid move");
    assert_eq!(game.current_player(), Player::X);
}

#[test]
fn test_occupied_square_rejected_without_change() {
    let mut game = Game::new();
    game.make_move(1, 1).expect("Valid move");
    let before = game.clone();

    assert!(!game.is_valid_move(1, 1));
    let result = game.make_move(1, 1);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    assert!(result.unwrap_err().to_string().contains("occupied"));
    assert_eq!(game, before);
}

#[test]
fn test_out_of_range_rejected_without_change() {
    let mut game = Game::new();
    let before = game.clone();

    assert!(!game.is_valid_move(3, 0));
    assert_eq!(
        game.make_move(3, 0),
        Err(MoveError::OutOfRange { row: 3, col: 0 })
    );
    assert_eq!(game.make_move(0, 7), Err(MoveError::OutOfRange { row: 0, col: 7 }));
    assert_eq!(game, before);
}

#[test]
fn test_row_win() {
    let mut game = Game::new();
    // X: top row. O: middle row, one short.
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        assert_eq!(game.make_move(row, col), Ok(GameStatus::InProgress));
    }
    assert_eq!(game.make_move(0, 2), Ok(GameStatus::Won(Player::X)));
    assert_eq!(game.check_winner(), Some(Player::X));
    assert_eq!(game.board().get(Position::TopRight), Square::Occupied(Player::X));
}

#[test]
fn test_no_moves_after_game_over() {
    let positions = [
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight,
    ];
    let mut game = Game::replay(Player::X, &positions).expect("Valid replay");
    let before = game.clone();

    assert_eq!(game.place(Position::BottomRight), Err(MoveError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_draw_detection() {
    let positions = [
        Position::TopLeft,
        Position::Center,
        Position::TopRight,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    let game = Game::replay(Player::X, &positions).expect("Valid replay");
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.is_board_full());
    assert_eq!(game.check_winner(), None);
}

#[test]
fn test_replay_history() {
    let positions = [Position::Center, Position::TopLeft, Position::BottomRight];
    let game = Game::replay(Player::O, &positions).expect("Valid replay");

    assert_eq!(game.history().len(), 3);
    assert_eq!(game.history()[0].player, Player::O);
    assert_eq!(game.history()[1].player, Player::X);
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.history()[0].to_string(), "O -> Center");
    assert_eq!(game.history()[2].to_string(), "O -> Bottom-right");
}

#[test]
fn test_replay_stops_at_first_illegal_move() {
    let positions = [Position::Center, Position::Center];
    assert_eq!(
        Game::replay(Player::X, &positions),
        Err(MoveError::SquareOccupied(Position::Center))
    );
}

#[test]
fn test_restart_keeps_first_mover() {
    let mut game = Game::starting_with(Player::O);
    game.make_move(0, 0).expect("Valid move");

    let fresh = game.restart();
    assert_eq!(fresh.current_player(), Player::O);
    assert!(fresh.history().is_empty());
    assert_eq!(fresh.valid_moves().len(), 9);
}

#[test]
fn test_board_rendering() {
    let positions = [Position::TopLeft, Position::TopCenter, Position::Center];
    let game = Game::replay(Player::X, &positions).expect("Valid replay");

    let expected = "  1   2   3\n\
                    1 X | O |   \n  -----------\n\
                    2   | X |   \n  -----------\n\
                    3   |   |   ";
    assert_eq!(game.board().to_string(), expected);
}

#[test]
fn test_game_serializes() {
    let mut game = Game::new();
    game.make_move(1, 1).expect("Valid move");

    let json = serde_json::to_value(&game).expect("Game serializes");
    assert_eq!(json["current_player"], "O");
    assert_eq!(json["status"], "InProgress");
}
