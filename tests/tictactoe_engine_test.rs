//! Tests for the tic-tac-toe engine.

use strictly_arcade::{GameStatus, MoveError, Square, TicTacToe, TicTacToePlayer as Player};

fn play(game: &mut TicTacToe, moves: &[(usize, usize)]) -> GameStatus {
    let mut status = game.status();
    for &(col, row) in moves {
        status = game.place(col, row).unwrap();
    }
    status
}

#[test]
fn test_fresh_game_for_all_sizes() {
    for size in 1..=6 {
        let game = TicTacToe::new(size).unwrap();
        assert_eq!(game.size(), size);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.turn(), Player::X);
        assert_eq!(game.board().occupied(), 0);
        assert_eq!(game.winner(), None);
    }
}

#[test]
fn test_zero_size_is_invalid_argument() {
    assert!(TicTacToe::new(0).is_err());
}

#[test]
fn test_unrepresentable_size_is_invalid_argument() {
    let err = TicTacToe::new(usize::MAX).unwrap_err();
    assert!(err.message.contains("for size"));
    assert!(TicTacToe::new(1 << (usize::BITS / 2)).is_err());
}

#[test]
fn test_alternating_players() {
    let mut game = TicTacToe::new(3).unwrap();
    assert_eq!(game.turn(), Player::X);
    game.place(1, 1).unwrap();
    assert_eq!(game.turn(), Player::O);
    game.place(0, 0).unwrap();
    assert_eq!(game.turn(), Player::X);
}

#[test]
fn test_mark_counts_follow_strict_alternation() {
    let mut game = TicTacToe::new(4).unwrap();
    let moves = [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (3, 0), (2, 1), (0, 2)];
    for (k, &(col, row)) in moves.iter().enumerate() {
        game.place(col, row).unwrap();
        let placed = k + 1;
        assert_eq!(game.board().count(Player::X), placed.div_ceil(2));
        assert_eq!(game.board().count(Player::O), placed / 2);
        assert_eq!(game.history().len(), placed);
    }
}

#[test]
fn test_row_win_only_after_third_mark() {
    let mut game = TicTacToe::new(3).unwrap();
    assert_eq!(game.place(0, 0), Ok(GameStatus::InProgress));
    assert_eq!(game.place(0, 1), Ok(GameStatus::InProgress));
    assert_eq!(game.place(1, 0), Ok(GameStatus::InProgress));
    assert_eq!(game.place(1, 1), Ok(GameStatus::InProgress));
    assert_eq!(game.place(2, 0), Ok(GameStatus::Won(Player::X)));
    assert_eq!(game.winner(), Some(Player::X));
}

#[test]
fn test_column_win_for_second_player() {
    let mut game = TicTacToe::new(3).unwrap();
    let status = play(&mut game, &[(0, 0), (2, 0), (1, 1), (2, 1), (0, 2), (2, 2)]);
    assert_eq!(status, GameStatus::Won(Player::O));
}

#[test]
fn test_diagonal_wins() {
    let mut down = TicTacToe::new(3).unwrap();
    assert_eq!(
        play(&mut down, &[(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)]),
        GameStatus::Won(Player::X)
    );

    let mut up = TicTacToe::new(3).unwrap();
    assert_eq!(
        play(&mut up, &[(2, 0), (0, 0), (1, 1), (1, 0), (0, 2)]),
        GameStatus::Won(Player::X)
    );
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X
    // X O O
    // O X X
    let mut game = TicTacToe::new(3).unwrap();
    let status = play(
        &mut game,
        &[(0, 0), (1, 0), (2, 0), (1, 1), (0, 1), (2, 1), (1, 2), (0, 2), (2, 2)],
    );
    assert_eq!(status, GameStatus::Draw);
    assert_eq!(game.winner(), None);
    assert!(game.valid_moves().is_empty());

    let before = game.clone();
    assert!(!game.can_place(0, 0));
    assert_eq!(game.place(0, 0), Err(MoveError::GameOver));
    assert_eq!(game, before);
    assert_eq!(game.turn(), Player::O);
}

#[test]
fn test_occupied_square_rejected_without_mutation() {
    let mut game = TicTacToe::new(3).unwrap();
    game.place(1, 1).unwrap();
    let before = game.clone();

    assert!(!game.can_place(1, 1));
    let err = game.place(1, 1).unwrap_err();
    assert!(matches!(err, MoveError::SquareOccupied(_)));
    assert!(err.to_string().contains("occupied"));
    assert_eq!(game, before);
}

#[test]
fn test_out_of_bounds_rejected_without_mutation() {
    let mut game = TicTacToe::new(3).unwrap();
    let before = game.clone();
    assert!(!game.can_place(3, 0));
    assert!(!game.can_place(0, 3));
    assert!(matches!(game.place(0, 3), Err(MoveError::OutOfBounds(_, 3))));
    assert_eq!(game, before);
}

#[test]
fn test_move_after_game_over_rejected() {
    let mut game = TicTacToe::new(3).unwrap();
    play(&mut game, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]);
    let before = game.clone();

    assert!(!game.can_place(2, 2));
    assert_eq!(game.place(2, 2), Err(MoveError::GameOver));
    assert_eq!(game, before);
    assert_eq!(game.board().get((2, 2).into()), Some(Square::Empty));
}

#[test]
fn test_reset_restores_fresh_state() {
    let mut game = TicTacToe::new(4).unwrap();
    play(&mut game, &[(0, 0), (1, 1), (2, 2)]);
    game.reset();

    assert_eq!(game.size(), 4);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.turn(), Player::X);
    assert_eq!(game.board().occupied(), 0);
    assert!(game.history().is_empty());
    assert_eq!(game.valid_moves().len(), 16);
}

#[test]
fn test_board_display() {
    let mut game = TicTacToe::new(3).unwrap();
    play(&mut game, &[(0, 0), (2, 2)]);
    assert_eq!(game.board().display(), "X . .\n. . .\n. . O");
}
