//! Tests for tic-tac-toe cell coordinates.

use strictly_arcade::{Cell, TicTacToe};

#[test]
fn test_cell_to_index() {
    assert_eq!(Cell::new(0, 0).to_index(3), 0);
    assert_eq!(Cell::new(1, 1).to_index(3), 4);
    assert_eq!(Cell::new(2, 2).to_index(3), 8);
    assert_eq!(Cell::new(3, 1).to_index(4), 7);
}

#[test]
fn test_cell_from_index() {
    assert_eq!(Cell::from_index(0, 3), Some(Cell::new(0, 0)));
    assert_eq!(Cell::from_index(5, 3), Some(Cell::new(2, 1)));
    assert_eq!(Cell::from_index(9, 3), None);
    assert_eq!(Cell::from_index(0, 0), None);
}

#[test]
fn test_cell_parse() {
    assert_eq!(Cell::parse("0 2"), Some(Cell::new(0, 2)));
    assert_eq!(Cell::parse(" 1,1 "), Some(Cell::new(1, 1)));
    assert_eq!(Cell::parse("1"), None);
    assert_eq!(Cell::parse("1 2 3"), None);
    assert_eq!(Cell::parse("a b"), None);
    assert_eq!(Cell::parse("-1 0"), None);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut game = TicTacToe::new(3).unwrap();
    assert_eq!(game.valid_moves().len(), 9);

    game.place(0, 0).unwrap();
    game.place(1, 1).unwrap();

    let valid = game.valid_moves();
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Cell::new(0, 0)));
    assert!(!valid.contains(&Cell::new(1, 1)));
    assert!(valid.contains(&Cell::new(2, 2)));
}
