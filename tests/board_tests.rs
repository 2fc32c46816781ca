//! Board tests - grid access, bounds, and line clears

use chat_tetris::core::Board;
use chat_tetris::types::{CellKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.rows().len(), 40);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_free(x, y), "Cell ({}, {}) should be free", x, y);
        }
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);

    // Out of bounds is neither free nor occupied
    assert!(!board.is_free(-1, 0));
    assert!(!board.is_occupied(-1, 0));
    assert!(board.is_out_of_bounds(10, 39));
    assert!(!board.is_out_of_bounds(9, 39));
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    board.set_cell(5, 10, CellKind::T);
    assert_eq!(board.get(5, 10), Some(CellKind::T));

    board.set_cell(0, 0, CellKind::Garbage);
    assert_eq!(board.cell_at(0, 0), CellKind::Garbage);

    board.set_cell(5, 10, CellKind::Empty);
    assert_eq!(board.get(5, 10), Some(CellKind::Empty));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_row_full_needs_every_column() {
    let mut board = Board::new();
    for x in 0..9 {
        board.set_cell(x, 0, CellKind::L);
    }
    assert!(!board.is_row_full(0));

    board.set_cell(9, 0, CellKind::J);
    assert!(board.is_row_full(0));
}

#[test]
fn test_clear_single_row_shifts_down() {
    let mut board = Board::new();
    board.fill_row(0, CellKind::Garbage);
    board.set_cell(2, 1, CellKind::Z);
    board.set_cell(7, 5, CellKind::S);

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.get(2, 0), Some(CellKind::Z));
    assert_eq!(board.get(7, 4), Some(CellKind::S));
    assert_eq!(board.get(7, 5), Some(CellKind::Empty));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::new();
    board.fill_row(0, CellKind::Garbage);
    board.set_cell(0, 1, CellKind::I);
    board.fill_row(2, CellKind::Garbage);
    board.set_cell(0, 3, CellKind::O);

    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.get(0, 0), Some(CellKind::I));
    assert_eq!(board.get(0, 1), Some(CellKind::O));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_top_row() {
    let mut board = Board::new();
    board.fill_row(39, CellKind::T);

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_clear_four_stacked_rows() {
    let mut board = Board::new();
    for y in 0..4 {
        board.fill_row(y, CellKind::Garbage);
    }
    board.set_cell(4, 4, CellKind::T);

    assert_eq!(board.clear_full_rows(), 4);
    assert_eq!(board.get(4, 0), Some(CellKind::T));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_board_clear() {
    let mut board = Board::new();
    board.fill_row(3, CellKind::Garbage);
    board.clear();
    assert_eq!(board, Board::new());
}
