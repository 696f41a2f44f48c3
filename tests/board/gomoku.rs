use board_trio::board::{Board, Outcome, Player};
use board_trio::games::gomoku::{GomokuBoard, GomokuGrid, BLACK, WHITE};
use board_trio::util::coord::Coord15;

use crate::board::{board_test_main, board_test_main_without_uniform, print_board_with_moves};

fn candidates() -> Vec<Coord15> {
    Coord15::all().collect()
}

fn rc(row: u8, col: u8) -> Coord15 {
    Coord15::from_rc(row, col)
}

/// A full board without five in a row anywhere, made of 2x2 stripes shifted every row.
fn striped_tile(coord: Coord15) -> Player {
    if (coord.col() + 2 * coord.row()) % 4 < 2 {
        BLACK
    } else {
        WHITE
    }
}

#[test]
fn empty() {
    board_test_main_without_uniform(&GomokuBoard::default(), &candidates());
}

#[test]
fn few_moves() {
    let board = print_board_with_moves(GomokuBoard::default(), &[rc(7, 7), rc(7, 8), rc(8, 8)]);
    assert_eq!(board.next_player(), WHITE);
    assert_eq!(board.last_move(), Some(rc(8, 8)));
    board_test_main(&board, &candidates());
}

#[test]
fn horizontal_win() {
    let moves = [
        rc(7, 3),
        rc(0, 0),
        rc(7, 4),
        rc(0, 2),
        rc(7, 5),
        rc(0, 4),
        rc(7, 6),
        rc(0, 6),
    ];
    let before = print_board_with_moves(GomokuBoard::default(), &moves);
    assert_eq!(before.outcome(), None);
    assert_eq!(before.grid().winner(rc(7, 6), BLACK), None);
    assert!(!before.grid().is_game_over(rc(7, 6), BLACK));

    let grid = before.grid().make_move(rc(7, 7), BLACK);
    assert!(grid.is_game_over(rc(7, 7), BLACK));
    assert_eq!(grid.winner(rc(7, 7), BLACK), Some(Outcome::WonBy(BLACK)));
    assert_eq!(grid.line_length(rc(7, 7), 0, 1, BLACK), 5);
    // the input grid is untouched
    assert_eq!(before.grid().tile(rc(7, 7)), None);

    let board = before.clone_and_play(rc(7, 7)).unwrap();
    assert_eq!(board.outcome(), Some(Outcome::WonBy(BLACK)));
    board_test_main(&board, &candidates());
}

#[test]
fn win_in_the_middle_of_the_line() {
    let grid = GomokuGrid::from_rows(&[
        "...............",
        "...............",
        "...............",
        "...o...........",
        "....o..........",
        "...............",
        "......o........",
        ".......o.......",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
    ])
    .unwrap();

    let coord = rc(5, 5);
    assert!(grid.is_winning_move(coord, WHITE));
    assert!(!grid.is_winning_move(coord, BLACK));
    assert_eq!(grid.make_move(coord, WHITE).winner(coord, WHITE), Some(Outcome::WonBy(WHITE)));
}

#[test]
fn overline_wins() {
    let mut grid = GomokuGrid::empty();
    for row in [0, 1, 2, 4, 5] {
        grid = grid.make_move(rc(row, 14), BLACK);
    }
    let coord = rc(3, 14);
    assert!(grid.is_winning_move(coord, BLACK));
    assert_eq!(grid.make_move(coord, BLACK).line_length(coord, 1, 0, BLACK), 6);
}

#[test]
fn full_board_is_draw() {
    let last = rc(14, 14);
    let grid = Coord15::all()
        .filter(|&c| c != last)
        .fold(GomokuGrid::empty(), |grid, c| grid.make_move(c, striped_tile(c)));

    let board = GomokuBoard::from_grid(grid, striped_tile(last));
    assert_eq!(board.outcome(), None);
    board_test_main(&board, &candidates());

    let full = board.clone_and_play(last).unwrap();
    assert!(full.grid().is_full());
    assert_eq!(full.grid().winner(last, striped_tile(last)), Some(Outcome::Draw));
    assert_eq!(full.outcome(), Some(Outcome::Draw));
    board_test_main(&full, &candidates());
}

#[test]
fn stones_only_grow() {
    let board = print_board_with_moves(GomokuBoard::default(), &[rc(0, 0), rc(14, 14), rc(7, 7)]);
    assert_eq!(board.grid().stone_count(), 3);
    assert!(!board.is_available_move(rc(7, 7)).unwrap());
}
