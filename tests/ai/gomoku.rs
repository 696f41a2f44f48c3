use std::time::Duration;

use board_trio::ai::Bot;
use board_trio::board::Board;
use board_trio::games::gomoku::ai::{best_move, candidates, search, GomokuBot, GOMOKU_TIME_BUDGET};
use board_trio::games::gomoku::{GomokuBoard, GomokuGrid, BLACK, WHITE};
use board_trio::util::coord::Coord15;
use board_trio::util::tiny::consistent_rng;

use crate::util::test_sampler_uniform;

fn rc(row: u8, col: u8) -> Coord15 {
    Coord15::from_rc(row, col)
}

fn grid_with(black: &[(u8, u8)], white: &[(u8, u8)]) -> GomokuGrid {
    let grid = black
        .iter()
        .fold(GomokuGrid::empty(), |grid, &(r, c)| grid.make_move(rc(r, c), BLACK));
    white
        .iter()
        .fold(grid, |grid, &(r, c)| grid.make_move(rc(r, c), WHITE))
}

#[test]
fn opens_in_the_center() {
    let mut rng = consistent_rng();
    assert_eq!(
        best_move(&GomokuGrid::empty(), BLACK, GOMOKU_TIME_BUDGET, &mut rng),
        Some(rc(7, 7))
    );
}

#[test]
fn blocks_open_four() {
    let grid = grid_with(&[(8, 4), (8, 5), (9, 6)], &[(7, 4), (7, 5), (7, 6), (7, 7)]);
    let mut rng = consistent_rng();

    // both ends complete five, the first in row-major order is blocked
    let mv = best_move(&grid, BLACK, GOMOKU_TIME_BUDGET, &mut rng);
    assert_eq!(mv, Some(rc(7, 3)));
}

#[test]
fn blocks_the_only_gap() {
    let grid = grid_with(&[(7, 3), (8, 5), (9, 6)], &[(7, 4), (7, 5), (7, 6), (7, 7)]);
    let mut rng = consistent_rng();
    assert_eq!(best_move(&grid, BLACK, GOMOKU_TIME_BUDGET, &mut rng), Some(rc(7, 8)));
}

#[test]
fn completes_own_five() {
    let grid = grid_with(&[(3, 3), (3, 4), (3, 5), (3, 6), (2, 2)], &[(3, 2), (10, 10), (11, 11), (12, 3)]);
    let mut rng = consistent_rng();
    assert_eq!(search(&grid, BLACK, GOMOKU_TIME_BUDGET, &mut rng), Some(rc(3, 7)));
}

#[test]
fn blocking_comes_before_winning() {
    let grid = grid_with(&[(3, 3), (3, 4), (3, 5), (3, 6)], &[(10, 3), (10, 4), (10, 5), (10, 6)]);
    let mut rng = consistent_rng();
    assert_eq!(search(&grid, BLACK, GOMOKU_TIME_BUDGET, &mut rng), Some(rc(10, 2)));
}

#[test]
fn ties_are_broken_uniformly() {
    // the four orthogonal neighbours of a lone stone score the same
    let grid = grid_with(&[], &[(7, 7)]);
    let expected = vec![rc(6, 7), rc(7, 6), rc(7, 8), rc(8, 7)];

    let mut rng = consistent_rng();
    test_sampler_uniform(&expected, false, || {
        search(&grid, BLACK, GOMOKU_TIME_BUDGET, &mut rng)
    });
}

#[test]
fn zero_budget_picks_random_candidate() {
    let grid = grid_with(&[(7, 7), (6, 6)], &[(7, 8)]);
    let expected = candidates(&grid);
    assert_eq!(expected.len(), 14);

    let mut rng = consistent_rng();
    test_sampler_uniform(&expected, false, || search(&grid, WHITE, Duration::ZERO, &mut rng));
}

#[test]
fn full_grid_has_no_move() {
    let grid = Coord15::all().fold(GomokuGrid::empty(), |grid, c| {
        let player = if (c.col() + 2 * c.row()) % 4 < 2 { BLACK } else { WHITE };
        grid.make_move(c, player)
    });
    let mut rng = consistent_rng();
    assert!(candidates(&grid).is_empty());
    assert_eq!(search(&grid, BLACK, GOMOKU_TIME_BUDGET, &mut rng), None);
    assert_eq!(best_move(&grid, BLACK, GOMOKU_TIME_BUDGET, &mut rng), None);
}

#[test]
fn bot_plays_full_game() {
    let mut board = GomokuBoard::default();
    let mut bots = [
        GomokuBot::new(GOMOKU_TIME_BUDGET, consistent_rng()),
        GomokuBot::new(GOMOKU_TIME_BUDGET, consistent_rng()),
    ];

    while !board.is_done() {
        let bot = &mut bots[board.next_player().index() as usize];
        let mv = bot.select_move(&board).unwrap();
        board.play(mv).unwrap();
    }

    println!("{}", board);
    assert!(board.outcome().is_some());
}
