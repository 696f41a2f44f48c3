use internal_iterator::InternalIterator;

use board_trio::ai::minimax::{minimax, minimax_value};
use board_trio::ai::Bot;
use board_trio::board::{Board, BoardMoves};
use board_trio::games::othello::ai::{best_move, OthelloBot, OthelloHeuristic, OTHELLO_DEPTH};
use board_trio::games::othello::{OthelloBoard, OthelloGrid, OthelloMove, BLACK, WHITE};
use board_trio::util::coord::Coord8;
use board_trio::util::tiny::consistent_rng;

/// The first root move with the highest exact child value, searched without move selection.
fn reference_best(board: &OthelloBoard, depth: u32) -> Option<OthelloMove> {
    let moves: Vec<OthelloMove> = board.available_moves().unwrap().collect();

    let mut best: Option<(i32, OthelloMove)> = None;
    for mv in moves {
        let child = board.clone_and_play(mv).unwrap();
        let value = -minimax_value(&child, &OthelloHeuristic, depth);
        if best.map_or(true, |(best_value, _)| value > best_value) {
            best = Some((value, mv));
        }
    }
    best.map(|(_, mv)| mv)
}

fn midgame() -> OthelloBoard {
    let mut board = OthelloBoard::default();
    for (row, col) in [(2, 3), (2, 2), (3, 2), (2, 4), (1, 5)] {
        board.play(OthelloMove::Place(Coord8::from_rc(row, col))).unwrap();
    }
    board
}

#[test]
fn alpha_beta_matches_plain_search() {
    for board in [OthelloBoard::default(), midgame()] {
        let expected = reference_best(&board, OTHELLO_DEPTH);
        let result = minimax(&board, &OthelloHeuristic, OTHELLO_DEPTH + 1);
        assert_eq!(result.best_move, expected, "on board\n{}", board);

        let grid = *board.grid();
        let expected_coord = match expected {
            Some(OthelloMove::Place(coord)) => Some(coord),
            _ => None,
        };
        assert_eq!(best_move(&grid, board.next_player()), expected_coord);
    }
}

#[test]
fn deterministic() {
    let grid = *midgame().grid();
    let first = best_move(&grid, WHITE);
    assert!(first.is_some());
    for _ in 0..3 {
        assert_eq!(best_move(&grid, WHITE), first);
    }
}

#[test]
fn no_placement_means_no_move() {
    let grid = OthelloGrid::from_rows(&[
        "xo......", "........", "........", "........", "........", "........", "........", "........",
    ])
    .unwrap();
    assert_eq!(best_move(&grid, WHITE), None);
    assert_eq!(best_move(&grid, BLACK), Some(Coord8::from_rc(0, 2)));

    let board = OthelloBoard::from_grid(grid, WHITE);
    let mut bot = OthelloBot::new(OTHELLO_DEPTH, consistent_rng());
    assert_eq!(bot.select_move(&board), Ok(OthelloMove::Pass));
}

#[test]
fn bot_plays_full_game() {
    let mut board = OthelloBoard::default();
    let mut bots = [OthelloBot::new(1, consistent_rng()), OthelloBot::new(1, consistent_rng())];

    while !board.is_done() {
        let bot = &mut bots[board.next_player().index() as usize];
        let mv = bot.select_move(&board).unwrap();
        assert!(board.is_available_move(mv).unwrap());
        board.play(mv).unwrap();
    }

    assert!(board.grid().is_game_over());
}
