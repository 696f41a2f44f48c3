use board_trio::board::{Board, Outcome};
use board_trio::games::xiangqi::{Piece, PieceKind, XiangqiBoard, XiangqiGrid, XiangqiMove, BLACK, RED};
use board_trio::util::coord::CoordXq;
use board_trio::util::tiny::consistent_rng;

use crate::board::{board_test_main, board_test_main_without_uniform};

/// Every relocation of every piece, legal or not.
fn candidates(board: &XiangqiBoard) -> Vec<XiangqiMove> {
    let grid = board.grid();
    grid.pieces()
        .flat_map(|(from, _)| {
            CoordXq::all()
                .filter(move |&to| to != from)
                .filter_map(move |to| grid.move_between(from, to))
        })
        .collect()
}

fn rc(row: u8, col: u8) -> CoordXq {
    CoordXq::from_rc(row, col)
}

fn sorted(mut coords: Vec<CoordXq>) -> Vec<CoordXq> {
    coords.sort();
    coords
}

#[test]
fn initial() {
    let board = XiangqiBoard::default();
    assert_eq!(board.grid().legal_moves(RED).len(), 44);
    assert_eq!(board.grid().legal_moves(BLACK).len(), 44);
    board_test_main_without_uniform(&board, &candidates(&board));
}

#[test]
fn small_position() {
    let board = XiangqiBoard::from_fen("3k5/9/9/9/9/9/4P4/9/9/4K4 w").unwrap();
    board_test_main(&board, &candidates(&board));
}

#[test]
fn soldier_crosses_river() {
    let grid = XiangqiGrid::initial();
    assert_eq!(grid.pseudo_moves(rc(6, 4)), vec![rc(5, 4)]);

    let soldier = Piece::new(PieceKind::Soldier, RED);
    let crossed = grid.with_piece(rc(4, 4), soldier);
    assert_eq!(
        sorted(crossed.pseudo_moves(rc(4, 4))),
        vec![rc(3, 4), rc(4, 3), rc(4, 5)]
    );

    // black soldiers move down the board
    assert_eq!(grid.pseudo_moves(rc(3, 0)), vec![rc(4, 0)]);
}

#[test]
fn blocked_horse_and_elephant() {
    let grid = XiangqiGrid::from_fen("4k4/9/9/9/9/9/9/9/4P4/2B1K4").unwrap();
    // elephant at (9, 2) goes to (7, 0) and (7, 4)
    assert_eq!(sorted(grid.pseudo_moves(rc(9, 2))), vec![rc(7, 0), rc(7, 4)]);

    let grid = XiangqiGrid::from_fen("4k4/9/9/9/9/9/9/9/3P5/2B1K4").unwrap();
    assert_eq!(grid.pseudo_moves(rc(9, 2)), vec![rc(7, 0)]);

    // an elephant on the river bank cannot cross
    let grid = XiangqiGrid::from_fen("4k4/9/9/9/9/2B6/9/9/9/4K4").unwrap();
    assert_eq!(sorted(grid.pseudo_moves(rc(5, 2))), vec![rc(7, 0), rc(7, 4)]);

    // the horse leg at (8, 1) blocks both upward leaps
    let free = XiangqiGrid::from_fen("4k4/9/9/9/9/9/9/9/9/1N2K4").unwrap();
    assert_eq!(sorted(free.pseudo_moves(rc(9, 1))), vec![rc(7, 0), rc(7, 2), rc(8, 3)]);
    let blocked = XiangqiGrid::from_fen("4k4/9/9/9/9/9/9/9/1P7/1N2K4").unwrap();
    assert_eq!(blocked.pseudo_moves(rc(9, 1)), vec![rc(8, 3)]);
}

#[test]
fn cannon_needs_a_screen() {
    let grid = XiangqiGrid::from_fen("4k4/9/9/9/9/9/9/9/9/C1p1r1K2").unwrap();
    let moves = grid.pseudo_moves(rc(9, 0));

    // slides up the file, stops before the screen, captures the piece behind it
    assert!(moves.contains(&rc(0, 0)));
    assert!(moves.contains(&rc(9, 1)));
    assert!(!moves.contains(&rc(9, 2)));
    assert!(!moves.contains(&rc(9, 3)));
    assert!(moves.contains(&rc(9, 4)));
    assert!(!moves.contains(&rc(9, 6)));
    assert_eq!(moves.len(), 11);
}

#[test]
fn pinned_chariot() {
    let grid = XiangqiGrid::from_fen("4k4/9/9/4r4/9/9/4R4/9/9/3K5").unwrap();
    assert_eq!(grid.pseudo_moves(rc(3, 4)).len(), 13);

    let legal = grid.legal_moves_from(rc(3, 4));
    assert_eq!(legal.len(), 5);
    assert!(legal.iter().all(|mv| mv.to.col() == 4));
    assert!(legal.iter().any(|mv| mv.captured == Some(Piece::new(PieceKind::Chariot, RED))));
}

#[test]
fn check_detection() {
    let grid = XiangqiGrid::from_fen("4k4/9/9/9/9/9/9/9/9/3KR4").unwrap();
    assert!(grid.is_in_check(BLACK));
    assert!(!grid.is_in_check(RED));
    assert!(!grid.is_checkmate(BLACK));

    let attackers: Vec<CoordXq> = grid
        .pieces()
        .filter(|&(_, piece)| piece.player == RED)
        .filter(|&(from, _)| grid.pseudo_moves(from).contains(&rc(0, 4)))
        .map(|(from, _)| from)
        .collect();
    assert_eq!(attackers, vec![rc(9, 4)]);

    // a grid without a general is never in check
    let headless = XiangqiGrid::from_fen("9/9/9/9/9/9/9/9/9/3KR4").unwrap();
    assert!(!headless.is_in_check(BLACK));
}

#[test]
fn checkmate() {
    let board = XiangqiBoard::from_fen("R3k4/8R/9/9/9/9/9/9/9/3K5 b").unwrap();
    assert!(board.grid().is_in_check(BLACK));
    assert!(board.grid().is_checkmate(BLACK));
    assert!(board.grid().legal_moves(BLACK).is_empty());
    assert_eq!(board.outcome(), Some(Outcome::WonBy(RED)));
    board_test_main(&board, &candidates(&board));
}

#[test]
fn stalemate_is_draw() {
    let board = XiangqiBoard::from_fen("4k4/8R/9/9/9/3R1R3/9/9/9/4K4 b").unwrap();
    assert!(!board.grid().is_in_check(BLACK));
    assert!(!board.grid().is_checkmate(BLACK));
    assert_eq!(board.grid().game_result(BLACK), Some(Outcome::Draw));
    assert_eq!(board.grid().game_result(RED), None);
    assert_eq!(board.outcome(), Some(Outcome::Draw));
}

#[test]
fn random_games_keep_generals_safe() {
    let mut rng = consistent_rng();

    for _ in 0..4 {
        let mut board = XiangqiBoard::default();
        for _ in 0..60 {
            if board.is_done() {
                break;
            }

            let player = board.next_player();
            let before = board.grid().pieces().count();
            let mv = board.random_available_move(&mut rng).unwrap();
            let grid_before = *board.grid();
            board.play(mv).unwrap();

            // the input grid of make_move is left alone
            assert_eq!(grid_before.piece(mv.from), Some(mv.piece));

            let after = board.grid().pieces().count();
            let expected = if mv.captured.is_some() { before - 1 } else { before };
            assert_eq!(after, expected);
            assert!(!board.grid().is_in_check(player), "{} left own general in check", mv);
        }
    }
}
