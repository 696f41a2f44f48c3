use board_trio::ai::Bot;
use board_trio::board::{Board, Outcome};
use board_trio::games::xiangqi::ai::{best_move, search, XiangqiBot};
use board_trio::games::xiangqi::{Piece, PieceKind, XiangqiBoard, XiangqiGrid, BLACK, RED};
use board_trio::util::coord::CoordXq;
use board_trio::util::tiny::consistent_rng;

use crate::util::test_sampler_uniform;

fn rc(row: u8, col: u8) -> CoordXq {
    CoordXq::from_rc(row, col)
}

#[test]
fn plays_mate_in_one() {
    let grid = XiangqiGrid::from_fen("4k4/8R/9/9/9/R8/9/9/9/4K4").unwrap();
    let mut rng = consistent_rng();

    let mv = search(&grid, RED, &mut rng).unwrap();
    assert_eq!((mv.from, mv.to), (rc(5, 0), rc(0, 0)));
    assert_eq!(grid.make_move(mv).game_result(BLACK), Some(Outcome::WonBy(RED)));

    assert_eq!(best_move(&grid, RED, &mut rng), Some(mv));
}

#[test]
fn parries_mate_threat() {
    // red threatens the chariot to (0, 0), the general itself cannot escape it
    let grid = XiangqiGrid::from_fen("4k4/8R/9/9/9/R8/9/9/8r/4K4").unwrap();
    let mut rng = consistent_rng();

    let mv = search(&grid, BLACK, &mut rng).unwrap();
    assert_eq!(mv.piece, Piece::new(PieceKind::Chariot, BLACK));

    let next = grid.make_move(mv);
    for threat in next.legal_moves(RED) {
        assert_ne!(
            next.make_move(threat).game_result(BLACK),
            Some(Outcome::WonBy(RED)),
            "{} still allows mate with {}",
            mv,
            threat
        );
    }
}

#[test]
fn unparried_threat_is_executed() {
    let grid = XiangqiGrid::from_fen("4k4/8R/9/9/9/R8/9/9/9/4K4").unwrap();
    let mut rng = consistent_rng();

    // stepping the general aside does not stop the chariot
    let shuffle = grid.move_between(CoordXq::from_rc(0, 4), CoordXq::from_rc(0, 3)).unwrap();
    let grid = grid.make_move(shuffle);
    let mv = search(&grid, RED, &mut rng).unwrap();
    assert_eq!(grid.make_move(mv).game_result(BLACK), Some(Outcome::WonBy(RED)));
}

#[test]
fn captures_are_preferred_and_ties_random() {
    // both cannons can take a horse from the opening position
    let grid = XiangqiGrid::initial();
    let expected = vec![
        grid.move_between(rc(7, 1), rc(0, 1)).unwrap(),
        grid.move_between(rc(7, 7), rc(0, 7)).unwrap(),
    ];

    let mut rng = consistent_rng();
    test_sampler_uniform(&expected, false, || search(&grid, RED, &mut rng));
}

#[test]
fn no_legal_move_means_no_move() {
    let grid = XiangqiGrid::from_fen("R3k4/8R/9/9/9/9/9/9/9/3K5").unwrap();
    let mut rng = consistent_rng();
    assert_eq!(search(&grid, BLACK, &mut rng), None);
    assert_eq!(best_move(&grid, BLACK, &mut rng), None);
}

#[test]
fn bot_moves_are_legal() {
    let mut board = XiangqiBoard::default();
    let mut bots = [XiangqiBot::new(consistent_rng()), XiangqiBot::new(consistent_rng())];

    for _ in 0..40 {
        if board.is_done() {
            break;
        }
        let bot = &mut bots[board.next_player().index() as usize];
        let mv = bot.select_move(&board).unwrap();
        assert!(board.is_available_move(mv).unwrap(), "bot played {}", mv);
        board.play(mv).unwrap();
    }
}
