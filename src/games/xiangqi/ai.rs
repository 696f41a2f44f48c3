//! Tactical one-move lookahead (mate in one, parrying mate threats) on top of a static move score.
use std::fmt::{Debug, Formatter};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::simple::with_random_fallback;
use crate::ai::Bot;
use crate::board::{Board, BoardDone, Outcome, Player};
use crate::games::xiangqi::{PieceKind, XiangqiBoard, XiangqiGrid, XiangqiMove, RED};

const GENERAL_TABLE: [[i32; 9]; 3] = [
    [0, 0, 0, 8, 8, 8, 0, 0, 0],
    [0, 0, 0, 8, 8, 8, 0, 0, 0],
    [0, 0, 0, 8, 8, 8, 0, 0, 0],
];

const SOLDIER_TABLE: [[i32; 9]; 4] = [
    [0, 3, 6, 9, 12, 9, 6, 3, 0],
    [19, 24, 34, 42, 44, 42, 34, 24, 19],
    [19, 24, 32, 37, 37, 37, 32, 24, 19],
    [19, 23, 27, 29, 30, 29, 27, 23, 19],
];

const CENTER_BONUS: i32 = 5;
const ADVANCE_BONUS: i32 = 3;

/// The static score of `mv` played by `player`: material captured plus positional bonuses.
pub fn score_move(mv: &XiangqiMove, player: Player) -> i32 {
    let mut score = mv.captured.map_or(0, |captured| captured.kind.value());

    // rows counted from the player's own back rank
    let rank = (if player == RED { 9 - mv.to.row() } else { mv.to.row() }) as usize;
    let col = mv.to.col() as usize;

    score += match mv.piece.kind {
        PieceKind::General => GENERAL_TABLE.get(rank).map_or(0, |r| r[col]),
        PieceKind::Soldier => SOLDIER_TABLE.get(rank).map_or(0, |r| r[col]),
        _ => 0,
    };

    if (3..=5).contains(&mv.to.col()) {
        score += CENTER_BONUS;
    }

    let advancing = if player == RED {
        mv.to.row() < mv.from.row()
    } else {
        mv.to.row() > mv.from.row()
    };
    let advances = matches!(
        mv.piece.kind,
        PieceKind::Soldier | PieceKind::Horse | PieceKind::Chariot
    );
    if advances && advancing {
        score += ADVANCE_BONUS;
    }

    score
}

/// Whether the opponent can still play `threat` on `grid` and checkmate `player` with it.
/// The threatening piece has to be on its square still and the destination has to stay legal.
fn threat_remains(grid: &XiangqiGrid, threat: &XiangqiMove, player: Player) -> bool {
    if grid.piece(threat.from) != Some(threat.piece) {
        return false;
    }

    grid.legal_moves_from(threat.from)
        .into_iter()
        .filter(|mv| mv.to == threat.to)
        .any(|mv| grid.make_move(mv).game_result(player) == Some(Outcome::WonBy(player.other())))
}

/// Pick the move the AI playing `ai` makes, without any panic protection.
/// Returns `None` only when `ai` has no legal move.
pub fn search(grid: &XiangqiGrid, ai: Player, rng: &mut impl Rng) -> Option<XiangqiMove> {
    let moves = grid.legal_moves(ai);
    if moves.is_empty() {
        return None;
    }
    let opponent = ai.other();

    if let Some(&mate) = moves
        .iter()
        .find(|&&mv| grid.make_move(mv).game_result(opponent) == Some(Outcome::WonBy(ai)))
    {
        tracing::debug!("xiangqi found mate in one: {}", mate);
        return Some(mate);
    }

    let threats: Vec<XiangqiMove> = grid
        .legal_moves(opponent)
        .into_iter()
        .filter(|&mv| grid.make_move(mv).game_result(ai) == Some(Outcome::WonBy(opponent)))
        .collect();

    if !threats.is_empty() {
        let parry = moves.iter().find(|&&mv| {
            let next = grid.make_move(mv);
            !threats.iter().any(|threat| threat_remains(&next, threat, ai))
        });
        match parry {
            Some(&parry) => {
                tracing::debug!("xiangqi parries {} mate threats with {}", threats.len(), parry);
                return Some(parry);
            }
            None => tracing::debug!("xiangqi cannot parry {} mate threats", threats.len()),
        }
    }

    let mut best_score = i32::MIN;
    let mut best_moves = vec![];
    for &mv in &moves {
        let score = score_move(&mv, ai);
        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(mv);
        } else if score == best_score {
            best_moves.push(mv);
        }
    }

    let picked = best_moves.choose(rng).copied();
    tracing::debug!("xiangqi picked {:?} with score {}", picked, best_score);
    picked
}

/// The move the AI playing `ai` would choose on `grid`, `None` if the game is already over.
/// A failing search degrades to a random legal move.
pub fn best_move(grid: &XiangqiGrid, ai: Player, rng: &mut impl Rng) -> Option<XiangqiMove> {
    let board = XiangqiBoard::from_grid(*grid, ai);
    XiangqiBot::new(rng).select_move(&board).ok()
}

pub struct XiangqiBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for XiangqiBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "XiangqiBot")
    }
}

impl<R: Rng> XiangqiBot<R> {
    pub fn new(rng: R) -> Self {
        XiangqiBot { rng }
    }
}

impl<R: Rng> Bot<XiangqiBoard> for XiangqiBot<R> {
    fn select_move(&mut self, board: &XiangqiBoard) -> Result<XiangqiMove, BoardDone> {
        with_random_fallback(board, &mut self.rng, |rng| {
            search(board.grid(), board.next_player(), rng)
        })
    }
}
