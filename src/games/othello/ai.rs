//! Fixed depth alpha-beta search with a positional evaluation.
use std::cmp::max;
use std::fmt::{Debug, Formatter};

use rand::Rng;

use crate::ai::minimax::{minimax, Heuristic};
use crate::ai::simple::with_random_fallback;
use crate::ai::Bot;
use crate::board::{Board, BoardDone, Player};
use crate::games::othello::{OthelloBoard, OthelloGrid, OthelloMove};
use crate::util::bitboard::BitBoard8;
use crate::util::coord::Coord8;

/// The number of plies searched below each candidate placement.
pub const OTHELLO_DEPTH: u32 = 4;

const CORNER_WEIGHT: i32 = 25;
const EDGE_WEIGHT: i32 = 5;
const DANGER_WEIGHT: i32 = 10;
const MOBILITY_WEIGHT: i32 = 2;

/// Disc differential plus corner, edge, corner-neighbour and mobility terms.
#[derive(Debug, Copy, Clone, Default)]
pub struct OthelloHeuristic;

impl OthelloHeuristic {
    /// Evaluate `grid` from the POV of `player`. Antisymmetric in the player.
    pub fn evaluate(grid: &OthelloGrid, player: Player) -> i32 {
        let own = grid.tiles(player);
        let opponent = grid.tiles(player.other());

        let diff = |mask: BitBoard8| (own & mask).count() as i32 - (opponent & mask).count() as i32;

        // cells next to a corner only hurt while that corner is still up for grabs
        let danger = (BitBoard8::CORNERS & grid.free_tiles()).adjacent() & !BitBoard8::CORNERS;
        let edges = BitBoard8::EDGES & !BitBoard8::CORNERS;

        let mobility = grid.mobility(player) as i32 - grid.mobility(player.other()) as i32;

        diff(BitBoard8::FULL) + CORNER_WEIGHT * diff(BitBoard8::CORNERS) + EDGE_WEIGHT * diff(edges)
            - DANGER_WEIGHT * diff(danger)
            + MOBILITY_WEIGHT * mobility
    }
}

impl Heuristic<OthelloBoard> for OthelloHeuristic {
    type V = i32;

    fn value(&self, board: &OthelloBoard, _: u32) -> Self::V {
        OthelloHeuristic::evaluate(board.grid(), board.next_player())
    }

    fn merge(old: Self::V, new: Self::V) -> (Self::V, bool) {
        (max(old, new), new >= old)
    }
}

pub struct OthelloBot<R: Rng> {
    depth: u32,
    rng: R,
}

impl<R: Rng> Debug for OthelloBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "OthelloBot {{ depth: {} }}", self.depth)
    }
}

impl<R: Rng> OthelloBot<R> {
    /// `rng` is only used when the search fails and a random move is played instead.
    pub fn new(depth: u32, rng: R) -> Self {
        OthelloBot { depth, rng }
    }
}

impl<R: Rng> Bot<OthelloBoard> for OthelloBot<R> {
    fn select_move(&mut self, board: &OthelloBoard) -> Result<OthelloMove, BoardDone> {
        board.check_done()?;
        if board.must_pass() {
            return Ok(OthelloMove::Pass);
        }

        let depth = self.depth;
        with_random_fallback(board, &mut self.rng, |_| {
            let result = minimax(board, &OthelloHeuristic, depth + 1);
            tracing::debug!(
                "othello search picked {:?} with value {}",
                result.best_move,
                result.value
            );
            result.best_move
        })
    }
}

/// The placement the AI playing `ai` would choose on `grid`, or `None` when it has no valid placement.
pub fn best_move(grid: &OthelloGrid, ai: Player) -> Option<Coord8> {
    let board = OthelloBoard::from_grid(*grid, ai);
    if board.is_done() || board.must_pass() {
        return None;
    }

    let mut bot = OthelloBot::new(OTHELLO_DEPTH, rand::thread_rng());
    match bot.select_move(&board) {
        Ok(OthelloMove::Place(coord)) => Some(coord),
        Ok(OthelloMove::Pass) | Err(BoardDone) => None,
    }
}
