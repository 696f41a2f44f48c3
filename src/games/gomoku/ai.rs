//! One ply pattern scoring: block, win, otherwise the best scoring cell near the existing stones.
use std::fmt::{Debug, Formatter};
use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::simple::with_random_fallback;
use crate::ai::Bot;
use crate::board::{Board, BoardDone, Player};
use crate::games::gomoku::{GomokuBoard, GomokuGrid};
use crate::util::coord::{Coord15, AXES, COMPASS};

/// How long the scoring pass may take before the AI settles for a random candidate.
pub const GOMOKU_TIME_BUDGET: Duration = Duration::from_secs(2);

const OWN_WIN_BONUS: i32 = 10_000;
const BLOCK_BONUS: i32 = 9_000;
const OWN_FIVE: i32 = 5_000;
const OPPONENT_FIVE: i32 = 4_000;
const OWN_RUN_WEIGHT: i32 = 8;
const OPPONENT_RUN_WEIGHT: i32 = 7;
const CENTER_RANGE: i32 = 14;

/// The cells worth considering: empty cells touching a stone, in row-major order.
/// An empty grid only has the center, a grid without such cells falls back to every empty cell.
pub fn candidates(grid: &GomokuGrid) -> Vec<Coord15> {
    if !grid.has_stones() {
        return vec![GomokuGrid::CENTER];
    }

    let near: Vec<Coord15> = Coord15::all()
        .filter(|&coord| grid.is_valid_move(coord))
        .filter(|&coord| {
            COMPASS
                .iter()
                .filter_map(|&(dr, dc)| coord.offset(dr, dc))
                .any(|neighbor| grid.tile(neighbor).is_some())
        })
        .collect();

    if !near.is_empty() {
        return near;
    }
    Coord15::all().filter(|&coord| grid.is_valid_move(coord)).collect()
}

/// The static score of placing an `ai` stone on `coord`.
pub fn score_move(grid: &GomokuGrid, coord: Coord15, ai: Player) -> i32 {
    let opponent = ai.other();

    let mut score = (CENTER_RANGE - coord.manhattan_distance(GomokuGrid::CENTER) as i32).max(0);

    if grid.is_winning_move(coord, ai) {
        score += OWN_WIN_BONUS;
    }
    if grid.is_winning_move(coord, opponent) {
        score += BLOCK_BONUS;
    }

    for &(dr, dc) in &AXES {
        let own = capped_run(grid, coord, dr, dc, ai) + 1;
        score += if own >= 5 { OWN_FIVE } else { OWN_RUN_WEIGHT * own * own };

        let theirs = capped_run(grid, coord, dr, dc, opponent) + 1;
        score += if theirs >= 5 {
            OPPONENT_FIVE
        } else {
            OPPONENT_RUN_WEIGHT * theirs * theirs
        };
    }

    score
}

/// Stones of `player` on both sides of `coord` along one axis, at most 4 in total.
fn capped_run(grid: &GomokuGrid, coord: Coord15, dr: i32, dc: i32, player: Player) -> i32 {
    let total = grid.count_direction(coord, dr, dc, player) + grid.count_direction(coord, -dr, -dc, player);
    total.min(4) as i32
}

/// Pick the cell the AI playing `ai` places on, without any panic protection.
/// Returns `None` only when there is no empty cell left.
pub fn search(grid: &GomokuGrid, ai: Player, budget: Duration, rng: &mut impl Rng) -> Option<Coord15> {
    let start = Instant::now();
    let candidates = candidates(grid);
    if candidates.is_empty() {
        return None;
    }

    let opponent = ai.other();
    if let Some(&block) = candidates.iter().find(|&&c| grid.is_winning_move(c, opponent)) {
        tracing::debug!("gomoku blocks opponent five at {}", block);
        return Some(block);
    }
    if let Some(&win) = candidates.iter().find(|&&c| grid.is_winning_move(c, ai)) {
        tracing::debug!("gomoku completes five at {}", win);
        return Some(win);
    }

    let mut best_score = i32::MIN;
    let mut best_moves = vec![];

    for &coord in &candidates {
        if start.elapsed() >= budget {
            tracing::warn!("gomoku scoring ran out of its {:?} budget, picking a random candidate", budget);
            return candidates.choose(rng).copied();
        }

        let score = score_move(grid, coord, ai);
        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(coord);
        } else if score == best_score {
            best_moves.push(coord);
        }
    }

    let picked = best_moves.choose(rng).copied();
    tracing::debug!(
        "gomoku picked {:?} with score {} among {} tied candidates",
        picked,
        best_score,
        best_moves.len()
    );
    picked
}

/// The cell the AI playing `ai` would choose on `grid`, `None` if the game is already over.
/// A failing search degrades to a random empty cell.
pub fn best_move(grid: &GomokuGrid, ai: Player, budget: Duration, rng: &mut impl Rng) -> Option<Coord15> {
    let board = GomokuBoard::from_grid(*grid, ai);
    GomokuBot::new(budget, rng).select_move(&board).ok()
}

pub struct GomokuBot<R: Rng> {
    budget: Duration,
    rng: R,
}

impl<R: Rng> Debug for GomokuBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "GomokuBot {{ budget: {:?} }}", self.budget)
    }
}

impl<R: Rng> GomokuBot<R> {
    pub fn new(budget: Duration, rng: R) -> Self {
        GomokuBot { budget, rng }
    }
}

impl<R: Rng> Bot<GomokuBoard> for GomokuBot<R> {
    fn select_move(&mut self, board: &GomokuBoard) -> Result<Coord15, BoardDone> {
        let budget = self.budget;
        with_random_fallback(board, &mut self.rng, |rng| {
            search(board.grid(), board.next_player(), budget, rng)
        })
    }
}
