use std::ops::Neg;

use crate::board::Board;
use crate::util::internal_ext::Control::{Break, Continue};
use crate::util::internal_ext::InternalIteratorExt;

pub trait Heuristic<B: Board> {
    /// The type used to represent the heuristic value of a board.
    type V: Copy + Neg<Output = Self::V>;

    /// Return the heuristic value for the given board from the the next player POV.
    /// `depth` is the current depth, the number of moves played since the board the search was started on.
    /// Done boards are passed here too, the heuristic decides how to score them.
    fn value(&self, board: &B, depth: u32) -> Self::V;

    /// Merge old and new into a new value, and return whether the new value is at least as good the old one.
    /// For standard minimax searches this can simply be implemented as: `(max(old, new), new >= old)`
    fn merge(old: Self::V, new: Self::V) -> (Self::V, bool);
}

#[derive(Debug)]
pub struct MinimaxResult<V, M> {
    /// The value of this board.
    pub value: V,

    /// The best move to play, `None` is the board is done or the search depth was 0.
    pub best_move: Option<M>,
}

/// Evaluate the board using minimax with the given heuristic up to the given depth.
/// Return both the value and the best move. If multiple moves have the same value the first one
/// in `available_moves` order is picked, so the result is deterministic.
/// The returned value is from the POV of `board.next_player`.
pub fn minimax<B: Board, H: Heuristic<B>>(board: &B, heuristic: &H, depth: u32) -> MinimaxResult<H::V, B::Move> {
    let result = negamax_recurse(heuristic, board, 0, depth, None, None, FirstBestMoveSelector);

    if result.best_move.is_none() {
        assert!(board.is_done() || depth == 0, "Implementation error in negamax");
    }

    result
}

/// Evaluate the board using minimax with the given heuristic up to the given depth.
/// Only returns the value without selecting a move.
pub fn minimax_value<B: Board, H: Heuristic<B>>(board: &B, heuristic: &H, depth: u32) -> H::V {
    negamax_recurse(heuristic, board, 0, depth, None, None, NoMoveSelector).value
}

/// This is a trait so negamax_recurse is instantiated twice,
/// once for the top-level search with move selection and once for deeper nodes without any moves.
trait MoveSelector {
    /// Called once per searched move, `is_better` is whether it beats every move seen so far.
    fn accept(&mut self, is_better: bool) -> bool;
}

/// Don't accept any move.
struct NoMoveSelector;

impl MoveSelector for NoMoveSelector {
    fn accept(&mut self, _: bool) -> bool {
        false
    }
}

/// Keep the first move that reaches the best value.
struct FirstBestMoveSelector;

impl MoveSelector for FirstBestMoveSelector {
    fn accept(&mut self, is_better: bool) -> bool {
        is_better
    }
}

/// The core minimax implementation.
/// Alpha-Beta Negamax, implementation based on
/// <https://en.wikipedia.org/wiki/Negamax#Negamax_with_alpha_beta_pruning>
///
/// The bounds are passed down by value, nothing is shared between sibling subtrees.
/// Boards must alternate players on every move, games with forced passes model them as explicit moves.
fn negamax_recurse<B: Board, H: Heuristic<B>>(
    heuristic: &H,
    board: &B,
    length: u32,
    depth_left: u32,
    alpha: Option<H::V>,
    beta: Option<H::V>,
    mut move_selector: impl MoveSelector,
) -> MinimaxResult<H::V, B::Move> {
    if depth_left == 0 || board.is_done() {
        return MinimaxResult {
            value: heuristic.value(board, length),
            best_move: None,
        };
    }

    let mut best_value: Option<H::V> = None;
    let mut best_move: Option<B::Move> = None;

    let mut alpha = alpha;

    // SAFETY: unwraps are safe because the board is not done and the moves come from `available_moves`
    let early = board.available_moves().unwrap().for_each_control(|mv: B::Move| {
        let child = board.clone_and_play(mv).unwrap();

        let child_value = -negamax_recurse(
            heuristic,
            &child,
            length + 1,
            depth_left - 1,
            beta.map(Neg::neg),
            alpha.map(Neg::neg),
            NoMoveSelector,
        )
        .value;

        let is_better = best_value.map_or(true, |best_value| !H::merge(child_value, best_value).1);
        let new_best_value = best_value.map_or(child_value, |best_value| H::merge(best_value, child_value).0);
        let new_alpha = alpha.map_or(new_best_value, |alpha| H::merge(alpha, new_best_value).0);

        best_value = Some(new_best_value);
        if move_selector.accept(is_better) {
            best_move = Some(mv);
        }
        alpha = Some(new_alpha);

        if beta.map_or(false, |beta| H::merge(beta, new_alpha).1) {
            Break(MinimaxResult {
                value: new_best_value,
                best_move,
            })
        } else {
            Continue
        }
    });

    if let Some(early) = early {
        early
    } else {
        MinimaxResult {
            // SAFETY: a board that is not done has at least one available move
            value: best_value.unwrap(),
            best_move,
        }
    }
}
