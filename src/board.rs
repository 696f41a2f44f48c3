use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::panic::{RefUnwindSafe, UnwindSafe};

use internal_iterator::InternalIterator;
use rand::Rng;

/// One of the two players. `A` always moves first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    A,
    B,
}

/// The absolute outcome for a game. A game that is still going has no outcome, see [Board::outcome].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Player),
    Draw,
}

/// Error returned when trying to query moves or play on a board that is already done.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[error("the board is done")]
pub struct BoardDone;

/// Error returned by [Board::play].
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum PlayError {
    #[error("the board is done")]
    BoardDone,
    #[error("the move is not available")]
    UnavailableMove,
}

impl From<BoardDone> for PlayError {
    fn from(_: BoardDone) -> Self {
        PlayError::BoardDone
    }
}

/// The main trait of this crate. Represents the state of a game, including whose turn it is.
/// Each game implementation is supposed to provide its own constructors to allow for custom start positions.
pub trait Board: 'static + Debug + Display + Clone + Eq + Hash + Send + Sync + UnwindSafe + RefUnwindSafe
where
    for<'a> Self: BoardMoves<'a, Self>,
{
    /// The type used to represent moves on this board.
    type Move: Debug + Display + Eq + Hash + Copy + Send + Sync + UnwindSafe + RefUnwindSafe;

    /// Return the next player to make a move.
    /// If the board is done this is the player that did not play the last move for consistency.
    fn next_player(&self) -> Player;

    /// Return whether the given move is available.
    fn is_available_move(&self, mv: Self::Move) -> Result<bool, BoardDone>;

    /// Pick a random move from the `available_moves` with a uniform distribution.
    /// Can be overridden for better performance.
    fn random_available_move(&self, rng: &mut impl Rng) -> Result<Self::Move, BoardDone> {
        let count = self.available_moves()?.count();
        let index = rng.gen_range(0..count);
        // SAFETY: unwrap is safe because the index is less than the
        // length of the iterator.
        Ok(self.available_moves()?.nth(index).unwrap())
    }

    /// Play the move `mv`, modifying this board.
    fn play(&mut self, mv: Self::Move) -> Result<(), PlayError>;

    /// Clone this board, play `mv` on it and return the new board.
    fn clone_and_play(&self, mv: Self::Move) -> Result<Self, PlayError> {
        let mut next = self.clone();
        next.play(mv)?;
        Ok(next)
    }

    /// The outcome of this board, is `None` when this game is not done yet.
    fn outcome(&self) -> Option<Outcome>;

    /// Whether this game is done.
    fn is_done(&self) -> bool {
        self.outcome().is_some()
    }

    /// Return `Err(BoardDone)` if this board is done.
    fn check_done(&self) -> Result<(), BoardDone> {
        if self.is_done() {
            Err(BoardDone)
        } else {
            Ok(())
        }
    }

    /// Return an error if `mv` cannot be played on this board.
    fn check_can_play(&self, mv: Self::Move) -> Result<(), PlayError> {
        if self.is_available_move(mv)? {
            Ok(())
        } else {
            Err(PlayError::UnavailableMove)
        }
    }
}

/// A helper trait to get the correct lifetimes for [BoardMoves::available_moves].
/// This is a workaround to get generic associated types, See <https://github.com/rust-lang/rust/issues/44265>.
pub trait BoardMoves<'a, B: Board> {
    type AvailableMovesIterator: InternalIterator<Item = B::Move>;

    /// Return an iterator over available moves, is always nonempty. No guarantees are made about the ordering except
    /// that it stays consistent when the board is not modified.
    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone>;
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}
