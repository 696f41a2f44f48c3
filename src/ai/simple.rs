//! The random bot, and the random fallback every game AI runs its search under.
use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::panic::{self, AssertUnwindSafe};

use rand::Rng;

use crate::ai::Bot;
use crate::board::{Board, BoardDone};

/// Bot that chooses moves randomly uniformly among possible moves.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> Debug for RandomBot<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomBot")
    }
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        RandomBot { rng }
    }
}

impl<B: Board, R: Rng> Bot<B> for RandomBot<R> {
    fn select_move(&mut self, board: &B) -> Result<B::Move, BoardDone> {
        board.random_available_move(&mut self.rng)
    }
}

/// Run `search` and return its move. If it panics or comes back without a move while the board is
/// still going, log the failure and return a uniformly random available move instead,
/// so a broken evaluation never stalls a game.
pub fn with_random_fallback<B: Board, R: Rng>(
    board: &B,
    rng: &mut R,
    search: impl FnOnce(&mut R) -> Option<B::Move>,
) -> Result<B::Move, BoardDone> {
    board.check_done()?;

    let result = panic::catch_unwind(AssertUnwindSafe(|| search(&mut *rng)));

    match result {
        Ok(Some(mv)) => Ok(mv),
        Ok(None) => {
            tracing::warn!("search returned no move on a running board, playing a random move");
            board.random_available_move(rng)
        }
        Err(payload) => {
            tracing::warn!(
                "search panicked ({}), playing a random move",
                panic_message(payload.as_ref())
            );
            board.random_available_move(rng)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic payload"
    }
}
