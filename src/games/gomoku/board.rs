use std::ops::ControlFlow;

use internal_iterator::InternalIterator;

use crate::board::{Board, BoardDone, BoardMoves, Outcome, PlayError, Player};
use crate::games::gomoku::{GomokuGrid, BLACK};
use crate::session::ForcedPass;
use crate::util::coord::Coord15;

/// A Gomoku game in progress. Moves are the cells to place the next stone on.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct GomokuBoard {
    grid: GomokuGrid,
    next_player: Player,
    last_move: Option<Coord15>,
    outcome: Option<Outcome>,
}

impl Default for GomokuBoard {
    fn default() -> Self {
        GomokuBoard::from_grid(GomokuGrid::empty(), BLACK)
    }
}

impl GomokuBoard {
    pub fn from_grid(grid: GomokuGrid, next_player: Player) -> Self {
        GomokuBoard {
            grid,
            next_player,
            last_move: None,
            outcome: grid.outcome(),
        }
    }

    pub fn grid(&self) -> &GomokuGrid {
        &self.grid
    }

    pub fn last_move(&self) -> Option<Coord15> {
        self.last_move
    }
}

impl Board for GomokuBoard {
    type Move = Coord15;

    fn next_player(&self) -> Player {
        self.next_player
    }

    fn is_available_move(&self, mv: Self::Move) -> Result<bool, BoardDone> {
        self.check_done()?;
        Ok(self.grid.is_valid_move(mv))
    }

    fn play(&mut self, mv: Self::Move) -> Result<(), PlayError> {
        self.check_can_play(mv)?;

        let player = self.next_player;
        self.grid = self.grid.make_move(mv, player);
        self.outcome = self.grid.winner(mv, player);
        self.last_move = Some(mv);
        self.next_player = player.other();

        Ok(())
    }

    fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

impl<'a> BoardMoves<'a, GomokuBoard> for GomokuBoard {
    type AvailableMovesIterator = EmptyCellsIterator<'a>;

    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone> {
        self.check_done()?;
        Ok(EmptyCellsIterator { grid: &self.grid })
    }
}

impl ForcedPass for GomokuBoard {}

/// The empty cells of a grid in row-major order.
#[derive(Debug)]
pub struct EmptyCellsIterator<'a> {
    grid: &'a GomokuGrid,
}

impl<'a> InternalIterator for EmptyCellsIterator<'a> {
    type Item = Coord15;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        for coord in Coord15::all() {
            if self.grid.is_valid_move(coord) {
                if let ControlFlow::Break(r) = f(coord) {
                    return ControlFlow::Break(r);
                }
            }
        }
        ControlFlow::Continue(())
    }
}
