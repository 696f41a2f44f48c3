use internal_iterator::{Internal, IteratorExt};

use crate::board::{Board, BoardDone, BoardMoves, Outcome, PlayError, Player};
use crate::games::othello::{OthelloGrid, OthelloMove, BLACK};
use crate::session::ForcedPass;

/// An Othello game in progress: the grid, whose turn it is and the outcome once both players are stuck.
///
/// A player without a valid placement in a game that is not over yet only has [OthelloMove::Pass] available,
/// so turns strictly alternate at this level.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct OthelloBoard {
    grid: OthelloGrid,
    next_player: Player,
    outcome: Option<Outcome>,
}

impl Default for OthelloBoard {
    fn default() -> Self {
        OthelloBoard::from_grid(OthelloGrid::initial(), BLACK)
    }
}

impl OthelloBoard {
    pub fn from_grid(grid: OthelloGrid, next_player: Player) -> Self {
        let mut board = OthelloBoard {
            grid,
            next_player,
            outcome: None,
        };
        board.update_outcome();
        board
    }

    pub fn grid(&self) -> &OthelloGrid {
        &self.grid
    }

    /// Whether the next player has no placement and has to skip their turn.
    pub fn must_pass(&self) -> bool {
        !self.is_done() && !self.grid.has_valid_move(self.next_player)
    }

    fn update_outcome(&mut self) {
        self.outcome = if self.grid.is_game_over() {
            Some(self.grid.winner())
        } else {
            None
        };
    }
}

impl Board for OthelloBoard {
    type Move = OthelloMove;

    fn next_player(&self) -> Player {
        self.next_player
    }

    fn is_available_move(&self, mv: Self::Move) -> Result<bool, BoardDone> {
        self.check_done()?;

        let available = match mv {
            OthelloMove::Pass => self.must_pass(),
            OthelloMove::Place(coord) => self.grid.is_valid_move(coord, self.next_player),
        };
        Ok(available)
    }

    fn play(&mut self, mv: Self::Move) -> Result<(), PlayError> {
        self.check_can_play(mv)?;

        if let OthelloMove::Place(coord) = mv {
            self.grid = self.grid.make_move(coord, self.next_player);
            self.update_outcome();
        }
        self.next_player = self.next_player.other();

        Ok(())
    }

    fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

impl<'a> BoardMoves<'a, OthelloBoard> for OthelloBoard {
    type AvailableMovesIterator = Internal<std::vec::IntoIter<OthelloMove>>;

    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone> {
        self.check_done()?;

        let mut moves: Vec<OthelloMove> = self
            .grid
            .valid_moves(self.next_player)
            .into_iter()
            .map(OthelloMove::Place)
            .collect();
        if moves.is_empty() {
            moves.push(OthelloMove::Pass);
        }

        Ok(moves.into_iter().into_internal())
    }
}

impl ForcedPass for OthelloBoard {
    fn forced_pass(&self) -> Option<OthelloMove> {
        self.must_pass().then_some(OthelloMove::Pass)
    }
}
