use internal_iterator::{Internal, IteratorExt};

use crate::board::{Board, BoardDone, BoardMoves, Outcome, PlayError, Player};
use crate::games::xiangqi::{XiangqiGrid, XiangqiMove, RED};
use crate::session::ForcedPass;

/// A Xiangqi game in progress. The game ends when the side to move has no legal move:
/// checkmate if its general is attacked, a draw otherwise.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct XiangqiBoard {
    grid: XiangqiGrid,
    next_player: Player,
    outcome: Option<Outcome>,
}

impl Default for XiangqiBoard {
    fn default() -> Self {
        XiangqiBoard::from_grid(XiangqiGrid::initial(), RED)
    }
}

impl XiangqiBoard {
    pub fn from_grid(grid: XiangqiGrid, next_player: Player) -> Self {
        XiangqiBoard {
            grid,
            next_player,
            outcome: grid.game_result(next_player),
        }
    }

    pub fn grid(&self) -> &XiangqiGrid {
        &self.grid
    }

    /// Whether the side to move has its general attacked.
    pub fn is_in_check(&self) -> bool {
        self.grid.is_in_check(self.next_player)
    }
}

impl Board for XiangqiBoard {
    type Move = XiangqiMove;

    fn next_player(&self) -> Player {
        self.next_player
    }

    fn is_available_move(&self, mv: Self::Move) -> Result<bool, BoardDone> {
        self.check_done()?;

        let own_piece = self.grid.piece(mv.from).map_or(false, |p| p.player == self.next_player);
        Ok(own_piece && self.grid.legal_moves_from(mv.from).contains(&mv))
    }

    fn play(&mut self, mv: Self::Move) -> Result<(), PlayError> {
        self.check_can_play(mv)?;

        self.grid = self.grid.make_move(mv);
        self.next_player = self.next_player.other();
        self.outcome = self.grid.game_result(self.next_player);

        Ok(())
    }

    fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }
}

impl<'a> BoardMoves<'a, XiangqiBoard> for XiangqiBoard {
    type AvailableMovesIterator = Internal<std::vec::IntoIter<XiangqiMove>>;

    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone> {
        self.check_done()?;
        Ok(self.grid.legal_moves(self.next_player).into_iter().into_internal())
    }
}

impl ForcedPass for XiangqiBoard {}
