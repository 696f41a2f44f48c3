use crate::board::Board;
use crate::games::xiangqi::{XiangqiBoard, XiangqiMove};
use crate::util::coord::CoordXq;

/// Two-click move input: first click an own piece, then one of its highlighted destinations.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct XiangqiSelection {
    selected: Option<CoordXq>,
    moves: Vec<XiangqiMove>,
}

/// What a click on the board did to the selection.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Click {
    /// An own piece is now selected, possibly replacing an earlier selection.
    Selected(CoordXq),
    /// The selected piece was clicked again.
    Deselected,
    /// A highlighted destination was clicked, the selection is cleared and the move should be played.
    Move(XiangqiMove),
    /// The click did nothing, any selection is kept.
    Rejected,
}

impl XiangqiSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<CoordXq> {
        self.selected
    }

    /// The destinations to highlight for the selected piece.
    pub fn highlights(&self) -> impl Iterator<Item = CoordXq> + '_ {
        self.moves.iter().map(|mv| mv.to)
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.moves.clear();
    }

    /// Handle a click on `coord` with `board` the current position.
    pub fn click(&mut self, board: &XiangqiBoard, coord: CoordXq) -> Click {
        if board.is_done() {
            return Click::Rejected;
        }

        let own_piece = board
            .grid()
            .piece(coord)
            .map_or(false, |piece| piece.player == board.next_player());

        if self.selected == Some(coord) {
            self.clear();
            return Click::Deselected;
        }

        if own_piece {
            self.selected = Some(coord);
            self.moves = board.grid().legal_moves_from(coord);
            return Click::Selected(coord);
        }

        match self.moves.iter().find(|mv| mv.to == coord) {
            Some(&mv) => {
                self.clear();
                Click::Move(mv)
            }
            None => Click::Rejected,
        }
    }
}
