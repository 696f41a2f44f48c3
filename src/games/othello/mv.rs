use std::fmt::{Display, Formatter};

use crate::util::coord::Coord8;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OthelloMove {
    Place(Coord8),
    /// Skip a turn, only available when the player has no valid placement.
    Pass,
}

impl Display for OthelloMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OthelloMove::Place(coord) => write!(f, "{}", coord),
            OthelloMove::Pass => write!(f, "pass"),
        }
    }
}
