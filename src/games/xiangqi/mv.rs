use std::fmt::{Display, Formatter};

use crate::games::xiangqi::Piece;
use crate::util::coord::CoordXq;

/// A Xiangqi move. The moving and captured pieces are recorded so a move can be described and
/// checked without the grid it was made on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct XiangqiMove {
    pub from: CoordXq,
    pub to: CoordXq,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

impl Display for XiangqiMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}-{}", self.piece, self.from, self.to)?;
        if let Some(captured) = self.captured {
            write!(f, "x{}", captured)?;
        }
        Ok(())
    }
}
