use crate::board::{Outcome, Player};
use crate::games::xiangqi::{Piece, PieceKind, XiangqiMove, BLACK, RED};
use crate::util::coord::CoordXq;

/// The pieces on a Xiangqi board, without any turn information.
///
/// Row 0 is black's back rank at the top, row 9 is red's back rank at the bottom.
/// The river runs between rows 4 and 5.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct XiangqiGrid {
    tiles: [Option<Piece>; CoordXq::AREA],
}

const ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
const DIAGONAL: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Horse leaps as `(d_row, d_col)` with the leg cell that blocks them.
const HORSE_LEAPS: [((i32, i32), (i32, i32)); 8] = [
    ((2, 1), (1, 0)),
    ((2, -1), (1, 0)),
    ((-2, 1), (-1, 0)),
    ((-2, -1), (-1, 0)),
    ((1, 2), (0, 1)),
    ((-1, 2), (0, 1)),
    ((1, -2), (0, -1)),
    ((-1, -2), (0, -1)),
];

const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Chariot,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::Advisor,
    PieceKind::General,
    PieceKind::Advisor,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Chariot,
];

impl Default for XiangqiGrid {
    fn default() -> Self {
        XiangqiGrid::initial()
    }
}

/// Whether `coord` lies in the 3x3 palace of `player`.
pub fn in_palace(coord: CoordXq, player: Player) -> bool {
    let rows = match player {
        Player::A => 7..=9,
        Player::B => 0..=2,
    };
    rows.contains(&coord.row()) && (3..=5).contains(&coord.col())
}

/// Whether `coord` is on `player`'s side of the river.
pub fn on_own_side(coord: CoordXq, player: Player) -> bool {
    match player {
        Player::A => coord.row() >= 5,
        Player::B => coord.row() <= 4,
    }
}

/// The row direction `player`'s soldiers advance in.
pub fn forward(player: Player) -> i32 {
    match player {
        Player::A => -1,
        Player::B => 1,
    }
}

impl XiangqiGrid {
    pub const ROWS: u8 = 10;
    pub const COLS: u8 = 9;

    pub fn empty() -> Self {
        XiangqiGrid {
            tiles: [None; CoordXq::AREA],
        }
    }

    /// The standard opening setup.
    pub fn initial() -> Self {
        let mut grid = XiangqiGrid::empty();

        for (player, back, cannons, soldiers) in [(RED, 9, 7, 6), (BLACK, 0, 2, 3)] {
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                grid = grid.with_piece(CoordXq::from_rc(back, col as u8), Piece::new(kind, player));
            }
            for col in [1, 7] {
                grid = grid.with_piece(CoordXq::from_rc(cannons, col), Piece::new(PieceKind::Cannon, player));
            }
            for col in [0, 2, 4, 6, 8] {
                grid = grid.with_piece(CoordXq::from_rc(soldiers, col), Piece::new(PieceKind::Soldier, player));
            }
        }

        grid
    }

    /// Return a copy of this grid with `piece` put on `coord`, replacing whatever was there.
    #[must_use]
    pub fn with_piece(&self, coord: CoordXq, piece: Piece) -> Self {
        let mut next = *self;
        next.tiles[coord.index() as usize] = Some(piece);
        next
    }

    pub fn piece(&self, coord: CoordXq) -> Option<Piece> {
        self.tiles[coord.index() as usize]
    }

    /// All occupied cells with their pieces, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (CoordXq, Piece)> + '_ {
        CoordXq::all().filter_map(move |coord| self.piece(coord).map(|piece| (coord, piece)))
    }

    pub fn general(&self, player: Player) -> Option<CoordXq> {
        self.pieces()
            .find(|&(_, piece)| piece.kind == PieceKind::General && piece.player == player)
            .map(|(coord, _)| coord)
    }

    /// Whether `player` may end a move on `coord`: empty or holding an enemy piece.
    fn can_land(&self, coord: CoordXq, player: Player) -> bool {
        self.piece(coord).map_or(true, |piece| piece.player != player)
    }

    /// The destinations the piece on `from` can reach by its movement rule alone,
    /// ignoring whether its own general is left in check. Empty if `from` is empty.
    pub fn pseudo_moves(&self, from: CoordXq) -> Vec<CoordXq> {
        let piece = match self.piece(from) {
            Some(piece) => piece,
            None => return vec![],
        };
        let player = piece.player;

        let mut moves = vec![];
        match piece.kind {
            PieceKind::General | PieceKind::Advisor => {
                let dirs = if piece.kind == PieceKind::General { ORTHOGONAL } else { DIAGONAL };
                moves.extend(
                    dirs.iter()
                        .filter_map(|&(dr, dc)| from.offset(dr, dc))
                        .filter(|&to| in_palace(to, player) && self.can_land(to, player)),
                );
            }
            PieceKind::Elephant => {
                for &(dr, dc) in &DIAGONAL {
                    let (eye, to) = match (from.offset(dr, dc), from.offset(2 * dr, 2 * dc)) {
                        (Some(eye), Some(to)) => (eye, to),
                        _ => continue,
                    };
                    if self.piece(eye).is_none() && on_own_side(to, player) && self.can_land(to, player) {
                        moves.push(to);
                    }
                }
            }
            PieceKind::Horse => {
                for &((dr, dc), (lr, lc)) in &HORSE_LEAPS {
                    let (leg, to) = match (from.offset(lr, lc), from.offset(dr, dc)) {
                        (Some(leg), Some(to)) => (leg, to),
                        _ => continue,
                    };
                    if self.piece(leg).is_none() && self.can_land(to, player) {
                        moves.push(to);
                    }
                }
            }
            PieceKind::Chariot => {
                for &(dr, dc) in &ORTHOGONAL {
                    for to in from.ray(dr, dc) {
                        match self.piece(to) {
                            None => moves.push(to),
                            Some(target) => {
                                if target.player != player {
                                    moves.push(to);
                                }
                                break;
                            }
                        }
                    }
                }
            }
            PieceKind::Cannon => {
                for &(dr, dc) in &ORTHOGONAL {
                    let mut screen = false;
                    for to in from.ray(dr, dc) {
                        match (self.piece(to), screen) {
                            (None, false) => moves.push(to),
                            (None, true) => {}
                            (Some(_), false) => screen = true,
                            (Some(target), true) => {
                                if target.player != player {
                                    moves.push(to);
                                }
                                break;
                            }
                        }
                    }
                }
            }
            PieceKind::Soldier => {
                let mut steps = vec![(forward(player), 0)];
                if !on_own_side(from, player) {
                    steps.extend([(0, 1), (0, -1)]);
                }
                moves.extend(
                    steps
                        .into_iter()
                        .filter_map(|(dr, dc)| from.offset(dr, dc))
                        .filter(|&to| self.can_land(to, player)),
                );
            }
        }

        moves
    }

    /// Build the move of the piece on `from` to `to`, recording any captured piece.
    /// Returns `None` if `from` is empty, the movement rule is not checked.
    pub fn move_between(&self, from: CoordXq, to: CoordXq) -> Option<XiangqiMove> {
        let piece = self.piece(from)?;
        Some(XiangqiMove {
            from,
            to,
            piece,
            captured: self.piece(to),
        })
    }

    /// Relocate `mv.piece` to `mv.to` and clear `mv.from`, returning the new grid.
    #[must_use]
    pub fn make_move(&self, mv: XiangqiMove) -> XiangqiGrid {
        let mut next = *self;
        next.tiles[mv.to.index() as usize] = Some(mv.piece);
        next.tiles[mv.from.index() as usize] = None;
        next
    }

    /// The moves of the piece on `from` that do not leave its own general in check.
    pub fn legal_moves_from(&self, from: CoordXq) -> Vec<XiangqiMove> {
        let piece = match self.piece(from) {
            Some(piece) => piece,
            None => return vec![],
        };

        self.pseudo_moves(from)
            .into_iter()
            .map(|to| XiangqiMove {
                from,
                to,
                piece,
                captured: self.piece(to),
            })
            .filter(|&mv| !self.make_move(mv).is_in_check(piece.player))
            .collect()
    }

    /// All legal moves of `player`, grouped by origin in row-major order.
    pub fn legal_moves(&self, player: Player) -> Vec<XiangqiMove> {
        self.pieces()
            .filter(|&(_, piece)| piece.player == player)
            .flat_map(|(from, _)| self.legal_moves_from(from))
            .collect()
    }

    pub fn has_legal_move(&self, player: Player) -> bool {
        self.pieces()
            .filter(|&(_, piece)| piece.player == player)
            .any(|(from, _)| !self.legal_moves_from(from).is_empty())
    }

    /// Whether an enemy piece attacks `player`'s general. A grid without that general is never in check.
    pub fn is_in_check(&self, player: Player) -> bool {
        let general = match self.general(player) {
            Some(general) => general,
            None => return false,
        };

        self.pieces()
            .filter(|&(_, piece)| piece.player != player)
            .any(|(from, _)| self.pseudo_moves(from).contains(&general))
    }

    pub fn is_checkmate(&self, player: Player) -> bool {
        self.is_in_check(player) && !self.has_legal_move(player)
    }

    /// The outcome with `side_to_move` to play: checkmate loses, no legal move without check is a draw.
    pub fn game_result(&self, side_to_move: Player) -> Option<Outcome> {
        if self.has_legal_move(side_to_move) {
            None
        } else if self.is_in_check(side_to_move) {
            Some(Outcome::WonBy(side_to_move.other()))
        } else {
            Some(Outcome::Draw)
        }
    }
}
