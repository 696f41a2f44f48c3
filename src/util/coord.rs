use std::fmt::{Debug, Display, Formatter};

/// A cell on a board with `R` rows and `C` columns, addressed as `(row, col)`.
/// Row 0 is the top row as printed, cells are stored in row-major order.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coord<const R: u8, const C: u8> {
    index: u8,
}

pub type Coord8 = Coord<8, 8>;
pub type Coord15 = Coord<15, 15>;
pub type CoordXq = Coord<10, 9>;

pub type CoordAllIter<C> = std::iter::Map<std::ops::Range<u8>, fn(u8) -> C>;

/// The 4 line directions, each listed once: horizontal, vertical and both diagonals.
pub const AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// All 8 compass directions as `(d_row, d_col)`.
pub const COMPASS: [(i32, i32); 8] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

impl<const R: u8, const C: u8> Coord<R, C> {
    pub const ROWS: u8 = R;
    pub const COLS: u8 = C;
    pub const AREA: usize = R as usize * C as usize;

    pub const fn from_index(index: u8) -> Self {
        assert!((index as usize) < Self::AREA);
        Coord { index }
    }

    pub const fn from_rc(row: u8, col: u8) -> Self {
        assert!(row < R);
        assert!(col < C);
        Coord { index: col + C * row }
    }

    /// Build a coordinate from possibly out-of-range input, returning `None` if it falls outside the board.
    pub fn try_from_rc(row: i32, col: i32) -> Option<Self> {
        if (0..R as i32).contains(&row) && (0..C as i32).contains(&col) {
            Some(Self::from_rc(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn all() -> CoordAllIter<Self> {
        (0..R * C).map(|index| Coord::from_index(index))
    }

    pub const fn index(self) -> u8 {
        self.index
    }

    pub const fn row(self) -> u8 {
        self.index / C
    }

    pub const fn col(self) -> u8 {
        self.index % C
    }

    /// The coordinate `(row + dr, col + dc)`, or `None` if that falls off the board.
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Self::try_from_rc(self.row() as i32 + dr, self.col() as i32 + dc)
    }

    /// Iterate over the cells `self + k * (dr, dc)` for `k = 1, 2, ...` until the board edge.
    pub fn ray(self, dr: i32, dc: i32) -> impl Iterator<Item = Self> {
        std::iter::successors(self.offset(dr, dc), move |c| c.offset(dr, dc))
    }

    pub fn manhattan_distance(self, other: Self) -> u8 {
        let dr = self.row().abs_diff(other.row());
        let dc = self.col().abs_diff(other.col());
        dr + dc
    }
}

impl<const R: u8, const C: u8> Debug for Coord<R, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Coord({}, {})", self.row(), self.col())
    }
}

impl<const R: u8, const C: u8> Display for Coord<R, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}
