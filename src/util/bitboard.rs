use std::fmt::{Display, Formatter};
use std::ops::{BitAnd, BitOr, Not};

use crate::util::bits::BitIter;
use crate::util::coord::Coord8;

/// A set of cells on an 8x8 board, bit `i` corresponds to [Coord8::from_index(i)].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BitBoard8(u64);

impl BitBoard8 {
    pub const EMPTY: BitBoard8 = BitBoard8(0);
    pub const FULL: BitBoard8 = BitBoard8(!0);

    /// The four corner cells.
    pub const CORNERS: BitBoard8 = BitBoard8(0x8100000000000081);
    /// The outer ring of cells, including the corners.
    pub const EDGES: BitBoard8 = BitBoard8(0xff818181818181ff);

    #[must_use]
    pub const fn coord(coord: Coord8) -> BitBoard8 {
        BitBoard8(1 << coord.index())
    }

    #[must_use]
    pub const fn has(self, coord: Coord8) -> bool {
        (self.0 >> coord.index()) & 1 != 0
    }

    #[must_use]
    pub const fn none(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    #[must_use]
    pub const fn count(self) -> u8 {
        self.0.count_ones() as u8
    }

    #[must_use]
    pub const fn set(self, coord: Coord8) -> Self {
        BitBoard8(self.0 | (1 << coord.index()))
    }

    pub const fn left(self) -> Self {
        BitBoard8((self.0 >> 1) & 0x7f7f7f7f7f7f7f7f)
    }

    pub const fn right(self) -> Self {
        BitBoard8((self.0 << 1) & 0xfefefefefefefefe)
    }

    pub const fn up(self) -> Self {
        BitBoard8(self.0 >> 8)
    }

    pub const fn down(self) -> Self {
        BitBoard8(self.0 << 8)
    }

    pub const fn orthogonal(self) -> Self {
        BitBoard8(self.left().0 | self.right().0 | self.up().0 | self.down().0)
    }

    pub const fn diagonal(self) -> Self {
        BitBoard8(self.left().up().0 | self.right().up().0 | self.left().down().0 | self.right().down().0)
    }

    pub const fn adjacent(self) -> Self {
        BitBoard8(self.orthogonal().0 | self.diagonal().0)
    }
}

impl BitAnd for BitBoard8 {
    type Output = BitBoard8;

    fn bitand(self, rhs: Self) -> Self::Output {
        BitBoard8(self.0 & rhs.0)
    }
}

impl BitOr for BitBoard8 {
    type Output = BitBoard8;

    fn bitor(self, rhs: Self) -> Self::Output {
        BitBoard8(self.0 | rhs.0)
    }
}

impl Not for BitBoard8 {
    type Output = BitBoard8;

    fn not(self) -> Self::Output {
        BitBoard8(!self.0)
    }
}

impl IntoIterator for BitBoard8 {
    type Item = Coord8;
    type IntoIter = std::iter::Map<BitIter<u64>, fn(u8) -> Coord8>;

    fn into_iter(self) -> Self::IntoIter {
        BitIter::new(self.0).map(|i| Coord8::from_index(i))
    }
}

impl Display for BitBoard8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                let coord = Coord8::from_rc(row, col);
                write!(f, "{}", if self.has(coord) { '1' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
