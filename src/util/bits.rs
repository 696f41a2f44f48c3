//! Utilities with compact bit data structures.

use num_traits::{PrimInt, Unsigned};

#[derive(Debug)]
/// Iterator over the indices of the set bits of an integer,
/// from least to most significant.
///
/// # Example
///
/// ```
/// use board_trio::util::bits::BitIter;
/// let b = BitIter::new(0b10011u32);
/// assert_eq!(b.collect::<Vec<_>>(), vec![0, 1, 4]);
/// ```
pub struct BitIter<N: PrimInt + Unsigned> {
    left: N,
}

impl<N: PrimInt + Unsigned> BitIter<N> {
    pub fn new(left: N) -> Self {
        BitIter { left }
    }
}

impl<N: PrimInt + Unsigned> Iterator for BitIter<N> {
    type Item = u8;

    fn next(&mut self) -> Option<<Self as Iterator>::Item> {
        if self.left == N::zero() {
            None
        } else {
            let index = self.left.trailing_zeros() as u8;
            self.left = self.left & (self.left - N::one());
            Some(index)
        }
    }
}
