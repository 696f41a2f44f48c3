//! Various utility functions.
pub mod bitboard;
pub mod bits;
pub mod coord;

pub mod internal_ext;
pub mod notation;
pub mod tiny;
