//! [Xiangqi](https://en.wikipedia.org/wiki/Xiangqi), Chinese chess on a 10x9 board.
//!
//! Draws only happen through stalemate, repetition rules and the flying general rule are not implemented.
pub use board::*;
pub use grid::*;
pub use mv::*;
pub use piece::*;
pub use select::*;

pub mod ai;
mod board;
mod grid;
mod io;
mod mv;
mod piece;
mod select;
