//! [Othello](https://en.wikipedia.org/wiki/Reversi) on the standard 8x8 board.
//!
//! [OthelloGrid] holds the rules as pure functions on the discs,
//! [OthelloBoard] adds turn tracking and forced passes on top so the generic search can drive it.
pub use board::*;
pub use grid::*;
pub use mv::*;

pub mod ai;
mod board;
mod grid;
mod io;
mod mv;
