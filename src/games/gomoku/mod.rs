//! [Gomoku](https://en.wikipedia.org/wiki/Gomoku) on a 15x15 board, five or more in a row wins.
pub use board::*;
pub use grid::*;

pub mod ai;
mod board;
mod grid;
mod io;
