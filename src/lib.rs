#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! Rules engines and AI players for three two player board games,
//! built around a common [Board](crate::board::Board) abstraction.
//!
//! # Features
//!
//! The implemented games are:
//! * [Othello](https://en.wikipedia.org/wiki/Reversi) as [OthelloBoard](crate::games::othello::OthelloBoard),
//!     with an alpha-beta [OthelloBot](crate::games::othello::ai::OthelloBot).
//! * [Gomoku](https://en.wikipedia.org/wiki/Gomoku) as [GomokuBoard](crate::games::gomoku::GomokuBoard),
//!     with a pattern scoring [GomokuBot](crate::games::gomoku::ai::GomokuBot).
//! * [Xiangqi](https://en.wikipedia.org/wiki/Xiangqi) as [XiangqiBoard](crate::games::xiangqi::XiangqiBoard),
//!     with a tactical [XiangqiBot](crate::games::xiangqi::ai::XiangqiBot).
//!
//! Each game also exposes its rules as pure functions on a grid value
//! ([OthelloGrid](crate::games::othello::OthelloGrid), [GomokuGrid](crate::games::gomoku::GomokuGrid),
//! [XiangqiGrid](crate::games::xiangqi::XiangqiGrid)) where every move returns a new grid.
//!
//! Utilities that work for any [Board](crate::board::Board):
//! * [RandomBot](crate::ai::simple::RandomBot), which simply picks a random move.
//! * [minimax](crate::ai::minimax::minimax), alpha-beta negamax with a customizable heuristic.
//! * [GameSession](crate::session::GameSession), which tracks turns, forced passes and undo for interactive play.
//! * [GameStats](crate::stats::GameStats), win/draw/loss tallies.
//!
//! # Examples
//!
//! ## List the available moves on a board and play a random one.
//!
//! ```
//! # use board_trio::games::gomoku::GomokuBoard;
//! # use board_trio::board::{BoardMoves, Board};
//! # use internal_iterator::InternalIterator;
//! # let mut rng = rand::thread_rng();
//! let mut board = GomokuBoard::default();
//! println!("{}", board);
//!
//! let count = board.available_moves().unwrap().count();
//! assert_eq!(count, 225);
//!
//! let mv = board.random_available_move(&mut rng).unwrap();
//! println!("Picked move {}", mv);
//! board.play(mv).unwrap();
//! println!("{}", board);
//! ```
//!
//! ## Ask the Othello AI for a move
//!
//! ```
//! # use board_trio::games::othello::{OthelloBoard, ai::{OthelloBot, OTHELLO_DEPTH}};
//! # use board_trio::ai::Bot;
//! # use rand::thread_rng;
//! let board = OthelloBoard::default();
//! let mut bot = OthelloBot::new(OTHELLO_DEPTH, thread_rng());
//! println!("{}", bot.select_move(&board).unwrap());
//! ```

pub mod board;
pub mod wdl;

pub mod ai;

pub mod games;

pub mod session;
pub mod stats;

pub mod util;
