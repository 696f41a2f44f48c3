#[cfg(feature = "game_othello")]
pub mod othello;

#[cfg(feature = "game_gomoku")]
pub mod gomoku;

#[cfg(feature = "game_xiangqi")]
pub mod xiangqi;
