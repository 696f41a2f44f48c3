use std::fmt::{Display, Formatter};

use crate::board::{Board, Player};
use crate::games::othello::{OthelloBoard, OthelloGrid, BLACK, WHITE};
use crate::util::bitboard::BitBoard8;
use crate::util::coord::Coord8;
use crate::util::notation::{parse_rows, InvalidNotation};

fn tile_to_char(tile: Option<Player>) -> char {
    match tile {
        Some(Player::A) => 'x',
        Some(Player::B) => 'o',
        None => '.',
    }
}

impl OthelloGrid {
    /// Parse 8 rows top to bottom, `x` for black, `o` for white and `.` for empty.
    pub fn from_rows(rows: &[&str]) -> Result<OthelloGrid, InvalidNotation> {
        let cells = parse_rows(rows, 8, 8, |c| match c {
            'x' => Some(Some(BLACK)),
            'o' => Some(Some(WHITE)),
            '.' => Some(None),
            _ => None,
        })?;

        let mut black = BitBoard8::EMPTY;
        let mut white = BitBoard8::EMPTY;
        for (coord, tile) in Coord8::all().zip(cells) {
            match tile {
                Some(Player::A) => black = black.set(coord),
                Some(Player::B) => white = white.set(coord),
                None => {}
            }
        }

        Ok(OthelloGrid::from_tiles(black, white))
    }
}

impl Display for OthelloGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                write!(f, "{}", tile_to_char(self.tile(Coord8::from_rc(row, col))))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for OthelloBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid())?;
        let score = self.grid().score();
        match self.outcome() {
            None => writeln!(f, "next: {}  x {} - {} o", tile_to_char(Some(self.next_player())), score.black, score.white),
            Some(outcome) => writeln!(f, "done: {:?}  x {} - {} o", outcome, score.black, score.white),
        }
    }
}
