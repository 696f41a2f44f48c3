use std::fmt::{Display, Formatter};

use crate::board::{Board, Player};
use crate::games::gomoku::{GomokuBoard, GomokuGrid, BLACK, WHITE};
use crate::util::coord::Coord15;
use crate::util::notation::{parse_rows, InvalidNotation};

fn tile_to_char(tile: Option<Player>) -> char {
    match tile {
        Some(Player::A) => 'x',
        Some(Player::B) => 'o',
        None => '.',
    }
}

impl GomokuGrid {
    /// Parse 15 rows top to bottom, `x` for black, `o` for white and `.` for empty.
    pub fn from_rows(rows: &[&str]) -> Result<GomokuGrid, InvalidNotation> {
        let size = GomokuGrid::SIZE as usize;
        let cells = parse_rows(rows, size, size, |c| match c {
            'x' => Some(Some(BLACK)),
            'o' => Some(Some(WHITE)),
            '.' => Some(None),
            _ => None,
        })?;

        let grid = Coord15::all()
            .zip(cells)
            .fold(GomokuGrid::empty(), |grid, (coord, tile)| match tile {
                Some(player) => grid.make_move(coord, player),
                None => grid,
            });
        Ok(grid)
    }
}

impl Display for GomokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..GomokuGrid::SIZE {
            for col in 0..GomokuGrid::SIZE {
                write!(f, "{}", tile_to_char(self.tile(Coord15::from_rc(row, col))))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for GomokuBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid())?;
        match self.outcome() {
            None => writeln!(f, "next: {}", tile_to_char(Some(self.next_player()))),
            Some(outcome) => writeln!(f, "done: {:?}", outcome),
        }
    }
}
