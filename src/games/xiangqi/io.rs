use std::fmt::{Display, Formatter, Write};

use itertools::Itertools;

use crate::board::Board;
use crate::games::xiangqi::{Piece, XiangqiBoard, XiangqiGrid, BLACK, RED};
use crate::util::coord::CoordXq;
use crate::util::notation::InvalidNotation;

impl XiangqiGrid {
    /// Parse the board field of a Xiangqi FEN, rows from black's back rank down to red's.
    /// Uppercase letters are red pieces, lowercase black, digits are runs of empty cells.
    pub fn from_fen(fen: &str) -> Result<XiangqiGrid, InvalidNotation> {
        let err = |reason| InvalidNotation::new(fen, reason);

        let board_str = fen.split_whitespace().next().ok_or_else(|| err("empty fen"))?;
        let rows = board_str.split('/').collect_vec();
        if rows.len() != XiangqiGrid::ROWS as usize {
            return Err(err("expected 10 rows"));
        }

        let mut grid = XiangqiGrid::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0u8;
            for c in row_str.chars() {
                if let Some(gap) = c.to_digit(10) {
                    col = col.saturating_add(gap as u8);
                    continue;
                }

                let piece = Piece::from_char(c).ok_or_else(|| err("invalid piece character"))?;
                if col >= XiangqiGrid::COLS {
                    return Err(err("row too long"));
                }
                grid = grid.with_piece(CoordXq::from_rc(row as u8, col), piece);
                col += 1;
            }
            if col != XiangqiGrid::COLS {
                return Err(err("row does not have 9 columns"));
            }
        }

        Ok(grid)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for row in 0..XiangqiGrid::ROWS {
            if row != 0 {
                fen.push('/');
            }
            let mut gap = 0;
            for col in 0..XiangqiGrid::COLS {
                match self.piece(CoordXq::from_rc(row, col)) {
                    None => gap += 1,
                    Some(piece) => {
                        if gap != 0 {
                            // SAFETY: writing to a String cannot fail
                            write!(fen, "{}", gap).unwrap();
                            gap = 0;
                        }
                        fen.push(piece.to_char());
                    }
                }
            }
            if gap != 0 {
                // SAFETY: see above
                write!(fen, "{}", gap).unwrap();
            }
        }
        fen
    }
}

impl XiangqiBoard {
    /// Parse a FEN with the board field and the side to move, `w` or `r` for red and `b` for black.
    pub fn from_fen(fen: &str) -> Result<XiangqiBoard, InvalidNotation> {
        let grid = XiangqiGrid::from_fen(fen)?;
        let next_player = match fen.split_whitespace().nth(1) {
            Some("w") | Some("r") => RED,
            Some("b") => BLACK,
            _ => return Err(InvalidNotation::new(fen, "missing or invalid side to move")),
        };
        Ok(XiangqiBoard::from_grid(grid, next_player))
    }

    pub fn to_fen(&self) -> String {
        let side = if self.next_player() == RED { 'w' } else { 'b' };
        format!("{} {}", self.grid().to_fen(), side)
    }
}

impl Display for XiangqiGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..XiangqiGrid::ROWS {
            if row == 5 {
                writeln!(f, "~~~~~~~~~")?;
            }
            for col in 0..XiangqiGrid::COLS {
                let c = self.piece(CoordXq::from_rc(row, col)).map_or('.', Piece::to_char);
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Display for XiangqiBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.grid())?;
        match self.outcome() {
            None => {
                let side = if self.next_player() == RED { "red" } else { "black" };
                let check = if self.is_in_check() { " (check)" } else { "" };
                writeln!(f, "next: {}{}", side, check)
            }
            Some(outcome) => writeln!(f, "done: {:?}", outcome),
        }
    }
}
