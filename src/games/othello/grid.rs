use std::cmp::Ordering;

use crate::board::{Outcome, Player};
use crate::util::bitboard::BitBoard8;
use crate::util::coord::{Coord8, COMPASS};

/// Othello is played by black (who moves first) and white.
pub const BLACK: Player = Player::A;
pub const WHITE: Player = Player::B;

/// The discs on an 8x8 Othello board, without any turn information.
///
/// This is a small `Copy` value, every rule that changes it returns a new grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct OthelloGrid {
    pub(super) tiles_a: BitBoard8,
    pub(super) tiles_b: BitBoard8,
}

/// Disc counts per color.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Score {
    pub black: u8,
    pub white: u8,
}

impl Default for OthelloGrid {
    fn default() -> Self {
        OthelloGrid::initial()
    }
}

impl OthelloGrid {
    pub const SIZE: u8 = 8;

    pub fn empty() -> Self {
        OthelloGrid {
            tiles_a: BitBoard8::EMPTY,
            tiles_b: BitBoard8::EMPTY,
        }
    }

    /// The standard start position, with the four center cells seeded diagonally.
    pub fn initial() -> Self {
        let white = BitBoard8::coord(Coord8::from_rc(3, 3)) | BitBoard8::coord(Coord8::from_rc(4, 4));
        let black = BitBoard8::coord(Coord8::from_rc(3, 4)) | BitBoard8::coord(Coord8::from_rc(4, 3));
        OthelloGrid::from_tiles(black, white)
    }

    /// Build a grid from the discs of black and white, which must not overlap.
    pub fn from_tiles(black: BitBoard8, white: BitBoard8) -> Self {
        assert!((black & white).none(), "black and white discs overlap");
        let mut grid = OthelloGrid::empty();
        *grid.tiles_mut(BLACK) = black;
        *grid.tiles_mut(WHITE) = white;
        grid
    }

    pub fn tiles(&self, player: Player) -> BitBoard8 {
        match player {
            Player::A => self.tiles_a,
            Player::B => self.tiles_b,
        }
    }

    fn tiles_mut(&mut self, player: Player) -> &mut BitBoard8 {
        match player {
            Player::A => &mut self.tiles_a,
            Player::B => &mut self.tiles_b,
        }
    }

    pub fn free_tiles(&self) -> BitBoard8 {
        !(self.tiles_a | self.tiles_b)
    }

    pub fn tile(&self, coord: Coord8) -> Option<Player> {
        if self.tiles_a.has(coord) {
            return Some(Player::A);
        }
        if self.tiles_b.has(coord) {
            return Some(Player::B);
        }
        None
    }

    /// The opponent discs that `player` would flip in direction `(dr, dc)` by placing at `coord`.
    /// Only a run of opponent discs closed off by an own disc counts, anything else flips nothing.
    fn flips_in_direction(&self, coord: Coord8, (dr, dc): (i32, i32), player: Player) -> BitBoard8 {
        let own = self.tiles(player);
        let opponent = self.tiles(player.other());

        let mut run = BitBoard8::EMPTY;
        for curr in coord.ray(dr, dc) {
            if opponent.has(curr) {
                run = run.set(curr);
            } else if own.has(curr) {
                return run;
            } else {
                return BitBoard8::EMPTY;
            }
        }

        BitBoard8::EMPTY
    }

    /// All opponent discs that placing at `coord` would flip, over all 8 directions.
    pub fn flips(&self, coord: Coord8, player: Player) -> BitBoard8 {
        COMPASS
            .iter()
            .fold(BitBoard8::EMPTY, |acc, &dir| acc | self.flips_in_direction(coord, dir, player))
    }

    pub fn is_valid_move(&self, coord: Coord8, player: Player) -> bool {
        self.free_tiles().has(coord)
            && COMPASS
                .iter()
                .any(|&dir| self.flips_in_direction(coord, dir, player).any())
    }

    /// Place a disc for `player` at `coord` and flip every sandwiched run, returning the new grid.
    /// The move is not validated, for an invalid target only the disc itself is placed.
    #[must_use]
    pub fn make_move(&self, coord: Coord8, player: Player) -> OthelloGrid {
        let flips = self.flips(coord, player);

        let placed = BitBoard8::coord(coord) | flips;
        let own = self.tiles(player) | placed;
        let opponent = self.tiles(player.other()) & !placed;

        let mut next = *self;
        *next.tiles_mut(player) = own;
        *next.tiles_mut(player.other()) = opponent;
        next
    }

    /// All valid moves for `player` in row-major order.
    pub fn valid_moves(&self, player: Player) -> Vec<Coord8> {
        self.free_tiles()
            .into_iter()
            .filter(|&coord| self.is_valid_move(coord, player))
            .collect()
    }

    pub fn has_valid_move(&self, player: Player) -> bool {
        self.free_tiles()
            .into_iter()
            .any(|coord| self.is_valid_move(coord, player))
    }

    /// The number of valid moves for `player`.
    pub fn mobility(&self, player: Player) -> usize {
        self.free_tiles()
            .into_iter()
            .filter(|&coord| self.is_valid_move(coord, player))
            .count()
    }

    pub fn score(&self) -> Score {
        Score {
            black: self.tiles(BLACK).count(),
            white: self.tiles(WHITE).count(),
        }
    }

    /// Whether neither player has a valid move left.
    pub fn is_game_over(&self) -> bool {
        !self.has_valid_move(BLACK) && !self.has_valid_move(WHITE)
    }

    /// The player with the most discs, or a draw when the counts are equal.
    /// This does not check whether the game is actually over.
    pub fn winner(&self) -> Outcome {
        let score = self.score();
        match score.black.cmp(&score.white) {
            Ordering::Greater => Outcome::WonBy(BLACK),
            Ordering::Less => Outcome::WonBy(WHITE),
            Ordering::Equal => Outcome::Draw,
        }
    }
}
