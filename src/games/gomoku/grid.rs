use crate::board::{Outcome, Player};
use crate::util::coord::{Coord15, AXES};

/// Gomoku is played by black (who moves first) and white.
pub const BLACK: Player = Player::A;
pub const WHITE: Player = Player::B;

/// The stones on a 15x15 Gomoku board, without any turn information.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GomokuGrid {
    tiles: [Option<Player>; Coord15::AREA],
}

impl Default for GomokuGrid {
    fn default() -> Self {
        GomokuGrid::empty()
    }
}

impl GomokuGrid {
    pub const SIZE: u8 = 15;
    pub const CENTER: Coord15 = Coord15::from_rc(7, 7);

    /// The number of stones in a row that wins the game.
    pub const WIN_LENGTH: u8 = 5;

    pub fn empty() -> Self {
        GomokuGrid {
            tiles: [None; Coord15::AREA],
        }
    }

    pub fn tile(&self, coord: Coord15) -> Option<Player> {
        self.tiles[coord.index() as usize]
    }

    pub fn is_valid_move(&self, coord: Coord15) -> bool {
        self.tile(coord).is_none()
    }

    /// Place a stone for `player` at `coord`, returning the new grid. The target is not checked.
    #[must_use]
    pub fn make_move(&self, coord: Coord15, player: Player) -> GomokuGrid {
        let mut next = *self;
        next.tiles[coord.index() as usize] = Some(player);
        next
    }

    pub fn stone_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_some()).count()
    }

    pub fn has_stones(&self) -> bool {
        self.tiles.iter().any(|t| t.is_some())
    }

    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(|t| t.is_some())
    }

    /// The number of consecutive `player` stones starting next to `coord` in direction `(dr, dc)`.
    /// Stops at the edge or the first other cell, and never counts more than 4.
    pub fn count_direction(&self, coord: Coord15, dr: i32, dc: i32, player: Player) -> u8 {
        coord
            .ray(dr, dc)
            .take(Self::WIN_LENGTH as usize - 1)
            .take_while(|&c| self.tile(c) == Some(player))
            .count() as u8
    }

    /// The length of the `player` line through `coord` along `(dr, dc)`, counting `coord` itself.
    pub fn line_length(&self, coord: Coord15, dr: i32, dc: i32, player: Player) -> u8 {
        1 + self.count_direction(coord, dr, dc, player) + self.count_direction(coord, -dr, -dc, player)
    }

    /// Whether `player` has five in a row through `coord` on any axis.
    pub fn has_five(&self, coord: Coord15, player: Player) -> bool {
        AXES.iter()
            .any(|&(dr, dc)| self.line_length(coord, dr, dc, player) >= Self::WIN_LENGTH)
    }

    /// Whether placing a `player` stone on the empty cell `coord` completes five in a row.
    pub fn is_winning_move(&self, coord: Coord15, player: Player) -> bool {
        self.is_valid_move(coord) && self.make_move(coord, player).has_five(coord, player)
    }

    /// Whether the game is over after `player` placed at `coord`: five in a row or a full board.
    pub fn is_game_over(&self, coord: Coord15, player: Player) -> bool {
        self.winner(coord, player).is_some()
    }

    /// The outcome after `player` placed at `coord`, `None` while the game goes on.
    pub fn winner(&self, coord: Coord15, player: Player) -> Option<Outcome> {
        if self.has_five(coord, player) {
            Some(Outcome::WonBy(player))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    /// The outcome of the whole grid, without knowing the last move.
    pub fn outcome(&self) -> Option<Outcome> {
        let five = Coord15::all().find_map(|coord| {
            let player = self.tile(coord)?;
            self.has_five(coord, player).then_some(player)
        });

        match five {
            Some(player) => Some(Outcome::WonBy(player)),
            None if self.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }
}
