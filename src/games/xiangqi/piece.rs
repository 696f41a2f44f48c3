use std::fmt::{Display, Formatter};

use crate::board::Player;

/// Xiangqi is played by red (who moves first, from the bottom of the board) and black.
pub const RED: Player = Player::A;
pub const BLACK: Player = Player::B;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PieceKind {
    General,
    Advisor,
    Elephant,
    Horse,
    Chariot,
    Cannon,
    Soldier,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub player: Player,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::General,
        PieceKind::Advisor,
        PieceKind::Elephant,
        PieceKind::Horse,
        PieceKind::Chariot,
        PieceKind::Cannon,
        PieceKind::Soldier,
    ];

    /// Material value, the general is worth more than everything else combined.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::General => 1000,
            PieceKind::Advisor => 20,
            PieceKind::Elephant => 20,
            PieceKind::Horse => 40,
            PieceKind::Chariot => 90,
            PieceKind::Cannon => 45,
            PieceKind::Soldier => 10,
        }
    }

    /// The lowercase FEN letter.
    pub fn to_char(self) -> char {
        match self {
            PieceKind::General => 'k',
            PieceKind::Advisor => 'a',
            PieceKind::Elephant => 'b',
            PieceKind::Horse => 'n',
            PieceKind::Chariot => 'r',
            PieceKind::Cannon => 'c',
            PieceKind::Soldier => 'p',
        }
    }

    /// Parse a FEN letter in either case, accepting both the `b/n` and `e/h` conventions.
    pub fn from_char(c: char) -> Option<PieceKind> {
        let kind = match c.to_ascii_lowercase() {
            'k' => PieceKind::General,
            'a' => PieceKind::Advisor,
            'b' | 'e' => PieceKind::Elephant,
            'n' | 'h' => PieceKind::Horse,
            'r' => PieceKind::Chariot,
            'c' => PieceKind::Cannon,
            'p' => PieceKind::Soldier,
            _ => return None,
        };
        Some(kind)
    }
}

impl Piece {
    pub const fn new(kind: PieceKind, player: Player) -> Self {
        Piece { kind, player }
    }

    /// Uppercase for red, lowercase for black.
    pub fn to_char(self) -> char {
        let c = self.kind.to_char();
        match self.player {
            Player::A => c.to_ascii_uppercase(),
            Player::B => c,
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let player = if c.is_ascii_uppercase() { RED } else { BLACK };
        Some(Piece::new(kind, player))
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
