//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side of the game.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Color bit used in the compact tag encoding (White = 0, Black = 1).
    #[inline]
    #[must_use]
    pub(crate) const fn bit(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece kinds in index order.
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Kinds a pawn may promote to.
    pub const PROMOTIONS: [Piece; 4] = [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

    /// Index used for move-pattern and scoring tables (0-5).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Knight => 1,
            Piece::Bishop => 2,
            Piece::Rook => 3,
            Piece::Queen => 4,
            Piece::King => 5,
        }
    }

    #[must_use]
    pub(crate) const fn from_index(index: u8) -> Option<Piece> {
        match index {
            0 => Some(Piece::Pawn),
            1 => Some(Piece::Knight),
            2 => Some(Piece::Bishop),
            3 => Some(Piece::Rook),
            4 => Some(Piece::Queen),
            5 => Some(Piece::King),
            _ => None,
        }
    }

    /// Material value in centipawns.
    ///
    /// The king's value is the large presence constant: it is excluded from
    /// ordinary material exchange but confirms the king is still on the
    /// board when summed into an evaluation.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Piece::Pawn => 100,
            Piece::Knight => 320,
            Piece::Bishop => 300,
            Piece::Rook => 500,
            Piece::Queen => 900,
            Piece::King => 10_000,
        }
    }

    /// Whether this kind carries a meaningful "has ever moved" flag
    /// (pawn double advance, castling eligibility).
    #[inline]
    #[must_use]
    pub const fn tracks_movement(self) -> bool {
        matches!(self, Piece::Pawn | Piece::Rook | Piece::King)
    }

}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Piece::Pawn => "Pawn",
            Piece::Knight => "Knight",
            Piece::Bishop => "Bishop",
            Piece::Rook => "Rook",
            Piece::Queen => "Queen",
            Piece::King => "King",
        };
        write!(f, "{name}")
    }
}

/// A piece as it sits on a square: kind, color, and history flags.
///
/// `has_moved` is meaningful for pawns, rooks and kings; `double_moved` is
/// set on a pawn that just advanced two squares and lives for exactly one
/// half-move (it is cleared on every pawn whenever the next move is applied).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceState {
    pub piece: Piece,
    pub color: Color,
    pub has_moved: bool,
    pub double_moved: bool,
}

impl PieceState {
    /// A freshly placed piece with clear history flags.
    #[inline]
    #[must_use]
    pub const fn new(piece: Piece, color: Color) -> Self {
        PieceState {
            piece,
            color,
            has_moved: false,
            double_moved: false,
        }
    }

    /// The same piece with its ever-moved flag set.
    #[inline]
    #[must_use]
    pub const fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }
}
