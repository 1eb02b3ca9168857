//! Move types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

/// Tag for moves with side effects beyond "piece goes from A to B".
///
/// Promotion is deliberately not a flag: the promotion piece is chosen
/// out-of-band and supplied to `Position::apply_move` once a pawn reaches
/// the far rank.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveFlag {
    /// Pawn double advance from its starting square.
    DoubleAdvance,
    /// En passant capture: the destination is empty, the captured pawn
    /// stands laterally adjacent to the source.
    EnPassant,
    CastleKingside,
    CastleQueenside,
}

impl MoveFlag {
    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveFlag::CastleKingside | MoveFlag::CastleQueenside)
    }
}

/// A half-move: source square, destination square, optional special tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub flag: Option<MoveFlag>,
}

impl Move {
    /// A plain move with no special tag.
    #[inline]
    #[must_use]
    pub const fn plain(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            flag: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn tagged(from: Square, to: Square, flag: MoveFlag) -> Self {
        Move {
            from,
            to,
            flag: Some(flag),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_castle(&self) -> bool {
        self.flag.is_some_and(MoveFlag::is_castle)
    }

    #[inline]
    #[must_use]
    pub fn is_en_passant(&self) -> bool {
        self.flag == Some(MoveFlag::EnPassant)
    }

    /// Render in long algebraic form from the given mover's perspective.
    #[must_use]
    pub fn algebraic(&self, perspective: Color) -> String {
        match self.flag {
            Some(MoveFlag::CastleKingside) => "O-O".to_string(),
            Some(MoveFlag::CastleQueenside) => "O-O-O".to_string(),
            Some(MoveFlag::EnPassant) => format!(
                "{}{} e.p.",
                self.from.algebraic(perspective),
                self.to.algebraic(perspective)
            ),
            _ => format!(
                "{}{}",
                self.from.algebraic(perspective),
                self.to.algebraic(perspective)
            ),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)?;
        if let Some(flag) = self.flag {
            write!(f, " [{flag:?}]")?;
        }
        Ok(())
    }
}
