//! Board squares and coordinate utilities.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

/// A square on the 8x8 board, as a (file, rank) pair, both 0-7.
///
/// Coordinates are always in the current orientation: the side to move
/// occupies ranks 6-7 and its pawns advance toward rank 0. The whole board
/// is rotated 180 degrees after every applied half-move, so (0, 0) is the
/// mover's top-left corner at all times.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Create a square with bounds checking.
    #[must_use]
    pub const fn new(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            None
        }
    }

    /// Create a square from known-good coordinates.
    #[inline]
    #[must_use]
    pub(crate) const fn at(file: usize, rank: usize) -> Self {
        debug_assert!(file < 8 && rank < 8);
        Square {
            file: file as u8,
            rank: rank as u8,
        }
    }

    /// Offset this square, returning `None` if the result leaves the board.
    #[must_use]
    pub(crate) fn offset(self, df: i8, dr: i8) -> Option<Self> {
        let file = self.file as i8 + df;
        let rank = self.rank as i8 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Square::at(file as usize, rank as usize))
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.file as usize
    }

    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.rank as usize
    }

    /// The same physical square after a 180-degree board rotation.
    #[inline]
    #[must_use]
    pub const fn rotated(self) -> Self {
        Square {
            file: 7 - self.file,
            rank: 7 - self.rank,
        }
    }

    /// Render in algebraic notation from the given mover's perspective.
    ///
    /// The orientation convention means file 0 is 'a' when White is the
    /// mover and 'h' when Black is; ranks count up toward the mover.
    #[must_use]
    pub fn algebraic(self, perspective: Color) -> String {
        let (file_char, rank_num) = match perspective {
            Color::White => (b'a' + self.file, 8 - self.rank),
            Color::Black => (b'a' + (7 - self.file), self.rank + 1),
        };
        format!("{}{}", file_char as char, rank_num)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}
