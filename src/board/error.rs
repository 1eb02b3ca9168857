//! Error types for board operations.
//!
//! These cover invariant violations only: a candidate move that turns out to
//! be illegal is not an error, it is simply absent from the legal move set.

use std::fmt;

use super::types::{Color, Piece, Square};

/// Error type for compact piece tag decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagError {
    /// The tag does not encode any piece state (kind digit above 5).
    OutOfRange { tag: u8 },
}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::OutOfRange { tag } => {
                write!(f, "tag {tag} does not encode a piece state")
            }
        }
    }
}

impl std::error::Error for TagError {}

/// Error type for position mutations and state queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    /// The move's source square holds no piece.
    EmptySource { square: Square },
    /// The move's source square holds a piece of the wrong color.
    NotMoversPiece { square: Square, mover: Color },
    /// The supplied promotion piece is not a legal promotion target.
    InvalidPromotion { piece: Piece },
    /// A check/mate/stalemate query was made for a color with no king.
    MissingKing { color: Color },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::EmptySource { square } => {
                write!(f, "no piece on source square {square}")
            }
            PositionError::NotMoversPiece { square, mover } => {
                write!(f, "piece on {square} does not belong to {mover}")
            }
            PositionError::InvalidPromotion { piece } => {
                write!(f, "cannot promote a pawn to {piece}")
            }
            PositionError::MissingKing { color } => {
                write!(f, "{color} has no king on the board")
            }
        }
    }
}

impl std::error::Error for PositionError {}
