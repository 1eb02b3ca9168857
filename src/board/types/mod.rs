//! Core value types: colors, pieces, squares, moves.

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveFlag};
pub use piece::{Color, Piece, PieceState};
pub use square::Square;
