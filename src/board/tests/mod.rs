//! Unit tests for the board model, move generation and evaluation.

mod castling;
mod legality;
mod movegen;

use super::types::Square;

/// Shorthand for a known-good square in test positions.
fn sq(file: usize, rank: usize) -> Square {
    Square::new(file, rank).unwrap()
}
