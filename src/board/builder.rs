//! Fluent construction of arbitrary positions.

use super::types::{Color, Piece, PieceState, Square};
use super::Position;

/// Builder for positions other than the standard start.
///
/// Coordinates are given in the built position's frame: the side to move
/// sits at high ranks and advances toward rank 0. The board starts empty
/// with White to move.
///
/// ```
/// use chesskit::{Color, Piece, PositionBuilder, Square};
///
/// let sq = |f, r| Square::new(f, r).unwrap();
/// let position = PositionBuilder::new()
///     .piece(sq(4, 7), Color::White, Piece::King)
///     .piece(sq(3, 0), Color::Black, Piece::King)
///     .piece(sq(0, 6), Color::White, Piece::Pawn)
///     .build();
/// assert_eq!(position.side_to_move(), Color::White);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PositionBuilder {
    squares: [[Option<PieceState>; 8]; 8],
    to_move: Option<Color>,
}

impl PositionBuilder {
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder::default()
    }

    /// Place a fresh piece (never moved) on a square.
    #[must_use]
    pub fn piece(self, square: Square, color: Color, piece: Piece) -> Self {
        self.piece_state(square, PieceState::new(piece, color))
    }

    /// Place a piece with explicit movement flags, for en passant and
    /// castling setups.
    #[must_use]
    pub fn piece_state(mut self, square: Square, state: PieceState) -> Self {
        self.squares[square.file()][square.rank()] = Some(state);
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.to_move = Some(color);
        self
    }

    #[must_use]
    pub fn build(self) -> Position {
        Position::from_parts(self.squares, self.to_move.unwrap_or(Color::White))
    }
}
