//! Board representation, move generation and rules.
//!
//! The live [`Position`] is always oriented for its side to move: that
//! side's pieces occupy ranks 6-7 and advance toward rank 0. Applying a
//! move rotates the grid 180 degrees, so the orientation invariant holds
//! after every half-move and move generation only ever has to reason about
//! the bottom side.

mod builder;
mod codec;
pub mod error;
pub mod eval;
mod legality;
mod movegen;
pub mod search;
mod snapshot;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use snapshot::PositionSnapshot;
pub use types::{Color, Move, MoveFlag, Piece, PieceState, Square};

use error::PositionError;

/// Side effects of an applied half-move, reported back to the caller.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveEffect {
    /// Captured piece, if any, with its owner.
    pub captured: Option<(Color, Piece)>,
    /// The special flag the move carried, if any.
    pub special: Option<MoveFlag>,
    /// The piece a pawn was promoted to, if the move was a promotion.
    pub promoted: Option<Piece>,
}

/// The authoritative game position.
///
/// Coordinates are given in the current orientation; after a successful
/// [`apply_move`](Position::apply_move) the board has rotated and the same
/// physical square has new coordinates.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Position {
    /// Indexed `[file][rank]`.
    squares: [[Option<PieceState>; 8]; 8],
    to_move: Color,
}

impl Position {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        use Piece::{Bishop, King, Knight, Pawn, Queen, Rook};
        let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut squares: [[Option<PieceState>; 8]; 8] = [[None; 8]; 8];
        for (file, &piece) in back.iter().enumerate() {
            squares[file][7] = Some(PieceState::new(piece, Color::White));
            squares[file][6] = Some(PieceState::new(Pawn, Color::White));
            squares[file][1] = Some(PieceState::new(Pawn, Color::Black));
            squares[file][0] = Some(PieceState::new(piece, Color::Black));
        }
        Position {
            squares,
            to_move: Color::White,
        }
    }

    pub(crate) fn from_parts(squares: [[Option<PieceState>; 8]; 8], to_move: Color) -> Self {
        Position { squares, to_move }
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.to_move
    }

    /// The piece occupying a square in the current orientation.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<PieceState> {
        self.squares[square.file()][square.rank()]
    }

    /// The square holding this color's king, if it is on the board.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        for file in 0..8 {
            for rank in 0..8 {
                if let Some(state) = self.squares[file][rank] {
                    if state.piece == Piece::King && state.color == color {
                        return Some(Square::at(file, rank));
                    }
                }
            }
        }
        None
    }

    /// A detached, copyable snapshot of this position for search.
    #[must_use]
    pub fn snapshot(&self) -> PositionSnapshot {
        let mut grid = [[None; 8]; 8];
        for file in 0..8 {
            for rank in 0..8 {
                grid[file][rank] = self.squares[file][rank].map(PieceState::to_tag);
            }
        }
        PositionSnapshot::from_grid(grid, self.to_move)
    }

    /// All fully legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.snapshot().legal_moves()
    }

    /// Apply a half-move for the side to move and rotate the board.
    ///
    /// `promotion` selects the piece for a pawn reaching the far rank and
    /// defaults to a queen; it is ignored for non-promoting moves. The move
    /// itself is trusted to come from [`legal_moves`](Position::legal_moves).
    pub fn apply_move(
        &mut self,
        mv: Move,
        promotion: Option<Piece>,
    ) -> Result<MoveEffect, PositionError> {
        let Some(mut piece) = self.piece_at(mv.from) else {
            return Err(PositionError::EmptySource { square: mv.from });
        };
        if piece.color != self.to_move {
            return Err(PositionError::NotMoversPiece {
                square: mv.from,
                mover: self.to_move,
            });
        }
        if let Some(choice) = promotion {
            if !Piece::PROMOTIONS.contains(&choice) {
                return Err(PositionError::InvalidPromotion { piece: choice });
            }
        }

        let mover = self.to_move;
        log::debug!("{mover} played {}", mv.algebraic(mover));

        let captured = if mv.is_en_passant() {
            self.squares[mv.to.file()][mv.from.rank()]
                .take()
                .map(|state| (state.color, state.piece))
        } else {
            self.piece_at(mv.to).map(|state| (state.color, state.piece))
        };

        self.squares[mv.from.file()][mv.from.rank()] = None;
        if piece.piece.tracks_movement() {
            piece.has_moved = true;
        }
        piece.double_moved = false;
        self.clear_double_moves();

        match mv.flag {
            Some(MoveFlag::DoubleAdvance) => piece.double_moved = true,
            Some(MoveFlag::CastleKingside) | Some(MoveFlag::CastleQueenside) => {
                self.relocate_castle_rook(mv);
            }
            Some(MoveFlag::EnPassant) | None => {}
        }

        let mut promoted = None;
        if piece.piece == Piece::Pawn && mv.to.rank() == 0 {
            let choice = promotion.unwrap_or(Piece::Queen);
            piece.piece = choice;
            promoted = Some(choice);
        }
        self.squares[mv.to.file()][mv.to.rank()] = Some(piece);

        self.rotate();
        Ok(MoveEffect {
            captured,
            special: mv.flag,
            promoted,
        })
    }

    /// Whether this color's king is currently attacked.
    pub fn is_in_check(&self, color: Color) -> Result<bool, PositionError> {
        Ok(self.view_for(color)?.in_check())
    }

    /// Whether this color is checkmated: in check with no legal reply.
    pub fn is_checkmate(&self, color: Color) -> Result<bool, PositionError> {
        let view = self.view_for(color)?;
        Ok(view.in_check() && view.legal_moves().is_empty())
    }

    /// Whether this color is stalemated: not in check but without a legal
    /// reply.
    pub fn is_stalemate(&self, color: Color) -> Result<bool, PositionError> {
        let view = self.view_for(color)?;
        Ok(!view.in_check() && view.legal_moves().is_empty())
    }

    /// A snapshot oriented for `color`, whether or not it is on move.
    fn view_for(&self, color: Color) -> Result<PositionSnapshot, PositionError> {
        if self.king_square(color).is_none() {
            return Err(PositionError::MissingKing { color });
        }
        let snapshot = self.snapshot();
        if color == self.to_move {
            Ok(snapshot)
        } else {
            Ok(snapshot.rotated())
        }
    }

    fn clear_double_moves(&mut self) {
        for file in 0..8 {
            for rank in 0..8 {
                if let Some(state) = &mut self.squares[file][rank] {
                    if state.piece == Piece::Pawn {
                        state.double_moved = false;
                    }
                }
            }
        }
    }

    fn relocate_castle_rook(&mut self, mv: Move) {
        let (rook_from, rook_to) = if mv.to.file() < mv.from.file() {
            (0, mv.to.file() + 1)
        } else {
            (7, mv.to.file() - 1)
        };
        if let Some(rook) = self.squares[rook_from][7].take() {
            self.squares[rook_to][7] = Some(rook.moved());
        }
    }

    /// Rotate the grid 180 degrees and hand the move to the other side.
    fn rotate(&mut self) {
        let mut rotated: [[Option<PieceState>; 8]; 8] = [[None; 8]; 8];
        for file in 0..8 {
            for rank in 0..8 {
                rotated[7 - file][7 - rank] = self.squares[file][rank];
            }
        }
        self.squares = rotated;
        self.to_move = self.to_move.opposite();
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
