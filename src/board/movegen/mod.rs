//! Pseudo-legal move generation.
//!
//! Generation always serves the snapshot's side to move, whose pieces sit
//! at the high ranks; moves for the opponent are produced on a
//! [`rotated`](super::PositionSnapshot::rotated) copy. Squares are visited
//! file-major, rank-minor, so the emitted order is stable and search move
//! ordering is reproducible.

mod kings;
mod knights;
mod pawns;
mod sliders;
pub(crate) mod tables;

use super::snapshot::PositionSnapshot;
use super::types::{Move, Piece, Square};

impl PositionSnapshot {
    /// All pseudo-legal moves for the side to move, including provisional
    /// castle moves (whose transit squares are vetted later by the legality
    /// filter).
    #[must_use]
    pub fn pseudo_legal_moves(&self) -> Vec<Move> {
        let mut moves = self.piece_moves();
        self.castle_moves(&mut moves);
        moves
    }

    /// Pseudo-legal moves without castling.
    ///
    /// Castle moves can never capture, so this set is what attack and check
    /// tests consult; it also keeps castle eligibility (which itself needs
    /// an attack test) from recursing.
    pub(crate) fn piece_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        for file in 0..8 {
            for rank in 0..8 {
                let from = Square::at(file, rank);
                let Some(state) = self.piece_at(from) else {
                    continue;
                };
                if state.color != self.to_move {
                    continue;
                }
                match state.piece {
                    Piece::Pawn => self.pawn_moves(from, state, &mut moves),
                    Piece::Knight => self.knight_moves(from, &mut moves),
                    Piece::King => self.king_steps(from, &mut moves),
                    Piece::Bishop | Piece::Rook | Piece::Queen => {
                        self.slider_moves(from, state.piece, &mut moves);
                    }
                }
            }
        }
        moves
    }
}
