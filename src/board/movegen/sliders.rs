//! Sliding piece move generation (bishop, rook, queen).

use super::super::snapshot::PositionSnapshot;
use super::super::types::{Move, Piece, Square};
use super::tables::RAY_TABLE;

impl PositionSnapshot {
    /// Walk each of the piece's rays: step outward until the board edge or
    /// an own piece stops the ray, including an enemy piece's square before
    /// stopping.
    pub(crate) fn slider_moves(&self, from: Square, piece: Piece, moves: &mut Vec<Move>) {
        for &(df, dr) in RAY_TABLE[piece.index()] {
            let mut cursor = from;
            while let Some(to) = cursor.offset(df, dr) {
                match self.piece_at(to) {
                    None => {
                        moves.push(Move::plain(from, to));
                        cursor = to;
                    }
                    Some(target) if target.color != self.to_move => {
                        moves.push(Move::plain(from, to));
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
    }
}
