//! Pawn move generation.

use super::super::snapshot::PositionSnapshot;
use super::super::types::{Move, MoveFlag, Piece, PieceState, Square};

impl PositionSnapshot {
    /// Pawns of the side to move always advance toward rank 0.
    pub(crate) fn pawn_moves(&self, from: Square, state: PieceState, moves: &mut Vec<Move>) {
        if let Some(to) = from.offset(0, -1) {
            if self.tag_at(to).is_none() {
                moves.push(Move::plain(from, to));

                // Double advance: never moved, both squares ahead empty.
                if !state.has_moved {
                    if let Some(two) = from.offset(0, -2) {
                        if self.tag_at(two).is_none() {
                            moves.push(Move::tagged(from, two, MoveFlag::DoubleAdvance));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(to) = from.offset(df, -1) else {
                continue;
            };
            match self.piece_at(to) {
                Some(target) if target.color != state.color => {
                    moves.push(Move::plain(from, to));
                }
                Some(_) => {}
                None => {
                    // En passant: the diagonal is empty but an enemy pawn
                    // that just double-moved stands beside us.
                    let beside = from.offset(df, 0).and_then(|sq| self.piece_at(sq));
                    if let Some(target) = beside {
                        if target.piece == Piece::Pawn
                            && target.color != state.color
                            && target.double_moved
                        {
                            moves.push(Move::tagged(from, to, MoveFlag::EnPassant));
                        }
                    }
                }
            }
        }
    }
}
