//! King move generation: single steps and provisional castles.

use super::super::snapshot::PositionSnapshot;
use super::super::types::{Color, Move, MoveFlag, Piece, Square};
use super::tables::KING_TARGETS;

impl PositionSnapshot {
    pub(crate) fn king_steps(&self, from: Square, moves: &mut Vec<Move>) {
        for &to in &KING_TARGETS[from.file()][from.rank()] {
            match self.piece_at(to) {
                Some(target) if target.color == self.to_move => {}
                _ => moves.push(Move::plain(from, to)),
            }
        }
    }

    /// Provisional castle moves for the side to move.
    ///
    /// Requirements checked here: the king has never moved and stands on its
    /// home square, it is not currently attacked, the matching rook has
    /// never moved, and every square strictly between them is empty. Whether
    /// the king's transit squares are attacked is resolved by the legality
    /// filter, which has the opponent's full pseudo-legal move set in hand.
    pub(crate) fn castle_moves(&self, moves: &mut Vec<Move>) {
        let home_file = match self.to_move {
            Color::White => 4,
            Color::Black => 3,
        };
        let from = Square::at(home_file, 7);
        let Some(king) = self.piece_at(from) else {
            return;
        };
        if king.piece != Piece::King || king.color != self.to_move || king.has_moved {
            return;
        }

        let mut candidates: Vec<Move> = Vec::with_capacity(2);
        for rook_file in [0usize, 7usize] {
            let Some(rook) = self.piece_at(Square::at(rook_file, 7)) else {
                continue;
            };
            if rook.piece != Piece::Rook || rook.color != self.to_move || rook.has_moved {
                continue;
            }
            let (between, to_file) = if rook_file == 0 {
                (1..home_file, home_file - 2)
            } else {
                (home_file + 1..7, home_file + 2)
            };
            if between.clone().any(|f| self.tag_at(Square::at(f, 7)).is_some()) {
                continue;
            }
            // The board rotates with the mover, so board-relative rook files
            // 0 and 7 swap meaning between the colors.
            let flag = match (self.to_move, rook_file) {
                (Color::White, 0) | (Color::Black, 7) => MoveFlag::CastleQueenside,
                _ => MoveFlag::CastleKingside,
            };
            candidates.push(Move::tagged(from, Square::at(to_file, 7), flag));
        }

        if !candidates.is_empty() && !self.in_check() {
            moves.append(&mut candidates);
        }
    }
}
