//! Knight move generation.

use super::super::snapshot::PositionSnapshot;
use super::super::types::{Move, Square};
use super::tables::KNIGHT_TARGETS;

impl PositionSnapshot {
    pub(crate) fn knight_moves(&self, from: Square, moves: &mut Vec<Move>) {
        for &to in &KNIGHT_TARGETS[from.file()][from.rank()] {
            match self.piece_at(to) {
                Some(target) if target.color == self.to_move => {}
                _ => moves.push(Move::plain(from, to)),
            }
        }
    }
}
