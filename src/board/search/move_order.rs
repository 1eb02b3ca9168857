//! Move ordering for the alpha-beta search.

use crate::board::snapshot::PositionSnapshot;
use crate::board::types::{Move, Piece};

/// Sort candidate moves so the likeliest cutoffs come first: biggest
/// capture victim, then special moves, then proximity to the center files.
pub(crate) fn order_moves(snapshot: &PositionSnapshot, moves: &mut [Move]) {
    moves.sort_by_key(|mv| {
        (
            -captured_value(snapshot, mv),
            !is_special(snapshot, mv),
            center_distance(mv),
        )
    });
}

fn captured_value(snapshot: &PositionSnapshot, mv: &Move) -> i32 {
    if mv.is_en_passant() {
        return Piece::Pawn.value();
    }
    match snapshot.piece_at(mv.to) {
        Some(state) => state.piece.value(),
        None => -1,
    }
}

fn is_special(snapshot: &PositionSnapshot, mv: &Move) -> bool {
    if mv.flag.is_some() {
        return true;
    }
    // Promotions carry no flag; recognise them by the pawn reaching
    // the far rank.
    mv.to.rank() == 0
        && snapshot
            .piece_at(mv.from)
            .is_some_and(|state| state.piece == Piece::Pawn)
}

fn center_distance(mv: &Move) -> i32 {
    let sum = (mv.from.file() + mv.to.file()) as i32;
    (sum - 7).abs()
}
