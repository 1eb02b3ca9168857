//! Static evaluation.
//!
//! Scores are from the mover's perspective and zero-sum by construction:
//! every term is computed per side and the result is mover minus opponent,
//! so `evaluate(snap, mode) == -evaluate(snap.rotated(), mode)` exactly.

mod tables;

use super::snapshot::PositionSnapshot;
use super::types::Piece;

/// Penalty applied while one's own king is in check.
const CHECK_PENALTY: i32 = 300;
/// Bonus per currently legal move.
const MOBILITY_BONUS: i32 = 10;
const BISHOP_PAIR_BONUS: i32 = 50;
const ROOK_PAIR_BONUS: i32 = -30;
const DOUBLED_PAWN_PENALTY: i32 = -50;
const ISOLATED_PAWN_PENALTY: i32 = -70;
const CENTRAL_PAWN_BONUS: i32 = 30;

/// Evaluation speed mode, selected by the search from its remaining budget.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EvalMode {
    /// Material, king presence, mobility and check only.
    Fast,
    /// Fast terms plus piece-square tables, piece pairs and pawn structure.
    Full,
}

/// Score a position for its side to move.
#[must_use]
pub fn evaluate(snapshot: &PositionSnapshot, mode: EvalMode) -> i32 {
    side_score(snapshot, mode) - side_score(&snapshot.rotated(), mode)
}

/// Score the terms belonging to the snapshot's mover alone. The rotated
/// snapshot yields the opponent's terms with the same table orientation.
fn side_score(snapshot: &PositionSnapshot, mode: EvalMode) -> i32 {
    let mover = snapshot.to_move();
    let mut score = 0;
    let mut bishops = 0;
    let mut rooks = 0;
    let mut pawn_files = [0u8; 8];

    for (square, state) in snapshot.occupied() {
        if state.color != mover {
            continue;
        }
        // King material is the presence constant; everything else is
        // ordinary exchange value.
        score += state.piece.value();
        if mode == EvalMode::Full {
            score += tables::square_bonus(state.piece, square);
            match state.piece {
                Piece::Bishop => bishops += 1,
                Piece::Rook => rooks += 1,
                Piece::Pawn => pawn_files[square.file()] += 1,
                _ => {}
            }
        }
    }

    if mode == EvalMode::Full {
        if bishops == 2 {
            score += BISHOP_PAIR_BONUS;
        }
        if rooks == 2 {
            score += ROOK_PAIR_BONUS;
        }
        score += pawn_structure(&pawn_files);
    }

    score += MOBILITY_BONUS * snapshot.legal_moves().len() as i32;
    if snapshot.in_check() {
        score -= CHECK_PENALTY;
    }
    score
}

fn pawn_structure(files: &[u8; 8]) -> i32 {
    let mut score = 0;
    for (file, &count) in files.iter().enumerate() {
        if count == 0 {
            continue;
        }
        score += i32::from(count - 1) * DOUBLED_PAWN_PENALTY;
        if (2..=5).contains(&file) {
            score += i32::from(count) * CENTRAL_PAWN_BONUS;
        }
        let left = if file > 0 { files[file - 1] } else { 0 };
        let right = files.get(file + 1).copied().unwrap_or(0);
        if left == 0 && right == 0 {
            score += ISOLATED_PAWN_PENALTY;
        }
    }
    score
}
