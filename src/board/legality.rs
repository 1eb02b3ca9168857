//! Legality filtering and check detection.
//!
//! A pseudo-legal candidate becomes legal by surviving simulation: apply it
//! to a disposable child snapshot and verify the mover's own king is not
//! attacked afterwards. Provisional castles additionally require the king's
//! whole transit range to be free of opposing attacks.

use super::snapshot::PositionSnapshot;
use super::types::{Move, Square};

impl PositionSnapshot {
    /// Whether the mover's own king is attacked by an opposing pseudo-legal
    /// move. Kingless positions (transient inside search) report `false`.
    #[must_use]
    pub fn in_check(&self) -> bool {
        let Some(king) = self.king_square(self.to_move) else {
            return false;
        };
        let target = king.rotated();
        self.rotated()
            .piece_moves()
            .iter()
            .any(|mv| mv.to == target)
    }

    /// Whether the mover's pieces attack the opposing king.
    pub(crate) fn attacks_enemy_king(&self) -> bool {
        let Some(king) = self.king_square(self.to_move.opposite()) else {
            return false;
        };
        self.piece_moves().iter().any(|mv| mv.to == king)
    }

    /// Fully legal moves for the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let pseudo = self.pseudo_legal_moves();

        // Squares the opponent could move to, needed only when a
        // provisional castle survived generation.
        let attacked = pseudo
            .iter()
            .any(Move::is_castle)
            .then(|| self.attacked_squares());

        let mut legal = Vec::with_capacity(pseudo.len());
        for mv in pseudo {
            if mv.is_castle() {
                if let Some(map) = &attacked {
                    let lo = mv.from.file().min(mv.to.file());
                    let hi = mv.from.file().max(mv.to.file());
                    // Transit is inclusive of the king's start and end.
                    if (lo..=hi).any(|file| map[file][7]) {
                        continue;
                    }
                }
            }
            // In the child the turn has passed, so "enemy king" is the
            // original mover's king.
            if self.child(mv).attacks_enemy_king() {
                continue;
            }
            legal.push(mv);
        }
        legal
    }

    /// Destinations of the opponent's full pseudo-legal (non-castle) move
    /// set, mapped into this snapshot's orientation.
    fn attacked_squares(&self) -> [[bool; 8]; 8] {
        let mut map = [[false; 8]; 8];
        for mv in self.rotated().piece_moves() {
            let square: Square = mv.to.rotated();
            map[square.file()][square.rank()] = true;
        }
        map
    }
}
