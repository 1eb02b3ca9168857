//! Detached position snapshots for search.
//!
//! A [`PositionSnapshot`] stores the board as compact piece tags plus the
//! side to move. It is a plain `Copy` value: search creates one from the
//! live [`Position`](super::Position) at task start and then derives child
//! snapshots freely, millions of times per search, with no shared state.
//!
//! Like the live position, a snapshot is always oriented for its side to
//! move; deriving a child applies the move and rotates the grid.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{Color, Move, MoveFlag, Piece, PieceState, Square};

/// A fully independent, copyable view of a position.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionSnapshot {
    /// Compact tags, indexed `[file][rank]`.
    pub(crate) squares: [[Option<u8>; 8]; 8],
    pub(crate) to_move: Color,
}

/// Decode a tag that was written by this crate. A failure here means the
/// snapshot was corrupted, which is an engine defect; fail fast.
pub(crate) fn decode(tag: u8) -> PieceState {
    match PieceState::from_tag(tag) {
        Ok(state) => state,
        Err(err) => panic!("corrupt snapshot: {err}"),
    }
}

impl PositionSnapshot {
    pub(crate) fn from_grid(squares: [[Option<u8>; 8]; 8], to_move: Color) -> Self {
        PositionSnapshot { squares, to_move }
    }

    /// The side whose turn it is (and whose pieces sit at ranks 6-7).
    #[inline]
    #[must_use]
    pub const fn to_move(&self) -> Color {
        self.to_move
    }

    #[inline]
    #[must_use]
    pub(crate) fn tag_at(&self, square: Square) -> Option<u8> {
        self.squares[square.file()][square.rank()]
    }

    /// The piece occupying a square, if any.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<PieceState> {
        self.tag_at(square).map(decode)
    }

    /// Iterate over occupied squares in file-major, rank-minor order.
    pub(crate) fn occupied(&self) -> impl Iterator<Item = (Square, PieceState)> + '_ {
        (0..8).flat_map(move |file| {
            (0..8).filter_map(move |rank| {
                let square = Square::at(file, rank);
                self.piece_at(square).map(|state| (square, state))
            })
        })
    }

    /// The square holding this color's king, scanning file-major.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.occupied()
            .find(|(_, state)| state.piece == Piece::King && state.color == color)
            .map(|(square, _)| square)
    }

    /// The same physical position viewed from the other side: the grid is
    /// rotated 180 degrees and the nominal mover flips.
    ///
    /// Rotation is an involution: `snap.rotated().rotated() == snap`.
    #[must_use]
    pub fn rotated(&self) -> Self {
        let mut squares = [[None; 8]; 8];
        for file in 0..8 {
            for rank in 0..8 {
                squares[7 - file][7 - rank] = self.squares[file][rank];
            }
        }
        PositionSnapshot {
            squares,
            to_move: self.to_move.opposite(),
        }
    }

    /// Derive the snapshot that results from the mover playing `mv`:
    /// the move is applied with all its side effects, pawns reaching the far
    /// rank are promoted to queens (search never under-promotes), and the
    /// board is rotated for the next mover.
    #[must_use]
    pub(crate) fn child(&self, mv: Move) -> Self {
        let mut next = *self;
        next.apply_raw(mv);
        next.rotated()
    }

    /// Apply a move to the grid in the current orientation.
    fn apply_raw(&mut self, mv: Move) {
        let Some(tag) = self.squares[mv.from.file()][mv.from.rank()].take() else {
            debug_assert!(false, "move from empty square {}", mv.from);
            return;
        };
        let mut piece = decode(tag);
        if piece.piece.tracks_movement() {
            piece.has_moved = true;
        }
        piece.double_moved = false;

        // Every pawn's double-moved flag dies one half-move after it is set.
        self.clear_double_moves();

        match mv.flag {
            Some(MoveFlag::DoubleAdvance) => piece.double_moved = true,
            Some(MoveFlag::EnPassant) => {
                // The captured pawn sits beside the source, not on the
                // destination.
                self.squares[mv.to.file()][mv.from.rank()] = None;
            }
            Some(MoveFlag::CastleKingside) | Some(MoveFlag::CastleQueenside) => {
                self.relocate_castle_rook(mv);
            }
            None => {}
        }

        if piece.piece == Piece::Pawn && mv.to.rank() == 0 {
            piece.piece = Piece::Queen;
        }
        self.squares[mv.to.file()][mv.to.rank()] = Some(piece.to_tag());
    }

    fn clear_double_moves(&mut self) {
        for file in 0..8 {
            for rank in 0..8 {
                if let Some(tag) = self.squares[file][rank] {
                    let mut state = decode(tag);
                    if state.piece == Piece::Pawn && state.double_moved {
                        state.double_moved = false;
                        self.squares[file][rank] = Some(state.to_tag());
                    }
                }
            }
        }
    }

    /// Move the rook matching a castle: the rook on the side the king moved
    /// toward jumps to the square the king crossed.
    fn relocate_castle_rook(&mut self, mv: Move) {
        let (rook_from, rook_to) = if mv.to.file() < mv.from.file() {
            (0, mv.to.file() + 1)
        } else {
            (7, mv.to.file() - 1)
        };
        if let Some(tag) = self.squares[rook_from][7].take() {
            let rook = decode(tag).moved();
            self.squares[rook_to][7] = Some(rook.to_tag());
        }
    }
}
