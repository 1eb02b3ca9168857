//! Compact piece tag codec.
//!
//! A piece state is stored in a snapshot as a single integer
//! `kind_index * 10 + flags`, where the flags digit packs three bits:
//! bit 0 = color (White 0, Black 1), bit 1 = has ever moved, bit 2 = just
//! double-moved. The encoding is bijective over valid piece states, so a
//! snapshot can be copied and compared without carrying any live identity.

use super::error::TagError;
use super::types::{Color, Piece, PieceState};

const COLOR_BIT: u8 = 0b001;
const MOVED_BIT: u8 = 0b010;
const DOUBLE_BIT: u8 = 0b100;

impl PieceState {
    /// Encode this piece state as a compact tag.
    #[must_use]
    pub fn to_tag(self) -> u8 {
        let mut flags = self.color.bit();
        if self.has_moved {
            flags |= MOVED_BIT;
        }
        if self.double_moved {
            flags |= DOUBLE_BIT;
        }
        self.piece.index() as u8 * 10 + flags
    }

    /// Decode a compact tag back into a piece state.
    ///
    /// Total over the legal tag range; reconstructs color and both history
    /// flags exactly. An out-of-range tag indicates a corrupted snapshot and
    /// is reported as [`TagError::OutOfRange`].
    pub fn from_tag(tag: u8) -> Result<PieceState, TagError> {
        let flags = tag % 10;
        let piece = Piece::from_index(tag / 10).ok_or(TagError::OutOfRange { tag })?;
        if flags > (COLOR_BIT | MOVED_BIT | DOUBLE_BIT) {
            return Err(TagError::OutOfRange { tag });
        }
        let color = if flags & COLOR_BIT == 0 {
            Color::White
        } else {
            Color::Black
        };
        Ok(PieceState {
            piece,
            color,
            has_moved: flags & MOVED_BIT != 0,
            double_moved: flags & DOUBLE_BIT != 0,
        })
    }
}
