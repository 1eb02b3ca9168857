//! Move-pattern tables.
//!
//! Every piece kind's movement is data: steppers use fixed offset lists
//! (expanded once into per-square destination tables), sliders use a
//! kind-indexed ray direction table.

use once_cell::sync::Lazy;

use crate::board::types::Square;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const BISHOP_RAYS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ROOK_RAYS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const QUEEN_RAYS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Ray directions per piece kind index; empty for non-sliders.
pub(crate) const RAY_TABLE: [&[(i8, i8)]; 6] = [
    &[],
    &[],
    &BISHOP_RAYS,
    &ROOK_RAYS,
    &QUEEN_RAYS,
    &[],
];

/// On-board knight destinations for every source square, `[file][rank]`.
pub(crate) static KNIGHT_TARGETS: Lazy<[[Vec<Square>; 8]; 8]> =
    Lazy::new(|| expand_offsets(&KNIGHT_OFFSETS));

/// On-board king step destinations for every source square, `[file][rank]`.
pub(crate) static KING_TARGETS: Lazy<[[Vec<Square>; 8]; 8]> =
    Lazy::new(|| expand_offsets(&KING_OFFSETS));

fn expand_offsets(offsets: &[(i8, i8)]) -> [[Vec<Square>; 8]; 8] {
    std::array::from_fn(|file| {
        std::array::from_fn(|rank| {
            offsets
                .iter()
                .filter_map(|&(df, dr)| Square::at(file, rank).offset(df, dr))
                .collect()
        })
    })
}
