//! Chess rules engine and time-boxed negamax search core.
//!
//! The crate is split into two halves:
//!
//! - [`board`]: the position data model ([`Position`] for the live,
//!   caller-owned board and [`PositionSnapshot`] for the cheap detached copy
//!   consumed by search), pseudo-legal move generation, the legality filter,
//!   and the static evaluation function.
//! - [`engine`]: the search controller, which runs a depth-limited negamax
//!   with alpha-beta pruning on its own thread under a wall-clock budget and
//!   hands back a single [`SearchOutcome`].
//!
//! The board is always oriented for the side to move: its pieces occupy the
//! high ranks and its pawns advance toward rank 0. Applying a half-move
//! rotates the whole grid, so move generation never needs per-color
//! direction arithmetic.

pub mod board;
pub mod engine;
pub mod sync;

pub use board::search::SearchOutcome;
pub use board::{
    Color, Move, MoveEffect, MoveFlag, Piece, PieceState, Position, PositionBuilder,
    PositionSnapshot, Square,
};
pub use engine::{SearchConfig, SearchController, SearchTask};
