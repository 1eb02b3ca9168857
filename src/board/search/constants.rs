//! Tuning constants for the negamax search.

use std::time::Duration;

/// Window bound, well above any reachable evaluation.
pub(crate) const SCORE_INFINITY: i32 = 1_000_000;

/// Score assigned to a node whose mover has no legal reply.
pub(crate) const NO_REPLY_SCORE: i32 = -10_000;

/// Once less than this remains of the budget, leaves switch to the
/// fast evaluation so the iteration can still finish in time.
pub(crate) const FAST_EVAL_RESERVE: Duration = Duration::from_millis(500);
