//! Negamax search with alpha-beta pruning.
//!
//! The search runs against a wall-clock budget and a cooperative stop flag.
//! Interruptions unwind through `Result` rather than a shared slot: the root
//! always holds a best-so-far move, so a timeout still yields a playable
//! answer while a cancellation yields none.

mod constants;
mod move_order;

use std::time::{Duration, Instant};

use crate::board::eval::{self, EvalMode};
use crate::board::snapshot::PositionSnapshot;
use crate::board::types::Move;
use crate::sync::StopFlag;

use constants::{FAST_EVAL_RESERVE, NO_REPLY_SCORE, SCORE_INFINITY};

/// How a search task ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SearchOutcome {
    /// The full tree was searched within budget.
    Completed(Move),
    /// The budget ran out; this is the best move found so far.
    ForcedByTimeout(Move),
    /// The task was cancelled, or the root had no legal moves.
    Cancelled,
}

impl SearchOutcome {
    /// The move to play, if the search produced one.
    #[must_use]
    pub fn chosen_move(&self) -> Option<Move> {
        match *self {
            SearchOutcome::Completed(mv) | SearchOutcome::ForcedByTimeout(mv) => Some(mv),
            SearchOutcome::Cancelled => None,
        }
    }
}

/// Why a search tree was abandoned mid-walk.
enum Interrupt {
    Stopped,
    OutOfTime,
}

struct SearchContext<'a> {
    stop: &'a StopFlag,
    deadline: Instant,
    nodes: u64,
}

/// Search `root` to the given depth within the time budget.
///
/// The first legal root move is adopted as the answer before any deeper
/// work happens, so even an immediate timeout returns something legal.
#[must_use]
pub fn find_best_move(
    root: &PositionSnapshot,
    depth: u32,
    budget: Duration,
    stop: &StopFlag,
) -> SearchOutcome {
    let deadline = Instant::now() + budget;
    let mut moves = root.legal_moves();
    if moves.is_empty() {
        log::warn!("search started with no legal moves for {}", root.to_move());
        return SearchOutcome::Cancelled;
    }
    move_order::order_moves(root, &mut moves);
    log::info!(
        "searching {} root moves to depth {depth} within {budget:?}",
        moves.len()
    );

    let mut ctx = SearchContext {
        stop,
        deadline,
        nodes: 0,
    };
    let mut best = moves[0];
    let mut alpha = -SCORE_INFINITY;
    let beta = SCORE_INFINITY;

    for mv in moves {
        let child = root.child(mv);
        match ctx.negamax(&child, depth.saturating_sub(1), -beta, -alpha) {
            Ok(score) => {
                let score = -score;
                log::trace!("root {} scored {score}", mv.algebraic(root.to_move()));
                if score > alpha {
                    alpha = score;
                    best = mv;
                }
            }
            Err(Interrupt::OutOfTime) => {
                log::info!(
                    "search out of time after {} nodes, playing {}",
                    ctx.nodes,
                    best.algebraic(root.to_move())
                );
                return SearchOutcome::ForcedByTimeout(best);
            }
            Err(Interrupt::Stopped) => {
                log::info!("search cancelled after {} nodes", ctx.nodes);
                return SearchOutcome::Cancelled;
            }
        }
    }

    log::info!(
        "search completed: {} scores {alpha} after {} nodes",
        best.algebraic(root.to_move()),
        ctx.nodes
    );
    SearchOutcome::Completed(best)
}

impl SearchContext<'_> {
    fn negamax(
        &mut self,
        node: &PositionSnapshot,
        depth: u32,
        mut alpha: i32,
        beta: i32,
    ) -> Result<i32, Interrupt> {
        if self.stop.is_stopped() {
            return Err(Interrupt::Stopped);
        }
        let remaining = self
            .deadline
            .saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(Interrupt::OutOfTime);
        }
        self.nodes += 1;

        if depth == 0 {
            let mode = if remaining < FAST_EVAL_RESERVE {
                EvalMode::Fast
            } else {
                EvalMode::Full
            };
            return Ok(eval::evaluate(node, mode));
        }

        let mut moves = node.legal_moves();
        if moves.is_empty() {
            return Ok(NO_REPLY_SCORE);
        }
        move_order::order_moves(node, &mut moves);

        for mv in moves {
            let child = node.child(mv);
            let score = -self.negamax(&child, depth - 1, -beta, -alpha)?;
            if score >= beta {
                return Ok(beta);
            }
            if score > alpha {
                alpha = score;
            }
        }
        Ok(alpha)
    }
}
