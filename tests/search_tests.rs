//! End-to-end tests for the search and its controller.

use std::time::Duration;

use chesskit::board::search::find_best_move;
use chesskit::sync::StopFlag;
use chesskit::{
    Color, Piece, Position, PositionBuilder, SearchConfig, SearchController, SearchOutcome, Square,
};

fn sq(file: usize, rank: usize) -> Square {
    Square::new(file, rank).unwrap()
}

#[test]
fn exhausted_budget_still_yields_a_legal_move() {
    let position = Position::new();
    let outcome = find_best_move(&position.snapshot(), 4, Duration::ZERO, &StopFlag::new());
    match outcome {
        SearchOutcome::ForcedByTimeout(mv) => {
            assert!(position.legal_moves().contains(&mv));
        }
        other => panic!("expected a timeout fallback, got {other:?}"),
    }
}

#[test]
fn search_finds_a_free_queen_at_depth_one() {
    let position = PositionBuilder::new()
        .piece(sq(4, 7), Color::White, Piece::King)
        .piece(sq(0, 0), Color::Black, Piece::King)
        .piece(sq(4, 4), Color::White, Piece::Rook)
        .piece(sq(4, 1), Color::Black, Piece::Queen)
        .build();
    let outcome = find_best_move(
        &position.snapshot(),
        1,
        Duration::from_secs(5),
        &StopFlag::new(),
    );
    match outcome {
        SearchOutcome::Completed(mv) => {
            assert_eq!(mv.from, sq(4, 4));
            assert_eq!(mv.to, sq(4, 1));
        }
        other => panic!("expected a completed search, got {other:?}"),
    }
}

#[test]
fn stop_flag_cancels_the_search() {
    let stop = StopFlag::new();
    stop.stop();
    let outcome = find_best_move(
        &Position::new().snapshot(),
        3,
        Duration::from_secs(30),
        &stop,
    );
    assert_eq!(outcome, SearchOutcome::Cancelled);
}

#[test]
fn search_with_no_legal_moves_is_cancelled() {
    // Stalemated side to move.
    let position = PositionBuilder::new()
        .side_to_move(Color::Black)
        .piece(sq(7, 7), Color::Black, Piece::King)
        .piece(sq(5, 6), Color::White, Piece::Queen)
        .piece(sq(5, 5), Color::White, Piece::King)
        .build();
    let outcome = find_best_move(
        &position.snapshot(),
        2,
        Duration::from_secs(1),
        &StopFlag::new(),
    );
    assert_eq!(outcome, SearchOutcome::Cancelled);
}

#[test]
fn controller_cancels_an_in_flight_search() {
    let mut controller = SearchController::new();
    controller.start_search(
        Position::new().snapshot(),
        SearchConfig::new(5, Duration::from_secs(60)),
    );
    assert!(controller.is_thinking());
    let outcome = controller.cancel_current();
    assert_eq!(outcome, Some(SearchOutcome::Cancelled));
    assert!(!controller.is_thinking());
}

#[test]
fn controller_restarts_cleanly() {
    let mut controller = SearchController::new();
    let snapshot = Position::new().snapshot();
    controller.start_search(snapshot, SearchConfig::new(5, Duration::from_secs(60)));
    controller.start_search(snapshot, SearchConfig::relaxed());
    let outcome = controller.wait().unwrap();
    let mv = outcome.chosen_move().unwrap();
    assert!(Position::new().legal_moves().contains(&mv));
}

#[test]
fn idle_controller_has_nothing_to_wait_for() {
    let mut controller = SearchController::new();
    assert!(!controller.is_thinking());
    assert_eq!(controller.wait(), None);
    assert_eq!(controller.cancel_current(), None);
}
