use super::sq;
use crate::board::snapshot::PositionSnapshot;
use crate::board::types::{Color, Move, MoveFlag, Piece, PieceState};
use crate::board::{Position, PositionBuilder};

fn perft(snapshot: &PositionSnapshot, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    snapshot
        .legal_moves()
        .into_iter()
        .map(|mv| perft(&snapshot.child(mv), depth - 1))
        .sum()
}

#[test]
fn starting_position_has_twenty_moves() {
    assert_eq!(Position::new().legal_moves().len(), 20);
}

#[test]
fn perft_matches_known_counts() {
    let root = Position::new().snapshot();
    assert_eq!(perft(&root, 1), 20);
    assert_eq!(perft(&root, 2), 400);
    assert_eq!(perft(&root, 3), 8_902);
}

#[test]
fn pawn_double_advance_is_tagged() {
    let moves = Position::new().legal_moves();
    let double = Move::tagged(sq(4, 6), sq(4, 4), MoveFlag::DoubleAdvance);
    let single = Move::plain(sq(4, 6), sq(4, 5));
    assert!(moves.contains(&double));
    assert!(moves.contains(&single));
}

#[test]
fn moved_pawn_cannot_double_advance() {
    let position = PositionBuilder::new()
        .piece(sq(4, 7), Color::White, Piece::King)
        .piece(sq(3, 0), Color::Black, Piece::King)
        .piece_state(sq(4, 6), PieceState::new(Piece::Pawn, Color::White).moved())
        .build();
    let moves = position.legal_moves();
    assert!(moves.contains(&Move::plain(sq(4, 6), sq(4, 5))));
    assert!(!moves
        .iter()
        .any(|mv| mv.from == sq(4, 6) && mv.to == sq(4, 4)));
}

#[test]
fn blocked_pawn_has_no_advance() {
    let position = PositionBuilder::new()
        .piece(sq(4, 7), Color::White, Piece::King)
        .piece(sq(3, 0), Color::Black, Piece::King)
        .piece(sq(4, 6), Color::White, Piece::Pawn)
        .piece(sq(4, 5), Color::Black, Piece::Knight)
        .build();
    assert!(!position.legal_moves().iter().any(|mv| mv.from == sq(4, 6)));
}

#[test]
fn knight_reaches_eight_squares_from_center() {
    let position = PositionBuilder::new()
        .piece(sq(4, 7), Color::White, Piece::King)
        .piece(sq(0, 0), Color::Black, Piece::King)
        .piece(sq(3, 4), Color::White, Piece::Knight)
        .build();
    let knight_moves: Vec<_> = position
        .legal_moves()
        .into_iter()
        .filter(|mv| mv.from == sq(3, 4))
        .collect();
    assert_eq!(knight_moves.len(), 8);
}

#[test]
fn sliders_stop_at_blockers() {
    let position = PositionBuilder::new()
        .piece(sq(7, 7), Color::White, Piece::King)
        .piece(sq(0, 0), Color::Black, Piece::King)
        .piece(sq(3, 4), Color::White, Piece::Rook)
        .piece(sq(3, 2), Color::Black, Piece::Pawn)
        .piece(sq(5, 4), Color::White, Piece::Pawn)
        .build();
    let rook_moves: Vec<_> = position
        .legal_moves()
        .into_iter()
        .filter(|mv| mv.from == sq(3, 4))
        .collect();
    // Up the file: stops on the enemy pawn, capturing it.
    assert!(rook_moves.contains(&Move::plain(sq(3, 4), sq(3, 2))));
    assert!(!rook_moves.iter().any(|mv| mv.to == sq(3, 1)));
    // Along the rank: own pawn blocks file 5 and beyond.
    assert!(rook_moves.contains(&Move::plain(sq(3, 4), sq(4, 4))));
    assert!(!rook_moves.iter().any(|mv| mv.to == sq(5, 4)));
}

#[test]
fn en_passant_requires_fresh_double_move() {
    let fresh = PieceState {
        piece: Piece::Pawn,
        color: Color::Black,
        has_moved: true,
        double_moved: true,
    };
    let position = PositionBuilder::new()
        .piece(sq(4, 7), Color::White, Piece::King)
        .piece(sq(3, 0), Color::Black, Piece::King)
        .piece_state(sq(4, 3), PieceState::new(Piece::Pawn, Color::White).moved())
        .piece_state(sq(3, 3), fresh)
        .build();
    let ep = Move::tagged(sq(4, 3), sq(3, 2), MoveFlag::EnPassant);
    assert!(position.legal_moves().contains(&ep));

    // Same shape but the flag has expired: no capture.
    let stale = PieceState {
        double_moved: false,
        ..fresh
    };
    let position = PositionBuilder::new()
        .piece(sq(4, 7), Color::White, Piece::King)
        .piece(sq(3, 0), Color::Black, Piece::King)
        .piece_state(sq(4, 3), PieceState::new(Piece::Pawn, Color::White).moved())
        .piece_state(sq(3, 3), stale)
        .build();
    assert!(!position.legal_moves().contains(&ep));
}
