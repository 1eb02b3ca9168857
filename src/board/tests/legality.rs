use super::sq;
use crate::board::error::PositionError;
use crate::board::types::{Color, Piece};
use crate::board::{Position, PositionBuilder};

#[test]
fn starting_position_is_not_check() {
    let position = Position::new();
    assert!(!position.is_in_check(Color::White).unwrap());
    assert!(!position.is_in_check(Color::Black).unwrap());
}

#[test]
fn rook_gives_check_along_open_file() {
    let position = PositionBuilder::new()
        .piece(sq(4, 7), Color::White, Piece::King)
        .piece(sq(4, 0), Color::Black, Piece::Rook)
        .piece(sq(0, 0), Color::Black, Piece::King)
        .build();
    assert!(position.is_in_check(Color::White).unwrap());
    assert!(!position.is_in_check(Color::Black).unwrap());
}

#[test]
fn pinned_piece_cannot_leave_the_line() {
    // Knight shields the king from a rook on the same file.
    let position = PositionBuilder::new()
        .piece(sq(4, 7), Color::White, Piece::King)
        .piece(sq(4, 5), Color::White, Piece::Knight)
        .piece(sq(4, 0), Color::Black, Piece::Rook)
        .piece(sq(0, 0), Color::Black, Piece::King)
        .build();
    assert!(!position.legal_moves().iter().any(|mv| mv.from == sq(4, 5)));
}

#[test]
fn king_cannot_step_into_attack() {
    let position = PositionBuilder::new()
        .piece(sq(4, 7), Color::White, Piece::King)
        .piece(sq(3, 0), Color::Black, Piece::Rook)
        .piece(sq(0, 0), Color::Black, Piece::King)
        .build();
    // File 3 is covered by the rook.
    assert!(!position.legal_moves().iter().any(|mv| mv.to.file() == 3));
}

#[test]
fn check_must_be_answered() {
    let position = PositionBuilder::new()
        .piece(sq(4, 7), Color::White, Piece::King)
        .piece(sq(0, 7), Color::White, Piece::Rook)
        .piece(sq(4, 0), Color::Black, Piece::Rook)
        .piece(sq(0, 0), Color::Black, Piece::King)
        .build();
    assert!(position.is_in_check(Color::White).unwrap());
    for mv in position.legal_moves() {
        let mut next = position.clone();
        next.apply_move(mv, None).unwrap();
        assert!(!next.is_in_check(Color::White).unwrap(), "{mv} leaves check");
    }
}

#[test]
fn back_rank_mate_is_checkmate() {
    // Black to move: rook on the back rank, own king sealing the escape.
    let position = PositionBuilder::new()
        .side_to_move(Color::Black)
        .piece(sq(6, 7), Color::Black, Piece::King)
        .piece(sq(6, 5), Color::White, Piece::King)
        .piece(sq(0, 7), Color::White, Piece::Rook)
        .build();
    assert!(position.is_in_check(Color::Black).unwrap());
    assert!(position.legal_moves().is_empty());
    assert!(position.is_checkmate(Color::Black).unwrap());
    assert!(!position.is_stalemate(Color::Black).unwrap());
}

#[test]
fn cornered_king_is_stalemated() {
    let position = PositionBuilder::new()
        .side_to_move(Color::Black)
        .piece(sq(7, 7), Color::Black, Piece::King)
        .piece(sq(5, 6), Color::White, Piece::Queen)
        .piece(sq(5, 5), Color::White, Piece::King)
        .build();
    assert!(!position.is_in_check(Color::Black).unwrap());
    assert!(position.legal_moves().is_empty());
    assert!(position.is_stalemate(Color::Black).unwrap());
    assert!(!position.is_checkmate(Color::Black).unwrap());
}

#[test]
fn state_queries_need_a_king() {
    let position = PositionBuilder::new()
        .piece(sq(4, 7), Color::White, Piece::King)
        .build();
    assert_eq!(
        position.is_in_check(Color::Black),
        Err(PositionError::MissingKing {
            color: Color::Black
        })
    );
}
