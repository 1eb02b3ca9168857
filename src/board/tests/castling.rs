use super::sq;
use crate::board::types::{Color, Move, MoveFlag, Piece, PieceState};
use crate::board::{Position, PositionBuilder};

fn castle_ready(to_move: Color) -> PositionBuilder {
    let home = match to_move {
        Color::White => 4,
        Color::Black => 3,
    };
    PositionBuilder::new()
        .side_to_move(to_move)
        .piece(sq(home, 7), to_move, Piece::King)
        .piece(sq(0, 7), to_move, Piece::Rook)
        .piece(sq(7, 7), to_move, Piece::Rook)
        .piece(sq(4, 0), to_move.opposite(), Piece::King)
}

#[test]
fn white_castles_both_ways() {
    let moves = castle_ready(Color::White).build().legal_moves();
    assert!(moves.contains(&Move::tagged(sq(4, 7), sq(6, 7), MoveFlag::CastleKingside)));
    assert!(moves.contains(&Move::tagged(sq(4, 7), sq(2, 7), MoveFlag::CastleQueenside)));
}

#[test]
fn black_side_flags_are_mirrored() {
    // Black's king starts at file 3 in its own frame, so the rook on
    // file 0 is the kingside rook.
    let moves = castle_ready(Color::Black).build().legal_moves();
    assert!(moves.contains(&Move::tagged(sq(3, 7), sq(1, 7), MoveFlag::CastleKingside)));
    assert!(moves.contains(&Move::tagged(sq(3, 7), sq(5, 7), MoveFlag::CastleQueenside)));
}

#[test]
fn moved_king_cannot_castle() {
    let position = castle_ready(Color::White)
        .piece_state(sq(4, 7), PieceState::new(Piece::King, Color::White).moved())
        .build();
    assert!(!position.legal_moves().iter().any(Move::is_castle));
}

#[test]
fn moved_rook_blocks_its_side_only() {
    let position = castle_ready(Color::White)
        .piece_state(sq(0, 7), PieceState::new(Piece::Rook, Color::White).moved())
        .build();
    let moves = position.legal_moves();
    assert!(moves.contains(&Move::tagged(sq(4, 7), sq(6, 7), MoveFlag::CastleKingside)));
    assert!(!moves.contains(&Move::tagged(sq(4, 7), sq(2, 7), MoveFlag::CastleQueenside)));
}

#[test]
fn occupied_gap_blocks_castling() {
    let position = castle_ready(Color::White)
        .piece(sq(1, 7), Color::White, Piece::Knight)
        .build();
    let moves = position.legal_moves();
    assert!(moves.contains(&Move::tagged(sq(4, 7), sq(6, 7), MoveFlag::CastleKingside)));
    assert!(!moves.contains(&Move::tagged(sq(4, 7), sq(2, 7), MoveFlag::CastleQueenside)));
}

#[test]
fn no_castling_out_of_check() {
    let position = castle_ready(Color::White)
        .piece(sq(4, 0), Color::Black, Piece::Rook)
        .piece(sq(0, 0), Color::Black, Piece::King)
        .build();
    assert!(!position.legal_moves().iter().any(Move::is_castle));
}

#[test]
fn no_castling_through_attack() {
    // Black rook covers file 5, the square the king crosses kingside.
    let position = castle_ready(Color::White)
        .piece(sq(5, 0), Color::Black, Piece::Rook)
        .build();
    let moves = position.legal_moves();
    assert!(!moves.contains(&Move::tagged(sq(4, 7), sq(6, 7), MoveFlag::CastleKingside)));
    assert!(moves.contains(&Move::tagged(sq(4, 7), sq(2, 7), MoveFlag::CastleQueenside)));
}

#[test]
fn castling_relocates_the_rook() {
    let mut position = castle_ready(Color::White).build();
    let castle = Move::tagged(sq(4, 7), sq(6, 7), MoveFlag::CastleKingside);
    position.apply_move(castle, None).unwrap();

    // The board has rotated for Black; read White's pieces back through
    // the rotated coordinates.
    let king = position.piece_at(sq(6, 7).rotated()).unwrap();
    assert_eq!(king.piece, Piece::King);
    assert!(king.has_moved);
    let rook = position.piece_at(sq(5, 7).rotated()).unwrap();
    assert_eq!(rook.piece, Piece::Rook);
    assert!(rook.has_moved);
    assert!(position.piece_at(sq(7, 7).rotated()).is_none());
}

#[test]
fn starting_position_has_no_castles() {
    assert!(!Position::new().legal_moves().iter().any(Move::is_castle));
}
