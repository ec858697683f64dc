//! Property tests for FEN import and export.

use chess_board::{Bitboard, Position};
use chess_core::{Color, FenErrorKind, FenFields, Piece, Square};
use proptest::prelude::*;

/// Writes a placement field for 64 squares given in a1..h8 order.
fn placement(board: &[Option<(Piece, Color)>]) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        let mut empty = 0;
        for file in 0..8 {
            match board[rank * 8 + file] {
                Some((piece, color)) => {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.to_fen_char(color));
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            out.push_str(&empty.to_string());
        }
        if rank > 0 {
            out.push('/');
        }
    }
    out
}

fn square_contents() -> impl Strategy<Value = Option<(Piece, Color)>> {
    prop_oneof![
        3 => Just(None),
        1 => (0..6usize, prop::bool::ANY).prop_map(|(p, black)| {
            let color = if black { Color::Black } else { Color::White };
            Some((Piece::ALL[p], color))
        }),
    ]
}

fn castling_field() -> impl Strategy<Value = String> {
    (0u8..16).prop_map(|bits| {
        let field: String = ['K', 'Q', 'k', 'q']
            .iter()
            .enumerate()
            .filter(|&(i, _)| bits & (1 << i) != 0)
            .map(|(_, c)| *c)
            .collect();
        if field.is_empty() {
            "-".to_string()
        } else {
            field
        }
    })
}

fn en_passant_field() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("-".to_string()),
        (0u8..8, prop::bool::ANY).prop_map(|(file, black)| {
            let rank = if black { '6' } else { '3' };
            format!("{}{}", (b'a' + file) as char, rank)
        }),
    ]
}

fn fen_record() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(square_contents(), 64),
        prop::bool::ANY,
        castling_field(),
        en_passant_field(),
        0u32..200,
        1u32..500,
    )
        .prop_map(|(board, black, castling, ep, half, full)| {
            format!(
                "{} {} {} {} {} {}",
                placement(&board),
                if black { 'b' } else { 'w' },
                castling,
                ep,
                half,
                full
            )
        })
}

proptest! {
    #[test]
    fn canonical_fen_roundtrips(fen in fen_record()) {
        let position = Position::from_fen(&fen).unwrap();
        prop_assert_eq!(position.to_fen(), fen);
    }

    #[test]
    fn masks_partition_the_board(fen in fen_record()) {
        let position = Position::from_fen(&fen).unwrap();
        let types = position.pawns()
            | position.knights()
            | position.bishops()
            | position.rooks()
            | position.queens()
            | position.kings();

        prop_assert!(position.white_pieces().is_disjoint(position.black_pieces()));
        prop_assert_eq!(position.occupied(), types);
        prop_assert!(position.is_consistent());
    }

    #[test]
    fn reload_matches_fresh_parse(first in fen_record(), second in fen_record()) {
        let mut position = Position::from_fen(&first).unwrap();
        position.load_fen(&second).unwrap();
        prop_assert_eq!(position, Position::from_fen(&second).unwrap());
    }

    #[test]
    fn garbage_never_panics(text in "\\PC{0,80}") {
        let mut position = Position::startpos();
        if position.load_fen(&text).is_err() {
            prop_assert_eq!(position.to_fen(), FenFields::STARTPOS);
        }
    }
}

#[test]
fn default_position_serializes_to_startpos() {
    assert_eq!(Position::default().to_fen(), FenFields::STARTPOS);
}

#[test]
fn square_lookup_matches_masks() {
    let position = Position::startpos();
    for index in 0..64 {
        let sq = Square::from_index(index).unwrap();
        let occupied = position.occupied().contains(sq);
        assert_eq!(position.piece_at(sq).is_some(), occupied, "square {sq}");
    }
    assert_eq!(
        position.pieces_of(Piece::Queen, Color::White),
        Bitboard::from_square(Square::from_algebraic("d1").unwrap())
    );
}

#[test]
fn rejection_kinds() {
    let cases = [
        ("8/8/8/8/8/8/8/8 x KQkq - 0 1", FenErrorKind::MalformedFen),
        ("8/8/8/8/8/8/8/8 w KQkq -", FenErrorKind::MalformedFen),
        ("8/8/8/8/8/8/8/7z w - - 0 1", FenErrorKind::UnknownPieceCode),
        ("8/8/8/8/8/8/8/8p w - - 0 1", FenErrorKind::OutOfRange),
        ("8/8/8/8/8/8/8/8 w - z3 0 1", FenErrorKind::InvalidAlgebraic),
    ];
    for (fen, expected) in cases {
        let err = Position::from_fen(fen).unwrap_err();
        assert_eq!(err.kind(), expected, "input {fen:?}");
    }
}
