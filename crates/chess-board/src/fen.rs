//! FEN import and export for [`Position`].

use std::fmt;
use std::str::FromStr;

use chess_core::fen::{
    parse_en_passant, parse_fullmove_number, parse_halfmove_clock, parse_side_to_move,
};
use chess_core::{square_from_file_rank, FenError, FenFields, Piece, Square};

use crate::observer::Change;
use crate::{Bitboard, CastlingRights, Position};

impl Position {
    /// Builds a position from a FEN record.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let fields = FenFields::split(fen)?;

        let mut position = Position::empty();
        position.place_pieces(fields.placement)?;
        position.side_to_move = parse_side_to_move(fields.side_to_move)?;
        position.castling = CastlingRights::from_fen(fields.castling)?;
        position.en_passant = parse_en_passant(fields.en_passant)?;
        position.halfmove_clock = parse_halfmove_clock(fields.halfmove_clock)?;
        position.fullmove_number = parse_fullmove_number(fields.fullmove_number)?;

        Ok(position)
    }

    /// Replaces the whole position with the one described by `fen`.
    ///
    /// Nothing is carried over from the previous state: castling rights not
    /// named in the record end up cleared. On error `self` is left exactly
    /// as it was and the observer is not called.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        let parsed = match Self::from_fen(fen) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::debug!(%err, fen, "rejected FEN");
                return Err(err);
            }
        };

        self.pieces = parsed.pieces;
        self.colors = parsed.colors;
        self.side_to_move = parsed.side_to_move;
        self.castling = parsed.castling;
        self.en_passant = parsed.en_passant;
        self.halfmove_clock = parsed.halfmove_clock;
        self.fullmove_number = parsed.fullmove_number;

        tracing::debug!(fen, pieces = self.pop_count(), "loaded FEN");
        self.notify(Change::Loaded);
        Ok(())
    }

    /// Walks the placement field into this position's masks.
    ///
    /// The cursor starts on a8 and moves along the rank towards h. A rank
    /// separator is only accepted once all eight files are consumed, so
    /// the cursor sits on "file 9" right before each `/` and at the end.
    fn place_pieces(&mut self, placement: &str) -> Result<(), FenError> {
        let mut file: i32 = 1;
        let mut rank: i32 = 8;

        for c in placement.chars() {
            match c {
                '/' => {
                    if file != 9 {
                        return Err(FenError::MalformedFen(format!(
                            "rank {rank} has {} files before '/'",
                            file - 1
                        )));
                    }
                    if rank == 1 {
                        return Err(FenError::MalformedFen(
                            "more than 8 ranks in placement".to_string(),
                        ));
                    }
                    rank -= 1;
                    file = 1;
                }
                '1'..='8' => {
                    file += c as i32 - '0' as i32;
                    if file > 9 {
                        return Err(FenError::MalformedFen(format!(
                            "rank {rank} has more than 8 files"
                        )));
                    }
                }
                c if c.is_alphabetic() => {
                    let (piece, color) = Piece::from_fen_char(c)?;
                    let bit = Bitboard(square_from_file_rank(file, rank)?);
                    self.colors[color.index()] |= bit;
                    self.pieces[piece.index()] |= bit;
                    file += 1;
                }
                other => {
                    return Err(FenError::MalformedFen(format!(
                        "unexpected character {other:?} in placement"
                    )));
                }
            }
        }

        if rank != 1 || file != 9 {
            return Err(FenError::MalformedFen(format!(
                "placement ends at rank {rank} after {} files",
                file - 1
            )));
        }
        Ok(())
    }

    /// Serializes the position as a FEN record.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);

        for rank in (1..=8).rev() {
            let mut empty = 0;
            for file in 1..=8 {
                let piece = Square::from_file_rank(file, rank).and_then(|sq| self.piece_at(sq));
                match piece {
                    Some((piece, color)) => {
                        if empty > 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push_str(&empty.to_string());
            }
            if rank > 1 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(self.side_to_move.fen_char());

        fen.push(' ');
        fen.push_str(&self.castling.to_fen());

        fen.push(' ');
        match self.en_passant {
            Some(sq) => fen.push_str(&sq.to_algebraic()),
            None => fen.push('-'),
        }

        fen.push(' ');
        fen.push_str(&self.halfmove_clock.to_string());
        fen.push(' ');
        fen.push_str(&self.fullmove_number.to_string());

        fen
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{Color, FenErrorKind, File, Rank};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    const AFTER_E4: &str = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";

    fn kind(fen: &str) -> FenErrorKind {
        Position::from_fen(fen).unwrap_err().kind()
    }

    #[test]
    fn startpos_fen_roundtrip() {
        assert_eq!(Position::new().to_fen(), FenFields::STARTPOS);
        assert_eq!(Position::default().to_string(), FenFields::STARTPOS);
    }

    #[test]
    fn custom_fen_roundtrip() {
        for fen in [
            "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
            "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w - - 0 1",
            "8/8/8/8/8/8/8/8 w - - 0 1",
            "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 57",
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b Kq - 1 2",
            AFTER_E4,
        ] {
            assert_eq!(Position::from_fen(fen).unwrap().to_fen(), fen);
        }
    }

    #[test]
    fn after_e4() {
        let pos: Position = AFTER_E4.parse().unwrap();
        let e8 = Bitboard::from_square(Square::E8);
        assert_eq!(pos.kings() & pos.black_pieces(), e8);
        assert_eq!(
            pos.en_passant().map(|sq| sq.to_algebraic()),
            Some("e3".to_string())
        );
        assert_eq!(pos.side_to_move(), Color::Black);
        assert_eq!(
            pos.piece_at(Square::new(File::E, Rank::R4)),
            Some((Piece::Pawn, Color::White))
        );
        assert_eq!(pos.piece_at(Square::new(File::E, Rank::R2)), None);
        assert!(pos.is_consistent());
    }

    #[test]
    fn castling_rights_reset_on_reload() {
        let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        assert_eq!(pos.castling(), CastlingRights::ALL);

        pos.load_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
        for color in Color::ALL {
            assert!(!pos.can_castle_kingside(color));
            assert!(!pos.can_castle_queenside(color));
        }
    }

    #[test]
    fn load_replaces_masks() {
        let mut pos = Position::startpos();
        pos.load_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(pos.pop_count(), 2);
        assert!(pos.pawns().is_empty());
        assert_eq!(pos.kings().count(), 2);
    }

    #[test]
    fn failed_load_leaves_state_untouched() {
        let mut pos = Position::from_fen(AFTER_E4).unwrap();
        let before = pos.clone();

        for bad in [
            "8/8/8/8/8/8/8/8 x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNX w KQkq - 0 1",
            "8/8/8/8/8/8/8/8 w - - 0 abc",
        ] {
            assert!(pos.load_fen(bad).is_err());
            assert_eq!(pos, before);
            assert_eq!(pos.to_fen(), AFTER_E4);
        }
    }

    #[test]
    fn observer_only_on_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut pos = Position::empty();
        pos.set_observer(move |change: Change, p: &Position| {
            assert_eq!(change, Change::Loaded);
            assert_eq!(p.pop_count(), 32);
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(pos.load_fen("8/8/8/8/8/8/8/8 x - - 0 1").is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        pos.load_fen(FenFields::STARTPOS).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(pos.has_observer());
    }

    #[test]
    fn invalid_side_to_move() {
        assert_eq!(kind("8/8/8/8/8/8/8/8 x KQkq - 0 1"), FenErrorKind::MalformedFen);
    }

    #[test]
    fn wrong_field_count() {
        assert_eq!(kind("8/8/8/8/8/8/8/8 w - -"), FenErrorKind::MalformedFen);
        assert_eq!(kind(""), FenErrorKind::MalformedFen);
    }

    #[test]
    fn short_rank_before_separator() {
        assert_eq!(
            kind("rnbqkbn/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            FenErrorKind::MalformedFen
        );
        assert_eq!(kind("7/8/8/8/8/8/8/8 w - - 0 1"), FenErrorKind::MalformedFen);
    }

    #[test]
    fn empty_run_overflows_rank() {
        assert_eq!(kind("p8/8/8/8/8/8/8/8 w - - 0 1"), FenErrorKind::MalformedFen);
        assert_eq!(kind("45/8/8/8/8/8/8/8 w - - 0 1"), FenErrorKind::MalformedFen);
    }

    #[test]
    fn piece_past_h_file() {
        assert_eq!(
            kind("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            FenErrorKind::OutOfRange
        );
    }

    #[test]
    fn rank_count() {
        assert_eq!(kind("8/8/8/8/8/8/8 w - - 0 1"), FenErrorKind::MalformedFen);
        assert_eq!(kind("8/8/8/8/8/8/8/8/8 w - - 0 1"), FenErrorKind::MalformedFen);
        assert_eq!(kind("8/8/8/8/8/8/8/8/ w - - 0 1"), FenErrorKind::MalformedFen);
    }

    #[test]
    fn unknown_piece_letter() {
        assert_eq!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenError::UnknownPieceCode('X'))
        );
    }

    #[test]
    fn bad_placement_characters() {
        for fen in [
            "0nbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "9/8/8/8/8/8/8/8 w - - 0 1",
            "8/8/8/8/8/8/8/7* w - - 0 1",
        ] {
            assert_eq!(kind(fen), FenErrorKind::MalformedFen, "input {fen:?}");
        }
    }

    #[test]
    fn bad_castling_field() {
        assert_eq!(kind("8/8/8/8/8/8/8/8 w XYZ - 0 1"), FenErrorKind::MalformedFen);
        assert_eq!(kind("8/8/8/8/8/8/8/8 w KK - 0 1"), FenErrorKind::MalformedFen);
    }

    #[test]
    fn bad_en_passant_field() {
        assert_eq!(kind("8/8/8/8/8/8/8/8 w - i3 0 1"), FenErrorKind::InvalidAlgebraic);
        assert_eq!(kind("8/8/8/8/8/8/8/8 w - e9 0 1"), FenErrorKind::InvalidAlgebraic);
        assert_eq!(kind("8/8/8/8/8/8/8/8 w - abc 0 1"), FenErrorKind::InvalidAlgebraic);
    }

    #[test]
    fn bad_counters() {
        assert_eq!(kind("8/8/8/8/8/8/8/8 w - - abc 1"), FenErrorKind::MalformedFen);
        assert_eq!(kind("8/8/8/8/8/8/8/8 w - - 0 xyz"), FenErrorKind::MalformedFen);
        assert_eq!(kind("8/8/8/8/8/8/8/8 w - - 0 0"), FenErrorKind::MalformedFen);
    }
}
