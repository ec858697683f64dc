//! Text and JSON views of a position.

use std::fmt;

use chess_board::{Bitboard, CastlingRights, Position};
use chess_core::{Color, Square};
use clap::ValueEnum;
use serde::Serialize;

/// A mask that can be drawn with `--mask`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MaskName {
    White,
    Black,
    Occupied,
    Pawns,
    Knights,
    Bishops,
    Rooks,
    Queens,
    Kings,
}

impl MaskName {
    pub fn select(self, position: &Position) -> Bitboard {
        match self {
            MaskName::White => position.white_pieces(),
            MaskName::Black => position.black_pieces(),
            MaskName::Occupied => position.occupied(),
            MaskName::Pawns => position.pawns(),
            MaskName::Knights => position.knights(),
            MaskName::Bishops => position.bishops(),
            MaskName::Rooks => position.rooks(),
            MaskName::Queens => position.queens(),
            MaskName::Kings => position.kings(),
        }
    }
}

impl fmt::Display for MaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MaskName::White => "white",
            MaskName::Black => "black",
            MaskName::Occupied => "occupied",
            MaskName::Pawns => "pawns",
            MaskName::Knights => "knights",
            MaskName::Bishops => "bishops",
            MaskName::Rooks => "rooks",
            MaskName::Queens => "queens",
            MaskName::Kings => "kings",
        };
        f.write_str(name)
    }
}

/// Everything a position holds, flattened for JSON output.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub fen: String,
    pub white: Bitboard,
    pub black: Bitboard,
    pub pawns: Bitboard,
    pub knights: Bitboard,
    pub bishops: Bitboard,
    pub rooks: Bitboard,
    pub queens: Bitboard,
    pub kings: Bitboard,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl From<&Position> for Snapshot {
    fn from(position: &Position) -> Self {
        Snapshot {
            fen: position.to_fen(),
            white: position.white_pieces(),
            black: position.black_pieces(),
            pawns: position.pawns(),
            knights: position.knights(),
            bishops: position.bishops(),
            rooks: position.rooks(),
            queens: position.queens(),
            kings: position.kings(),
            side_to_move: position.side_to_move(),
            castling: position.castling(),
            en_passant: position.en_passant(),
            halfmove_clock: position.halfmove_clock(),
            fullmove_number: position.fullmove_number(),
        }
    }
}

/// Human-readable summary of the game state.
pub struct Summary<'a>(pub &'a Position);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.0;
        writeln!(f, "FEN:        {position}")?;
        writeln!(f, "To move:    {}", position.side_to_move())?;
        writeln!(f, "Castling:   {}", position.castling().to_fen())?;
        match position.en_passant() {
            Some(sq) => writeln!(f, "En passant: {sq}")?,
            None => writeln!(f, "En passant: -")?,
        }
        writeln!(f, "Half-moves: {}", position.halfmove_clock())?;
        writeln!(f, "Move:       {}", position.fullmove_number())?;
        writeln!(f, "Pieces:     {}", position.pop_count())
    }
}

/// Space-separated names of the squares set in `mask`, a1 first.
pub fn square_list(mask: Bitboard) -> String {
    mask.into_iter()
        .map(|sq| sq.to_algebraic())
        .collect::<Vec<_>>()
        .join(" ")
}
