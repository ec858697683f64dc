//! FEN (Forsyth-Edwards Notation) tokenizing and scalar field parsing.
//!
//! Splitting a record into its six fields and decoding the fields that do
//! not depend on board representation lives here. Walking the placement
//! field is left to the board crate, which owns the occupancy masks.

use thiserror::Error;

use crate::{square_from_algebraic, Color, Square};

/// Errors produced while decoding FEN text or square coordinates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("malformed FEN: {0}")]
    MalformedFen(String),

    #[error("unknown piece code '{0}'")]
    UnknownPieceCode(char),

    #[error("square out of range: file {file}, rank {rank}")]
    OutOfRange { file: i32, rank: i32 },

    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraic(String),
}

/// The category of a [`FenError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FenErrorKind {
    MalformedFen,
    UnknownPieceCode,
    OutOfRange,
    InvalidAlgebraic,
}

impl FenError {
    pub fn kind(&self) -> FenErrorKind {
        match self {
            FenError::MalformedFen(_) => FenErrorKind::MalformedFen,
            FenError::UnknownPieceCode(_) => FenErrorKind::UnknownPieceCode,
            FenError::OutOfRange { .. } => FenErrorKind::OutOfRange,
            FenError::InvalidAlgebraic(_) => FenErrorKind::InvalidAlgebraic,
        }
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        FenError::MalformedFen(msg.into())
    }
}

/// The six raw fields of a FEN record, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenFields<'a> {
    /// Piece placement, e.g. "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR".
    pub placement: &'a str,
    pub side_to_move: &'a str,
    /// Castling availability, e.g. "KQkq" or "-".
    pub castling: &'a str,
    pub en_passant: &'a str,
    pub halfmove_clock: &'a str,
    pub fullmove_number: &'a str,
}

impl<'a> FenFields<'a> {
    /// The standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    /// Splits a FEN record into its six single-space separated fields.
    ///
    /// Leading and trailing whitespace (such as a line terminator) is
    /// ignored. Empty fields, from doubled separators, are rejected.
    pub fn split(fen: &'a str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.trim().split(' ').collect();

        if parts.len() != 6 {
            return Err(FenError::malformed(format!(
                "expected 6 fields, got {}",
                parts.len()
            )));
        }
        if let Some(pos) = parts.iter().position(|p| p.is_empty()) {
            return Err(FenError::malformed(format!("field {} is empty", pos + 1)));
        }

        Ok(FenFields {
            placement: parts[0],
            side_to_move: parts[1],
            castling: parts[2],
            en_passant: parts[3],
            halfmove_clock: parts[4],
            fullmove_number: parts[5],
        })
    }
}

/// Decodes the side-to-move field, which must be exactly "w" or "b".
pub fn parse_side_to_move(field: &str) -> Result<Color, FenError> {
    match field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        other => Err(FenError::malformed(format!(
            "side to move must be 'w' or 'b', got {other:?}"
        ))),
    }
}

/// Decodes the en passant field: "-" or an algebraic square.
pub fn parse_en_passant(field: &str) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let bit = square_from_algebraic(field)?;
    Ok(Square::from_bit(bit))
}

/// Decodes the half-move clock (any non-negative integer).
pub fn parse_halfmove_clock(field: &str) -> Result<u32, FenError> {
    parse_counter(field, "half-move clock")
}

/// Decodes the full-move counter, which starts at 1.
pub fn parse_fullmove_number(field: &str) -> Result<u32, FenError> {
    match parse_counter(field, "full-move counter")? {
        0 => Err(FenError::malformed("full-move counter must be positive")),
        n => Ok(n),
    }
}

fn parse_counter(field: &str, what: &str) -> Result<u32, FenError> {
    // u32::from_str accepts a leading '+', FEN does not.
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FenError::malformed(format!("{what} is not a number: {field:?}")));
    }
    field
        .parse::<u32>()
        .map_err(|_| FenError::malformed(format!("{what} out of range: {field:?}")))
}
