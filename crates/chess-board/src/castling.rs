//! Castling rights.

use chess_core::{Color, FenError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four independent castling flags.
///
/// Serialized as the raw flag byte; values with bits above the low four are
/// rejected on the way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: u8 = 0b0001;
    pub const WHITE_QUEENSIDE: u8 = 0b0010;
    pub const BLACK_KINGSIDE: u8 = 0b0100;
    pub const BLACK_QUEENSIDE: u8 = 0b1000;
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    /// FEN letters paired with their flags, in the order FEN writes them.
    const LETTERS: [(char, u8); 4] = [
        ('K', Self::WHITE_KINGSIDE),
        ('Q', Self::WHITE_QUEENSIDE),
        ('k', Self::BLACK_KINGSIDE),
        ('q', Self::BLACK_QUEENSIDE),
    ];

    /// Creates rights from raw flags; bits above the low four are dropped.
    #[inline]
    pub const fn new(flags: u8) -> Self {
        CastlingRights(flags & 0b1111)
    }

    #[inline]
    pub const fn can_castle_kingside(self, color: Color) -> bool {
        self.0 & Self::kingside_flag(color) != 0
    }

    #[inline]
    pub const fn can_castle_queenside(self, color: Color) -> bool {
        self.0 & Self::queenside_flag(color) != 0
    }

    pub fn set_kingside(&mut self, color: Color, allowed: bool) {
        self.assign(Self::kingside_flag(color), allowed);
    }

    pub fn set_queenside(&mut self, color: Color, allowed: bool) {
        self.assign(Self::queenside_flag(color), allowed);
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Decodes a FEN castling field.
    ///
    /// "-" grants nothing. Otherwise every character must be one of
    /// `K`, `Q`, `k`, `q`, each at most once.
    pub fn from_fen(field: &str) -> Result<Self, FenError> {
        if field == "-" {
            return Ok(Self::NONE);
        }

        let mut flags = 0u8;
        for c in field.chars() {
            let flag = Self::LETTERS
                .iter()
                .find(|(letter, _)| *letter == c)
                .map(|&(_, flag)| flag)
                .ok_or_else(|| {
                    FenError::MalformedFen(format!("invalid castling character '{c}'"))
                })?;
            if flags & flag != 0 {
                return Err(FenError::MalformedFen(format!(
                    "repeated castling character '{c}'"
                )));
            }
            flags |= flag;
        }

        Ok(CastlingRights(flags))
    }

    /// Encodes the rights as a FEN castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        Self::LETTERS
            .iter()
            .filter(|(_, flag)| self.0 & flag != 0)
            .map(|(letter, _)| *letter)
            .collect()
    }

    const fn kingside_flag(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        }
    }

    const fn queenside_flag(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        }
    }

    fn assign(&mut self, flag: u8, allowed: bool) {
        if allowed {
            self.0 |= flag;
        } else {
            self.0 &= !flag;
        }
    }
}

impl TryFrom<u8> for CastlingRights {
    type Error = FenError;

    fn try_from(flags: u8) -> Result<Self, Self::Error> {
        if flags & !Self::ALL.0 != 0 {
            return Err(FenError::MalformedFen(format!(
                "castling flags out of range: {flags:#06b}"
            )));
        }
        Ok(CastlingRights(flags))
    }
}

impl From<CastlingRights> for u8 {
    fn from(rights: CastlingRights) -> Self {
        rights.0
    }
}
