//! Board coordinates and the square indexing arithmetic.
//!
//! Files and ranks are numbered 1-8 at the API boundary (a = 1, rank 1 = 1)
//! and stored zero-based internally. A square's bit index is
//! `(rank - 1) * 8 + (file - 1)`, so a1 is bit 0 and h8 is bit 63.
//!
//! FEN walks the board from rank 8 down to rank 1, which does not match bit
//! order. Both directions of FEN translation go through the functions here
//! so they cannot disagree.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::FenError;

/// A file (column) on the chess board, from A to H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    /// All files, a to h.
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Creates a file from its 1-based number (a = 1, h = 8).
    #[inline]
    pub const fn from_number(n: i32) -> Option<Self> {
        if n >= 1 && n <= 8 {
            Some(Self::ALL[(n - 1) as usize])
        } else {
            None
        }
    }

    /// Creates a file from a letter, ignoring case.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a'..='h' => Some(Self::ALL[(c.to_ascii_lowercase() as u8 - b'a') as usize]),
            _ => None,
        }
    }

    /// Returns the zero-based index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the 1-based number (1-8).
    #[inline]
    pub const fn number(self) -> i32 {
        self as i32 + 1
    }

    /// Returns the lowercase letter.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the chess board, from 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Rank {
    R1 = 0,
    R2 = 1,
    R3 = 2,
    R4 = 3,
    R5 = 4,
    R6 = 5,
    R7 = 6,
    R8 = 7,
}

impl Rank {
    /// All ranks, 1 to 8.
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Creates a rank from its number (1-8).
    #[inline]
    pub const fn from_number(n: i32) -> Option<Self> {
        if n >= 1 && n <= 8 {
            Some(Self::ALL[(n - 1) as usize])
        } else {
            None
        }
    }

    /// Creates a rank from a digit character ('1'-'8').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Some(Self::ALL[(c as u8 - b'1') as usize]),
            _ => None,
        }
    }

    /// Returns the zero-based index (0-7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the rank number (1-8).
    #[inline]
    pub const fn number(self) -> i32 {
        self as i32 + 1
    }

    #[inline]
    pub const fn to_char(self) -> char {
        (b'1' + self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the chess board, indexed 0-63 (a1 = 0, h1 = 7, a8 = 56).
///
/// With the `serde` feature a square is written as its algebraic name, and
/// only valid names are read back.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Square(u8);

impl Square {
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square(rank.index() * 8 + file.index())
    }

    /// Creates a square from 1-based file and rank numbers.
    #[inline]
    pub const fn from_file_rank(file: i32, rank: i32) -> Option<Self> {
        match (File::from_number(file), Rank::from_number(rank)) {
            (Some(f), Some(r)) => Some(Square::new(f, r)),
            _ => None,
        }
    }

    /// Creates a square from its bit index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation such as "e4" or "E4".
    ///
    /// The input must be exactly two bytes long.
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        match (
            File::from_char(bytes[0] as char),
            Rank::from_char(bytes[1] as char),
        ) {
            (Some(f), Some(r)) => Some(Square::new(f, r)),
            _ => None,
        }
    }

    /// Returns the bit index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// Returns the single-bit mask for this square.
    #[inline]
    pub const fn bit(self) -> u64 {
        1u64 << self.0
    }

    /// Returns the square whose bit is the only one set in `bit`.
    #[inline]
    pub const fn from_bit(bit: u64) -> Option<Self> {
        if bit.count_ones() == 1 {
            Some(Square(bit.trailing_zeros() as u8))
        } else {
            None
        }
    }

    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    pub const A1: Square = Square(0);
    pub const E1: Square = Square(4);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const E8: Square = Square(60);
    pub const H8: Square = Square(63);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

impl TryFrom<String> for Square {
    type Error = FenError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Square::from_algebraic(&name).ok_or(FenError::InvalidAlgebraic(name))
    }
}

impl From<Square> for String {
    fn from(sq: Square) -> Self {
        sq.to_algebraic()
    }
}

/// Returns the square bit for a 1-based `(file, rank)` pair.
///
/// Fails with [`FenError::OutOfRange`] unless both are in `1..=8`.
pub fn square_from_file_rank(file: i32, rank: i32) -> Result<u64, FenError> {
    Square::from_file_rank(file, rank)
        .map(Square::bit)
        .ok_or(FenError::OutOfRange { file, rank })
}

/// Returns the square bit for an algebraic square name such as "e4".
///
/// The file letter is case-insensitive. Fails with
/// [`FenError::InvalidAlgebraic`] for anything that is not exactly a file
/// letter followed by a rank digit.
pub fn square_from_algebraic(s: &str) -> Result<u64, FenError> {
    Square::from_algebraic(s)
        .map(Square::bit)
        .ok_or_else(|| FenError::InvalidAlgebraic(s.to_string()))
}
