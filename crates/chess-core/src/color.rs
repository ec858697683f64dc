//! Player color representation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two sides. The discriminant doubles as the FEN side-to-move bit
/// (0 = white, 1 = black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Color {
    #[default]
    White = 0,
    Black = 1,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the FEN side-to-move letter.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn variant_names() {
        assert_eq!(serde_json::to_string(&Color::Black).unwrap(), "\"Black\"");
        assert_eq!(
            serde_json::from_str::<Color>("\"White\"").unwrap(),
            Color::White
        );
        assert!(serde_json::from_str::<Color>("\"Red\"").is_err());
    }
}
