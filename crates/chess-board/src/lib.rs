//! Bitboard chess position with FEN import and export.
//!
//! This crate provides:
//! - [`Bitboard`] - a 64-bit set of squares
//! - [`CastlingRights`] - the four castling flags
//! - [`Position`] - eight occupancy masks plus side to move, castling,
//!   en passant, and the move counters
//! - [`PositionObserver`] - an optional callback run after each mutation
//!
//! # Layout
//!
//! Bit `i` of every mask is square `i`, where a1 = 0, h1 = 7 and h8 = 63.
//! There is one mask per color and one per piece type; a white knight on
//! f3 sets the f3 bit in both the white mask and the knight mask.
//!
//! # Example
//!
//! ```
//! use chess_board::{Bitboard, Position};
//! use chess_core::{Color, Square};
//!
//! let mut position = Position::new();
//! position
//!     .load_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
//!     .unwrap();
//!
//! assert_eq!(position.side_to_move(), Color::Black);
//! assert_eq!(
//!     position.kings() & position.black_pieces(),
//!     Bitboard::from_square(Square::E8)
//! );
//! assert_eq!(
//!     position.to_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! ```

mod bitboard;
mod castling;
mod fen;
mod observer;
mod position;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::CastlingRights;
pub use observer::{Change, PositionObserver};
pub use position::Position;
