//! Core value types for chess positions.
//!
//! This crate provides the leaf types shared by the board crate:
//! - [`Piece`] and [`Color`] for piece identity
//! - [`Square`], [`File`], and [`Rank`] for board coordinates, plus the
//!   square indexing functions [`square_from_file_rank`] and
//!   [`square_from_algebraic`]
//! - [`FenFields`] and the scalar FEN field decoders
//! - [`FenError`], the error type for all of the above

mod color;
pub mod fen;
mod piece;
mod square;

pub use color::Color;
pub use fen::{FenError, FenErrorKind, FenFields};
pub use piece::Piece;
pub use square::{square_from_algebraic, square_from_file_rank, File, Rank, Square};
