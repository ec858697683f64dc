//! Chess position representation.

use chess_core::{Color, FenFields, Piece, Square};

use crate::observer::{Change, ObserverSlot, PositionObserver};
use crate::{Bitboard, CastlingRights};

/// Piece placement and game state for one chess position.
///
/// Placement is held as eight occupancy masks: one per color and one per
/// piece type. Every piece-type bit belongs to exactly one color mask and
/// the two color masks together cover exactly the union of the piece-type
/// masks. FEN loading upholds this; the mask setters leave it to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Indexed by [`Piece::index`].
    pub(crate) pieces: [Bitboard; 6],
    /// Indexed by [`Color::index`].
    pub(crate) colors: [Bitboard; 2],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    /// Half-moves since the last capture or pawn move.
    pub(crate) halfmove_clock: u32,
    /// Starts at 1 and increments after Black's move.
    pub(crate) fullmove_number: u32,
    pub(crate) observer: ObserverSlot,
}

impl Position {
    /// Creates the standard starting position.
    pub fn new() -> Self {
        Self::startpos()
    }

    /// Creates a position with no pieces, White to move, no castling rights.
    pub fn empty() -> Self {
        Position {
            pieces: [Bitboard::EMPTY; 6],
            colors: [Bitboard::EMPTY; 2],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            observer: ObserverSlot::default(),
        }
    }

    pub fn startpos() -> Self {
        Self::from_fen(FenFields::STARTPOS).expect("STARTPOS is valid")
    }

    /// Attaches an observer, returning the previous one.
    pub fn set_observer(
        &mut self,
        observer: impl PositionObserver + 'static,
    ) -> Option<Box<dyn PositionObserver>> {
        self.observer.replace(Some(Box::new(observer)))
    }

    pub fn clear_observer(&mut self) -> Option<Box<dyn PositionObserver>> {
        self.observer.replace(None)
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_attached()
    }

    pub(crate) fn notify(&self, change: Change) {
        tracing::trace!(?change, "position changed");
        if let Some(observer) = self.observer.get() {
            observer.on_change(change, self);
        }
    }

    // ---- mask accessors ----

    #[inline]
    pub fn white_pieces(&self) -> Bitboard {
        self.colors[Color::White.index()]
    }

    #[inline]
    pub fn black_pieces(&self) -> Bitboard {
        self.colors[Color::Black.index()]
    }

    #[inline]
    pub fn pawns(&self) -> Bitboard {
        self.pieces[Piece::Pawn.index()]
    }

    #[inline]
    pub fn knights(&self) -> Bitboard {
        self.pieces[Piece::Knight.index()]
    }

    #[inline]
    pub fn bishops(&self) -> Bitboard {
        self.pieces[Piece::Bishop.index()]
    }

    #[inline]
    pub fn rooks(&self) -> Bitboard {
        self.pieces[Piece::Rook.index()]
    }

    #[inline]
    pub fn queens(&self) -> Bitboard {
        self.pieces[Piece::Queen.index()]
    }

    #[inline]
    pub fn kings(&self) -> Bitboard {
        self.pieces[Piece::King.index()]
    }

    #[inline]
    pub fn color_mask(&self, color: Color) -> Bitboard {
        self.colors[color.index()]
    }

    #[inline]
    pub fn piece_mask(&self, piece: Piece) -> Bitboard {
        self.pieces[piece.index()]
    }

    /// Returns the squares holding `piece`s of `color`.
    #[inline]
    pub fn pieces_of(&self, piece: Piece, color: Color) -> Bitboard {
        self.pieces[piece.index()] & self.colors[color.index()]
    }

    /// Returns all occupied squares.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.colors[0] | self.colors[1]
    }

    /// Number of pieces on the board.
    #[inline]
    pub fn pop_count(&self) -> u32 {
        self.occupied().count()
    }

    /// Returns the piece and color on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        let color = Color::ALL
            .into_iter()
            .find(|c| self.colors[c.index()].contains(sq))?;
        let piece = Piece::ALL
            .into_iter()
            .find(|p| self.pieces[p.index()].contains(sq))?;
        Some((piece, color))
    }

    // ---- scalar accessors ----

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn can_castle_kingside(&self, color: Color) -> bool {
        self.castling.can_castle_kingside(color)
    }

    #[inline]
    pub fn can_castle_queenside(&self, color: Color) -> bool {
        self.castling.can_castle_queenside(color)
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    // ---- setters ----
    //
    // Each one overwrites the stored value outright and then notifies the
    // observer. None of them check the mask partition.

    pub fn set_white_pieces(&mut self, bb: Bitboard) {
        self.set_color_mask(Color::White, bb);
    }

    pub fn set_black_pieces(&mut self, bb: Bitboard) {
        self.set_color_mask(Color::Black, bb);
    }

    pub fn set_color_mask(&mut self, color: Color, bb: Bitboard) {
        self.colors[color.index()] = bb;
        self.notify(Change::ColorMask(color));
    }

    pub fn set_piece_mask(&mut self, piece: Piece, bb: Bitboard) {
        self.pieces[piece.index()] = bb;
        self.notify(Change::PieceMask(piece));
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
        self.notify(Change::SideToMove);
    }

    pub fn set_castling(&mut self, rights: CastlingRights) {
        self.castling = rights;
        self.notify(Change::Castling);
    }

    pub fn set_en_passant(&mut self, square: Option<Square>) {
        self.en_passant = square;
        self.notify(Change::EnPassant);
    }

    pub fn set_halfmove_clock(&mut self, clock: u32) {
        self.halfmove_clock = clock;
        self.notify(Change::HalfmoveClock);
    }

    /// Sets the full-move counter. FEN requires it to be at least 1;
    /// this setter does not check.
    pub fn set_fullmove_number(&mut self, number: u32) {
        self.fullmove_number = number;
        self.notify(Change::FullmoveNumber);
    }

    /// Returns true if the occupancy masks form a valid partition: colors
    /// disjoint, piece types pairwise disjoint, and both unions equal.
    pub fn is_consistent(&self) -> bool {
        let mut types = Bitboard::EMPTY;
        for bb in self.pieces {
            if !types.is_disjoint(bb) {
                return false;
            }
            types |= bb;
        }
        self.white_pieces().is_disjoint(self.black_pieces()) && types == self.occupied()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}
