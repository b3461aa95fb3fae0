//! Colored pieces.

use std::collections::HashSet;
use std::fmt;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::movegen::{self, MoveCalculator};
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// A colored piece.
///
/// Pieces carry no identity: two pieces of the same kind and color are
/// interchangeable. Move generation is delegated to the stateless
/// [`MoveCalculator`] registered for the piece's kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
}

impl Piece {
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);
    pub const WHITE_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::White);
    pub const WHITE_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::White);
    pub const WHITE_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::White);
    pub const WHITE_ROOK: Piece = Piece::new(PieceKind::Rook, Color::White);
    pub const WHITE_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::White);

    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);
    pub const BLACK_QUEEN: Piece = Piece::new(PieceKind::Queen, Color::Black);
    pub const BLACK_BISHOP: Piece = Piece::new(PieceKind::Bishop, Color::Black);
    pub const BLACK_KNIGHT: Piece = Piece::new(PieceKind::Knight, Color::Black);
    pub const BLACK_ROOK: Piece = Piece::new(PieceKind::Rook, Color::Black);
    pub const BLACK_PAWN: Piece = Piece::new(PieceKind::Pawn, Color::Black);

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Parse a rank-string symbol: uppercase is White, lowercase is Black.
    #[inline]
    pub fn from_symbol(c: char) -> Option<Piece> {
        let kind = PieceKind::from_symbol(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return the rank-string symbol for this piece.
    #[inline]
    pub fn symbol(self) -> char {
        let base = self.kind.symbol();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    /// Return the same piece with a different kind (used for promotion).
    #[inline]
    pub const fn with_kind(self, kind: PieceKind) -> Piece {
        Piece::new(kind, self.color)
    }

    /// Return the move calculator for this piece's kind.
    #[inline]
    pub fn calculator(self) -> &'static dyn MoveCalculator {
        movegen::calculator_for(self.kind)
    }

    /// Every move this piece could make from `position`, ignoring check.
    pub fn piece_moves(self, board: &Board, position: Position) -> HashSet<Move> {
        self.calculator().calculate_moves(self.color, position, board)
    }

    /// Every move that threatens a square from `position`, for check detection.
    pub fn attack_moves(self, board: &Board, position: Position) -> HashSet<Move> {
        self.calculator().calculate_attack_moves(self.color, position, board)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}{}", color_prefix, self.kind.symbol().to_ascii_uppercase())
    }
}
