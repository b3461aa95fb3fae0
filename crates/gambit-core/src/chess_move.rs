//! Move representation.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::piece_kind::PieceKind;
use crate::position::Position;

/// A move from one square to another, with an optional promotion kind.
///
/// `promotion` is present iff the move is a pawn promotion. Castling and
/// en passant are plain start/end moves; the engine recognises them from
/// the board and the move history when they are applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    start: Position,
    end: Position,
    promotion: Option<PieceKind>,
}

impl Move {
    /// Create a non-promoting move.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Move {
        Move {
            start,
            end,
            promotion: None,
        }
    }

    /// Create a promotion move.
    #[inline]
    pub const fn new_promotion(start: Position, end: Position, kind: PieceKind) -> Move {
        Move {
            start,
            end,
            promotion: Some(kind),
        }
    }

    #[inline]
    pub const fn start(self) -> Position {
        self.start
    }

    #[inline]
    pub const fn end(self) -> Position {
        self.end
    }

    /// Return the kind a pawn promotes to, if this is a promotion.
    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    /// Return `true` if this is a promotion move.
    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Displacement from start to end.
    #[inline]
    pub fn vector(self) -> Position {
        self.end - self.start
    }

    /// Coordinate text such as `e2e4` or `e7e8q`, if both squares have a file letter.
    pub fn to_coordinate_text(self) -> Option<String> {
        let mut text = self.start.to_algebraic()?;
        text.push_str(&self.end.to_algebraic()?);
        if let Some(kind) = self.promotion {
            text.push(kind.symbol());
        }
        Some(text)
    }
}

/// Collect the end squares of a set of moves.
pub fn end_positions<'a>(moves: impl IntoIterator<Item = &'a Move>) -> HashSet<Position> {
    moves.into_iter().map(|mv| mv.end()).collect()
}

/// Collect the start squares of a set of moves.
pub fn start_positions<'a>(moves: impl IntoIterator<Item = &'a Move>) -> HashSet<Position> {
    moves.into_iter().map(|mv| mv.start()).collect()
}

/// Error returned when coordinate move text cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed move text: \"{text}\"")]
pub struct ParseMoveError {
    /// The text that failed to parse.
    pub text: String,
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parse coordinate text: two algebraic squares and an optional promotion letter.
    fn from_str(s: &str) -> Result<Move, ParseMoveError> {
        let err = || ParseMoveError {
            text: s.to_string(),
        };

        // The second square starts at the second lowercase letter.
        let split = s
            .char_indices()
            .skip(1)
            .find(|(_, c)| c.is_ascii_lowercase())
            .map(|(i, _)| i)
            .ok_or_else(err)?;
        let start = Position::from_algebraic(&s[..split]).ok_or_else(err)?;
        let rest = &s[split..];

        let (end_text, promotion) = match rest.char_indices().last() {
            Some((i, c)) if i > 0 && c.is_ascii_alphabetic() => {
                let kind = PieceKind::from_symbol(c)
                    .filter(|k| k.is_promotable())
                    .ok_or_else(err)?;
                (&rest[..i], Some(kind))
            }
            _ => (rest, None),
        };
        let end = Position::from_algebraic(end_text).ok_or_else(err)?;

        Ok(Move {
            start,
            end,
            promotion,
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.start, self.end)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.symbol().to_ascii_uppercase())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
