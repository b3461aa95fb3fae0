//! Team colors.

use std::fmt;
use std::ops::Not;

/// The two teams of a game. White always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// All colors in turn order.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the team that moves after this one.
    #[inline]
    pub const fn next(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step of a pawn of this color: `+1` for White, `-1` for Black.
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row on which this color's pawns start, for a board with `rows` rows.
    #[inline]
    pub const fn pawn_row(self, rows: i32) -> i32 {
        match self {
            Color::White => 2,
            Color::Black => rows - 1,
        }
    }

    /// Row on which this color's pawns promote, for a board with `rows` rows.
    #[inline]
    pub const fn promotion_row(self, rows: i32) -> i32 {
        match self {
            Color::White => rows,
            Color::Black => 1,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.next()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}
