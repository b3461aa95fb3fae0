//! Board coordinates and move-vector arithmetic.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A (row, column) coordinate, 1-indexed on the board.
///
/// Row 1 is White's back row and column 1 is the `a` file. The same type
/// doubles as a direction vector, so components may be zero or negative;
/// whether a value lies on a given board is decided by
/// [`Board::in_bounds`](crate::Board::in_bounds).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: i32,
    col: i32,
}

impl Position {
    /// The zero vector.
    pub const ZERO: Position = Position::new(0, 0);

    /// Create a position from a row and a column.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Position {
        Position { row, col }
    }

    /// Return the row component.
    #[inline]
    pub const fn row(self) -> i32 {
        self.row
    }

    /// Return the column component.
    #[inline]
    pub const fn col(self) -> i32 {
        self.col
    }

    /// Component-wise product.
    #[inline]
    pub const fn multiply(self, other: Position) -> Position {
        Position::new(self.row * other.row, self.col * other.col)
    }

    /// Component-wise absolute value.
    #[inline]
    pub const fn abs(self) -> Position {
        Position::new(self.row.abs(), self.col.abs())
    }

    /// Reduce each nonzero component to its sign.
    #[inline]
    pub const fn normalize(self) -> Position {
        Position::new(self.row.signum(), self.col.signum())
    }

    /// Parse algebraic text such as `e2` or `h10`: a file letter followed by a rank number.
    pub fn from_algebraic(s: &str) -> Option<Position> {
        let mut chars = s.chars();
        let file = chars.next()?;
        if !file.is_ascii_lowercase() {
            return None;
        }
        let rank_text = chars.as_str();
        if rank_text.is_empty() || !rank_text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let row: i32 = rank_text.parse().ok()?;
        if row < 1 {
            return None;
        }
        let col = (file as u8 - b'a') as i32 + 1;
        Some(Position::new(row, col))
    }

    /// Return the algebraic form (`e2`), or `None` if the column has no file letter.
    pub fn to_algebraic(self) -> Option<String> {
        if !(1..=26).contains(&self.col) || self.row < 1 {
            return None;
        }
        let file = (b'a' + (self.col - 1) as u8) as char;
        Some(format!("{file}{}", self.row))
    }
}

impl Add for Position {
    type Output = Position;

    #[inline]
    fn add(self, rhs: Position) -> Position {
        Position::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl AddAssign for Position {
    #[inline]
    fn add_assign(&mut self, rhs: Position) {
        self.row += rhs.row;
        self.col += rhs.col;
    }
}

impl Sub for Position {
    type Output = Position;

    #[inline]
    fn sub(self, rhs: Position) -> Position {
        Position::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl Mul<i32> for Position {
    type Output = Position;

    #[inline]
    fn mul(self, rhs: i32) -> Position {
        Position::new(self.row * rhs, self.col * rhs)
    }
}

impl Neg for Position {
    type Output = Position;

    #[inline]
    fn neg(self) -> Position {
        Position::new(-self.row, -self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.row, self.col)
    }
}
