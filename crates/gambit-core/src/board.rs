//! The board: a fixed rectangular grid of optional pieces.

use std::fmt;

use crate::board_state::STANDARD_BOARD_STATE;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// A rectangular grid of squares, each empty or holding one piece.
///
/// Dimensions are fixed at construction. A position is valid iff
/// `1 <= row <= rows` and `1 <= col <= cols`; every accessor rejects other
/// positions with [`BoardError::OutOfBounds`] instead of clamping.
///
/// Two boards are equal iff they have the same dimensions and every square
/// holds an equal (or no) piece.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major, row 1 first.
    squares: Vec<Option<Piece>>,
}

impl Board {
    /// Number of rows and columns of the standard board.
    pub const STANDARD_SIZE: usize = 8;

    /// Create an empty board of the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Board {
        Board {
            rows,
            cols,
            squares: vec![None; rows * cols],
        }
    }

    /// Return the standard 8x8 starting position.
    pub fn standard() -> Board {
        let mut board = Board::new(Board::STANDARD_SIZE, Board::STANDARD_SIZE);
        board.reset();
        board
    }

    /// Repopulate with the standard 8x8 starting arrangement.
    pub fn reset(&mut self) {
        let size = Board::STANDARD_SIZE;
        let mut board = Board::new(size, size);
        for (row, rank) in STANDARD_BOARD_STATE.iter().enumerate() {
            for (col, symbol) in rank.chars().enumerate() {
                board.squares[row * size + col] = Piece::from_symbol(symbol);
            }
        }
        *self = board;
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return `true` if `pos` names a square on this board.
    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row() >= 1
            && pos.col() >= 1
            && pos.row() as usize <= self.rows
            && pos.col() as usize <= self.cols
    }

    fn index(&self, pos: Position) -> Result<usize, BoardError> {
        if !self.in_bounds(pos) {
            return Err(BoardError::OutOfBounds {
                position: pos,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok((pos.row() as usize - 1) * self.cols + (pos.col() as usize - 1))
    }

    /// Return the piece on `pos`, if any.
    pub fn piece(&self, pos: Position) -> Result<Option<Piece>, BoardError> {
        let idx = self.index(pos)?;
        Ok(self.squares[idx])
    }

    /// Put `piece` (or nothing) on `pos`, returning what was there before.
    pub fn add_piece(&mut self, pos: Position, piece: Option<Piece>) -> Result<Option<Piece>, BoardError> {
        let idx = self.index(pos)?;
        Ok(std::mem::replace(&mut self.squares[idx], piece))
    }

    /// Empty `pos`, returning the piece that was there.
    pub fn remove_piece(&mut self, pos: Position) -> Result<Option<Piece>, BoardError> {
        self.add_piece(pos, None)
    }

    /// Iterate over every square, row 1 first, column 1 first.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols as i32;
        let rows = self.rows as i32;
        (1..=rows).flat_map(move |row| (1..=cols).map(move |col| Position::new(row, col)))
    }

    /// Iterate over the occupied squares and their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.positions()
            .zip(self.squares.iter())
            .filter_map(|(pos, sq)| sq.map(|piece| (pos, piece)))
    }

    /// Iterate over the squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// Return the squares holding kings of `color`.
    pub fn king_positions(&self, color: Color) -> impl Iterator<Item = Position> + '_ {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(pos, _)| pos)
    }

    /// Return `true` if no square is occupied.
    pub fn is_empty(&self) -> bool {
        self.squares.iter().all(Option::is_none)
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as a grid, highest row first.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in (1..=board.rows as i32).rev() {
            write!(f, "{row:>2}  ")?;
            for col in 1..=board.cols as i32 {
                let c = match board.piece(Position::new(row, col)) {
                    Ok(Some(piece)) => piece.symbol(),
                    _ => '.',
                };
                if col < board.cols as i32 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 0..board.cols {
            let file = if col < 26 { (b'a' + col as u8) as char } else { '?' };
            write!(f, " {file}")?;
        }
        Ok(())
    }
}
