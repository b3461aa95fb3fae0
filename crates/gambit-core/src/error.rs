//! Error types for board access, board-state parsing, and move submission.

use crate::chess_move::Move;
use crate::color::Color;
use crate::position::Position;

/// Errors from board access and rank-string board states.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A position lies outside the board's dimensions.
    #[error("position {position} is outside the {rows}x{cols} board")]
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Number of rows on the board.
        rows: usize,
        /// Number of columns on the board.
        cols: usize,
    },
    /// A board state has no rows, or its first row is empty.
    #[error("board state has no squares")]
    EmptyBoardState,
    /// The rows of a board state do not all have the same length.
    #[error("board state row {row} has {found} squares, expected {expected}")]
    InvalidBoardState {
        /// One-based row number.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of this row.
        found: usize,
    },
    /// A board state contains a character that is neither a piece nor `-`.
    #[error("invalid piece symbol '{symbol}' at row {row}, column {col}")]
    InvalidPieceSymbol {
        /// The unrecognised character.
        symbol: char,
        /// One-based row number.
        row: usize,
        /// One-based column number.
        col: usize,
    },
}

/// Reasons a submitted move is rejected. No board mutation happens on error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The start square is empty.
    #[error("no piece at {position}")]
    NoPieceAtStart {
        /// The empty start square.
        position: Position,
    },
    /// The piece on the start square belongs to the team not on move.
    #[error("it is {expected}'s turn, but the piece belongs to {found}")]
    WrongTurn {
        /// The team on move.
        expected: Color,
        /// The color of the piece that was submitted.
        found: Color,
    },
    /// The move is not in the legal set for its start square.
    #[error("illegal move {mv}")]
    IllegalMove {
        /// The rejected move.
        mv: Move,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, MoveError};
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::position::Position;

    #[test]
    fn board_error_display() {
        let err = BoardError::OutOfBounds {
            position: Position::new(4, 6),
            rows: 3,
            cols: 7,
        };
        assert_eq!(format!("{err}"), "position (4, 6) is outside the 3x7 board");

        let err = BoardError::InvalidBoardState {
            row: 3,
            expected: 8,
            found: 7,
        };
        assert_eq!(format!("{err}"), "board state row 3 has 7 squares, expected 8");
    }

    #[test]
    fn move_error_display() {
        let err = MoveError::WrongTurn {
            expected: Color::White,
            found: Color::Black,
        };
        assert_eq!(format!("{err}"), "it is white's turn, but the piece belongs to black");

        let err = MoveError::IllegalMove {
            mv: Move::new(Position::new(2, 1), Position::new(5, 1)),
        };
        assert_eq!(format!("{err}"), "illegal move (2, 1)->(5, 1)");
    }
}
