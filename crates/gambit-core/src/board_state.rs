//! Rank-string board states: one string per row, one character per square.
//!
//! Uppercase letters are White pieces, lowercase letters are Black pieces,
//! and `-` is an empty square. The first string is row 1.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::position::Position;

/// Symbol for an empty square.
pub const EMPTY_SQUARE: char = '-';

/// Separator between rows in the single-line form used by `FromStr`/`Display`.
pub const ROW_SEPARATOR: char = '/';

/// The standard starting arrangement, row 1 first.
pub const STANDARD_BOARD_STATE: [&str; 8] = [
    "RNBQKBNR",
    "PPPPPPPP",
    "--------",
    "--------",
    "--------",
    "--------",
    "pppppppp",
    "rnbqkbnr",
];

/// Check that a board state is non-empty and rectangular.
///
/// Returns the (rows, cols) dimensions on success.
pub fn validate_board_state<S: AsRef<str>>(rows: &[S]) -> Result<(usize, usize), BoardError> {
    let first = rows.first().ok_or(BoardError::EmptyBoardState)?;
    let expected = first.as_ref().chars().count();
    if expected == 0 {
        return Err(BoardError::EmptyBoardState);
    }

    for (i, row) in rows.iter().enumerate() {
        let found = row.as_ref().chars().count();
        if found != expected {
            return Err(BoardError::InvalidBoardState {
                row: i + 1,
                expected,
                found,
            });
        }
    }

    Ok((rows.len(), expected))
}

impl Board {
    /// Build a board from rank strings, row 1 first.
    ///
    /// The whole state is validated before a board is produced, so a bad
    /// state never yields a partially populated board.
    pub fn from_rank_strings<S: AsRef<str>>(rows: &[S]) -> Result<Board, BoardError> {
        let (height, width) = validate_board_state(rows)?;
        let mut board = Board::new(height, width);

        for (r, rank) in rows.iter().enumerate() {
            for (c, symbol) in rank.as_ref().chars().enumerate() {
                let piece = if symbol == EMPTY_SQUARE {
                    None
                } else {
                    Some(Piece::from_symbol(symbol).ok_or(BoardError::InvalidPieceSymbol {
                        symbol,
                        row: r + 1,
                        col: c + 1,
                    })?)
                };
                board.add_piece(Position::new(r as i32 + 1, c as i32 + 1), piece)?;
            }
        }

        Ok(board)
    }

    /// Export the board as rank strings, row 1 first.
    pub fn to_rank_strings(&self) -> Vec<String> {
        (1..=self.rows() as i32)
            .map(|row| {
                (1..=self.cols() as i32)
                    .map(|col| match self.piece(Position::new(row, col)) {
                        Ok(Some(piece)) => piece.symbol(),
                        _ => EMPTY_SQUARE,
                    })
                    .collect()
            })
            .collect()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse rank strings joined by `/`, row 1 first.
    fn from_str(s: &str) -> Result<Board, BoardError> {
        let rows: Vec<&str> = s.trim().split(ROW_SEPARATOR).collect();
        Board::from_rank_strings(&rows)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ranks = self.to_rank_strings();
        let sep = ROW_SEPARATOR.to_string();
        write!(f, "{}", ranks.join(&sep))
    }
}
