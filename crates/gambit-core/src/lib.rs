//! Core rules for a chess variant on rectangular boards: board representation,
//! per-piece move generation, check detection, and special moves.

mod board;
mod board_state;
mod chess_move;
mod color;
mod engine;
mod error;
mod game;
pub mod movegen;
mod piece;
mod piece_kind;
mod position;
mod status;
mod team_database;

pub use board::{Board, PrettyBoard};
pub use board_state::{EMPTY_SQUARE, ROW_SEPARATOR, STANDARD_BOARD_STATE, validate_board_state};
pub use chess_move::{Move, ParseMoveError, end_positions, start_positions};
pub use color::Color;
pub use engine::{AppliedMove, MoveEngine, MoveKind};
pub use error::{BoardError, MoveError};
pub use game::Game;
pub use movegen::{MoveCalculator, Stamina, StepCalculator};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::Position;
pub use status::GameStatus;
pub use team_database::{MoveRecord, TeamDatabase};
