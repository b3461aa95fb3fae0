//! A game: the board, its rules engine, and the team on move.

use std::collections::HashSet;

use tracing::debug;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::engine::{AppliedMove, MoveEngine};
use crate::error::{BoardError, MoveError};
use crate::position::Position;
use crate::status::GameStatus;

/// A game in progress.
///
/// The board is only mutated through [`Game::apply_move`] and
/// [`Game::set_board`]; the engine's caches always describe it. Two games
/// are equal when their boards and the team on move are equal.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    engine: MoveEngine,
    active: Color,
}

impl Game {
    /// Standard starting position, White to move.
    pub fn new() -> Game {
        Game::from_board(Board::standard(), Color::White)
    }

    /// Start from an arbitrary board with `active` to move and no history.
    pub fn from_board(board: Board, active: Color) -> Game {
        let engine = MoveEngine::new(&board);
        Game { board, engine, active }
    }

    /// Start from rank strings, row 1 first.
    pub fn from_rank_strings<S: AsRef<str>>(rows: &[S], active: Color) -> Result<Game, BoardError> {
        Ok(Game::from_board(Board::from_rank_strings(rows)?, active))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn engine(&self) -> &MoveEngine {
        &self.engine
    }

    /// The team whose move it is.
    #[inline]
    pub fn team_turn(&self) -> Color {
        self.active
    }

    pub fn set_team_turn(&mut self, color: Color) {
        self.active = color;
    }

    /// Replace the board, rebuild every cache, and forget move history.
    pub fn set_board(&mut self, board: Board) {
        self.engine = MoveEngine::new(&board);
        self.board = board;
    }

    /// Export the board as rank strings, row 1 first.
    pub fn rank_strings(&self) -> Vec<String> {
        self.board.to_rank_strings()
    }

    /// Legal moves for the piece on `pos`, whichever team owns it.
    pub fn legal_moves(&mut self, pos: Position) -> HashSet<Move> {
        self.engine.valid_moves(&mut self.board, pos)
    }

    /// Every legal move of the team on move.
    pub fn all_legal_moves(&mut self) -> HashSet<Move> {
        self.engine.legal_moves(&mut self.board, self.active)
    }

    /// Apply `mv` for the team on move and pass the turn.
    pub fn apply_move(&mut self, mv: Move) -> Result<AppliedMove, MoveError> {
        let applied = self.engine.make_move(&mut self.board, mv, self.active)?;
        self.active = !self.active;
        debug!(turn = %self.active, "turn passed");
        Ok(applied)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        self.engine.is_in_check(color)
    }

    pub fn is_in_checkmate(&mut self, color: Color) -> bool {
        self.engine.is_in_checkmate(&mut self.board, color)
    }

    pub fn is_in_stalemate(&mut self, color: Color) -> bool {
        self.engine.is_in_stalemate(&mut self.board, color)
    }

    /// Status of the team on move.
    pub fn status(&mut self) -> GameStatus {
        let color = self.active;
        if self.engine.is_in_check(color) {
            if self.engine.is_in_checkmate(&mut self.board, color) {
                GameStatus::Checkmate(color)
            } else {
                GameStatus::Check(color)
            }
        } else if self.engine.is_in_stalemate(&mut self.board, color) {
            GameStatus::Stalemate(color)
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board && self.active == other.active
    }
}

impl Eq for Game {}
