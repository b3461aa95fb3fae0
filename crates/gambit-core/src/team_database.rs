//! Per-team caches derived from the board, plus the team's move history.

use std::collections::HashSet;

use crate::board::Board;
use crate::chess_move::{Move, end_positions};
use crate::color::Color;
use crate::piece::Piece;
use crate::position::Position;

/// One applied move, as remembered by the team that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRecord {
    /// The piece that moved, before any promotion.
    pub piece: Piece,
    /// The move itself.
    pub mv: Move,
    /// Game ply at which the move was applied, starting from 1.
    pub ply: u32,
}

/// Cached view of one team's pieces.
///
/// `king_positions`, `attack_moves` and `moves` are rebuilt from scratch by
/// [`TeamDatabase::update`] and always describe the board passed last. The
/// captured-piece log and move records change only when a move is really
/// applied, never during check simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamDatabase {
    color: Color,
    king_positions: HashSet<Position>,
    attack_moves: HashSet<Move>,
    moves: HashSet<Move>,
    captured: Vec<Piece>,
    records: Vec<MoveRecord>,
}

impl TeamDatabase {
    /// Create a database for `color` and fill its caches from `board`.
    pub fn new(color: Color, board: &Board) -> TeamDatabase {
        let mut db = TeamDatabase {
            color,
            king_positions: HashSet::new(),
            attack_moves: HashSet::new(),
            moves: HashSet::new(),
            captured: Vec::new(),
            records: Vec::new(),
        };
        db.update(board);
        db
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Rescan `board` and rebuild the king, attack and move caches.
    pub fn update(&mut self, board: &Board) {
        self.king_positions = board.king_positions(self.color).collect();
        self.attack_moves.clear();
        self.moves.clear();
        for (pos, piece) in board.pieces_of(self.color) {
            self.attack_moves.extend(piece.attack_moves(board, pos));
            self.moves.extend(piece.piece_moves(board, pos));
        }
    }

    pub fn king_positions(&self) -> &HashSet<Position> {
        &self.king_positions
    }

    /// Every move that threatens a square, pawn diagonals included.
    pub fn attack_moves(&self) -> &HashSet<Move> {
        &self.attack_moves
    }

    /// Every piece move, unfiltered by check.
    pub fn moves(&self) -> &HashSet<Move> {
        &self.moves
    }

    /// Squares this team currently attacks.
    pub fn attacked_squares(&self) -> HashSet<Position> {
        end_positions(&self.attack_moves)
    }

    /// Return `true` if this team attacks `pos`.
    pub fn attacks(&self, pos: Position) -> bool {
        self.attack_moves.iter().any(|mv| mv.end() == pos)
    }

    /// Opposing pieces this team has captured, oldest first.
    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }

    pub fn add_captured_piece(&mut self, piece: Piece) {
        self.captured.push(piece);
    }

    /// Applied moves, oldest first.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn record_move(&mut self, piece: Piece, mv: Move, ply: u32) {
        self.records.push(MoveRecord { piece, mv, ply });
    }

    /// The most recent move this team made.
    pub fn last_moved_piece(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    /// Return `true` if the piece standing on `pos` has ever moved.
    ///
    /// Any record touching `pos` means the square's current occupant either
    /// moved there or replaced a piece that moved away.
    pub fn piece_has_moved(&self, pos: Position) -> bool {
        self.records
            .iter()
            .any(|record| record.mv.start() == pos || record.mv.end() == pos)
    }

    /// Forget captured pieces and move records.
    pub fn clear_history(&mut self) {
        self.captured.clear();
        self.records.clear();
    }
}
