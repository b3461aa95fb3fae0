//! Move legality, check detection, and move application.
//!
//! The [`MoveEngine`] owns both [`TeamDatabase`]s and the ply counter. The
//! board itself is owned by the caller and passed in; check testing applies
//! a candidate move to that board, reads the refreshed caches, and rolls the
//! board back before returning.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, trace};

use crate::board::Board;
use crate::chess_move::{Move, start_positions};
use crate::color::Color;
use crate::error::{BoardError, MoveError};
use crate::movegen::expand_promotions;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::team_database::TeamDatabase;

/// Directions a king may castle along.
const CASTLE_DIRECTIONS: [Position; 2] = [Position::new(0, -1), Position::new(0, 1)];

/// Number of files the king travels when castling.
const CASTLE_KING_STEPS: i32 = 2;

/// Minimum file distance between king and rook for a castle.
const CASTLE_MIN_ROOK_DISTANCE: i32 = 3;

/// How a move rearranges the board beyond lifting and placing one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A plain move or capture.
    Normal,
    /// A pawn reaching its promotion row and becoming `PieceKind`.
    Promotion(PieceKind),
    /// A pawn capturing a double-jumped pawn beside it.
    EnPassant {
        /// Square of the pawn being captured.
        captured: Position,
    },
    /// A king moving two files with the rook hopping over it.
    Castle {
        rook_from: Position,
        rook_to: Position,
    },
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveKind::Normal => write!(f, "normal"),
            MoveKind::Promotion(kind) => write!(f, "promotion to {kind}"),
            MoveKind::EnPassant { .. } => write!(f, "en passant"),
            MoveKind::Castle { .. } => write!(f, "castle"),
        }
    }
}

/// Outcome of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    /// The move as submitted.
    pub mv: Move,
    /// The piece that moved, before promotion.
    pub piece: Piece,
    pub kind: MoveKind,
    /// The opposing piece removed from the board, if any.
    pub captured: Option<Piece>,
    /// Ply number of this move, starting from 1.
    pub ply: u32,
}

/// Rules engine for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEngine {
    white: TeamDatabase,
    black: TeamDatabase,
    /// Number of moves applied so far.
    ply: u32,
}

impl MoveEngine {
    /// Create an engine with no history and caches built from `board`.
    pub fn new(board: &Board) -> MoveEngine {
        MoveEngine {
            white: TeamDatabase::new(Color::White, board),
            black: TeamDatabase::new(Color::Black, board),
            ply: 0,
        }
    }

    pub fn database(&self, color: Color) -> &TeamDatabase {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    fn database_mut(&mut self, color: Color) -> &mut TeamDatabase {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Number of moves applied so far.
    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// Rebuild both teams' board-derived caches.
    pub fn update_databases(&mut self, board: &Board) {
        self.white.update(board);
        self.black.update(board);
    }

    /// Return `true` if any `color` king stands on a square the other team attacks.
    pub fn is_in_check(&self, color: Color) -> bool {
        let enemy = self.database(!color);
        self.database(color)
            .king_positions()
            .iter()
            .any(|&king| enemy.attacks(king))
    }

    /// Legal moves for the piece on `pos`; empty if the square is empty or off the board.
    ///
    /// Raw piece moves plus any castle or en passant, minus every move that
    /// would leave the mover's own king attacked.
    pub fn valid_moves(&mut self, board: &mut Board, pos: Position) -> HashSet<Move> {
        let Ok(Some(piece)) = board.piece(pos) else {
            return HashSet::new();
        };

        let mut candidates = piece.piece_moves(board, pos);
        candidates.extend(self.castle_moves(board, pos, piece));
        candidates.extend(self.en_passant_moves(board, pos, piece));

        candidates.retain(|&mv| !self.move_reveals_check(board, mv));
        candidates
    }

    /// Return `true` if `mv` is among the legal moves of the piece on its start square.
    pub fn is_move_valid(&mut self, board: &mut Board, mv: Move) -> bool {
        self.valid_moves(board, mv.start()).contains(&mv)
    }

    /// Every legal move available to `color`.
    pub fn legal_moves(&mut self, board: &mut Board, color: Color) -> HashSet<Move> {
        let starts: Vec<Position> = board.pieces_of(color).map(|(pos, _)| pos).collect();
        let mut moves = HashSet::new();
        for pos in starts {
            moves.extend(self.valid_moves(board, pos));
        }
        moves
    }

    /// Return `true` if `color` has at least one legal move.
    pub fn has_legal_move(&mut self, board: &mut Board, color: Color) -> bool {
        let starts: Vec<Position> = board.pieces_of(color).map(|(pos, _)| pos).collect();
        starts.into_iter().any(|pos| !self.valid_moves(board, pos).is_empty())
    }

    /// Return `true` if playing `mv` would leave the mover's own king attacked.
    ///
    /// The board and both databases are identical before and after the call.
    pub fn move_reveals_check(&mut self, board: &mut Board, mv: Move) -> bool {
        let Ok(Some(piece)) = board.piece(mv.start()) else {
            debug_assert!(false, "simulated move {mv} has no piece at its start");
            return true;
        };

        let kind = classify(board, mv, piece);
        let mut simulation = Simulation::new(self, board);
        if simulation.apply(square_writes(piece, mv, kind)).is_err() {
            return true;
        }
        let revealed = simulation.engine.is_in_check(piece.color());
        trace!(%mv, revealed, "simulated move");
        revealed
    }

    /// Return `true` if `color` is in check and no legal move gets it out.
    ///
    /// King escapes and captures of a checking piece are tried first; if
    /// neither works, any legal move (including a block) refutes mate.
    pub fn is_in_checkmate(&mut self, board: &mut Board, color: Color) -> bool {
        if !self.is_in_check(color) {
            return false;
        }

        let kings = self.database(color).king_positions().clone();
        let own_moves: Vec<Move> = self.database(color).moves().iter().copied().collect();

        let escapes = own_moves.iter().filter(|mv| kings.contains(&mv.start()));
        for &mv in escapes {
            if !self.move_reveals_check(board, mv) {
                return false;
            }
        }

        let checkers = start_positions(
            self.database(!color)
                .attack_moves()
                .iter()
                .filter(|mv| kings.contains(&mv.end())),
        );
        let captures = own_moves
            .iter()
            .filter(|mv| checkers.contains(&mv.end()) && !kings.contains(&mv.start()));
        for &mv in captures {
            if !self.move_reveals_check(board, mv) {
                return false;
            }
        }

        !self.has_legal_move(board, color)
    }

    /// Return `true` if `color` is not in check but has no legal move.
    pub fn is_in_stalemate(&mut self, board: &mut Board, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_move(board, color)
    }

    /// Apply `mv` for `active`, recording history and refreshing both caches.
    ///
    /// Fails without touching the board if the start square is empty, holds
    /// the other team's piece, or `mv` is not legal. The turn is the
    /// caller's to advance.
    pub fn make_move(&mut self, board: &mut Board, mv: Move, active: Color) -> Result<AppliedMove, MoveError> {
        let piece = match board.piece(mv.start()) {
            Ok(Some(piece)) => piece,
            Ok(None) => return Err(MoveError::NoPieceAtStart { position: mv.start() }),
            Err(_) => return Err(MoveError::IllegalMove { mv }),
        };
        if piece.color() != active {
            return Err(MoveError::WrongTurn {
                expected: active,
                found: piece.color(),
            });
        }
        if !self.is_move_valid(board, mv) {
            debug!(%mv, "rejected illegal move");
            return Err(MoveError::IllegalMove { mv });
        }

        let kind = classify(board, mv, piece);
        let captured_at = match kind {
            MoveKind::EnPassant { captured } => captured,
            _ => mv.end(),
        };
        let captured = board.piece(captured_at).ok().flatten();

        for (pos, occupant) in square_writes(piece, mv, kind) {
            board.add_piece(pos, occupant).map_err(|_| MoveError::IllegalMove { mv })?;
        }

        self.ply += 1;
        let ply = self.ply;
        let db = self.database_mut(piece.color());
        db.record_move(piece, mv, ply);
        if let MoveKind::Castle { rook_from, rook_to } = kind {
            let rook = Piece::new(PieceKind::Rook, piece.color());
            db.record_move(rook, Move::new(rook_from, rook_to), ply);
        }
        if let Some(taken) = captured {
            db.add_captured_piece(taken);
        }
        self.update_databases(board);

        debug!(%mv, piece = ?piece, %kind, captured = ?captured, ply, "applied move");
        Ok(AppliedMove {
            mv,
            piece,
            kind,
            captured,
            ply,
        })
    }

    /// Castle moves for an unmoved, unchecked king on `pos`.
    fn castle_moves(&self, board: &Board, pos: Position, piece: Piece) -> Vec<Move> {
        let color = piece.color();
        let db = self.database(color);
        if piece.kind() != PieceKind::King || db.piece_has_moved(pos) || self.is_in_check(color) {
            return Vec::new();
        }
        let attacked = self.database(!color).attacked_squares();
        let rook = Piece::new(PieceKind::Rook, color);

        let mut moves = Vec::new();
        for dir in CASTLE_DIRECTIONS {
            let mut target = pos + dir;
            let mut distance = 1;
            loop {
                match board.piece(target) {
                    Ok(None) if !attacked.contains(&target) => {
                        target += dir;
                        distance += 1;
                    }
                    Ok(Some(found))
                        if found == rook
                            && distance >= CASTLE_MIN_ROOK_DISTANCE
                            && !db.piece_has_moved(target) =>
                    {
                        let mv = Move::new(pos, pos + dir * CASTLE_KING_STEPS);
                        debug!(%mv, rook = %target, "castle available");
                        moves.push(mv);
                        break;
                    }
                    // An attacked transit square, a blocker, or the board edge.
                    _ => break,
                }
            }
        }
        moves
    }

    /// En passant captures for a pawn on `pos`.
    ///
    /// Only available right after the enemy pawn double-jumped to the square
    /// beside it.
    fn en_passant_moves(&self, board: &Board, pos: Position, piece: Piece) -> HashSet<Move> {
        let color = piece.color();
        if piece.kind() != PieceKind::Pawn {
            return HashSet::new();
        }
        let Some(last) = self.database(!color).last_moved_piece() else {
            return HashSet::new();
        };
        if last.ply != self.ply || last.piece.kind() != PieceKind::Pawn {
            return HashSet::new();
        }

        let jump = last.mv.vector();
        let victim = last.mv.end();
        if jump.abs() != Position::new(2, 0) || (pos - victim).abs() != Position::new(0, 1) {
            return HashSet::new();
        }
        if board.piece(victim) != Ok(Some(last.piece)) {
            return HashSet::new();
        }

        let target = victim - jump.normalize();
        if target.row() - pos.row() != color.forward() {
            return HashSet::new();
        }

        debug!(pawn = %pos, %target, "en passant available");
        expand_promotions(color, board, HashSet::from([Move::new(pos, target)]))
    }
}

/// Work out what kind of move `mv` is for `piece` on the current board.
fn classify(board: &Board, mv: Move, piece: Piece) -> MoveKind {
    let vector = mv.vector();
    match piece.kind() {
        PieceKind::King if vector.row() == 0 && vector.col().abs() == CASTLE_KING_STEPS => {
            let dir = vector.normalize();
            let mut rook_from = mv.end();
            while matches!(board.piece(rook_from), Ok(None)) {
                rook_from += dir;
            }
            MoveKind::Castle {
                rook_from,
                rook_to: mv.end() - dir,
            }
        }
        PieceKind::Pawn if vector.col() != 0 && matches!(board.piece(mv.end()), Ok(None)) => MoveKind::EnPassant {
            captured: Position::new(mv.start().row(), mv.end().col()),
        },
        _ => match mv.promotion() {
            Some(kind) => MoveKind::Promotion(kind),
            None => MoveKind::Normal,
        },
    }
}

/// The square writes that carry out `mv`, in order.
fn square_writes(piece: Piece, mv: Move, kind: MoveKind) -> Vec<(Position, Option<Piece>)> {
    let landed = mv.promotion().map_or(piece, |promoted| piece.with_kind(promoted));
    let mut writes = vec![(mv.start(), None), (mv.end(), Some(landed))];
    match kind {
        MoveKind::EnPassant { captured } => writes.push((captured, None)),
        MoveKind::Castle { rook_from, rook_to } => {
            writes.push((rook_from, None));
            writes.push((rook_to, Some(Piece::new(PieceKind::Rook, piece.color()))));
        }
        MoveKind::Normal | MoveKind::Promotion(_) => {}
    }
    writes
}

/// A move tried on the live board, undone when dropped.
///
/// Every overwritten square is logged before it changes, so the board is
/// restored even when applying stops halfway.
struct Simulation<'a> {
    engine: &'a mut MoveEngine,
    board: &'a mut Board,
    undo: Vec<(Position, Option<Piece>)>,
}

impl<'a> Simulation<'a> {
    fn new(engine: &'a mut MoveEngine, board: &'a mut Board) -> Simulation<'a> {
        Simulation {
            engine,
            board,
            undo: Vec::new(),
        }
    }

    fn apply(&mut self, writes: Vec<(Position, Option<Piece>)>) -> Result<(), BoardError> {
        for (pos, occupant) in writes {
            let previous = self.board.add_piece(pos, occupant)?;
            self.undo.push((pos, previous));
        }
        self.engine.update_databases(self.board);
        Ok(())
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        if self.undo.is_empty() {
            return;
        }
        // Undo in reverse so squares written twice get their original occupant.
        for (pos, previous) in self.undo.drain(..).rev() {
            let restored = self.board.add_piece(pos, previous);
            debug_assert!(restored.is_ok(), "undo write to {pos} failed");
        }
        self.engine.update_databases(self.board);
    }
}

#[cfg(test)]
mod tests {
    use super::{MoveEngine, MoveKind};
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::error::MoveError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;

    fn pos(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn board(ranks: &[&str]) -> Board {
        Board::from_rank_strings(ranks).unwrap()
    }

    #[test]
    fn standard_opening_has_twenty_moves() {
        let mut board = Board::standard();
        let mut engine = MoveEngine::new(&board);
        assert_eq!(engine.legal_moves(&mut board, Color::White).len(), 20);
        assert_eq!(engine.legal_moves(&mut board, Color::Black).len(), 20);
        assert!(!engine.is_in_check(Color::White));
    }

    #[test]
    fn empty_square_has_no_moves() {
        let mut board = Board::standard();
        let mut engine = MoveEngine::new(&board);
        assert!(engine.valid_moves(&mut board, pos(4, 4)).is_empty());
        assert!(engine.valid_moves(&mut board, pos(9, 9)).is_empty());
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        // White king on row 1, white rook pinned on the same file by a black rook.
        let mut board = board(&["----K---", "----R---", "--------", "--------", "--------", "--------", "--------", "----r--k"]);
        let mut engine = MoveEngine::new(&board);
        let moves = engine.valid_moves(&mut board, pos(2, 5));
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|mv| mv.end().col() == 5), "pinned rook left the file: {moves:?}");
    }

    #[test]
    fn simulation_leaves_no_trace() {
        let mut board = Board::standard();
        let mut engine = MoveEngine::new(&board);
        let before_board = board.clone();
        let before_engine = engine.clone();
        for mv in [Move::new(pos(2, 5), pos(4, 5)), Move::new(pos(1, 2), pos(3, 3))] {
            assert!(!engine.move_reveals_check(&mut board, mv));
        }
        assert_eq!(board, before_board);
        assert_eq!(engine, before_engine);
    }

    #[test]
    fn make_move_errors() {
        let mut board = Board::standard();
        let mut engine = MoveEngine::new(&board);
        let before = board.clone();

        assert_eq!(
            engine.make_move(&mut board, Move::new(pos(4, 4), pos(5, 4)), Color::White),
            Err(MoveError::NoPieceAtStart { position: pos(4, 4) })
        );
        assert_eq!(
            engine.make_move(&mut board, Move::new(pos(7, 4), pos(5, 4)), Color::White),
            Err(MoveError::WrongTurn {
                expected: Color::White,
                found: Color::Black,
            })
        );
        let illegal = Move::new(pos(2, 1), pos(5, 1));
        assert_eq!(
            engine.make_move(&mut board, illegal, Color::White),
            Err(MoveError::IllegalMove { mv: illegal })
        );
        let off_board = Move::new(pos(0, 1), pos(1, 1));
        assert_eq!(
            engine.make_move(&mut board, off_board, Color::White),
            Err(MoveError::IllegalMove { mv: off_board })
        );
        assert_eq!(board, before);
        assert_eq!(engine.ply(), 0);
    }

    #[test]
    fn capture_is_logged() {
        let mut board = board(&["K-------", "--------", "--------", "---R---q", "--------", "--------", "--------", "-------k"]);
        let mut engine = MoveEngine::new(&board);
        let applied = engine
            .make_move(&mut board, Move::new(pos(4, 4), pos(4, 8)), Color::White)
            .unwrap();
        assert_eq!(applied.captured, Some(Piece::BLACK_QUEEN));
        assert_eq!(applied.kind, MoveKind::Normal);
        assert_eq!(engine.database(Color::White).captured_pieces(), &[Piece::BLACK_QUEEN]);
        assert_eq!(board.piece(pos(4, 8)), Ok(Some(Piece::WHITE_ROOK)));
        assert!(engine.is_in_check(Color::Black));
    }

    #[test]
    fn castle_is_not_offered_through_attacked_square() {
        // Black rook on file 6 covers the king's transit square.
        let mut board = board(&["----K--R", "--------", "--------", "--------", "--------", "--------", "--------", "k----r--"]);
        let mut engine = MoveEngine::new(&board);
        let moves = engine.valid_moves(&mut board, pos(1, 5));
        assert!(!moves.contains(&Move::new(pos(1, 5), pos(1, 7))));
    }

    #[test]
    fn castle_needs_unmoved_king_and_rook() {
        let mut board = board(&["R---K--R", "--------", "--------", "--------", "--------", "--------", "--------", "---k----"]);
        let mut engine = MoveEngine::new(&board);
        let castles = |engine: &mut MoveEngine, board: &mut Board| {
            let moves = engine.valid_moves(board, pos(1, 5));
            [pos(1, 3), pos(1, 7)]
                .into_iter()
                .filter(|&end| moves.contains(&Move::new(pos(1, 5), end)))
                .count()
        };
        assert_eq!(castles(&mut engine, &mut board), 2);

        // The kingside rook leaves and comes back: that side is spent.
        engine.make_move(&mut board, Move::new(pos(1, 8), pos(2, 8)), Color::White).unwrap();
        engine.make_move(&mut board, Move::new(pos(8, 4), pos(8, 5)), Color::Black).unwrap();
        engine.make_move(&mut board, Move::new(pos(2, 8), pos(1, 8)), Color::White).unwrap();
        engine.make_move(&mut board, Move::new(pos(8, 5), pos(8, 4)), Color::Black).unwrap();
        assert_eq!(castles(&mut engine, &mut board), 1);
        assert!(engine.valid_moves(&mut board, pos(1, 5)).contains(&Move::new(pos(1, 5), pos(1, 3))));

        engine.make_move(&mut board, Move::new(pos(1, 5), pos(2, 5)), Color::White).unwrap();
        engine.make_move(&mut board, Move::new(pos(8, 4), pos(8, 5)), Color::Black).unwrap();
        engine.make_move(&mut board, Move::new(pos(2, 5), pos(1, 5)), Color::White).unwrap();
        engine.make_move(&mut board, Move::new(pos(8, 5), pos(8, 4)), Color::Black).unwrap();
        assert_eq!(castles(&mut engine, &mut board), 0);
    }

    #[test]
    fn queenside_castle_moves_the_rook() {
        let mut board = board(&["R---K---", "--------", "--------", "--------", "--------", "--------", "--------", "-------k"]);
        let mut engine = MoveEngine::new(&board);
        let applied = engine
            .make_move(&mut board, Move::new(pos(1, 5), pos(1, 3)), Color::White)
            .unwrap();
        assert_eq!(
            applied.kind,
            MoveKind::Castle {
                rook_from: pos(1, 1),
                rook_to: pos(1, 4),
            }
        );
        assert_eq!(board.to_rank_strings()[0], "--KR----");
        let records = engine.database(Color::White).records();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.ply == 1));
    }

    #[test]
    fn en_passant_expires_after_one_ply() {
        let mut board = board(&["----K---", "--------", "--------", "----P---", "--------", "--------", "---p----", "----k---"]);
        let mut engine = MoveEngine::new(&board);
        engine.make_move(&mut board, Move::new(pos(4, 5), pos(5, 5)), Color::White).unwrap();
        engine.make_move(&mut board, Move::new(pos(7, 4), pos(5, 4)), Color::Black).unwrap();

        let capture = Move::new(pos(5, 5), pos(6, 4));
        assert!(engine.is_move_valid(&mut board, capture));

        // White declines; the chance is gone on the next turn.
        engine.make_move(&mut board, Move::new(pos(1, 5), pos(1, 4)), Color::White).unwrap();
        engine.make_move(&mut board, Move::new(pos(8, 5), pos(8, 6)), Color::Black).unwrap();
        assert!(!engine.is_move_valid(&mut board, capture));
    }

    #[test]
    fn promotion_places_chosen_piece() {
        let mut board = board(&["K-------", "--------", "--------", "--------", "--------", "--------", "--P-----", "-------k"]);
        let mut engine = MoveEngine::new(&board);
        let plain = Move::new(pos(7, 3), pos(8, 3));
        assert!(matches!(
            engine.make_move(&mut board, plain, Color::White),
            Err(MoveError::IllegalMove { .. })
        ));

        let promote = Move::new_promotion(pos(7, 3), pos(8, 3), PieceKind::Knight);
        let applied = engine.make_move(&mut board, promote, Color::White).unwrap();
        assert_eq!(applied.kind, MoveKind::Promotion(PieceKind::Knight));
        assert_eq!(applied.piece, Piece::WHITE_PAWN);
        assert_eq!(board.piece(pos(8, 3)), Ok(Some(Piece::WHITE_KNIGHT)));
    }

    #[test]
    fn no_castle_while_in_check() {
        let empty = "--------";
        let castle = Move::new(pos(1, 5), pos(1, 7));

        let mut quiet = board(&["----K--R", empty, empty, empty, empty, empty, empty, "k--r----"]);
        let mut engine = MoveEngine::new(&quiet);
        assert!(engine.valid_moves(&mut quiet, pos(1, 5)).contains(&castle));

        let mut checked = board(&["----K--R", empty, empty, empty, empty, empty, empty, "k---r---"]);
        let mut engine = MoveEngine::new(&checked);
        assert!(engine.is_in_check(Color::White));
        let moves = engine.valid_moves(&mut checked, pos(1, 5));
        assert!(!moves.contains(&castle));
        assert!(moves.contains(&Move::new(pos(1, 5), pos(1, 6))));
    }

    #[test]
    fn en_passant_not_offered_when_it_exposes_the_king() {
        // Taking en passant empties both squares between the king and the rook.
        let mut board = board(&["--------", "--------", "--------", "--------", "K---P--r", "--------", "---p----", "----k---"]);
        let mut engine = MoveEngine::new(&board);
        engine.make_move(&mut board, Move::new(pos(7, 4), pos(5, 4)), Color::Black).unwrap();
        assert!(!engine.is_in_check(Color::White));

        let moves = engine.valid_moves(&mut board, pos(5, 5));
        assert!(!moves.contains(&Move::new(pos(5, 5), pos(6, 4))));
        assert!(moves.contains(&Move::new(pos(5, 5), pos(6, 5))));
    }

    #[test]
    fn king_escape_refutes_mate() {
        let mut board = board(&["r------K", "-----PP-", "--------", "--------", "--------", "--------", "--------", "k-------"]);
        let mut engine = MoveEngine::new(&board);
        assert!(engine.is_in_check(Color::White));
        assert!(!engine.is_in_checkmate(&mut board, Color::White));
        assert!(engine.valid_moves(&mut board, pos(1, 8)).contains(&Move::new(pos(1, 8), pos(2, 8))));
    }

    #[test]
    fn block_refutes_mate() {
        // Back-rank check by a rook; the bishop can interpose on (1, 5).
        let mut board = board(&["r-----K-", "-----PPP", "--------", "-B------", "--------", "--------", "--------", "-------k"]);
        let mut engine = MoveEngine::new(&board);
        assert!(engine.is_in_check(Color::White));
        assert!(!engine.is_in_checkmate(&mut board, Color::White));

        let legal = engine.legal_moves(&mut board, Color::White);
        assert!(legal.contains(&Move::new(pos(4, 2), pos(1, 5))));
        assert!(legal.iter().all(|mv| mv.start() == pos(4, 2)), "only interpositions: {legal:?}");
    }

    #[test]
    fn back_rank_mate() {
        let mut board = board(&["r-----K-", "-----PPP", "--------", "--------", "--------", "--------", "--------", "-------k"]);
        let mut engine = MoveEngine::new(&board);
        assert!(engine.is_in_checkmate(&mut board, Color::White));
        assert!(!engine.is_in_stalemate(&mut board, Color::White));
    }

    #[test]
    fn cornered_king_is_stalemated() {
        let mut board = board(&["K-------", "--q-----", "--------", "--------", "--------", "--------", "--------", "-------k"]);
        let mut engine = MoveEngine::new(&board);
        assert!(!engine.is_in_check(Color::White));
        assert!(engine.is_in_stalemate(&mut board, Color::White));
        assert!(!engine.is_in_checkmate(&mut board, Color::White));
        assert!(engine.legal_moves(&mut board, Color::White).is_empty());
    }
}
