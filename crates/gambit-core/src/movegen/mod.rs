//! Per-piece move calculation.
//!
//! Every piece kind maps to one stateless [`MoveCalculator`]. Sliding and
//! stepping pieces share [`StepCalculator`], configured with a set of
//! direction vectors and a [`Stamina`]; pawns have their own calculator.
//! Calculated moves ignore check; the engine filters them afterwards.

mod king;
mod knights;
mod pawns;
mod sliders;

use std::collections::HashSet;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;

pub use self::pawns::{PawnCalculator, expand_promotions};

/// Maximum number of steps a piece may take along one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stamina {
    /// Walk until the board edge or a blocker.
    Unlimited,
    /// Walk at most this many steps.
    Steps(u32),
}

impl Stamina {
    /// Return `true` if a walk may take step number `step` (1-based).
    #[inline]
    pub const fn allows(self, step: u32) -> bool {
        match self {
            Stamina::Unlimited => true,
            Stamina::Steps(max) => step <= max,
        }
    }
}

/// Move generation strategy for one piece kind.
pub trait MoveCalculator: Sync {
    /// Moves available to a `color` piece on `position`, ignoring check.
    fn calculate_moves(&self, color: Color, position: Position, board: &Board) -> HashSet<Move>;

    /// Moves that threaten a square, used for check detection.
    ///
    /// Only pawns attack differently from how they move.
    fn calculate_attack_moves(&self, color: Color, position: Position, board: &Board) -> HashSet<Move> {
        self.calculate_moves(color, position, board)
    }
}

/// Calculator for pieces that repeat fixed direction vectors.
#[derive(Debug, Clone, Copy)]
pub struct StepCalculator {
    directions: &'static [Position],
    stamina: Stamina,
}

impl StepCalculator {
    pub const fn new(directions: &'static [Position], stamina: Stamina) -> StepCalculator {
        StepCalculator {
            directions,
            stamina,
        }
    }

    pub const fn directions(&self) -> &'static [Position] {
        self.directions
    }

    pub const fn stamina(&self) -> Stamina {
        self.stamina
    }

    /// Walk outward along every direction from `position`.
    ///
    /// An empty in-bounds square yields a move and the walk continues. An
    /// occupied square ends the walk, yielding a final capture only when
    /// `allow_capture` is set and the occupant belongs to the other team.
    pub fn walk(&self, color: Color, position: Position, board: &Board, allow_capture: bool) -> HashSet<Move> {
        let mut moves = HashSet::new();

        for &dir in self.directions {
            let mut target = position;
            let mut step = 1;
            while self.stamina.allows(step) {
                target += dir;
                // Off the board: this direction is exhausted.
                let Ok(occupant) = board.piece(target) else {
                    break;
                };

                match occupant {
                    None => {
                        moves.insert(Move::new(position, target));
                    }
                    Some(blocker) => {
                        if allow_capture && blocker.color() != color {
                            moves.insert(Move::new(position, target));
                        }
                        break;
                    }
                }
                step += 1;
            }
        }

        moves
    }
}

impl MoveCalculator for StepCalculator {
    fn calculate_moves(&self, color: Color, position: Position, board: &Board) -> HashSet<Move> {
        self.walk(color, position, board, true)
    }
}

/// Return the calculator registered for `kind`.
pub fn calculator_for(kind: PieceKind) -> &'static dyn MoveCalculator {
    match kind {
        PieceKind::King => &king::KING,
        PieceKind::Queen => &sliders::QUEEN,
        PieceKind::Bishop => &sliders::BISHOP,
        PieceKind::Knight => &knights::KNIGHT,
        PieceKind::Rook => &sliders::ROOK,
        PieceKind::Pawn => &pawns::PAWN,
    }
}
