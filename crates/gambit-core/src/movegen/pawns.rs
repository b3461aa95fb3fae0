//! Pawn moves: forward steps, the opening double jump, diagonal captures, and promotion.

use std::collections::HashSet;

use super::{MoveCalculator, Stamina, StepCalculator};
use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Direction-neutral pawn vectors; the row component is scaled by [`Color::forward`].
const FORWARD: Position = Position::new(1, 0);
const ATTACKS: [Position; 2] = [Position::new(1, 1), Position::new(1, -1)];

const WHITE_FORWARD: [Position; 1] = [FORWARD];
const BLACK_FORWARD: [Position; 1] = [Position::new(-1, 0)];

/// Calculator shared by both colors; direction is resolved from the color at call time.
#[derive(Debug)]
pub struct PawnCalculator {
    white_step: StepCalculator,
    black_step: StepCalculator,
}

pub(super) static PAWN: PawnCalculator = PawnCalculator {
    white_step: StepCalculator::new(&WHITE_FORWARD, Stamina::Steps(1)),
    black_step: StepCalculator::new(&BLACK_FORWARD, Stamina::Steps(1)),
};

impl PawnCalculator {
    fn step(&self, color: Color) -> &StepCalculator {
        match color {
            Color::White => &self.white_step,
            Color::Black => &self.black_step,
        }
    }

    /// Scale a direction-neutral vector to `color`'s direction of travel.
    fn oriented(color: Color, vector: Position) -> Position {
        vector.multiply(Position::new(color.forward(), 1))
    }

    /// The double jump, if the pawn sits on its starting row with both squares ahead empty.
    fn double_jump(color: Color, position: Position, board: &Board) -> Option<Move> {
        if position.row() != color.pawn_row(board.rows() as i32) {
            return None;
        }
        let one = position + Self::oriented(color, FORWARD);
        let two = one + Self::oriented(color, FORWARD);
        let clear = |pos| matches!(board.piece(pos), Ok(None));
        (clear(one) && clear(two)).then(|| Move::new(position, two))
    }

    /// Diagonal squares on the board, regardless of what occupies them.
    fn attacked_squares(color: Color, position: Position, board: &Board) -> impl Iterator<Item = Position> + '_ {
        ATTACKS
            .iter()
            .map(move |&v| position + Self::oriented(color, v))
            .filter(|&target| board.in_bounds(target))
    }
}

impl MoveCalculator for PawnCalculator {
    fn calculate_moves(&self, color: Color, position: Position, board: &Board) -> HashSet<Move> {
        // Pawns never capture straight ahead.
        let mut moves = self.step(color).walk(color, position, board, false);

        if let Some(jump) = Self::double_jump(color, position, board) {
            moves.insert(jump);
        }

        for target in Self::attacked_squares(color, position, board) {
            if let Ok(Some(occupant)) = board.piece(target) {
                if occupant.color() != color {
                    moves.insert(Move::new(position, target));
                }
            }
        }

        expand_promotions(color, board, moves)
    }

    fn calculate_attack_moves(&self, color: Color, position: Position, board: &Board) -> HashSet<Move> {
        Self::attacked_squares(color, position, board)
            .map(|target| Move::new(position, target))
            .collect()
    }
}

/// Replace every move ending on `color`'s promotion row with one move per promotable kind.
pub fn expand_promotions(color: Color, board: &Board, moves: HashSet<Move>) -> HashSet<Move> {
    let promotion_row = color.promotion_row(board.rows() as i32);
    moves
        .into_iter()
        .flat_map(|mv| {
            if mv.end().row() == promotion_row && !mv.is_promotion() {
                PieceKind::PROMOTIONS
                    .iter()
                    .map(|&kind| Move::new_promotion(mv.start(), mv.end(), kind))
                    .collect::<Vec<_>>()
            } else {
                vec![mv]
            }
        })
        .collect()
}
