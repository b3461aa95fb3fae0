//! Bishop, rook, and queen: unlimited walks along lines.

use super::{Stamina, StepCalculator};
use crate::position::Position;

const DIAGONALS: [Position; 4] = [
    Position::new(1, 1),
    Position::new(1, -1),
    Position::new(-1, 1),
    Position::new(-1, -1),
];

const ORTHOGONALS: [Position; 4] = [
    Position::new(1, 0),
    Position::new(-1, 0),
    Position::new(0, 1),
    Position::new(0, -1),
];

const ALL_LINES: [Position; 8] = [
    Position::new(1, 1),
    Position::new(1, -1),
    Position::new(-1, 1),
    Position::new(-1, -1),
    Position::new(1, 0),
    Position::new(-1, 0),
    Position::new(0, 1),
    Position::new(0, -1),
];

pub(super) static BISHOP: StepCalculator = StepCalculator::new(&DIAGONALS, Stamina::Unlimited);
pub(super) static ROOK: StepCalculator = StepCalculator::new(&ORTHOGONALS, Stamina::Unlimited);
pub(super) static QUEEN: StepCalculator = StepCalculator::new(&ALL_LINES, Stamina::Unlimited);
