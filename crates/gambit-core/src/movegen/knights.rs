//! Knight: one L-shaped jump, ignoring anything in between.

use super::{Stamina, StepCalculator};
use crate::position::Position;

const KNIGHT_JUMPS: [Position; 8] = [
    Position::new(1, 2),
    Position::new(2, 1),
    Position::new(2, -1),
    Position::new(1, -2),
    Position::new(-1, -2),
    Position::new(-2, -1),
    Position::new(-2, 1),
    Position::new(-1, 2),
];

pub(super) static KNIGHT: StepCalculator = StepCalculator::new(&KNIGHT_JUMPS, Stamina::Steps(1));
