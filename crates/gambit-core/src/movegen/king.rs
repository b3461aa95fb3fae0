//! King: one step in any direction.

use super::{Stamina, StepCalculator};
use crate::position::Position;

const KING_STEPS: [Position; 8] = [
    Position::new(1, 1),
    Position::new(1, -1),
    Position::new(-1, 1),
    Position::new(-1, -1),
    Position::new(0, -1),
    Position::new(0, 1),
    Position::new(-1, 0),
    Position::new(1, 0),
];

pub(super) static KING: StepCalculator = StepCalculator::new(&KING_STEPS, Stamina::Steps(1));
