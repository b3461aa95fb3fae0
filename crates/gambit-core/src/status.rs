//! Game status as seen by the team on move.

use std::fmt;

use crate::color::Color;

/// State of a game from the point of view of the team to move.
///
/// Checkmate and stalemate are reported, never enforced: the engine keeps
/// accepting queries and the caller decides what a finished game means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The team to move is not in check and has a legal move.
    InProgress,
    /// The given team is in check but can get out of it.
    Check(Color),
    /// The given team is in check with no legal move; it has lost.
    Checkmate(Color),
    /// The given team is not in check and has no legal move.
    Stalemate(Color),
}

impl GameStatus {
    /// Return `true` for checkmate and stalemate.
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate(_))
    }

    /// The winning team, if the game ended in checkmate.
    #[must_use]
    pub const fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::Checkmate(loser) => Some(loser.next()),
            _ => None,
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::InProgress
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Check(color) => write!(f, "{color} is in check"),
            GameStatus::Checkmate(color) => write!(f, "{color} is checkmated"),
            GameStatus::Stalemate(color) => write!(f, "{color} is stalemated"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameStatus;
    use crate::color::Color;

    #[test]
    fn only_mate_and_stalemate_end_the_game() {
        assert!(!GameStatus::default().is_over());
        assert!(!GameStatus::Check(Color::White).is_over());
        assert!(GameStatus::Checkmate(Color::White).is_over());
        assert!(GameStatus::Stalemate(Color::Black).is_over());
    }

    #[test]
    fn winner_is_the_mating_team() {
        assert_eq!(GameStatus::Checkmate(Color::Black).winner(), Some(Color::White));
        assert_eq!(GameStatus::Stalemate(Color::Black).winner(), None);
        assert_eq!(format!("{}", GameStatus::Check(Color::Black)), "black is in check");
    }
}
